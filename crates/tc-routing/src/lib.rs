//! `tc-routing` — minimum-time trip planning over the catalogue.
//!
//! Three layers, bottom up:
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`graph`]    | Directed weighted multigraph, edges by insertion id   |
//! | [`dijkstra`] | Eager all-sources shortest paths with reconstruction  |
//! | [`router`]   | The wait/ride two-layer graph and `build_route`       |
//!
//! The router charges the configured wait time exactly once per boarding by
//! splitting every stop into a "waiting" and a "riding" vertex; see the
//! [`router`] module docs for the layout.

pub mod dijkstra;
pub mod graph;
pub mod router;


pub use dijkstra::{RouteSummary, ShortestPaths};
pub use graph::{DirectedWeightedGraph, Edge, EdgeCost};
pub use router::{RouteInfo, RouteItem, RoutingSettings, TransitWeight, TransportRouter};
