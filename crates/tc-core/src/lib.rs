//! `tc-core` — foundational types for the transport catalogue workspace.
//!
//! This crate is a dependency of every other `tc-*` crate.  It intentionally
//! has no `tc-*` dependencies and minimal external ones (only `serde`).
//!
//! # What lives here
//!
//! | Module   | Contents                                        |
//! |----------|-------------------------------------------------|
//! | [`ids`]  | `StopId`, `BusId`, `VertexId`, `EdgeId`         |
//! | [`geo`]  | `Coordinates`, great-circle distance            |

pub mod geo;
pub mod ids;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use geo::Coordinates;
pub use ids::{BusId, EdgeId, StopId, VertexId};
