//! The transport router: projection of buses into a two-layer time graph.
//!
//! # Vertex layout
//!
//! With `N` stops in the catalogue, the graph has `2N` vertices:
//!
//! - vertex `k`, `k < N` — "riding at stop k" (the bus-enter side);
//! - vertex `k + N`      — "arrived / waiting at stop k" (the wait side).
//!
//! Every stop gets one **wait edge** `k+N → k` costing `bus_wait_time`, so
//! the wait is charged exactly once per boarding.  Every bus contributes
//! **ride edges** `enter(i) → wait(j)` for the stop pairs it can carry a
//! passenger over, weighted with the accumulated driving time.
//!
//! Route queries enter and leave the graph on the wait side; the resulting
//! edge sequence therefore alternates wait and ride edges, which is exactly
//! the itinerary shape callers want back.

use log::info;
use ordered_float::NotNan;
use serde::{Deserialize, Serialize};

use tc_catalogue::{Bus, TransportCatalogue};
use tc_core::{BusId, StopId, VertexId};

use crate::dijkstra::ShortestPaths;
use crate::graph::{DirectedWeightedGraph, Edge, EdgeCost};

// ── Settings ──────────────────────────────────────────────────────────────────

/// Routing parameters from the input document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoutingSettings {
    /// Minutes a passenger waits at a stop before any bus departs.
    pub bus_wait_time: f64,
    /// Bus cruising speed, km/h.  Must be positive.
    pub bus_velocity: f64,
}

// ── Edge payload ──────────────────────────────────────────────────────────────

/// Payload of a routing edge.
///
/// `span_count` and `bus` ride along for itinerary reconstruction; only
/// `minutes` takes part in cost comparison and accumulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitWeight {
    pub minutes: NotNan<f64>,
    /// Stop-to-stop segments traversed; 0 on a wait edge.
    pub span_count: u32,
    /// The bus ridden; `None` on a wait edge.
    pub bus: Option<BusId>,
}

impl EdgeCost for TransitWeight {
    fn cost(&self) -> NotNan<f64> {
        self.minutes
    }
}

// ── Itinerary items ───────────────────────────────────────────────────────────

/// One leg of a computed trip.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteItem {
    /// Wait at a stop for the configured wait time.
    Wait { stop: StopId, minutes: f64 },
    /// Ride a bus over `span_count` consecutive stops.
    Bus {
        bus: BusId,
        span_count: u32,
        minutes: f64,
    },
}

/// A complete trip: total minutes and the legs in travel order.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteInfo {
    pub total_minutes: f64,
    pub items: Vec<RouteItem>,
}

// ── TransportRouter ───────────────────────────────────────────────────────────

/// Builds the two-layer graph once and answers minimum-time trip queries.
///
/// Construction runs the full all-sources precomputation; queries after
/// that are lookups plus path reconstruction.
pub struct TransportRouter<'a> {
    catalogue: &'a TransportCatalogue,
    settings: RoutingSettings,
    graph: DirectedWeightedGraph<TransitWeight>,
    paths: ShortestPaths,
}

impl<'a> TransportRouter<'a> {
    pub fn new(settings: RoutingSettings, catalogue: &'a TransportCatalogue) -> Self {
        let graph = build_graph(&settings, catalogue);
        info!(
            "routing graph: {} vertices, {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );
        let paths = ShortestPaths::new(&graph);
        Self { catalogue, settings, graph, paths }
    }

    pub fn settings(&self) -> RoutingSettings {
        self.settings
    }

    /// Minimum-time trip between two stops named in the catalogue.
    ///
    /// `None` when either stop is unknown or no connection exists.  Equal
    /// endpoints yield a trip with no items and total time 0.
    pub fn build_route(&self, from: &str, to: &str) -> Option<RouteInfo> {
        let stop_count = self.catalogue.stop_count() as u32;
        let from = self.catalogue.stop_by_name(from)?.id;
        let to = self.catalogue.stop_by_name(to)?.id;

        // Trips start and end on the wait side.
        let summary = self.paths.route(
            &self.graph,
            VertexId(from.0 + stop_count),
            VertexId(to.0 + stop_count),
        )?;

        let items = summary
            .edges
            .iter()
            .map(|&edge_id| {
                let edge = self.graph.edge(edge_id);
                let minutes = edge.weight.minutes.into_inner();
                match edge.weight.bus {
                    Some(bus) => RouteItem::Bus {
                        bus,
                        span_count: edge.weight.span_count,
                        minutes,
                    },
                    None => {
                        let dest = edge.to.0;
                        let stop = if dest >= stop_count { dest - stop_count } else { dest };
                        RouteItem::Wait { stop: StopId(stop), minutes }
                    }
                }
            })
            .collect();

        Some(RouteInfo { total_minutes: summary.total_cost, items })
    }

    /// The catalogue this router was built over.
    pub fn catalogue(&self) -> &TransportCatalogue {
        self.catalogue
    }
}

// ── Graph construction ────────────────────────────────────────────────────────

fn build_graph(
    settings: &RoutingSettings,
    catalogue: &TransportCatalogue,
) -> DirectedWeightedGraph<TransitWeight> {
    let stop_count = catalogue.stop_count();
    let mut graph = DirectedWeightedGraph::new(2 * stop_count);

    let wait = TransitWeight {
        minutes: NotNan::new(settings.bus_wait_time).unwrap(),
        span_count: 0,
        bus: None,
    };
    for k in 0..stop_count as u32 {
        graph.add_edge(Edge {
            from: VertexId(k + stop_count as u32),
            to: VertexId(k),
            weight: wait,
        });
    }

    for bus in catalogue.buses() {
        if bus.is_roundtrip {
            add_round_trip(settings, catalogue, bus, &mut graph);
        } else {
            add_linear_trip(settings, catalogue, bus, &mut graph);
        }
    }

    graph
}

/// Ride edges for a round-trip bus: every ordered pair `i < j` over the
/// whole materialized route.
fn add_round_trip(
    settings: &RoutingSettings,
    catalogue: &TransportCatalogue,
    bus: &Bus,
    graph: &mut DirectedWeightedGraph<TransitWeight>,
) {
    let stop_count = catalogue.stop_count() as u32;
    for i in 0..bus.route.len() {
        let mut accumulated = 0.0;
        for j in i + 1..bus.route.len() {
            accumulated += catalogue.distance(bus.route[j - 1], bus.route[j]);
            graph.add_edge(ride_edge(
                settings,
                bus.route[i],
                bus.route[j],
                stop_count,
                accumulated,
                (j - i) as u32,
                bus.id,
            ));
        }
    }
}

/// Ride edges for a non-round-trip bus.
///
/// The materialized route is symmetric around `mid = len/2 + 1`; segments
/// are emitted within the forward half only, in both directions, each
/// direction accumulating its own recorded distances.
fn add_linear_trip(
    settings: &RoutingSettings,
    catalogue: &TransportCatalogue,
    bus: &Bus,
    graph: &mut DirectedWeightedGraph<TransitWeight>,
) {
    let stop_count = catalogue.stop_count() as u32;
    let mid = bus.route.len() / 2 + 1;

    for i in 0..bus.route.len().min(mid) {
        let mut forward = 0.0;
        let mut reverse = 0.0;
        for j in i + 1..mid {
            forward += catalogue.distance(bus.route[j - 1], bus.route[j]);
            reverse += catalogue.distance(bus.route[j], bus.route[j - 1]);
            let span = (j - i) as u32;

            graph.add_edge(ride_edge(
                settings, bus.route[i], bus.route[j], stop_count, forward, span, bus.id,
            ));
            graph.add_edge(ride_edge(
                settings, bus.route[j], bus.route[i], stop_count, reverse, span, bus.id,
            ));
        }
    }
}

fn ride_edge(
    settings: &RoutingSettings,
    from: StopId,
    to: StopId,
    stop_count: u32,
    meters: f64,
    span_count: u32,
    bus: BusId,
) -> Edge<TransitWeight> {
    Edge {
        from: VertexId(from.0),
        to: VertexId(to.0 + stop_count),
        weight: TransitWeight {
            minutes: NotNan::new(drive_minutes(settings, meters)).unwrap(),
            span_count,
            bus: Some(bus),
        },
    }
}

/// Driving time in minutes over `meters` at the configured velocity.
fn drive_minutes(settings: &RoutingSettings, meters: f64) -> f64 {
    meters / 1_000.0 / settings.bus_velocity * 60.0
}
