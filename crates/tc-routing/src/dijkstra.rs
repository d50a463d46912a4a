//! All-sources shortest paths with predecessor reconstruction.
//!
//! One Dijkstra sweep per source vertex, run eagerly at construction.  For
//! every `(source, vertex)` pair the engine keeps the best accumulated cost
//! and the id of the edge that reached the vertex; a query is then a table
//! lookup plus a walk back along predecessor edges.
//!
//! Priorities are `NotNan<f64>` — every weight in the system is a finite
//! time, so the wrap never observes a NaN.  Heap ties break on the vertex
//! id, which makes the sweep deterministic.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use ordered_float::NotNan;

use tc_core::{EdgeId, VertexId};

use crate::graph::{DirectedWeightedGraph, EdgeCost};

/// The result of a shortest-path query: total cost and the edge ids to
/// traverse, in order from source to target.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteSummary {
    pub total_cost: f64,
    pub edges: Vec<EdgeId>,
}

/// Per-source solution tables.
struct SourceData {
    /// Best accumulated cost to each vertex; `None` if unreachable.
    dist: Vec<Option<NotNan<f64>>>,
    /// Edge that reached each vertex; `None` for the source itself and for
    /// unreachable vertices.
    prev: Vec<Option<EdgeId>>,
}

/// Eagerly precomputed one-to-all shortest paths for every source.
pub struct ShortestPaths {
    sources: Vec<SourceData>,
}

impl ShortestPaths {
    /// Run Dijkstra from every vertex of `graph`.
    ///
    /// O(V·(V+E) log V) once; queries afterwards cost O(path length).
    pub fn new<W: EdgeCost>(graph: &DirectedWeightedGraph<W>) -> Self {
        let sources = (0..graph.vertex_count())
            .map(|s| one_to_all(graph, VertexId(s as u32)))
            .collect();
        Self { sources }
    }

    /// Cheapest path from `from` to `to`, or `None` if `to` is unreachable.
    ///
    /// `from == to` yields an empty path with total cost 0.
    pub fn route<W: EdgeCost>(
        &self,
        graph: &DirectedWeightedGraph<W>,
        from: VertexId,
        to: VertexId,
    ) -> Option<RouteSummary> {
        let source = &self.sources[from.index()];
        let total = source.dist[to.index()]?.into_inner();

        let mut edges = Vec::new();
        let mut cursor = to;
        while let Some(edge_id) = source.prev[cursor.index()] {
            edges.push(edge_id);
            cursor = graph.edge(edge_id).from;
        }
        edges.reverse();

        Some(RouteSummary { total_cost: total, edges })
    }
}

fn one_to_all<W: EdgeCost>(graph: &DirectedWeightedGraph<W>, source: VertexId) -> SourceData {
    let n = graph.vertex_count();
    let mut dist: Vec<Option<NotNan<f64>>> = vec![None; n];
    let mut prev: Vec<Option<EdgeId>> = vec![None; n];

    let zero = NotNan::new(0.0).unwrap();
    dist[source.index()] = Some(zero);

    // Min-heap: Reverse turns the std max-heap around; the VertexId second
    // key fixes the pop order between equal costs.
    let mut heap: BinaryHeap<Reverse<(NotNan<f64>, VertexId)>> = BinaryHeap::new();
    heap.push(Reverse((zero, source)));

    while let Some(Reverse((cost, vertex))) = heap.pop() {
        // Skip stale heap entries.
        if dist[vertex.index()] != Some(cost) {
            continue;
        }

        for edge_id in graph.incident_edges(vertex) {
            let edge = graph.edge(edge_id);
            let next_cost = cost + edge.weight.cost();
            let neighbor = edge.to;

            if dist[neighbor.index()].map_or(true, |best| next_cost < best) {
                dist[neighbor.index()] = Some(next_cost);
                prev[neighbor.index()] = Some(edge_id);
                heap.push(Reverse((next_cost, neighbor)));
            }
        }
    }

    SourceData { dist, prev }
}
