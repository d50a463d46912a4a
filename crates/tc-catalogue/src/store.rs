//! The entity store and catalogue API.
//!
//! # Data layout
//!
//! Stops and buses live in arena `Vec`s indexed by their dense ids; every
//! other structure refers to them by id, never by reference, so the whole
//! store is a plain owned value with no internal borrows:
//!
//! - `stop_names` / `bus_names` — name → id lookup.
//! - `distances` — directional road-distance table `from → (to → metres)`.
//! - `stop_buses` — per-stop bus lists, indexed by `StopId`, one entry per
//!   occurrence of the stop on a bus's materialized route.
//!
//! # Distance lookup
//!
//! `distance(a, b)` returns the recorded `a → b` distance, else the recorded
//! `b → a` distance, else the great-circle distance between the two stops.

use std::collections::{BTreeSet, HashMap, HashSet};

use tc_core::{BusId, Coordinates, StopId};

use crate::{CatalogueError, CatalogueResult};

// ── Entities ──────────────────────────────────────────────────────────────────

/// A named point on the map.  Immutable after insertion.
#[derive(Debug, Clone)]
pub struct Stop {
    pub id: StopId,
    pub name: String,
    pub coordinates: Coordinates,
}

/// A bus line with its fully materialized route.
///
/// For a non-round-trip bus declared with stops `s0..sn`, the materialized
/// route is `s0..sn, s(n-1)..s0`; a round-trip keeps the declared sequence.
#[derive(Debug, Clone)]
pub struct Bus {
    pub id: BusId,
    pub name: String,
    /// Materialized route, as stop ids.  May legally be empty.
    pub route: Vec<StopId>,
    /// Total road length of the materialized route, metres.
    pub route_length: f64,
    /// Road length divided by great-circle length.  Stored as 0 for routes
    /// shorter than two stops, where the ratio is undefined.
    pub curvature: f64,
    pub is_roundtrip: bool,
}

/// Derived per-bus statistics returned by [`TransportCatalogue::bus_info`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BusStats {
    pub stop_count: usize,
    pub unique_stop_count: usize,
    pub route_length: f64,
    pub curvature: f64,
}

// ── TransportCatalogue ────────────────────────────────────────────────────────

/// The entity store.  See the module docs for layout and lookup rules.
#[derive(Debug, Default)]
pub struct TransportCatalogue {
    stops: Vec<Stop>,
    buses: Vec<Bus>,

    stop_names: HashMap<String, StopId>,
    bus_names: HashMap<String, BusId>,

    distances: HashMap<StopId, HashMap<StopId, f64>>,

    /// Indexed by `StopId`; always the same length as `stops`.
    stop_buses: Vec<Vec<BusId>>,
}

impl TransportCatalogue {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Population ────────────────────────────────────────────────────────

    /// Insert a stop and return its id (sequential from 0).
    pub fn add_stop(
        &mut self,
        name: impl Into<String>,
        coordinates: Coordinates,
    ) -> CatalogueResult<StopId> {
        let name = name.into();
        if self.stop_names.contains_key(&name) {
            return Err(CatalogueError::DuplicateStop(name));
        }

        let id = StopId(self.stops.len() as u32);
        self.stop_names.insert(name.clone(), id);
        self.stops.push(Stop { id, name, coordinates });
        self.stop_buses.push(Vec::new());
        Ok(id)
    }

    /// Record the road distance from `from` to `to`, overwriting any prior
    /// value.  Directional; the reverse direction stays unset unless recorded
    /// separately.  Self-distances (`from == to`) are legal.
    pub fn add_distance(&mut self, from: &str, to: &str, meters: f64) -> CatalogueResult<()> {
        let from = self.stop_id(from)?;
        let to = self.stop_id(to)?;
        self.distances.entry(from).or_default().insert(to, meters);
        Ok(())
    }

    /// Materialize and insert a bus.
    ///
    /// Resolves every stop name, expands the reverse half for non-round-trip
    /// routes, computes the road length and curvature, and links the bus into
    /// each visited stop's bus list (once per occurrence).
    pub fn add_bus(
        &mut self,
        name: impl Into<String>,
        stops: &[String],
        is_roundtrip: bool,
    ) -> CatalogueResult<BusId> {
        let name = name.into();
        if self.bus_names.contains_key(&name) {
            return Err(CatalogueError::DuplicateBus(name));
        }

        let mut route = Vec::with_capacity(if is_roundtrip {
            stops.len()
        } else {
            stops.len() * 2
        });
        for stop in stops {
            route.push(self.stop_id(stop)?);
        }
        if !is_roundtrip {
            for i in (0..route.len().saturating_sub(1)).rev() {
                route.push(route[i]);
            }
        }

        let route_length = self.compute_route_length(&route);
        let geo_length = self.compute_geographic_length(&route);
        let curvature = if geo_length > 0.0 {
            route_length / geo_length
        } else {
            0.0
        };

        self.insert_bus(name, route, route_length, curvature, is_roundtrip)
    }

    /// Insert a bus whose route and statistics were computed earlier —
    /// the decode path of the persistence codec, which must not recompute
    /// lengths lest the round-trip drift.
    pub fn add_materialized_bus(
        &mut self,
        name: impl Into<String>,
        route: Vec<StopId>,
        route_length: f64,
        curvature: f64,
        is_roundtrip: bool,
    ) -> CatalogueResult<BusId> {
        let name = name.into();
        if self.bus_names.contains_key(&name) {
            return Err(CatalogueError::DuplicateBus(name));
        }
        for stop in &route {
            if stop.index() >= self.stops.len() {
                return Err(CatalogueError::StopIdOutOfRange(stop.0));
            }
        }
        self.insert_bus(name, route, route_length, curvature, is_roundtrip)
    }

    fn insert_bus(
        &mut self,
        name: String,
        route: Vec<StopId>,
        route_length: f64,
        curvature: f64,
        is_roundtrip: bool,
    ) -> CatalogueResult<BusId> {
        let id = BusId(self.buses.len() as u32);
        for stop in &route {
            self.stop_buses[stop.index()].push(id);
        }
        self.bus_names.insert(name.clone(), id);
        self.buses.push(Bus { id, name, route, route_length, curvature, is_roundtrip });
        Ok(id)
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Names of the buses serving `stop_name`, sorted lexicographically.
    ///
    /// The empty set for a known stop with no buses; `None` for an unknown
    /// stop.
    pub fn stop_info(&self, stop_name: &str) -> Option<BTreeSet<&str>> {
        let id = *self.stop_names.get(stop_name)?;
        Some(
            self.stop_buses[id.index()]
                .iter()
                .map(|bus| self.buses[bus.index()].name.as_str())
                .collect(),
        )
    }

    /// Derived statistics for `bus_name`; `None` for an unknown bus.
    pub fn bus_info(&self, bus_name: &str) -> Option<BusStats> {
        let bus = self.bus_by_name(bus_name)?;
        let unique: HashSet<StopId> = bus.route.iter().copied().collect();
        Some(BusStats {
            stop_count: bus.route.len(),
            unique_stop_count: unique.len(),
            route_length: bus.route_length,
            curvature: bus.curvature,
        })
    }

    /// Road distance from `from` to `to`.  Total for known stops: recorded
    /// forward distance, else recorded reverse distance, else great-circle.
    pub fn distance(&self, from: StopId, to: StopId) -> f64 {
        if let Some(meters) = self.recorded_distance(from, to) {
            return meters;
        }
        if let Some(meters) = self.recorded_distance(to, from) {
            return meters;
        }
        self.stops[from.index()]
            .coordinates
            .distance_m(self.stops[to.index()].coordinates)
    }

    fn recorded_distance(&self, from: StopId, to: StopId) -> Option<f64> {
        self.distances.get(&from)?.get(&to).copied()
    }

    // ── Views ─────────────────────────────────────────────────────────────

    pub fn stop(&self, id: StopId) -> &Stop {
        &self.stops[id.index()]
    }

    pub fn stop_by_name(&self, name: &str) -> Option<&Stop> {
        self.stop_names.get(name).map(|id| &self.stops[id.index()])
    }

    pub fn bus(&self, id: BusId) -> &Bus {
        &self.buses[id.index()]
    }

    pub fn bus_by_name(&self, name: &str) -> Option<&Bus> {
        self.bus_names.get(name).map(|id| &self.buses[id.index()])
    }

    /// All stops in insertion (= id) order.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// All buses in insertion (= id) order.
    pub fn buses(&self) -> &[Bus] {
        &self.buses
    }

    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    /// The raw directional distance table, for the persistence codec.
    pub fn distances(&self) -> &HashMap<StopId, HashMap<StopId, f64>> {
        &self.distances
    }

    // ── Derived lengths ───────────────────────────────────────────────────

    fn compute_route_length(&self, route: &[StopId]) -> f64 {
        match route {
            [] => 0.0,
            // A single-stop route is a loop at the stop: its length is the
            // recorded self-distance, if any.
            [only] => self.recorded_distance(*only, *only).unwrap_or(0.0),
            _ => route
                .windows(2)
                .map(|pair| self.distance(pair[0], pair[1]))
                .sum(),
        }
    }

    fn compute_geographic_length(&self, route: &[StopId]) -> f64 {
        route
            .windows(2)
            .map(|pair| {
                self.stops[pair[0].index()]
                    .coordinates
                    .distance_m(self.stops[pair[1].index()].coordinates)
            })
            .sum()
    }

    fn stop_id(&self, name: &str) -> CatalogueResult<StopId> {
        self.stop_names
            .get(name)
            .copied()
            .ok_or_else(|| CatalogueError::UnknownStop(name.to_string()))
    }
}
