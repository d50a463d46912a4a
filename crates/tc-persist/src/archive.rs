//! Archive schema and the encode/decode pair.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use tc_catalogue::{CatalogueError, TransportCatalogue};
use tc_core::{Coordinates, StopId};
use tc_render::RenderSettings;
use tc_routing::RoutingSettings;

use crate::{PersistError, PersistResult};

// ── Records ───────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize)]
struct StopRecord {
    id: u32,
    name: String,
    lat: f64,
    lng: f64,
}

/// All recorded road distances leaving one stop, sorted by destination id.
#[derive(Debug, Serialize, Deserialize)]
struct DistanceRecord {
    from: u32,
    to: Vec<(u32, f64)>,
}

#[derive(Debug, Serialize, Deserialize)]
struct BusRecord {
    name: String,
    /// Materialized route as stop ids.
    stops: Vec<u32>,
    route_length: f64,
    curvature: f64,
    is_roundtrip: bool,
}

/// The complete persisted state.
#[derive(Debug, Serialize, Deserialize)]
pub struct Archive {
    stops: Vec<StopRecord>,
    distances: Vec<DistanceRecord>,
    buses: Vec<BusRecord>,
    render_settings: RenderSettings,
    routing_settings: RoutingSettings,
}

impl Archive {
    /// Snapshot the catalogue and settings into archive records.
    pub fn encode(
        catalogue: &TransportCatalogue,
        render_settings: &RenderSettings,
        routing_settings: &RoutingSettings,
    ) -> Self {
        let stops = catalogue
            .stops()
            .iter()
            .map(|stop| StopRecord {
                id: stop.id.0,
                name: stop.name.clone(),
                lat: stop.coordinates.lat,
                lng: stop.coordinates.lng,
            })
            .collect();

        // HashMap iteration order is arbitrary; sort both levels so the
        // same catalogue always encodes to the same bytes.
        let mut distances: Vec<DistanceRecord> = catalogue
            .distances()
            .iter()
            .map(|(from, row)| {
                let mut to: Vec<(u32, f64)> =
                    row.iter().map(|(id, meters)| (id.0, *meters)).collect();
                to.sort_by_key(|&(id, _)| id);
                DistanceRecord { from: from.0, to }
            })
            .collect();
        distances.sort_by_key(|record| record.from);

        let buses = catalogue
            .buses()
            .iter()
            .map(|bus| BusRecord {
                name: bus.name.clone(),
                stops: bus.route.iter().map(|stop| stop.0).collect(),
                route_length: bus.route_length,
                curvature: bus.curvature,
                is_roundtrip: bus.is_roundtrip,
            })
            .collect();

        Self {
            stops,
            distances,
            buses,
            render_settings: render_settings.clone(),
            routing_settings: *routing_settings,
        }
    }

    /// Rebuild the in-memory triple from archive records.
    pub fn restore(self) -> PersistResult<(TransportCatalogue, RenderSettings, RoutingSettings)> {
        let mut catalogue = TransportCatalogue::new();

        // Stops were encoded in id order, so re-inserting reproduces the
        // dense ids recorded in the archive.
        let mut stops = self.stops;
        stops.sort_by_key(|record| record.id);
        for record in &stops {
            catalogue.add_stop(record.name.as_str(), Coordinates::new(record.lat, record.lng))?;
        }

        let name_of = |id: u32| -> PersistResult<&str> {
            stops
                .get(id as usize)
                .map(|record| record.name.as_str())
                .ok_or(PersistError::Restore(CatalogueError::StopIdOutOfRange(id)))
        };
        for record in &self.distances {
            for &(to, meters) in &record.to {
                catalogue.add_distance(name_of(record.from)?, name_of(to)?, meters)?;
            }
        }

        for record in self.buses {
            catalogue.add_materialized_bus(
                record.name,
                record.stops.into_iter().map(StopId).collect(),
                record.route_length,
                record.curvature,
                record.is_roundtrip,
            )?;
        }

        Ok((catalogue, self.render_settings, self.routing_settings))
    }
}

// ── File round trip ───────────────────────────────────────────────────────────

/// Encode and write the archive to `path`, truncating any prior file.
pub fn save_archive(
    path: &Path,
    catalogue: &TransportCatalogue,
    render_settings: &RenderSettings,
    routing_settings: &RoutingSettings,
) -> PersistResult<()> {
    let archive = Archive::encode(catalogue, render_settings, routing_settings);
    let mut file = BufWriter::new(File::create(path)?);
    bincode::serialize_into(&mut file, &archive)?;
    // into_inner flushes; a full buffer on drop would swallow the error.
    file.into_inner().map_err(|e| e.into_error())?;
    info!(
        "saved archive to {}: {} stops, {} buses",
        path.display(),
        archive.stops.len(),
        archive.buses.len()
    );
    Ok(())
}

/// Read and decode the archive at `path`.
pub fn load_archive(
    path: &Path,
) -> PersistResult<(TransportCatalogue, RenderSettings, RoutingSettings)> {
    let file = BufReader::new(File::open(path)?);
    let archive: Archive = bincode::deserialize_from(file)?;
    info!(
        "loaded archive from {}: {} stops, {} buses",
        path.display(),
        archive.stops.len(),
        archive.buses.len()
    );
    archive.restore()
}
