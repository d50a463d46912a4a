//! The input document.
//!
//! # Document shape
//!
//! ```json
//! {
//!   "base_requests":          [ {"type": "Stop", ...}, {"type": "Bus", ...} ],
//!   "stat_requests":          [ {"id": 1, "type": "Map"}, ... ],
//!   "render_settings":        { ... },
//!   "routing_settings":       { "bus_wait_time": 6, "bus_velocity": 40 },
//!   "serialization_settings": { "file": "catalogue.db" }
//! }
//! ```
//!
//! Every section is optional at the parse level; each CLI mode demands the
//! sections it needs.  Colors come in three raw forms — a CSS name string,
//! `[r, g, b]`, or `[r, g, b, opacity]` — and offsets are `[x, y]` pairs;
//! both are converted to their `tc-svg` types here, so the JSON shapes stay
//! out of the core crates.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::PathBuf;

use serde::Deserialize;

use tc_catalogue::TransportCatalogue;
use tc_core::Coordinates;
use tc_render::RenderSettings;
use tc_routing::RoutingSettings;
use tc_svg::{Color, Point, Rgb, Rgba};

use crate::IoResult;

// ── Document ──────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct InputDocument {
    #[serde(default)]
    pub base_requests: Vec<BaseRequest>,
    #[serde(default)]
    pub stat_requests: Vec<StatRequest>,
    render_settings: Option<RawRenderSettings>,
    routing_settings: Option<RoutingSettings>,
    serialization_settings: Option<SerializationSettings>,
}

impl InputDocument {
    /// Parse the document from a JSON stream.
    pub fn from_reader(reader: impl Read) -> IoResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn render_settings(&self) -> IoResult<RenderSettings> {
        self.render_settings
            .clone()
            .map(RawRenderSettings::into_settings)
            .ok_or(crate::IoError::MissingSection("render_settings"))
    }

    pub fn routing_settings(&self) -> IoResult<RoutingSettings> {
        self.routing_settings
            .ok_or(crate::IoError::MissingSection("routing_settings"))
    }

    pub fn serialization_settings(&self) -> IoResult<&SerializationSettings> {
        self.serialization_settings
            .as_ref()
            .ok_or(crate::IoError::MissingSection("serialization_settings"))
    }
}

// ── Base requests ─────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub enum BaseRequest {
    Stop(StopRequest),
    Bus(BusRequest),
}

#[derive(Debug, Deserialize)]
pub struct StopRequest {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Recorded road distances to neighboring stops, metres.
    #[serde(default)]
    pub road_distances: BTreeMap<String, f64>,
}

#[derive(Debug, Deserialize)]
pub struct BusRequest {
    pub name: String,
    pub stops: Vec<String>,
    pub is_roundtrip: bool,
}

// ── Stat requests ─────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub enum StatRequest {
    Stop { id: i64, name: String },
    Bus { id: i64, name: String },
    Map { id: i64 },
    Route { id: i64, from: String, to: String },
}

// ── Settings ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct SerializationSettings {
    pub file: PathBuf,
}

/// `render_settings` as it appears on the wire.
#[derive(Debug, Clone, Deserialize)]
struct RawRenderSettings {
    width: f64,
    height: f64,
    padding: f64,
    line_width: f64,
    stop_radius: f64,
    bus_label_font_size: u32,
    bus_label_offset: (f64, f64),
    stop_label_font_size: u32,
    stop_label_offset: (f64, f64),
    underlayer_color: RawColor,
    underlayer_width: f64,
    color_palette: Vec<RawColor>,
}

impl RawRenderSettings {
    fn into_settings(self) -> RenderSettings {
        RenderSettings {
            width: self.width,
            height: self.height,
            padding: self.padding,
            line_width: self.line_width,
            stop_radius: self.stop_radius,
            bus_label_font_size: self.bus_label_font_size,
            bus_label_offset: point(self.bus_label_offset),
            stop_label_font_size: self.stop_label_font_size,
            stop_label_offset: point(self.stop_label_offset),
            underlayer_color: self.underlayer_color.into(),
            underlayer_width: self.underlayer_width,
            color_palette: self.color_palette.into_iter().map(Color::from).collect(),
        }
    }
}

fn point((x, y): (f64, f64)) -> Point {
    Point::new(x, y)
}

/// The three wire forms of a color.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RawColor {
    Name(String),
    Rgb(u8, u8, u8),
    Rgba(u8, u8, u8, f64),
}

impl From<RawColor> for Color {
    fn from(raw: RawColor) -> Self {
        match raw {
            RawColor::Name(name) => Color::Name(name),
            RawColor::Rgb(r, g, b) => Color::Rgb(Rgb::new(r, g, b)),
            RawColor::Rgba(r, g, b, a) => Color::Rgba(Rgba::new(r, g, b, a)),
        }
    }
}

// ── Catalogue construction ────────────────────────────────────────────────────

/// Build the catalogue from the document's base requests.
///
/// Stops first (so every name resolves), then all recorded distances, then
/// buses.  Request order within each phase is preserved.
pub fn build_catalogue(document: &InputDocument) -> IoResult<TransportCatalogue> {
    let mut catalogue = TransportCatalogue::new();

    for request in &document.base_requests {
        if let BaseRequest::Stop(stop) = request {
            catalogue.add_stop(
                stop.name.as_str(),
                Coordinates::new(stop.latitude, stop.longitude),
            )?;
        }
    }

    for request in &document.base_requests {
        if let BaseRequest::Stop(stop) = request {
            for (to, meters) in &stop.road_distances {
                catalogue.add_distance(&stop.name, to, *meters)?;
            }
        }
    }

    for request in &document.base_requests {
        if let BaseRequest::Bus(bus) = request {
            catalogue.add_bus(bus.name.as_str(), &bus.stops, bus.is_roundtrip)?;
        }
    }

    log::info!(
        "catalogue built: {} stops, {} buses",
        catalogue.stop_count(),
        catalogue.buses().len()
    );
    Ok(catalogue)
}
