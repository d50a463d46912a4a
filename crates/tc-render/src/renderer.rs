//! The four-layer map renderer.
//!
//! Layer order, within-layer bus order (lexicographic by name) and the
//! palette-cursor rules are all part of the output contract; see the
//! individual layer methods.

use std::collections::BTreeMap;

use log::debug;

use tc_catalogue::{Bus, TransportCatalogue};
use tc_core::Coordinates;
use tc_svg::{Circle, Color, Document, LineCap, LineJoin, Point, Polyline, Text};

use crate::{RenderSettings, SphereProjector};

const FONT_FAMILY: &str = "Verdana";
const BUS_LABEL_WEIGHT: &str = "bold";
const STOP_FILL: &str = "white";
const STOP_LABEL_FILL: &str = "black";

/// Renders the catalogue's bus map as an SVG document string.
///
/// A non-empty `color_palette` in the settings is a precondition; the
/// cursor arithmetic is meaningless without one.
pub struct MapRenderer {
    settings: RenderSettings,
}

impl MapRenderer {
    pub fn new(settings: RenderSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    pub fn render(&self, catalogue: &TransportCatalogue) -> String {
        let mut buses: Vec<&Bus> = catalogue.buses().iter().collect();
        buses.sort_by(|a, b| a.name.cmp(&b.name));

        let projector = SphereProjector::new(
            buses
                .iter()
                .flat_map(|bus| bus.route.iter())
                .map(|&stop| catalogue.stop(stop).coordinates),
            self.settings.width,
            self.settings.height,
            self.settings.padding,
        );

        // Distinct stops on any non-empty route, in name order.
        let stops: BTreeMap<&str, Coordinates> = buses
            .iter()
            .flat_map(|bus| bus.route.iter())
            .map(|&stop| {
                let stop = catalogue.stop(stop);
                (stop.name.as_str(), stop.coordinates)
            })
            .collect();

        debug!("rendering {} buses over {} stops", buses.len(), stops.len());

        let mut document = Document::new();
        self.draw_route_lines(&mut document, catalogue, &buses, &projector);
        self.draw_route_labels(&mut document, catalogue, &buses, &projector);
        self.draw_stop_circles(&mut document, &stops, &projector);
        self.draw_stop_labels(&mut document, &stops, &projector);
        document.render()
    }

    // ── Layer 1: route polylines ──────────────────────────────────────────

    fn draw_route_lines(
        &self,
        document: &mut Document,
        catalogue: &TransportCatalogue,
        buses: &[&Bus],
        projector: &SphereProjector,
    ) {
        let mut cursor = PaletteCursor::new(&self.settings.color_palette);
        for bus in buses {
            if bus.route.is_empty() {
                continue;
            }
            let mut line = Polyline::new()
                .fill(Color::None)
                .stroke(cursor.next().clone())
                .stroke_width(self.settings.line_width)
                .line_cap(LineCap::Round)
                .line_join(LineJoin::Round);
            for &stop in &bus.route {
                line = line.point(projector.project(catalogue.stop(stop).coordinates));
            }
            document.push(line);
        }
    }

    // ── Layer 2: route labels ─────────────────────────────────────────────

    /// One label at the route head for every non-empty bus, plus a second
    /// at the midpoint stop for non-round-trip buses whose end stop differs
    /// from their head stop.  The cursor advances per bus, not per label.
    fn draw_route_labels(
        &self,
        document: &mut Document,
        catalogue: &TransportCatalogue,
        buses: &[&Bus],
        projector: &SphereProjector,
    ) {
        let mut cursor = PaletteCursor::new(&self.settings.color_palette);
        for bus in buses {
            if bus.route.is_empty() {
                continue;
            }
            let color = cursor.next();

            let head = catalogue.stop(bus.route[0]).coordinates;
            let midpoint = catalogue.stop(bus.route[bus.route.len() / 2]).coordinates;

            self.push_bus_label(document, &bus.name, projector.project(head), color);
            if !bus.is_roundtrip && head != midpoint {
                self.push_bus_label(document, &bus.name, projector.project(midpoint), color);
            }
        }
    }

    fn push_bus_label(&self, document: &mut Document, name: &str, at: Point, color: &Color) {
        let (underlayer, label) = self.label_pair(
            name,
            at,
            self.settings.bus_label_offset,
            self.settings.bus_label_font_size,
            color.clone(),
        );
        document.push(underlayer.font_weight(BUS_LABEL_WEIGHT));
        document.push(label.font_weight(BUS_LABEL_WEIGHT));
    }

    // ── Layer 3: stop circles ─────────────────────────────────────────────

    fn draw_stop_circles(
        &self,
        document: &mut Document,
        stops: &BTreeMap<&str, Coordinates>,
        projector: &SphereProjector,
    ) {
        for &coordinates in stops.values() {
            document.push(
                Circle::new()
                    .center(projector.project(coordinates))
                    .radius(self.settings.stop_radius)
                    .fill(Color::from(STOP_FILL)),
            );
        }
    }

    // ── Layer 4: stop labels ──────────────────────────────────────────────

    fn draw_stop_labels(
        &self,
        document: &mut Document,
        stops: &BTreeMap<&str, Coordinates>,
        projector: &SphereProjector,
    ) {
        for (&name, &coordinates) in stops {
            let (underlayer, label) = self.label_pair(
                name,
                projector.project(coordinates),
                self.settings.stop_label_offset,
                self.settings.stop_label_font_size,
                Color::from(STOP_LABEL_FILL),
            );
            document.push(underlayer);
            document.push(label);
        }
    }

    // ── Shared label construction ─────────────────────────────────────────

    /// The halo underlayer and the visible text for one label.
    fn label_pair(
        &self,
        data: &str,
        at: Point,
        offset: Point,
        font_size: u32,
        fill: Color,
    ) -> (Text, Text) {
        let base = Text::new()
            .data(data)
            .position(at)
            .offset(offset)
            .font_size(font_size)
            .font_family(FONT_FAMILY);

        let underlayer = base
            .clone()
            .fill(self.settings.underlayer_color.clone())
            .stroke(self.settings.underlayer_color.clone())
            .stroke_width(self.settings.underlayer_width)
            .line_cap(LineCap::Round)
            .line_join(LineJoin::Round);

        (underlayer, base.fill(fill))
    }
}

/// Palette cursor: starts at 0, advances modulo the palette length.
struct PaletteCursor<'a> {
    palette: &'a [Color],
    index: usize,
}

impl<'a> PaletteCursor<'a> {
    fn new(palette: &'a [Color]) -> Self {
        Self { palette, index: 0 }
    }

    fn next(&mut self) -> &'a Color {
        let color = &self.palette[self.index];
        self.index = (self.index + 1) % self.palette.len();
        color
    }
}
