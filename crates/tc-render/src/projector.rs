//! Lat/lng to canvas projection.

use tc_core::Coordinates;
use tc_svg::Point;

/// Spans smaller than this count as zero when computing zoom.
const EPSILON: f64 = 1e-6;

fn is_zero(value: f64) -> bool {
    value.abs() < EPSILON
}

/// Projects geographic coordinates onto a `width` × `height` canvas with
/// `padding` on all sides.
///
/// The zoom factor is the stricter of the horizontal and vertical fits, so
/// one pixel covers the same number of degrees on both axes.  A degenerate
/// bounding box (no points, or all points coincident) produces zoom 0 and
/// every projection lands at `(padding, padding)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SphereProjector {
    padding: f64,
    min_lng: f64,
    max_lat: f64,
    zoom: f64,
}

impl SphereProjector {
    /// Fit the bounding box of `points` into the canvas.
    pub fn new(
        points: impl IntoIterator<Item = Coordinates>,
        width: f64,
        height: f64,
        padding: f64,
    ) -> Self {
        let mut points = points.into_iter();
        let Some(first) = points.next() else {
            return Self { padding, ..Self::default() };
        };

        let (mut min_lat, mut max_lat) = (first.lat, first.lat);
        let (mut min_lng, mut max_lng) = (first.lng, first.lng);
        for p in points {
            min_lat = min_lat.min(p.lat);
            max_lat = max_lat.max(p.lat);
            min_lng = min_lng.min(p.lng);
            max_lng = max_lng.max(p.lng);
        }

        let width_zoom = (!is_zero(max_lng - min_lng))
            .then(|| (width - 2.0 * padding) / (max_lng - min_lng));
        let height_zoom = (!is_zero(max_lat - min_lat))
            .then(|| (height - 2.0 * padding) / (max_lat - min_lat));

        let zoom = match (width_zoom, height_zoom) {
            (Some(w), Some(h)) => w.min(h),
            (Some(w), None) => w,
            (None, Some(h)) => h,
            (None, None) => 0.0,
        };

        Self { padding, min_lng, max_lat, zoom }
    }

    /// Canvas point for `coords`.  Latitude is inverted: screen y grows
    /// down while latitude grows up.
    pub fn project(&self, coords: Coordinates) -> Point {
        Point::new(
            (coords.lng - self.min_lng) * self.zoom + self.padding,
            (self.max_lat - coords.lat) * self.zoom + self.padding,
        )
    }
}
