//! Geographic coordinate type and great-circle distance.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in metres.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

const DEG_TO_RAD: f64 = 3.1415926535 / 180.0;

/// A WGS-84 geographic coordinate in degrees.
///
/// Latitudes and longitudes are finite doubles; the system never produces
/// or stores NaN or infinity.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    #[inline]
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Great-circle distance in metres, by the spherical law of cosines.
    ///
    /// Identical coordinates short-circuit to exactly 0 so that degenerate
    /// segments never pick up rounding noise from `acos`.
    pub fn distance_m(self, other: Coordinates) -> f64 {
        if self == other {
            return 0.0;
        }
        let lat1 = self.lat * DEG_TO_RAD;
        let lat2 = other.lat * DEG_TO_RAD;
        let d_lng = (self.lng - other.lng).abs() * DEG_TO_RAD;

        (lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * d_lng.cos()).acos()
            * EARTH_RADIUS_M
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lng)
    }
}
