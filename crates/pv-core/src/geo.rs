//! Geographic coordinate type and spatial utilities.
//!
//! `GeoPoint` uses `f64` latitude/longitude.  Edge lengths and the A*
//! heuristic are both derived from [`GeoPoint::distance_m`], and keeping them
//! in double precision keeps the heuristic from drifting above a summed edge
//! length through rounding.

/// Mean Earth radius in metres, as used by common OSM tooling.
pub const EARTH_RADIUS_M: f64 = 6_371_009.0;

/// A WGS-84 geographic coordinate.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Haversine great-circle distance in metres.
    pub fn distance_m(self, other: GeoPoint) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        // Clamp guards `sqrt(1 - a)` against a ≈ 1.0000000001 for antipodes.
        let a = a.clamp(0.0, 1.0);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_M * c
    }

    /// Sum of great-circle distances along a polyline.  Zero for fewer than
    /// two points.
    pub fn polyline_length_m(points: &[GeoPoint]) -> f64 {
        points.windows(2).map(|w| w[0].distance_m(w[1])).sum()
    }

    /// `[lat, lon]` pair, the order used by map front-ends.
    #[inline]
    pub fn to_lat_lon(self) -> [f64; 2] {
        [self.lat, self.lon]
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
