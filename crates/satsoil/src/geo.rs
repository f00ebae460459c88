use serde::Serialize;

/// Convert a degrees/minutes/seconds coordinate to decimal degrees.
///
/// Inputs are trusted showcase constants; out-of-range values are not
/// validated.
pub fn dms_to_decimal(degrees: f64, minutes: f64, seconds: f64) -> f64 {
    degrees + minutes / 60.0 + seconds / 3600.0
}

/// Latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl LatLon {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Build a vertex from DMS triples, `(degrees, minutes, seconds)`
    /// for latitude and longitude respectively.
    pub fn from_dms(lat: (f64, f64, f64), lon: (f64, f64, f64)) -> Self {
        Self {
            lat: dms_to_decimal(lat.0, lat.1, lat.2),
            lon: dms_to_decimal(lon.0, lon.1, lon.2),
        }
    }
}

/// Lifecycle contract of the external map-tile widget.
///
/// Tile networking, rendering, and failure handling belong to the
/// widget. The session coordinator only drives mounting when a detail
/// view becomes active, `resize` on container-size notifications, and
/// `destroy` when the detail view unmounts.
pub trait MapWidget: Send + Sync {
    fn mount(&self, polygon: &[LatLon]);
    fn resize(&self);
    fn destroy(&self);
}
