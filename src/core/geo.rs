//! Geokoordinaten als einfacher Wertetyp.

/// Geografische Position (WGS84, Grad)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    /// Breitengrad in Grad (positiv = Nord)
    pub lat: f64,
    /// Längengrad in Grad (positiv = Ost)
    pub lon: f64,
}

impl GeoPoint {
    /// Erstellt eine neue Position
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}
