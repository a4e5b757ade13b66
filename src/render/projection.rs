//! Lokale Kartenprojektion um das Ansichtszentrum.
//!
//! Für die kleinen Ausschnitte rund um eine Baustelle genügt eine
//! äquirektangulare Näherung; die Pixel-Skala folgt der
//! Web-Mercator-Bodenauflösung der Zoomstufe.

use glam::DVec2;

use crate::core::GeoPoint;

/// Erdumfang am Äquator in Metern
const EARTH_CIRCUMFERENCE_M: f64 = 40_075_016.686;
/// Kachelgröße der Referenz-Zoomstufe in Pixeln
const TILE_SIZE_PX: f64 = 256.0;

/// Bodenauflösung in Metern pro Pixel für eine Zoomstufe.
pub fn ground_resolution(lat_deg: f64, zoom: f32) -> f64 {
    EARTH_CIRCUMFERENCE_M * lat_deg.to_radians().cos() / (TILE_SIZE_PX * 2f64.powf(zoom as f64))
}

/// Meter-Offset (Ost/Nord) eines Punktes relativ zum Zentrum.
pub fn offset_meters(center: GeoPoint, point: GeoPoint) -> DVec2 {
    let meters_per_deg_lat = EARTH_CIRCUMFERENCE_M / 360.0;
    let meters_per_deg_lon = meters_per_deg_lat * center.lat.to_radians().cos();
    DVec2::new(
        (point.lon - center.lon) * meters_per_deg_lon,
        (point.lat - center.lat) * meters_per_deg_lat,
    )
}

/// Projiziert einen Punkt in Bildschirm-Pixel relativ zur Viewport-Mitte.
/// Norden zeigt nach oben (negatives Screen-Y).
pub fn project(center: GeoPoint, point: GeoPoint, zoom: f32) -> DVec2 {
    let resolution = ground_resolution(center.lat, zoom);
    let offset = offset_meters(center, point);
    DVec2::new(offset.x / resolution, -offset.y / resolution)
}

/// Rechnet eine Strecke in Metern in Bildschirm-Pixel um.
pub fn meters_to_pixels(meters: f64, lat_deg: f64, zoom: f32) -> f64 {
    meters / ground_resolution(lat_deg, zoom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ground_resolution_halves_per_zoom_step() {
        let coarse = ground_resolution(0.0, 10.0);
        let fine = ground_resolution(0.0, 11.0);
        assert_relative_eq!(coarse / fine, 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_center_projects_to_origin() {
        let center = GeoPoint::new(53.55, 9.99);
        let projected = project(center, center, 15.0);
        assert_relative_eq!(projected.x, 0.0);
        assert_relative_eq!(projected.y, 0.0);
    }

    #[test]
    fn test_north_of_center_projects_upwards() {
        let center = GeoPoint::new(53.55, 9.99);
        let north = GeoPoint::new(53.56, 9.99);
        let projected = project(center, north, 15.0);
        assert!(projected.y < 0.0);
        assert_relative_eq!(projected.x, 0.0);
    }

    #[test]
    fn test_offset_meters_roughly_matches_latitude_scale() {
        let center = GeoPoint::new(0.0, 0.0);
        let one_degree_north = GeoPoint::new(1.0, 0.0);
        let offset = offset_meters(center, one_degree_north);
        // Ein Breitengrad entspricht gut 111 km
        assert_relative_eq!(offset.y, 111_319.5, epsilon = 100.0);
    }
}
