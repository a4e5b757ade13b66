//! Schnittstelle zur externen Kartenoberfläche.
//!
//! Der Core ruft ausschließlich dieses Trait auf; wie Ansicht, Marker und
//! Kreise tatsächlich gezeichnet werden, entscheidet die Implementierung.

use std::collections::HashMap;

use crate::core::GeoPoint;

/// Handle auf einen Karten-Marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkerHandle(pub u64);

/// Handle auf einen Radius-Kreis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CircleHandle(pub u64);

/// Icon-Auswahl für Marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerIcon {
    /// Zentrums-Marker des gewählten Standorts
    SiteCenter,
    /// Bagger
    Excavator,
    /// LKW
    Truck,
}

/// Kartenoberfläche als externer Kollaborateur.
///
/// Marker dürfen bereits vor `create_view` angelegt werden; die Oberfläche
/// zeigt sie, sobald die Ansicht existiert.
pub trait MapSurface {
    /// Legt die Kartenansicht mit Zentrum und Zoomstufe an
    fn create_view(&mut self, center: GeoPoint, zoom: f32);
    /// Schwenkt die Ansicht auf ein neues Zentrum
    fn pan_to(&mut self, center: GeoPoint);
    /// Legt einen Marker an und gibt dessen Handle zurück
    fn add_marker(&mut self, position: GeoPoint, icon: MarkerIcon) -> MarkerHandle;
    /// Entfernt einen Marker
    fn remove_marker(&mut self, handle: MarkerHandle);
    /// Verschiebt einen vorhandenen Marker
    fn set_marker_position(&mut self, handle: MarkerHandle, position: GeoPoint);
    /// Zeichnet einen Kreis (Radius in Metern) und gibt dessen Handle zurück
    fn draw_circle(&mut self, center: GeoPoint, radius_m: f64) -> CircleHandle;
    /// Entfernt einen Kreis
    fn remove_circle(&mut self, handle: CircleHandle);
    /// Ändert den Radius eines vorhandenen Kreises
    fn set_circle_radius(&mut self, handle: CircleHandle, radius_m: f64);
}

/// Headless-Kartenoberfläche ohne Renderer.
///
/// Hält den Bestand und zählt die Aufrufe mit; dient Tests und dem Betrieb
/// ohne Fenster.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    next_handle: u64,
    view: Option<(GeoPoint, f32)>,
    markers: HashMap<u64, (GeoPoint, MarkerIcon)>,
    circles: HashMap<u64, (GeoPoint, f64)>,
    /// Anzahl der `create_view`-Aufrufe
    pub created_views: usize,
    /// Anzahl der `pan_to`-Aufrufe
    pub pan_count: usize,
    /// Anzahl der `add_marker`-Aufrufe
    pub add_count: usize,
    /// Anzahl der `remove_marker`-Aufrufe
    pub remove_count: usize,
}

impl RecordingSurface {
    /// Erstellt eine leere Oberfläche.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gibt `true` zurück, wenn eine Ansicht angelegt wurde.
    pub fn has_view(&self) -> bool {
        self.view.is_some()
    }

    /// Aktuelles Ansichtszentrum (None = keine Ansicht)
    pub fn view_center(&self) -> Option<GeoPoint> {
        self.view.map(|(center, _)| center)
    }

    /// Anzahl aktuell vorhandener Marker
    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    /// Anzahl aktuell vorhandener Marker mit dem angegebenen Icon
    pub fn markers_with_icon(&self, icon: MarkerIcon) -> usize {
        self.markers.values().filter(|(_, i)| *i == icon).count()
    }

    /// Anzahl aktuell vorhandener Kreise
    pub fn circle_count(&self) -> usize {
        self.circles.len()
    }

    /// Radius eines Kreises (None = Handle unbekannt)
    pub fn circle_radius(&self, handle: CircleHandle) -> Option<f64> {
        self.circles.get(&handle.0).map(|(_, radius)| *radius)
    }

    fn next_handle(&mut self) -> u64 {
        self.next_handle += 1;
        self.next_handle
    }
}

impl MapSurface for RecordingSurface {
    fn create_view(&mut self, center: GeoPoint, zoom: f32) {
        self.view = Some((center, zoom));
        self.created_views += 1;
    }

    fn pan_to(&mut self, center: GeoPoint) {
        if let Some((view_center, _)) = self.view.as_mut() {
            *view_center = center;
        }
        self.pan_count += 1;
    }

    fn add_marker(&mut self, position: GeoPoint, icon: MarkerIcon) -> MarkerHandle {
        let handle = self.next_handle();
        self.markers.insert(handle, (position, icon));
        self.add_count += 1;
        MarkerHandle(handle)
    }

    fn remove_marker(&mut self, handle: MarkerHandle) {
        if self.markers.remove(&handle.0).is_none() {
            log::warn!("Unbekanntes Marker-Handle {:?} entfernt", handle);
        }
        self.remove_count += 1;
    }

    fn set_marker_position(&mut self, handle: MarkerHandle, position: GeoPoint) {
        if let Some((stored, _)) = self.markers.get_mut(&handle.0) {
            *stored = position;
        }
    }

    fn draw_circle(&mut self, center: GeoPoint, radius_m: f64) -> CircleHandle {
        let handle = self.next_handle();
        self.circles.insert(handle, (center, radius_m));
        CircleHandle(handle)
    }

    fn remove_circle(&mut self, handle: CircleHandle) {
        self.circles.remove(&handle.0);
    }

    fn set_circle_radius(&mut self, handle: CircleHandle, radius_m: f64) {
        if let Some((_, stored)) = self.circles.get_mut(&handle.0) {
            *stored = radius_m;
        }
    }
}
