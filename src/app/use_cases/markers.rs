//! Marker-Abgleich: bringt die Kartenoberfläche mit der Klassifikation in Deckung.

use crate::app::state::MarkerSet;
use crate::core::VehicleClassification;
use crate::render::{MapSurface, MarkerIcon};

/// Gleicht den Marker-Bestand vollständig mit der Klassifikation ab.
///
/// Alle bisherigen Fahrzeug-Marker werden entfernt, danach entsteht genau ein
/// Marker pro klassifiziertem Fahrzeug (Bagger- bzw. LKW-Icon). Nach dem
/// Abgleich gilt `markers.len() == classification.total()`; Marker aus einer
/// früheren Auswahl können nicht zurückbleiben. Wiederholter Abgleich mit
/// derselben Klassifikation ändert die Anzahl nicht.
pub fn reconcile(
    markers: &mut MarkerSet,
    classification: &VehicleClassification,
    surface: &mut dyn MapSurface,
) {
    for handle in markers.take() {
        surface.remove_marker(handle);
    }

    for vehicle in &classification.excavators {
        markers.push(surface.add_marker(vehicle.position, MarkerIcon::Excavator));
    }
    for vehicle in &classification.trucks {
        markers.push(surface.add_marker(vehicle.position, MarkerIcon::Truck));
    }

    log::debug!("Marker abgeglichen: {} aktiv", markers.len());
}
