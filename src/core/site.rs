//! Baustellen-Standort mit Koordinate und Fahrzeug-Historie.

use super::{GeoPoint, VehicleSnapshot};

/// Ein Baustellen-Standort aus dem Quelldatensatz.
///
/// Nach dem Laden unveränderlich; alle Sichten auf die Historie werden
/// abgeleitet statt kopiert.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstructionSite {
    /// Bezeichnung des Baustellenbereichs (nicht leer, eindeutig im Datensatz)
    pub name: String,
    /// Koordinate des Standorts (Kartenzentrum bei Auswahl)
    pub position: GeoPoint,
    /// Zeitlich geordnete Snapshot-Historie in Quell-Reihenfolge
    pub history: Vec<VehicleSnapshot>,
}

impl ConstructionSite {
    /// Erstellt einen neuen Standort
    pub fn new(name: String, position: GeoPoint, history: Vec<VehicleSnapshot>) -> Self {
        Self {
            name,
            position,
            history,
        }
    }
}
