//! Fahrzeug-Datenmodelle: Typ, Einzelposition und Zeitstempel-Snapshot.

use serde::Deserialize;
use time::PrimitiveDateTime;

use super::GeoPoint;

/// Fahrzeugtyp eines Datensatz-Eintrags.
///
/// `Other` fängt alle nicht bekannten Typbezeichnungen aus dem Datensatz ab;
/// solche Einträge fallen bei der Klassifikation stillschweigend heraus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum VehicleKind {
    /// Bagger
    Excavator,
    /// LKW
    Truck,
    /// Unbekannte Typbezeichnung im Datensatz
    #[serde(other)]
    Other,
}

/// Einzelne Fahrzeugposition innerhalb eines Snapshots
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VehicleRecord {
    /// Fahrzeugtyp
    pub kind: VehicleKind,
    /// Position des Fahrzeugs
    pub position: GeoPoint,
}

impl VehicleRecord {
    /// Erstellt einen neuen Fahrzeug-Eintrag
    pub fn new(kind: VehicleKind, position: GeoPoint) -> Self {
        Self { kind, position }
    }
}

/// Alle Fahrzeugpositionen eines Standorts zu einem Zeitstempel.
///
/// Die Reihenfolge der Snapshots in der Historie entspricht der Reihenfolge
/// im Quelldatensatz und wird nirgends umsortiert — bei mehreren Snapshots
/// mit gleicher Stunde am gleichen Tag gewinnt der erste.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleSnapshot {
    /// Aufnahmezeitpunkt (naive Lokalzeit, Kalendervergleich ohne Offset)
    pub timestamp: PrimitiveDateTime,
    /// Fahrzeugpositionen zu diesem Zeitpunkt
    pub vehicles: Vec<VehicleRecord>,
}

impl VehicleSnapshot {
    /// Erstellt einen neuen Snapshot
    pub fn new(timestamp: PrimitiveDateTime, vehicles: Vec<VehicleRecord>) -> Self {
        Self {
            timestamp,
            vehicles,
        }
    }
}
