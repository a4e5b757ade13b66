//! Klassifizierte Fahrzeuglisten als abgeleitete Sicht auf einen Snapshot.

use time::macros::format_description;
use time::PrimitiveDateTime;

use super::{GeoPoint, VehicleKind};

/// Ein klassifiziertes Fahrzeug mit normalisierten Anzeigefeldern.
///
/// Datum und Uhrzeit stammen immer vom Zeitstempel des Snapshots, nicht vom
/// Einzeleintrag; erneutes Ableiten liefert dasselbe Ergebnis.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedVehicle {
    /// Fahrzeugtyp
    pub kind: VehicleKind,
    /// Position des Fahrzeugs
    pub position: GeoPoint,
    /// Anzeigedatum (vom Snapshot-Zeitstempel abgeleitet)
    pub display_date: String,
    /// Anzeigeuhrzeit (vom Snapshot-Zeitstempel abgeleitet)
    pub display_time: String,
}

impl ClassifiedVehicle {
    /// Erstellt einen klassifizierten Eintrag mit Anzeigefeldern vom Snapshot-Zeitstempel
    pub fn from_snapshot_timestamp(
        kind: VehicleKind,
        position: GeoPoint,
        timestamp: PrimitiveDateTime,
    ) -> Self {
        let display_date = format_description!("[day].[month].[year]");
        let display_time = format_description!("[hour]:[minute]:[second]");

        Self {
            kind,
            position,
            display_date: timestamp
                .format(display_date)
                .unwrap_or_else(|_| String::new()),
            display_time: timestamp
                .format(display_time)
                .unwrap_or_else(|_| String::new()),
        }
    }
}

/// Nach Typ aufgeteilte Fahrzeuglisten des aktiven Snapshots
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VehicleClassification {
    /// Bagger
    pub excavators: Vec<ClassifiedVehicle>,
    /// LKW
    pub trucks: Vec<ClassifiedVehicle>,
}

impl VehicleClassification {
    /// Erstellt leere Listen
    pub fn new() -> Self {
        Self::default()
    }

    /// Gesamtzahl klassifizierter Fahrzeuge
    pub fn total(&self) -> usize {
        self.excavators.len() + self.trucks.len()
    }

    /// Gibt `true` zurück, wenn keine Fahrzeuge klassifiziert sind.
    pub fn is_empty(&self) -> bool {
        self.excavators.is_empty() && self.trucks.is_empty()
    }

    /// Leert beide Listen
    pub fn clear(&mut self) {
        self.excavators.clear();
        self.trucks.clear();
    }
}
