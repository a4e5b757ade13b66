//! Zeitfilter: Kalendertag-Filter, Stundenauswahl und Klassifikation.
//!
//! Alle Funktionen arbeiten auf Index-Sichten der unveränderlichen Historie;
//! es werden keine Snapshots kopiert.

use std::sync::Arc;

use time::Date;

use crate::app::use_cases::markers;
use crate::app::AppState;
use crate::core::{ClassifiedVehicle, VehicleClassification, VehicleKind, VehicleSnapshot};
use crate::render::MapSurface;

/// Liefert die Indizes aller Snapshots, deren Kalendertag `date` entspricht.
///
/// Verglichen wird nur das Datum des naiven Zeitstempels (Lokalzeit-Semantik,
/// kein Offset); die Historien-Reihenfolge bleibt erhalten.
pub fn filter_by_date(history: &[VehicleSnapshot], date: Date) -> Vec<usize> {
    history
        .iter()
        .enumerate()
        .filter(|(_, snapshot)| snapshot.timestamp.date() == date)
        .map(|(index, _)| index)
        .collect()
}

/// Wählt unter den Tages-Snapshots den ersten mit passender Stunde.
///
/// Mehrere Treffer pro Stunde sind möglich; es gewinnt der erste in
/// gespeicherter Reihenfolge. Kein Treffer ist ein gültiger Leerzustand.
pub fn select_hour(
    history: &[VehicleSnapshot],
    day_snapshots: &[usize],
    hour: u8,
) -> Option<usize> {
    day_snapshots
        .iter()
        .copied()
        .find(|&index| history[index].timestamp.hour() == hour)
}

/// Teilt die Fahrzeuge eines Snapshots nach Typ auf.
///
/// Anzeigedatum und -uhrzeit werden dabei für jeden Eintrag vom
/// Snapshot-Zeitstempel abgeleitet. Unbekannte Typen landen in keiner der
/// beiden Listen; das ist gewollt und kein Fehlerfall.
pub fn classify(snapshot: &VehicleSnapshot) -> VehicleClassification {
    let mut classification = VehicleClassification::new();

    for record in &snapshot.vehicles {
        match record.kind {
            VehicleKind::Excavator => {
                classification
                    .excavators
                    .push(ClassifiedVehicle::from_snapshot_timestamp(
                        record.kind,
                        record.position,
                        snapshot.timestamp,
                    ));
            }
            VehicleKind::Truck => {
                classification
                    .trucks
                    .push(ClassifiedVehicle::from_snapshot_timestamp(
                        record.kind,
                        record.position,
                        snapshot.timestamp,
                    ));
            }
            VehicleKind::Other => {}
        }
    }

    classification
}

/// Verschiebt das gewählte Datum um ganze Tage.
pub fn shift_date(state: &mut AppState, days: i64) {
    match state
        .timeline
        .selected_date
        .checked_add(time::Duration::days(days))
    {
        Some(new_date) => {
            state.timeline.selected_date = new_date;
            log::debug!("Datum gewechselt auf {}", new_date);
        }
        None => log::warn!("Datumswechsel außerhalb des gültigen Bereichs ignoriert"),
    }
}

/// Setzt den Stunden-Offset.
///
/// Die laufende Klassifikation wird sofort geleert; der anschließende
/// Filterlauf baut sie neu auf.
pub fn set_hour_offset(state: &mut AppState, hour: u8) {
    state.filter.clear();
    state.timeline.hour_offset = hour.min(23);
}

/// Wertet den Zeitfilter für den gewählten Standort neu aus und gleicht die
/// Marker auf der Kartenoberfläche ab.
///
/// Ohne Auswahl passiert nichts. Liefert die Stundenauswahl keinen Treffer,
/// werden alle Fahrzeug-Marker abgeräumt statt stehen zu lassen.
pub fn refresh(state: &mut AppState, surface: &mut dyn MapSurface) {
    let dataset = Arc::clone(&state.dataset);
    let Some(name) = state.selection.site_name.clone() else {
        log::debug!("Filterlauf ohne Standortauswahl übersprungen");
        return;
    };
    let Some(site) = dataset.find_site(&name) else {
        log::warn!("Gewählter Standort '{}' nicht mehr im Datensatz", name);
        state.selection.clear();
        state.filter.clear();
        return;
    };

    state.filter.day_snapshots = filter_by_date(&site.history, state.timeline.selected_date);
    state.filter.active_snapshot = select_hour(
        &site.history,
        &state.filter.day_snapshots,
        state.timeline.hour_offset,
    );

    match state.filter.active_snapshot {
        Some(index) => {
            state.filter.classification = classify(&site.history[index]);
        }
        None => {
            state.filter.classification.clear();
        }
    }

    markers::reconcile(&mut state.markers, &state.filter.classification, surface);

    log::debug!(
        "Filter: {} Tages-Snapshots, Stunde {} -> {} Bagger / {} LKW",
        state.filter.day_snapshots.len(),
        state.timeline.hour_offset,
        state.filter.classification.excavators.len(),
        state.filter.classification.trucks.len()
    );
}

#[cfg(test)]
mod tests;
