//! Dokument-Tab: tabellarische Fahrzeugliste des aktiven Snapshots.

use egui_extras::{Column, TableBuilder};

use crate::app::AppState;
use crate::core::{ClassifiedVehicle, VehicleKind};

/// Rendert die Fahrzeugtabelle in den verfügbaren Bereich.
pub fn render_document_view(ui: &mut egui::Ui, state: &AppState) {
    let classification = &state.filter.classification;

    if classification.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.label("Keine Fahrzeugdaten für die gewählte Stunde");
        });
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_least(80.0))
        .column(Column::auto().at_least(100.0))
        .column(Column::auto().at_least(100.0))
        .column(Column::auto().at_least(90.0))
        .column(Column::remainder())
        .header(22.0, |mut header| {
            header.col(|ui| {
                ui.strong("Typ");
            });
            header.col(|ui| {
                ui.strong("Breitengrad");
            });
            header.col(|ui| {
                ui.strong("Längengrad");
            });
            header.col(|ui| {
                ui.strong("Datum");
            });
            header.col(|ui| {
                ui.strong("Uhrzeit");
            });
        })
        .body(|mut body| {
            for vehicle in classification
                .excavators
                .iter()
                .chain(classification.trucks.iter())
            {
                vehicle_row(&mut body, vehicle);
            }
        });
}

/// Fügt eine Tabellenzeile für ein klassifiziertes Fahrzeug hinzu
fn vehicle_row(body: &mut egui_extras::TableBody<'_>, vehicle: &ClassifiedVehicle) {
    body.row(20.0, |mut row| {
        row.col(|ui| {
            ui.label(kind_label(vehicle.kind));
        });
        row.col(|ui| {
            ui.label(format!("{:.5}", vehicle.position.lat));
        });
        row.col(|ui| {
            ui.label(format!("{:.5}", vehicle.position.lon));
        });
        row.col(|ui| {
            ui.label(&vehicle.display_date);
        });
        row.col(|ui| {
            ui.label(&vehicle.display_time);
        });
    });
}

/// Anzeigename eines Fahrzeugtyps
fn kind_label(kind: VehicleKind) -> &'static str {
    match kind {
        VehicleKind::Excavator => "Bagger",
        VehicleKind::Truck => "LKW",
        VehicleKind::Other => "Unbekannt",
    }
}
