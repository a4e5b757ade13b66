//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            match state.selection.site_name.as_deref() {
                Some(name) => {
                    ui.label(format!("Standort: {}", name));
                }
                None => {
                    ui.label("Kein Standort gewählt");
                }
            }

            ui.separator();

            ui.label(format!(
                "Snapshots am Tag: {} | Bagger: {} | LKW: {} | Marker: {}",
                state.filter.day_snapshots.len(),
                state.excavator_count(),
                state.truck_count(),
                state.markers.len()
            ));

            ui.separator();

            ui.label(format!("{} Standorte im Datensatz", state.dataset.site_count()));
        });
    });
}
