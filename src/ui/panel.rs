//! Seitenleiste: Standortwahl, Zeitnavigation, Radius und Tab-Wahl.

use time::macros::format_description;

use crate::app::{AppIntent, AppState, ViewTab};

/// Rendert die Seitenleiste und gibt erzeugte Events zurück.
pub fn render_side_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::left("control_panel")
        .resizable(false)
        .default_width(230.0)
        .show(ctx, |ui| {
            ui.heading("Baustelle");

            let selected_label = state
                .selection
                .site_name
                .as_deref()
                .unwrap_or("Standort wählen…");
            egui::ComboBox::from_id_salt("site_select")
                .width(200.0)
                .selected_text(selected_label)
                .show_ui(ui, |ui| {
                    for name in state.dataset.site_names() {
                        let is_selected = state.selection.site_name.as_deref() == Some(name);
                        if ui.selectable_label(is_selected, name).clicked() && !is_selected {
                            events.push(AppIntent::SiteSelected {
                                name: name.to_string(),
                            });
                        }
                    }
                });

            ui.separator();
            ui.label("Datum");
            ui.horizontal(|ui| {
                if ui.button("◀").clicked() {
                    events.push(AppIntent::DateStepRequested { days: -1 });
                }
                let date_format = format_description!("[day].[month].[year]");
                let date_label = state
                    .timeline
                    .selected_date
                    .format(date_format)
                    .unwrap_or_else(|_| "--".to_string());
                ui.label(date_label);
                if ui.button("▶").clicked() {
                    events.push(AppIntent::DateStepRequested { days: 1 });
                }
            });

            ui.label("Stunde");
            let mut hour = state.timeline.hour_offset;
            if ui
                .add(egui::Slider::new(&mut hour, 0..=23).suffix(" Uhr"))
                .changed()
            {
                events.push(AppIntent::HourChanged { hour });
            }

            ui.separator();
            ui.label("Radius (m)");
            let mut radius_m = state.options.center_radius_m;
            if ui
                .add(egui::Slider::new(&mut radius_m, 100.0..=5000.0).integer())
                .changed()
            {
                events.push(AppIntent::CenterRadiusChanged { radius_m });
            }

            ui.separator();
            ui.horizontal(|ui| {
                if ui
                    .selectable_label(state.view.tab == ViewTab::Map, "Karte")
                    .clicked()
                {
                    events.push(AppIntent::TabChanged { tab: ViewTab::Map });
                }
                if ui
                    .selectable_label(state.view.tab == ViewTab::Document, "Dokument")
                    .clicked()
                {
                    events.push(AppIntent::TabChanged {
                        tab: ViewTab::Document,
                    });
                }
            });

            ui.separator();
            if ui.button("Beenden").clicked() {
                events.push(AppIntent::ExitRequested);
            }
        });

    events
}
