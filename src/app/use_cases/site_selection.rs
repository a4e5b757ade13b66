//! Use-Cases für die Standortwahl.

use std::sync::Arc;

use crate::app::AppState;

/// Wählt einen Standort per exaktem Namensvergleich aus.
///
/// Die laufende Klassifikation wird vor dem Neuaufbau geleert, damit beim
/// Standortwechsel kein veralteter Zustand sichtbar wird.
pub fn select_site(state: &mut AppState, name: &str) {
    state.filter.clear();

    let dataset = Arc::clone(&state.dataset);
    let Some(site) = dataset.find_site(name) else {
        log::warn!("Unbekannter Standort '{}'", name);
        state.selection.clear();
        return;
    };

    state.selection.site_name = Some(site.name.clone());
    state.selection.center = Some(site.position);

    log::info!(
        "Standort '{}' gewählt ({} Snapshots in der Historie)",
        site.name,
        site.history.len()
    );
}

/// Hebt die Auswahl auf und leert den nachgelagerten Zustand.
///
/// Es findet kein Marker- oder Zentrums-Update statt; vorhandene Marker
/// bleiben unangetastet, bis die nächste gültige Auswahl sie abgleicht.
pub fn clear_selection(state: &mut AppState) {
    state.selection.clear();
    state.filter.clear();
    log::debug!("Auswahl aufgehoben, Klassifikation geleert");
}
