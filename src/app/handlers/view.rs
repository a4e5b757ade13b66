//! Handler für Kartenansicht, Tabs und Anwendungssteuerung.

use crate::app::state::ViewTab;
use crate::app::use_cases;
use crate::app::AppState;
use crate::render::MapSurface;

/// Zentriert die Kartenansicht auf den gewählten Standort.
pub fn center_map(state: &mut AppState, surface: &mut dyn MapSurface) {
    use_cases::map_view::center_map(state, surface);
}

/// Setzt den Radius des Zentrums-Kreises.
pub fn set_center_radius(state: &mut AppState, surface: &mut dyn MapSurface, radius_m: f64) {
    use_cases::map_view::set_center_radius(state, surface, radius_m);
}

/// Wechselt den aktiven UI-Tab (kein Filterlauf).
pub fn switch_tab(state: &mut AppState, tab: ViewTab) {
    state.view.tab = tab;
}

/// Merkt das kontrollierte Beenden für den Host vor.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}
