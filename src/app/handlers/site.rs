//! Handler für Standortwahl.

use crate::app::use_cases;
use crate::app::AppState;

/// Wählt einen Standort aus und setzt das Kartenzentrum.
pub fn select(state: &mut AppState, name: &str) {
    use_cases::site_selection::select_site(state, name);
}

/// Hebt die Auswahl auf und leert die nachgelagerte Klassifikation.
pub fn clear(state: &mut AppState) {
    use_cases::site_selection::clear_selection(state);
}
