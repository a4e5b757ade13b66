//! Handler für Zeitnavigation und Filterlauf.

use crate::app::use_cases;
use crate::app::AppState;
use crate::render::MapSurface;

/// Verschiebt das gewählte Datum um ganze Tage.
pub fn shift_date(state: &mut AppState, days: i64) {
    use_cases::temporal_filter::shift_date(state, days);
}

/// Setzt den Stunden-Offset und leert die laufende Klassifikation.
pub fn set_hour_offset(state: &mut AppState, hour: u8) {
    use_cases::temporal_filter::set_hour_offset(state, hour);
}

/// Wertet den Zeitfilter neu aus und gleicht die Marker ab.
pub fn refresh_filter(state: &mut AppState, surface: &mut dyn MapSurface) {
    use_cases::temporal_filter::refresh(state, surface);
}
