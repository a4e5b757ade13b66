//! Use-Cases für den Lebenszyklus der Kartenansicht.
//!
//! Die erste erfolgreiche Standortwahl legt die Ansicht verzögert an (die
//! Render-Oberfläche braucht einen Moment zum Mounten); jede weitere Wahl
//! setzt Zentrums-Marker und Radius-Kreis sofort neu und schwenkt die Karte.

use std::time::{Duration, Instant};

use crate::app::state::{CenterOverlay, MapViewPhase};
use crate::app::AppState;
use crate::render::{MapSurface, MarkerIcon};

/// Zentriert die Kartenansicht auf den gewählten Standort.
pub fn center_map(state: &mut AppState, surface: &mut dyn MapSurface) {
    let Some(center) = state.selection.center else {
        log::debug!("Zentrieren ohne Standortauswahl übersprungen");
        return;
    };

    match state.view.phase {
        MapViewPhase::Uninitialized => {
            let delay = Duration::from_millis(state.options.map_init_delay_ms);
            state.view.phase = MapViewPhase::Pending {
                deadline: Instant::now() + delay,
            };
            log::info!(
                "Kartenansicht wird in {} ms initialisiert",
                state.options.map_init_delay_ms
            );
        }
        MapViewPhase::Pending { .. } => {
            // Einmal-Timer läuft bereits; das Ziel-Zentrum wird erst beim
            // Auslösen gelesen, ein zweiter Timer entsteht nicht.
        }
        MapViewPhase::Initialized => {
            if let Some(overlay) = state.view.center_overlay.take() {
                surface.remove_marker(overlay.marker);
                surface.remove_circle(overlay.circle);
            }
            state.view.center_overlay = Some(place_center_overlay(state, surface, center));
            surface.pan_to(center);
            log::debug!("Karte auf ({:.4}, {:.4}) geschwenkt", center.lat, center.lon);
        }
    }
}

/// Führt eine fällige verzögerte Erstinitialisierung aus.
///
/// Wird vom Host in jedem Frame aufgerufen. Legt die Ansicht nur an, solange
/// die Phase `Pending` ist; ein inzwischen gewechselter Standort liefert
/// lediglich ein anderes Zentrum, nie eine zweite Ansicht.
pub fn poll_deferred_init(state: &mut AppState, surface: &mut dyn MapSurface, now: Instant) {
    let MapViewPhase::Pending { deadline } = state.view.phase else {
        return;
    };
    if now < deadline {
        return;
    }

    let Some(center) = state.selection.center else {
        // Auswahl wurde vor dem Auslösen aufgehoben; Initialisierung verfällt
        state.view.phase = MapViewPhase::Uninitialized;
        return;
    };

    surface.create_view(center, state.options.map_zoom);
    state.view.center_overlay = Some(place_center_overlay(state, surface, center));
    state.view.phase = MapViewPhase::Initialized;

    log::info!(
        "Kartenansicht initialisiert: Zentrum ({:.4}, {:.4}), Zoom {}",
        center.lat,
        center.lon,
        state.options.map_zoom
    );
}

/// Setzt den Radius des Zentrums-Kreises und aktualisiert den Kreis live.
pub fn set_center_radius(state: &mut AppState, surface: &mut dyn MapSurface, radius_m: f64) {
    state.options.center_radius_m = radius_m.max(0.0);
    if let Some(overlay) = &state.view.center_overlay {
        surface.set_circle_radius(overlay.circle, state.options.center_radius_m);
    }
}

/// Platziert Zentrums-Marker und Radius-Kreis auf der Oberfläche
fn place_center_overlay(
    state: &AppState,
    surface: &mut dyn MapSurface,
    center: crate::core::GeoPoint,
) -> CenterOverlay {
    CenterOverlay {
        marker: surface.add_marker(center, MarkerIcon::SiteCenter),
        circle: surface.draw_circle(center, state.options.center_radius_m),
    }
}
