//! Zentrale Konfiguration für den GIS-Monitor.
//!
//! `MonitorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Kartenansicht ───────────────────────────────────────────────────

/// Radius des Zentrums-Kreises in Metern.
pub const CENTER_RADIUS_M: f64 = 1000.0;
/// Zoomstufe der Kartenansicht bei der Initialisierung.
pub const MAP_ZOOM_DEFAULT: f32 = 15.0;
/// Verzögerung der Erstinitialisierung in Millisekunden
/// (die Render-Oberfläche braucht einen Moment zum Mounten).
pub const MAP_INIT_DELAY_MS: u64 = 100;

// ── Marker-Rendering ────────────────────────────────────────────────

/// Farbe des Zentrums-Markers (RGBA: Blau).
pub const CENTER_MARKER_COLOR: [f32; 4] = [0.15, 0.45, 0.95, 1.0];
/// Farbe der Bagger-Marker (RGBA: Orange).
pub const EXCAVATOR_COLOR: [f32; 4] = [0.95, 0.6, 0.1, 1.0];
/// Farbe der LKW-Marker (RGBA: Grün).
pub const TRUCK_COLOR: [f32; 4] = [0.25, 0.75, 0.3, 1.0];
/// Füllfarbe des Radius-Kreises (RGBA: transparentes Blau).
pub const CIRCLE_FILL_COLOR: [f32; 4] = [0.15, 0.45, 0.95, 0.12];
/// Linienfarbe des Radius-Kreises (RGBA: Blau).
pub const CIRCLE_STROKE_COLOR: [f32; 4] = [0.15, 0.45, 0.95, 0.8];

/// Alle zur Laufzeit änderbaren Monitor-Optionen.
/// Wird als `site_vehicle_gis.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorOptions {
    /// Radius des Zentrums-Kreises in Metern
    pub center_radius_m: f64,
    /// Zoomstufe bei der Karteninitialisierung
    pub map_zoom: f32,
    /// Verzögerung der Erstinitialisierung in Millisekunden
    pub map_init_delay_ms: u64,
    /// Farbe des Zentrums-Markers (RGBA)
    pub center_marker_color: [f32; 4],
    /// Farbe der Bagger-Marker (RGBA)
    pub excavator_color: [f32; 4],
    /// Farbe der LKW-Marker (RGBA)
    pub truck_color: [f32; 4],
    /// Füllfarbe des Radius-Kreises (RGBA)
    pub circle_fill_color: [f32; 4],
    /// Linienfarbe des Radius-Kreises (RGBA)
    pub circle_stroke_color: [f32; 4],
}

impl Default for MonitorOptions {
    fn default() -> Self {
        Self {
            center_radius_m: CENTER_RADIUS_M,
            map_zoom: MAP_ZOOM_DEFAULT,
            map_init_delay_ms: MAP_INIT_DELAY_MS,
            center_marker_color: CENTER_MARKER_COLOR,
            excavator_color: EXCAVATOR_COLOR,
            truck_color: TRUCK_COLOR,
            circle_fill_color: CIRCLE_FILL_COLOR,
            circle_stroke_color: CIRCLE_STROKE_COLOR,
        }
    }
}

impl MonitorOptions {
    /// Lädt Optionen aus einer TOML-Datei (Standardwerte bei Fehlern).
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("site_vehicle_gis"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("site_vehicle_gis.toml")
    }
}
