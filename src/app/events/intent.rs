use super::super::state::ViewTab;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Standort im Auswahlfeld gewählt
    SiteSelected { name: String },
    /// Datum um ganze Tage navigieren (±1 über die Pfeil-Buttons)
    DateStepRequested { days: i64 },
    /// Stunden-Offset (0–23) über den Regler geändert
    HourChanged { hour: u8 },
    /// Radius des Zentrums-Kreises geändert (Meter)
    CenterRadiusChanged { radius_m: f64 },
    /// UI-Tab gewechselt (Karte / Dokument)
    TabChanged { tab: ViewTab },
    /// Anwendung beenden
    ExitRequested,
}
