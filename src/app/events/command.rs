use super::super::state::ViewTab;

/// Mutierende App-Commands, erzeugt aus Intents über das Intent-Mapping.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Standort auswählen (Name existiert im Datensatz)
    SelectSite { name: String },
    /// Auswahl und nachgelagerte Klassifikation leeren (unbekannter Name)
    ClearSiteSelection,
    /// Kartenansicht auf den gewählten Standort zentrieren
    /// (Erstauswahl: verzögerte Initialisierung; danach: Overlay neu setzen)
    CenterMapView,
    /// Gewähltes Datum um ganze Tage verschieben
    ShiftDate { days: i64 },
    /// Stunden-Offset setzen (leert die laufende Klassifikation)
    SetHourOffset { hour: u8 },
    /// Zeitfilter neu auswerten und Marker abgleichen
    RefreshVehicleFilter,
    /// Radius des Zentrums-Kreises setzen
    SetCenterRadius { radius_m: f64 },
    /// UI-Tab wechseln (reiner UI-Zustand, kein Filterlauf)
    SwitchTab { tab: ViewTab },
    /// Anwendung kontrolliert beenden
    RequestExit,
}
