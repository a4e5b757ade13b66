//! Application State — zentrale Datenhaltung.

use std::sync::Arc;
use std::time::Instant;

use time::Date;

use super::CommandLog;
use crate::core::{ConstructionSite, GeoPoint, SiteDataset, VehicleClassification};
use crate::render::{CircleHandle, MarkerHandle};
use crate::shared::MonitorOptions;

/// Aktiver UI-Tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewTab {
    /// Kartenansicht
    #[default]
    Map,
    /// Dokumentansicht (Fahrzeugliste)
    Document,
}

/// Lebenszyklus der Kartenansicht.
///
/// Die Erstinitialisierung läuft als geplanter Einmal-Schritt; ein
/// Standortwechsel vor Ablauf plant keinen zweiten Schritt ein, das
/// Ziel-Zentrum wird erst beim Auslösen gelesen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MapViewPhase {
    /// Noch keine Kartenansicht angelegt
    #[default]
    Uninitialized,
    /// Erstinitialisierung geplant, wird beim nächsten Poll nach Ablauf ausgeführt
    Pending {
        /// Frühester Ausführungszeitpunkt
        deadline: Instant,
    },
    /// Kartenansicht existiert
    Initialized,
}

/// Auswahlbezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    /// Name des aktuell gewählten Standorts (None = keine Auswahl)
    pub site_name: Option<String>,
    /// Koordinate des gewählten Standorts (Kartenzentrum)
    pub center: Option<GeoPoint>,
}

impl SelectionState {
    /// Erstellt einen leeren Auswahlzustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hebt die Auswahl auf
    pub fn clear(&mut self) {
        self.site_name = None;
        self.center = None;
    }
}

/// Zeitnavigation: gewähltes Datum und Stunden-Offset
#[derive(Debug, Clone)]
pub struct TimelineState {
    /// Gewählter Kalendertag
    pub selected_date: Date,
    /// Stunde des Tages (0–23) für die Snapshot-Auswahl
    pub hour_offset: u8,
}

impl TimelineState {
    /// Erstellt den Zeitnavigations-Zustand mit Startdatum und Stunde 0.
    pub fn new(initial_date: Date) -> Self {
        Self {
            selected_date: initial_date,
            hour_offset: 0,
        }
    }
}

/// Ergebnis des Zeitfilters als abgeleitete Sicht auf die Historie.
///
/// Snapshots werden über Indizes referenziert statt kopiert; der Datensatz
/// selbst bleibt unangetastet.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    /// Indizes aller Snapshots des gewählten Kalendertags (Historien-Reihenfolge)
    pub day_snapshots: Vec<usize>,
    /// Index des aktiven Snapshots (Stunden-Treffer, None = keine Daten)
    pub active_snapshot: Option<usize>,
    /// Klassifizierte Fahrzeuglisten des aktiven Snapshots
    pub classification: VehicleClassification,
}

impl FilterState {
    /// Erstellt einen leeren Filterzustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Leert alle abgeleiteten Sichten
    pub fn clear(&mut self) {
        self.day_snapshots.clear();
        self.active_snapshot = None;
        self.classification.clear();
    }
}

/// Handles des Zentrums-Overlays (Standort-Marker + Radius-Kreis)
#[derive(Debug, Clone, Copy)]
pub struct CenterOverlay {
    /// Marker auf der Standort-Koordinate
    pub marker: MarkerHandle,
    /// Radius-Kreis um den Standort
    pub circle: CircleHandle,
}

/// View-bezogener Anwendungszustand
#[derive(Debug, Default)]
pub struct ViewState {
    /// Aktiver UI-Tab
    pub tab: ViewTab,
    /// Lebenszyklus der Kartenansicht
    pub phase: MapViewPhase,
    /// Overlay-Handles des aktuellen Zentrums (None = noch nicht gesetzt)
    pub center_overlay: Option<CenterOverlay>,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand (Karten-Tab, keine Ansicht).
    pub fn new() -> Self {
        Self::default()
    }
}

/// Marker-Bestand: genau ein Handle pro klassifiziertem Fahrzeug.
///
/// Invariante nach jedem Abgleich: `len() == classification.total()`,
/// keine verwaisten Handles aus einer früheren Auswahl.
#[derive(Debug, Default)]
pub struct MarkerSet {
    handles: Vec<MarkerHandle>,
}

impl MarkerSet {
    /// Erstellt einen leeren Marker-Bestand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Anzahl der gehaltenen Marker-Handles
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Gibt `true` zurück, wenn keine Marker gehalten werden.
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Übernimmt ein neues Handle in den Bestand
    pub fn push(&mut self, handle: MarkerHandle) {
        self.handles.push(handle);
    }

    /// Entnimmt alle Handles (der Bestand ist danach leer)
    pub fn take(&mut self) -> Vec<MarkerHandle> {
        std::mem::take(&mut self.handles)
    }

    /// Read-only Sicht auf die Handles
    pub fn handles(&self) -> &[MarkerHandle] {
        &self.handles
    }
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Unveränderlicher Quelldatensatz (einmalig beim Start geladen)
    pub dataset: Arc<SiteDataset>,
    /// Auswahl-State
    pub selection: SelectionState,
    /// Zeitnavigations-State
    pub timeline: TimelineState,
    /// Filter-State (abgeleitete Sichten)
    pub filter: FilterState,
    /// View-State
    pub view: ViewState,
    /// Marker-Bestand der Kartenoberfläche
    pub markers: MarkerSet,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Radius, Zoom, Verzögerung, Farben)
    pub options: MonitorOptions,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen App-State über dem geladenen Datensatz
    pub fn new(dataset: Arc<SiteDataset>, initial_date: Date) -> Self {
        Self {
            dataset,
            selection: SelectionState::new(),
            timeline: TimelineState::new(initial_date),
            filter: FilterState::new(),
            view: ViewState::new(),
            markers: MarkerSet::new(),
            command_log: CommandLog::new(),
            options: MonitorOptions::default(),
            should_exit: false,
        }
    }

    /// Löst den aktuell gewählten Standort im Datensatz auf
    pub fn selected_site(&self) -> Option<&ConstructionSite> {
        self.selection
            .site_name
            .as_deref()
            .and_then(|name| self.dataset.find_site(name))
    }

    /// Gibt die Anzahl klassifizierter Bagger zurück (für UI-Anzeige)
    pub fn excavator_count(&self) -> usize {
        self.filter.classification.excavators.len()
    }

    /// Gibt die Anzahl klassifizierter LKW zurück (für UI-Anzeige)
    pub fn truck_count(&self) -> usize {
        self.filter.classification.trucks.len()
    }
}
