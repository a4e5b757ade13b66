//! Site-Vehicle-GIS.
//!
//! GIS-Monitor für Baustellenfahrzeuge: Standortwahl, Datums-/Stundenfilter
//! und Fahrzeug-Marker auf einer einfachen Kartenansicht.

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Context;
use eframe::egui;
use time::OffsetDateTime;

use site_vehicle_gis::app::use_cases;
use site_vehicle_gis::render::EguiMapSurface;
use site_vehicle_gis::{
    parse_site_dataset, ui, AppController, AppIntent, AppState, MapViewPhase, MonitorOptions,
    SiteDataset, ViewTab,
};

/// Eingebetteter Demo-Datensatz (Fallback ohne Pfad-Argument)
const DEMO_DATASET: &str = include_str!("../assets/sites.json");

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Site-Vehicle-GIS v{} startet...", env!("CARGO_PKG_VERSION"));

        let dataset = match load_dataset() {
            Ok(dataset) => dataset,
            Err(e) => {
                log::error!("Datensatz konnte nicht geladen werden: {:#}", e);
                return Ok(());
            }
        };

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("Site-Vehicle-GIS"),
            ..Default::default()
        };

        eframe::run_native(
            "Site-Vehicle-GIS",
            options,
            Box::new(move |_cc| Ok(Box::new(MonitorApp::new(dataset)))),
        )
    }
}

/// Lädt den Datensatz aus dem Pfad-Argument oder dem eingebetteten Demo-Bestand
fn load_dataset() -> anyhow::Result<Arc<SiteDataset>> {
    let dataset = match std::env::args().nth(1) {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("Datensatz-Datei '{}' nicht lesbar", path))?;
            log::info!("Lade Datensatz aus '{}'", path);
            parse_site_dataset(&content)?
        }
        None => {
            log::info!("Kein Pfad-Argument, verwende eingebetteten Demo-Datensatz");
            parse_site_dataset(DEMO_DATASET)?
        }
    };

    log::info!("{} Standorte geladen", dataset.site_count());
    Ok(Arc::new(dataset))
}

/// Haupt-Anwendungsstruktur
struct MonitorApp {
    state: AppState,
    controller: AppController,
    surface: EguiMapSurface,
}

impl MonitorApp {
    fn new(dataset: Arc<SiteDataset>) -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = MonitorOptions::config_path();
        let monitor_options = MonitorOptions::load_from_file(&config_path);

        // Startdatum: heutiger Kalendertag in Lokalzeit
        let initial_date = OffsetDateTime::now_local()
            .unwrap_or_else(|_| OffsetDateTime::now_utc())
            .date();

        let mut state = AppState::new(dataset, initial_date);
        state.options = monitor_options;

        Self {
            state,
            controller: AppController::new(),
            surface: EguiMapSurface::new(),
        }
    }
}

impl eframe::App for MonitorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);
        let has_events = !events.is_empty();

        self.process_events(events);

        // Fällige verzögerte Karteninitialisierung ausführen
        use_cases::map_view::poll_deferred_init(&mut self.state, &mut self.surface, Instant::now());

        if matches!(self.state.view.phase, MapViewPhase::Pending { .. }) {
            ctx.request_repaint_after(Duration::from_millis(20));
        } else if has_events {
            ctx.request_repaint();
        }
    }
}

impl MonitorApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_side_panel(ctx, &self.state));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| match self.state.view.tab {
                ViewTab::Map => {
                    self.surface.show(ui, &self.state.options);
                }
                ViewTab::Document => {
                    ui::render_document_view(ui, &self.state);
                }
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self
                .controller
                .handle_intent(&mut self.state, &mut self.surface, event)
            {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }
}
