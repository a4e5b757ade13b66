//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};
use crate::render::MapSurface;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
///
/// Die Kartenoberfläche wird als Referenz durchgereicht; der Controller
/// besitzt keine Render-Ressourcen.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(
        &mut self,
        state: &mut AppState,
        surface: &mut dyn MapSurface,
        intent: AppIntent,
    ) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, surface, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        surface: &mut dyn MapSurface,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Standortwahl ===
            AppCommand::SelectSite { name } => handlers::site::select(state, &name),
            AppCommand::ClearSiteSelection => handlers::site::clear(state),

            // === Kartenansicht ===
            AppCommand::CenterMapView => handlers::view::center_map(state, surface),
            AppCommand::SetCenterRadius { radius_m } => {
                handlers::view::set_center_radius(state, surface, radius_m)
            }
            AppCommand::SwitchTab { tab } => handlers::view::switch_tab(state, tab),

            // === Zeitnavigation & Filter ===
            AppCommand::ShiftDate { days } => handlers::timeline::shift_date(state, days),
            AppCommand::SetHourOffset { hour } => handlers::timeline::set_hour_offset(state, hour),
            AppCommand::RefreshVehicleFilter => handlers::timeline::refresh_filter(state, surface),

            // === Anwendungssteuerung ===
            AppCommand::RequestExit => handlers::view::request_exit(state),
        }

        Ok(())
    }
}
