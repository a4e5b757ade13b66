//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::SiteSelected { name } => {
            // Unbekannte Namen lösen kein Marker- oder Zentrums-Update aus,
            // nur das Leeren der nachgelagerten Klassifikation.
            if state.dataset.find_site(&name).is_some() {
                vec![
                    AppCommand::SelectSite { name },
                    AppCommand::CenterMapView,
                    AppCommand::RefreshVehicleFilter,
                ]
            } else {
                vec![AppCommand::ClearSiteSelection]
            }
        }
        AppIntent::DateStepRequested { days } => vec![
            AppCommand::ShiftDate { days },
            AppCommand::RefreshVehicleFilter,
        ],
        AppIntent::HourChanged { hour } => vec![
            AppCommand::SetHourOffset { hour },
            AppCommand::RefreshVehicleFilter,
        ],
        AppIntent::CenterRadiusChanged { radius_m } => {
            vec![AppCommand::SetCenterRadius { radius_m }]
        }
        AppIntent::TabChanged { tab } => vec![AppCommand::SwitchTab { tab }],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}

#[cfg(test)]
mod tests;
