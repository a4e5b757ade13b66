use std::sync::Arc;

use time::macros::date;

use super::*;
use crate::app::state::ViewTab;
use crate::core::{ConstructionSite, GeoPoint, SiteDataset};

fn make_state() -> AppState {
    let dataset = SiteDataset::from_sites(vec![ConstructionSite::new(
        "Nord".to_string(),
        GeoPoint::new(50.0, 8.0),
        Vec::new(),
    )]);
    AppState::new(Arc::new(dataset), date!(2024 - 01 - 01))
}

#[test]
fn test_known_site_maps_to_select_center_and_refresh() {
    let state = make_state();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::SiteSelected {
            name: "Nord".to_string(),
        },
    );

    assert_eq!(commands.len(), 3);
    assert!(matches!(&commands[0], AppCommand::SelectSite { name } if name == "Nord"));
    assert!(matches!(commands[1], AppCommand::CenterMapView));
    assert!(matches!(commands[2], AppCommand::RefreshVehicleFilter));
}

#[test]
fn test_unknown_site_maps_to_clear_only() {
    let state = make_state();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::SiteSelected {
            name: "Gibt es nicht".to_string(),
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::ClearSiteSelection));
}

#[test]
fn test_date_step_and_hour_change_trigger_refresh() {
    let state = make_state();

    let commands = map_intent_to_commands(&state, AppIntent::DateStepRequested { days: 1 });
    assert!(matches!(commands[0], AppCommand::ShiftDate { days: 1 }));
    assert!(matches!(commands[1], AppCommand::RefreshVehicleFilter));

    let commands = map_intent_to_commands(&state, AppIntent::HourChanged { hour: 9 });
    assert!(matches!(commands[0], AppCommand::SetHourOffset { hour: 9 }));
    assert!(matches!(commands[1], AppCommand::RefreshVehicleFilter));
}

#[test]
fn test_tab_change_is_pure_ui_state() {
    let state = make_state();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::TabChanged {
            tab: ViewTab::Document,
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(
        commands[0],
        AppCommand::SwitchTab {
            tab: ViewTab::Document
        }
    ));
}
