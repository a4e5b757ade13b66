use std::sync::Arc;
use std::time::{Duration, Instant};

use time::macros::date;

use site_vehicle_gis::app::use_cases;
use site_vehicle_gis::{
    parse_site_dataset, AppController, AppIntent, AppState, MarkerIcon, RecordingSurface,
};

const FIXTURE: &str = include_str!("fixtures/sites.json");

#[test]
fn test_fixture_dataset_loads_with_expected_sites() {
    let dataset = parse_site_dataset(FIXTURE).expect("Fixture sollte parsen");

    // Der Eintrag ohne Bereichsbezeichnung ist nicht wählbar
    assert_eq!(dataset.site_count(), 2);

    let names: Vec<&str> = dataset.site_names().collect();
    assert_eq!(names, vec!["Nordbaustelle A7", "Tunnelportal Süd"]);

    let site = dataset
        .find_site("Nordbaustelle A7")
        .expect("Standort erwartet");
    assert_eq!(site.history.len(), 3);
}

#[test]
fn test_full_flow_over_loaded_fixture() {
    let dataset = Arc::new(parse_site_dataset(FIXTURE).expect("Fixture sollte parsen"));
    let mut controller = AppController::new();
    let mut state = AppState::new(dataset, date!(2024 - 01 - 01));
    let mut surface = RecordingSurface::new();

    controller
        .handle_intent(
            &mut state,
            &mut surface,
            AppIntent::SiteSelected {
                name: "Nordbaustelle A7".to_string(),
            },
        )
        .unwrap();
    controller
        .handle_intent(&mut state, &mut surface, AppIntent::HourChanged { hour: 9 })
        .unwrap();

    assert_eq!(surface.markers_with_icon(MarkerIcon::Excavator), 1);
    assert_eq!(surface.markers_with_icon(MarkerIcon::Truck), 1);

    // Um 14 Uhr ist ein Kran dabei: der fällt aus der Klassifikation heraus
    controller
        .handle_intent(&mut state, &mut surface, AppIntent::HourChanged { hour: 14 })
        .unwrap();

    assert_eq!(state.filter.classification.total(), 1);
    assert_eq!(surface.marker_count(), 1);

    // Verzögerte Initialisierung nachholen: Zentrum + Kreis kommen dazu
    use_cases::map_view::poll_deferred_init(
        &mut state,
        &mut surface,
        Instant::now() + Duration::from_secs(10),
    );
    assert_eq!(surface.markers_with_icon(MarkerIcon::SiteCenter), 1);
    assert_eq!(surface.circle_count(), 1);
}
