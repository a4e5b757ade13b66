use super::*;
use crate::core::VehicleKind;
use time::macros::datetime;

const SAMPLE: &str = r#"[
  {
    "constructionArea": "Nordbaustelle A7",
    "latitude": 53.55,
    "longitude": 9.99,
    "vehicleData": [
      {
        "date": "2024-01-01T09:00:00",
        "vehicle": [
          { "vehicleType": "Excavator", "latitude": 53.551, "longitude": 9.991 },
          { "vehicleType": "Truck", "latitude": 53.552, "longitude": 9.992 },
          { "vehicleType": "Crane", "latitude": 53.553, "longitude": 9.993 }
        ]
      },
      {
        "date": "2024-01-01 14:00:00",
        "vehicle": []
      }
    ]
  },
  {
    "constructionArea": "",
    "latitude": 0.0,
    "longitude": 0.0,
    "vehicleData": []
  }
]"#;

#[test]
fn test_parse_sample_dataset() {
    let dataset = parse_site_dataset(SAMPLE).expect("Datensatz sollte parsen");

    // Standort ohne Bereichsbezeichnung ist nicht wählbar
    assert_eq!(dataset.site_count(), 1);

    let site = dataset
        .find_site("Nordbaustelle A7")
        .expect("Standort erwartet");
    assert_eq!(site.position.lat, 53.55);
    assert_eq!(site.position.lon, 9.99);
    assert_eq!(site.history.len(), 2);
}

#[test]
fn test_both_timestamp_layouts_are_accepted() {
    let dataset = parse_site_dataset(SAMPLE).expect("Datensatz sollte parsen");
    let site = dataset
        .find_site("Nordbaustelle A7")
        .expect("Standort erwartet");

    assert_eq!(site.history[0].timestamp, datetime!(2024-01-01 09:00:00));
    assert_eq!(site.history[1].timestamp, datetime!(2024-01-01 14:00:00));
}

#[test]
fn test_unknown_vehicle_type_is_kept_as_other() {
    let dataset = parse_site_dataset(SAMPLE).expect("Datensatz sollte parsen");
    let site = dataset
        .find_site("Nordbaustelle A7")
        .expect("Standort erwartet");

    let kinds: Vec<VehicleKind> = site.history[0].vehicles.iter().map(|v| v.kind).collect();
    assert_eq!(
        kinds,
        vec![VehicleKind::Excavator, VehicleKind::Truck, VehicleKind::Other]
    );
}

#[test]
fn test_invalid_timestamp_is_an_error_with_site_context() {
    let json = r#"[
      {
        "constructionArea": "Süd",
        "latitude": 1.0,
        "longitude": 2.0,
        "vehicleData": [ { "date": "01.01.2024", "vehicle": [] } ]
      }
    ]"#;

    let err = parse_site_dataset(json).expect_err("Parse muss fehlschlagen");
    let message = format!("{err:#}");
    assert!(message.contains("Süd"), "Kontext fehlt: {message}");
}

#[test]
fn test_invalid_json_is_an_error() {
    assert!(parse_site_dataset("{ not json").is_err());
}
