use time::macros::{date, datetime};

use super::*;
use crate::core::{GeoPoint, VehicleRecord};

fn record(kind: VehicleKind) -> VehicleRecord {
    VehicleRecord::new(kind, GeoPoint::new(50.0, 8.0))
}

fn snapshot(
    timestamp: time::PrimitiveDateTime,
    kinds: &[VehicleKind],
) -> VehicleSnapshot {
    VehicleSnapshot::new(timestamp, kinds.iter().map(|&k| record(k)).collect())
}

fn sample_history() -> Vec<VehicleSnapshot> {
    vec![
        snapshot(datetime!(2024-01-01 09:00:00), &[VehicleKind::Excavator]),
        snapshot(datetime!(2024-01-01 09:30:00), &[VehicleKind::Truck]),
        snapshot(datetime!(2024-01-01 14:00:00), &[VehicleKind::Truck]),
        snapshot(datetime!(2024-01-02 09:00:00), &[VehicleKind::Excavator]),
    ]
}

#[test]
fn test_filter_by_date_matches_calendar_day_only() {
    let history = sample_history();

    let day = filter_by_date(&history, date!(2024 - 01 - 01));
    assert_eq!(day, vec![0, 1, 2]);

    let next_day = filter_by_date(&history, date!(2024 - 01 - 02));
    assert_eq!(next_day, vec![3]);

    let empty = filter_by_date(&history, date!(2024 - 01 - 03));
    assert!(empty.is_empty());
}

#[test]
fn test_filter_by_date_is_idempotent() {
    let history = sample_history();

    let first = filter_by_date(&history, date!(2024 - 01 - 01));
    let second = filter_by_date(&history, date!(2024 - 01 - 01));
    assert_eq!(first, second);
}

#[test]
fn test_select_hour_first_in_stored_order_wins() {
    let history = sample_history();
    let day = filter_by_date(&history, date!(2024 - 01 - 01));

    // Zwei Snapshots mit Stunde 9 am selben Tag: der erste gewinnt
    assert_eq!(select_hour(&history, &day, 9), Some(0));
    assert_eq!(select_hour(&history, &day, 14), Some(2));
}

#[test]
fn test_select_hour_without_match_returns_none() {
    let history = sample_history();
    let day = filter_by_date(&history, date!(2024 - 01 - 01));

    assert_eq!(select_hour(&history, &day, 10), None);
    assert_eq!(select_hour(&history, &[], 9), None);
}

#[test]
fn test_classify_partitions_by_kind_and_drops_unknown() {
    let snap = snapshot(
        datetime!(2024-01-01 09:00:00),
        &[
            VehicleKind::Excavator,
            VehicleKind::Truck,
            VehicleKind::Other,
            VehicleKind::Truck,
        ],
    );

    let classification = classify(&snap);

    assert_eq!(classification.excavators.len(), 1);
    assert_eq!(classification.trucks.len(), 2);
    // Unbekannter Typ fällt heraus: Summe kleiner als Eintragsanzahl
    assert_eq!(classification.total(), 3);
    assert!(classification.total() <= snap.vehicles.len());
}

#[test]
fn test_classify_derives_display_fields_from_snapshot_timestamp() {
    let snap = snapshot(datetime!(2024-03-05 07:15:30), &[VehicleKind::Truck]);

    let classification = classify(&snap);
    let truck = &classification.trucks[0];

    assert_eq!(truck.display_date, "05.03.2024");
    assert_eq!(truck.display_time, "07:15:30");

    // Erneutes Ableiten liefert identische Werte
    let again = classify(&snap);
    assert_eq!(classification, again);
}
