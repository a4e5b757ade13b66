//! Parser für den Baustellen-Datensatz im JSON-Format.

use anyhow::{Context, Result};
use serde::Deserialize;
use time::macros::format_description;
use time::PrimitiveDateTime;

use crate::core::{
    ConstructionSite, GeoPoint, SiteDataset, VehicleKind, VehicleRecord, VehicleSnapshot,
};

/// Roh-Struktur eines Standorts, Feldnamen wie im Quelldatensatz
#[derive(Debug, Deserialize)]
struct RawSite {
    #[serde(rename = "constructionArea")]
    construction_area: String,
    latitude: f64,
    longitude: f64,
    #[serde(rename = "vehicleData", default)]
    vehicle_data: Vec<RawSnapshot>,
}

/// Roh-Struktur eines Zeitstempel-Snapshots
#[derive(Debug, Deserialize)]
struct RawSnapshot {
    date: String,
    #[serde(default)]
    vehicle: Vec<RawVehicle>,
}

/// Roh-Struktur einer Fahrzeugposition
#[derive(Debug, Deserialize)]
struct RawVehicle {
    #[serde(rename = "vehicleType")]
    vehicle_type: VehicleKind,
    latitude: f64,
    longitude: f64,
}

/// Parsed den Baustellen-Datensatz aus einem JSON-String.
///
/// Standorte mit leerer Bereichsbezeichnung landen nicht in der wählbaren
/// Menge; unbekannte Fahrzeugtypen bleiben als `Other` erhalten und fallen
/// erst bei der Klassifikation heraus. Die Snapshot-Reihenfolge aus dem
/// Datensatz wird unverändert übernommen.
pub fn parse_site_dataset(json_content: &str) -> Result<SiteDataset> {
    let raw_sites: Vec<RawSite> =
        serde_json::from_str(json_content).context("Datensatz ist kein gültiges JSON")?;

    let mut sites = Vec::with_capacity(raw_sites.len());
    for raw_site in raw_sites {
        let site = build_site(raw_site)?;
        sites.push(site);
    }

    Ok(SiteDataset::from_sites(sites))
}

/// Konvertiert einen Roh-Standort in den Domänentyp
fn build_site(raw: RawSite) -> Result<ConstructionSite> {
    let mut history = Vec::with_capacity(raw.vehicle_data.len());

    for raw_snapshot in raw.vehicle_data {
        let timestamp = parse_timestamp(&raw_snapshot.date).with_context(|| {
            format!(
                "Ungültiger Zeitstempel '{}' für Standort '{}'",
                raw_snapshot.date, raw.construction_area
            )
        })?;

        let vehicles = raw_snapshot
            .vehicle
            .iter()
            .map(|v| VehicleRecord::new(v.vehicle_type, GeoPoint::new(v.latitude, v.longitude)))
            .collect();

        history.push(VehicleSnapshot::new(timestamp, vehicles));
    }

    Ok(ConstructionSite::new(
        raw.construction_area,
        GeoPoint::new(raw.latitude, raw.longitude),
        history,
    ))
}

/// Parsed einen Zeitstempel in beiden unterstützten Layouts
/// (`2024-01-01T09:00:00` oder `2024-01-01 09:00:00`)
fn parse_timestamp(text: &str) -> Result<PrimitiveDateTime> {
    let with_t = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
    let with_space = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

    if let Ok(ts) = PrimitiveDateTime::parse(text, with_t) {
        return Ok(ts);
    }
    PrimitiveDateTime::parse(text, with_space)
        .context("Zeitstempel entspricht keinem unterstützten Layout")
}

#[cfg(test)]
mod tests;
