//! Core-Domänentypen: Standorte, Fahrzeuge, Snapshots und Klassifikation.

pub mod classification;
pub mod dataset;
pub mod geo;
/// Core-Datenmodelle des Baustellen-Datensatzes
///
/// Dieses Modul definiert die Haupt-Datenstrukturen:
/// - SiteDataset: Container für alle Standorte
/// - ConstructionSite: Standort mit Koordinate und Historie
/// - VehicleSnapshot: Fahrzeugpositionen zu einem Zeitstempel
pub mod site;
pub mod vehicle;

pub use classification::{ClassifiedVehicle, VehicleClassification};
pub use dataset::SiteDataset;
pub use geo::GeoPoint;
pub use site::ConstructionSite;
pub use vehicle::{VehicleKind, VehicleRecord, VehicleSnapshot};
