//! Site-Vehicle-GIS Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod json;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, FilterState, MapViewPhase, MarkerSet,
    SelectionState, TimelineState, ViewState, ViewTab,
};
pub use core::{
    ClassifiedVehicle, ConstructionSite, GeoPoint, SiteDataset, VehicleClassification,
    VehicleKind, VehicleRecord, VehicleSnapshot,
};
pub use json::parse_site_dataset;
pub use render::{
    CircleHandle, EguiMapSurface, MapSurface, MarkerHandle, MarkerIcon, RecordingSurface,
};
pub use shared::MonitorOptions;
