//! Kartenoberfläche: Trait-Schnittstelle und Implementierungen.

pub mod map_view;
pub mod projection;
pub mod surface;

pub use map_view::EguiMapSurface;
pub use surface::{CircleHandle, MapSurface, MarkerHandle, MarkerIcon, RecordingSurface};
