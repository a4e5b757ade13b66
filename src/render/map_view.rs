//! Egui-Painter-Implementierung der Kartenoberfläche.
//!
//! Zeichnet Zentrums-Marker, Radius-Kreis und Fahrzeug-Marker als einfache
//! Formen; Kartenkacheln und Icon-Grafiken sind bewusst außen vor.

use std::collections::BTreeMap;

use super::projection;
use super::{CircleHandle, MapSurface, MarkerHandle, MarkerIcon};
use crate::core::GeoPoint;
use crate::shared::MonitorOptions;

/// Parameter der aktiven Kartenansicht
#[derive(Debug, Clone, Copy)]
struct ViewParams {
    center: GeoPoint,
    zoom: f32,
}

/// Kartenoberfläche auf Basis des egui-Painters.
///
/// Handles sind fortlaufende IDs; die BTreeMap hält damit die
/// Einfügereihenfolge beim Zeichnen stabil.
#[derive(Debug, Default)]
pub struct EguiMapSurface {
    next_handle: u64,
    view: Option<ViewParams>,
    markers: BTreeMap<u64, (GeoPoint, MarkerIcon)>,
    circles: BTreeMap<u64, (GeoPoint, f64)>,
}

impl EguiMapSurface {
    /// Erstellt eine leere Oberfläche ohne Ansicht.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gibt `true` zurück, wenn die Ansicht bereits angelegt wurde.
    pub fn has_view(&self) -> bool {
        self.view.is_some()
    }

    fn next_handle(&mut self) -> u64 {
        self.next_handle += 1;
        self.next_handle
    }

    /// Zeichnet die Kartenansicht in den verfügbaren Bereich.
    pub fn show(&self, ui: &mut egui::Ui, options: &MonitorOptions) {
        let rect = ui.available_rect_before_wrap();
        let painter = ui.painter_at(rect);

        painter.rect_filled(rect, 0.0, egui::Color32::from_rgb(24, 27, 32));

        let Some(view) = self.view else {
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                "Kein Standort gewählt",
                egui::FontId::proportional(18.0),
                egui::Color32::GRAY,
            );
            return;
        };

        let to_screen = |position: GeoPoint| -> egui::Pos2 {
            let offset = projection::project(view.center, position, view.zoom);
            rect.center() + egui::vec2(offset.x as f32, offset.y as f32)
        };

        for (center, radius_m) in self.circles.values() {
            let radius_px =
                projection::meters_to_pixels(*radius_m, view.center.lat, view.zoom) as f32;
            painter.circle(
                to_screen(*center),
                radius_px,
                color32(options.circle_fill_color),
                egui::Stroke::new(1.5, color32(options.circle_stroke_color)),
            );
        }

        for (position, icon) in self.markers.values() {
            let pos = to_screen(*position);
            match icon {
                MarkerIcon::SiteCenter => {
                    painter.circle(
                        pos,
                        7.0,
                        color32(options.center_marker_color),
                        egui::Stroke::new(2.0, egui::Color32::WHITE),
                    );
                }
                MarkerIcon::Excavator => {
                    painter.circle(
                        pos,
                        6.0,
                        color32(options.excavator_color),
                        egui::Stroke::new(1.0, egui::Color32::BLACK),
                    );
                }
                MarkerIcon::Truck => {
                    let half = egui::vec2(6.0, 4.5);
                    painter.rect_filled(
                        egui::Rect::from_min_max(pos - half, pos + half),
                        2.0,
                        color32(options.truck_color),
                    );
                }
            }
        }
    }
}

impl MapSurface for EguiMapSurface {
    fn create_view(&mut self, center: GeoPoint, zoom: f32) {
        self.view = Some(ViewParams { center, zoom });
    }

    fn pan_to(&mut self, center: GeoPoint) {
        if let Some(view) = self.view.as_mut() {
            view.center = center;
        }
    }

    fn add_marker(&mut self, position: GeoPoint, icon: MarkerIcon) -> MarkerHandle {
        let handle = self.next_handle();
        self.markers.insert(handle, (position, icon));
        MarkerHandle(handle)
    }

    fn remove_marker(&mut self, handle: MarkerHandle) {
        self.markers.remove(&handle.0);
    }

    fn set_marker_position(&mut self, handle: MarkerHandle, position: GeoPoint) {
        if let Some((stored, _)) = self.markers.get_mut(&handle.0) {
            *stored = position;
        }
    }

    fn draw_circle(&mut self, center: GeoPoint, radius_m: f64) -> CircleHandle {
        let handle = self.next_handle();
        self.circles.insert(handle, (center, radius_m));
        CircleHandle(handle)
    }

    fn remove_circle(&mut self, handle: CircleHandle) {
        self.circles.remove(&handle.0);
    }

    fn set_circle_radius(&mut self, handle: CircleHandle, radius_m: f64) {
        if let Some((_, stored)) = self.circles.get_mut(&handle.0) {
            *stored = radius_m;
        }
    }
}

/// Konvertiert eine RGBA-Farbe (0.0–1.0) in egui-Color32
fn color32(rgba: [f32; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (rgba[0] * 255.0) as u8,
        (rgba[1] * 255.0) as u8,
        (rgba[2] * 255.0) as u8,
        (rgba[3] * 255.0) as u8,
    )
}
