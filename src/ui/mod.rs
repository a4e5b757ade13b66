//! UI-Panels: sammeln Eingaben als `AppIntent`s, mutieren selbst nichts.

pub mod document;
pub mod panel;
pub mod status;

pub use document::render_document_view;
pub use panel::render_side_panel;
pub use status::render_status_bar;
