//! Use-Cases: die eigentliche Anwendungslogik hinter den Handlern.

pub mod map_view;
pub mod markers;
pub mod site_selection;
pub mod temporal_filter;
