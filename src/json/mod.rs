//! JSON-Laden des Baustellen-Datensatzes.

pub mod parser;

pub use parser::parse_site_dataset;
