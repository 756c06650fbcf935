//! Configuration module for uNivUSaver
//!
//! Presentation settings loaded from an optional JSON file.

pub mod settings;

pub use settings::Settings;
