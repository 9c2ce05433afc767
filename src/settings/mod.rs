//! Settings module
//!
//! Exporter settings loaded from TOML or YAML content

pub mod convert;

pub use convert::ConvertSettings;
