pub mod constants;
pub mod error;
pub mod generator;
pub mod models;
pub mod parser;
pub mod settings;
pub mod utils;

// Re-export the main node types for easier access
pub use error::{ConvertError, Result};
pub use models::{NodeConfig, NodeFilter, NodeType, ProxyNode};

// Re-export configuration types
pub use settings::ConvertSettings;
