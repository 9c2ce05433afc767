//! Core data models
//!
//! Nodes, filters and proxy groups are plain values built by the caller and
//! consumed by the exporters in [`crate::generator`].
//!
//! ```rust
//! use subexport::models::{NodeConfig, ProxyNode, TrojanConfig};
//!
//! let node = ProxyNode::new(
//!     "trojan",
//!     NodeConfig::Trojan(TrojanConfig {
//!         hostname: "example.com".to_string(),
//!         port: 443,
//!         password: "password1".to_string(),
//!         sni: None,
//!         skip_cert_verify: None,
//!         udp_relay: None,
//!         tfo: None,
//!         tls13: None,
//!     }),
//! );
//! assert!(node.enable);
//! ```

pub mod filter;
pub mod proxy;
pub mod proxy_group_config;

pub use filter::*;
pub use proxy::*;
pub use proxy_group_config::*;
