//! Mapping of remote node list payloads into [`crate::models::ProxyNode`]s

pub mod ss_json;

pub use ss_json::parse_shadowsocks_json;
