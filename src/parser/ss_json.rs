//! Shadowsocks GUI configuration mapping
//!
//! Maps an already decoded `gui-config.json` payload, as exported by the
//! Shadowsocks Windows client, to Shadowsocks nodes.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{ConvertError, Result};
use crate::models::{NodeConfig, ProxyNode, ShadowsocksConfig};
use crate::utils::deserializer::deserialize_port;

#[derive(Debug, Deserialize)]
struct GuiConfig {
    configs: Vec<GuiServer>,
}

#[derive(Debug, Deserialize)]
struct GuiServer {
    remarks: String,
    server: String,
    #[serde(deserialize_with = "deserialize_port")]
    server_port: u16,
    method: String,
    password: String,
    #[serde(default)]
    plugin: Option<String>,
    #[serde(default)]
    plugin_opts: Option<String>,
}

/// Options of the obfs plugins, `obfs=tls;obfs-host=example.com`
fn parse_obfs_opts(opts: &str) -> (Option<String>, Option<String>) {
    let mut obfs = None;
    let mut obfs_host = None;
    for pair in opts.split(';') {
        let (key, value) = match pair.split_once('=') {
            Some((k, v)) => (k.trim(), v.trim()),
            None => continue,
        };
        if value.is_empty() {
            continue;
        }
        match key {
            "obfs" => obfs = Some(value.to_string()),
            "obfs-host" => obfs_host = Some(value.to_string()),
            _ => {}
        }
    }
    (obfs, obfs_host)
}

fn map_server(server: GuiServer, udp_relay: bool) -> ProxyNode {
    let (obfs, obfs_host) = match (server.plugin.as_deref(), server.plugin_opts.as_deref()) {
        (Some("obfs-local") | Some("simple-obfs"), Some(opts)) => parse_obfs_opts(opts),
        (Some(plugin), _) if !plugin.is_empty() => {
            log::warn!(
                "Unsupported Shadowsocks plugin {} on {}, plugin dropped",
                plugin,
                server.remarks
            );
            (None, None)
        }
        _ => (None, None),
    };

    ProxyNode::new(
        server.remarks,
        NodeConfig::Shadowsocks(ShadowsocksConfig {
            hostname: server.server,
            port: server.server_port,
            method: server.method,
            password: server.password,
            obfs,
            obfs_host,
            udp_relay: Some(udp_relay),
            tfo: None,
        }),
    )
}

/// Convert a Shadowsocks GUI configuration into nodes
///
/// # Arguments
/// * `value` - The decoded JSON document, which must carry a `configs` array
/// * `udp_relay` - Forced onto every produced node
///
/// # Returns
/// One node per server entry in document order, or
/// [`ConvertError::RemoteConfig`] when the document has the wrong shape
pub fn parse_shadowsocks_json(value: &Value, udp_relay: bool) -> Result<Vec<ProxyNode>> {
    let config = GuiConfig::deserialize(value)
        .map_err(|e| ConvertError::RemoteConfig(format!("invalid gui-config.json: {}", e)))?;
    Ok(config
        .configs
        .into_iter()
        .map(|server| map_server(server, udp_relay))
        .collect())
}
