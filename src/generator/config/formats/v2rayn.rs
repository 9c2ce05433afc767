use log::warn;
use serde::Serialize;

use crate::error::Result;
use crate::models::{NodeConfig, NodeFilter, NodeSelector, ProxyNode, VmessConfig};
use crate::utils::base64_encode;

/// The v2rayN share object. Field order is part of the format.
#[derive(Debug, Serialize)]
struct V2rayNShare<'a> {
    v: &'static str,
    ps: &'a str,
    add: &'a str,
    port: String,
    id: &'a str,
    aid: String,
    net: &'static str,
    #[serde(rename = "type")]
    fake_type: &'static str,
    host: &'a str,
    path: &'a str,
    tls: &'static str,
}

/// Builds a v2rayN `vmess://` URI for one node.
pub fn vmess_uri(node_name: &str, vmess: &VmessConfig) -> Result<String> {
    let share = V2rayNShare {
        v: "2",
        ps: node_name,
        add: &vmess.hostname,
        port: vmess.port.to_string(),
        id: &vmess.uuid,
        aid: vmess.alter_id.to_string(),
        net: vmess.network.as_str(),
        fake_type: "none",
        host: vmess.host.as_deref().unwrap_or(""),
        path: vmess.path_or_root(),
        tls: if vmess.tls { "tls" } else { "" },
    };
    let json = serde_json::to_string(&share)?;
    Ok(format!("vmess://{}", base64_encode(&json)))
}

/// Convert VMess nodes to newline separated v2rayN URIs
pub fn get_v2rayn_nodes(nodes: &[ProxyNode], filter: Option<&NodeFilter>) -> Result<String> {
    let selector = NodeSelector::new(filter)?;

    let mut uris = Vec::new();
    for node in selector.select(nodes) {
        match &node.config {
            NodeConfig::Vmess(vmess) => uris.push(vmess_uri(&node.node_name, vmess)?),
            _ => warn!(
                "Skipping {} node {} in V2rayN subscription",
                node.node_type().as_str(),
                node.node_name
            ),
        }
    }

    Ok(uris.join("\n"))
}
