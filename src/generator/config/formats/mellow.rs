use log::warn;

use crate::error::Result;
use crate::generator::config::formats::ss_sub::shadowsocks_uri;
use crate::models::{NodeConfig, NodeFilter, NodeSelector, ProxyNode, VmessConfig, VmessNetwork};
use crate::utils::encode_uri_component;

/// Builds the `vmess1://` endpoint URI understood by Mellow.
pub fn vmess1_uri(vmess: &VmessConfig) -> String {
    let mut query = vec![format!("network={}", vmess.network.as_str())];
    if vmess.tls {
        query.push("tls=true".to_string());
        query.push(format!("tls.servername={}", vmess.hostname));
        if vmess.skip_cert_verify == Some(true) {
            query.push("tls.allowinsecure=true".to_string());
        }
    }
    if vmess.network == VmessNetwork::Ws {
        if let Some(host) = vmess.host.as_deref().filter(|h| !h.is_empty()) {
            query.push(format!("ws.host={}", encode_uri_component(host)));
        }
        if let Some(headers) = &vmess.ws_headers {
            for (key, value) in headers {
                query.push(format!(
                    "ws.headers.{}={}",
                    encode_uri_component(key),
                    encode_uri_component(value)
                ));
            }
        }
    }

    format!(
        "vmess1://{}@{}:{}{}?{}",
        vmess.uuid,
        vmess.hostname,
        vmess.port,
        vmess.path_or_root(),
        query.join("&")
    )
}

/// Convert proxies to Mellow `[Endpoint]` lines
///
/// Only VMess and Shadowsocks nodes can be expressed, others are skipped.
pub fn get_mellow_nodes(nodes: &[ProxyNode], filter: Option<&NodeFilter>) -> Result<String> {
    let selector = NodeSelector::new(filter)?;

    let lines: Vec<String> = selector
        .select(nodes)
        .filter_map(|node| match &node.config {
            NodeConfig::Vmess(vmess) => Some(format!(
                "{}, vmess1, {}",
                node.node_name,
                vmess1_uri(vmess)
            )),
            NodeConfig::Shadowsocks(ss) => Some(format!(
                "{}, ss, {}",
                node.node_name,
                shadowsocks_uri(&node.node_name, ss, None)
            )),
            _ => {
                warn!(
                    "Mellow does not support {} node {}, skipped",
                    node.node_type().as_str(),
                    node.node_name
                );
                None
            }
        })
        .collect();

    Ok(lines.join("\n"))
}
