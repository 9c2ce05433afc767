use log::warn;

use crate::constants::{DEFAULT_GROUP_NAME, USER_AGENT, VMESS_DEFAULT_CIPHER};
use crate::error::Result;
use crate::generator::config::formats::ss_sub::shadowsocks_uri;
use crate::generator::config::formats::ssr_sub::shadowsocksr_uri;
use crate::models::{HttpConfig, NodeConfig, NodeFilter, NodeSelector, ProxyNode, VmessConfig};
use crate::utils::base64_encode;

fn quote(value: &str) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

fn vmess_line(node_name: &str, vmess: &VmessConfig, group_name: &str) -> Result<String> {
    let method = if vmess.method == "auto" {
        VMESS_DEFAULT_CIPHER
    } else {
        vmess.method.as_str()
    };
    let header = format!(
        "host:{}[Rr][Nn]user-agent:{}",
        vmess.host_or_hostname(),
        USER_AGENT
    );

    let fields = [
        "vmess".to_string(),
        vmess.hostname.clone(),
        vmess.port.to_string(),
        method.to_string(),
        quote(&vmess.uuid)?,
        vmess.alter_id.to_string(),
        format!("group={}", group_name),
        format!("over-tls={}", vmess.tls),
        "certificate=1".to_string(),
        format!("obfs={}", vmess.network.as_str()),
        format!("obfs-path={}", quote(vmess.path_or_root())?),
        format!("obfs-header={}", quote(&header)?),
    ];

    let line = format!("{} = {}", node_name, fields.join(","));
    Ok(format!("vmess://{}", base64_encode(&line)))
}

fn http_line(node_name: &str, http: &HttpConfig, over_tls: bool) -> String {
    let line = format!(
        "{} = http, upstream-proxy-address={}, upstream-proxy-port={}, upstream-proxy-auth=true, upstream-proxy-username={}, upstream-proxy-password={}, over-tls={}, certificate=1",
        node_name, http.hostname, http.port, http.username, http.password, over_tls
    );
    format!("http://{}", base64_encode(&line))
}

/// Convert proxies to a Quantumult subscription
///
/// Every node becomes one line. VMess and HTTP(S) nodes are wrapped as
/// `TYPE://BASE64(line)`, Shadowsocks and ShadowsocksR nodes use their
/// regular share URIs.
///
/// # Arguments
/// * `nodes` - List of proxy nodes to convert
/// * `group_name` - Subscription group, [`DEFAULT_GROUP_NAME`] when absent
/// * `filter` - Optional filter, all enabled nodes when absent
pub fn get_quantumult_nodes(
    nodes: &[ProxyNode],
    group_name: Option<&str>,
    filter: Option<&NodeFilter>,
) -> Result<String> {
    let selector = NodeSelector::new(filter)?;
    let group_name = group_name.unwrap_or(DEFAULT_GROUP_NAME);

    let mut lines = Vec::new();
    for node in selector.select(nodes) {
        let line = match &node.config {
            NodeConfig::Vmess(vmess) => vmess_line(&node.node_name, vmess, group_name)?,
            NodeConfig::ShadowsocksR(ssr) => {
                shadowsocksr_uri(&node.node_name, ssr, Some(group_name))
            }
            NodeConfig::Http(http) => http_line(&node.node_name, http, false),
            NodeConfig::Https(http) => http_line(&node.node_name, http, true),
            NodeConfig::Shadowsocks(ss) => shadowsocks_uri(&node.node_name, ss, Some(group_name)),
            NodeConfig::Trojan(_) | NodeConfig::Snell(_) => {
                warn!(
                    "Quantumult does not support {} node {}, skipped",
                    node.node_type().as_str(),
                    node.node_name
                );
                continue;
            }
        };
        lines.push(line);
    }

    Ok(lines.join("\n"))
}
