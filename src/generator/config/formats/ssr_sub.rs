use log::warn;

use crate::error::Result;
use crate::models::{NodeConfig, NodeFilter, NodeSelector, ProxyNode, ShadowsocksrConfig};
use crate::utils::url_safe_base64_encode;

/// Builds an `ssr://` URI for one node.
///
/// Every parameter value is URL-safe Base64 encoded and the parameters are
/// written in key order, then the whole body is encoded once more.
pub fn shadowsocksr_uri(
    node_name: &str,
    ssr: &ShadowsocksrConfig,
    group_name: Option<&str>,
) -> String {
    let mut params: Vec<(&str, String)> = vec![
        ("obfsparam", url_safe_base64_encode(&ssr.obfsparam)),
        ("protoparam", url_safe_base64_encode(&ssr.protoparam)),
        ("remarks", url_safe_base64_encode(node_name)),
        ("udpport", "0".to_string()),
        ("uot", "0".to_string()),
    ];
    if let Some(group) = group_name {
        params.push(("group", url_safe_base64_encode(group)));
    }
    params.sort_by(|a, b| a.0.cmp(b.0));

    let query = params
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("&");

    let body = format!(
        "{}:{}:{}:{}:{}:{}/?{}",
        ssr.hostname,
        ssr.port,
        ssr.protocol,
        ssr.method,
        ssr.obfs,
        url_safe_base64_encode(&ssr.password),
        query
    );

    format!("ssr://{}", url_safe_base64_encode(&body))
}

/// Convert ShadowsocksR nodes to newline separated `ssr://` URIs
pub fn get_shadowsocksr_nodes(
    nodes: &[ProxyNode],
    group_name: Option<&str>,
    filter: Option<&NodeFilter>,
) -> Result<String> {
    let selector = NodeSelector::new(filter)?;

    let uris: Vec<String> = selector
        .select(nodes)
        .filter_map(|node| match &node.config {
            NodeConfig::ShadowsocksR(ssr) => {
                Some(shadowsocksr_uri(&node.node_name, ssr, group_name))
            }
            _ => {
                warn!(
                    "Skipping {} node {} in ShadowsocksR subscription",
                    node.node_type().as_str(),
                    node.node_name
                );
                None
            }
        })
        .collect();

    Ok(uris.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::base64::url_safe_base64_decode;

    fn ssr_node() -> ProxyNode {
        ProxyNode::new(
            "🇭🇰HK",
            NodeConfig::ShadowsocksR(ShadowsocksrConfig {
                hostname: "hk.example.com".to_string(),
                port: 10000,
                method: "chacha20-ietf".to_string(),
                password: "password".to_string(),
                protocol: "auth_aes128_md5".to_string(),
                protoparam: String::new(),
                obfs: "tls1.2_ticket_auth".to_string(),
                obfsparam: "music.163.com".to_string(),
                udp_relay: None,
                tfo: None,
            }),
        )
    }

    #[test]
    fn test_shadowsocksr_uri_with_group() {
        let result = get_shadowsocksr_nodes(&[ssr_node()], Some("Surgio"), None).unwrap();
        assert_eq!(
            result,
            "ssr://aGsuZXhhbXBsZS5jb206MTAwMDA6YXV0aF9hZXMxMjhfbWQ1OmNoYWNoYTIwLWlldGY6dGxzMS4yX3RpY2tldF9hdXRoOmNHRnpjM2R2Y21RLz9ncm91cD1VM1Z5WjJsdiZvYmZzcGFyYW09YlhWemFXTXVNVFl6TG1OdmJRJnByb3RvcGFyYW09JnJlbWFya3M9OEotSHJmQ2ZoN0JJU3cmdWRwcG9ydD0wJnVvdD0w"
        );
    }

    #[test]
    fn test_shadowsocksr_uri_without_group() {
        let result = get_shadowsocksr_nodes(&[ssr_node()], None, None).unwrap();
        let body = url_safe_base64_decode(result.strip_prefix("ssr://").unwrap());
        assert_eq!(
            body,
            "hk.example.com:10000:auth_aes128_md5:chacha20-ietf:tls1.2_ticket_auth:cGFzc3dvcmQ/?obfsparam=bXVzaWMuMTYzLmNvbQ&protoparam=&remarks=8J-HrfCfh7BISw&udpport=0&uot=0"
        );
    }
}
