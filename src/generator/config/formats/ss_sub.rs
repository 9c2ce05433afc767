use log::warn;

use crate::error::Result;
use crate::models::{NodeConfig, NodeFilter, NodeSelector, ProxyNode, ShadowsocksConfig};
use crate::utils::{encode_uri_component, url_safe_base64_encode};

/// Builds a SIP002 `ss://` URI for one node.
///
/// Format: `ss://BASE64(method:password)@server:port/?plugin=...&group=...#remark`
pub fn shadowsocks_uri(node_name: &str, ss: &ShadowsocksConfig, group_name: Option<&str>) -> String {
    let mut query: Vec<String> = Vec::new();
    if let Some(obfs) = &ss.obfs {
        let mut plugin = format!("obfs-local;obfs={}", obfs);
        if let Some(obfs_host) = &ss.obfs_host {
            plugin.push_str(&format!(";obfs-host={}", obfs_host));
        }
        query.push(format!("plugin={}", encode_uri_component(&plugin)));
    }
    if let Some(group) = group_name {
        query.push(format!("group={}", encode_uri_component(group)));
    }

    format!(
        "ss://{}@{}:{}/?{}#{}",
        url_safe_base64_encode(&format!("{}:{}", ss.method, ss.password)),
        ss.hostname,
        ss.port,
        query.join("&"),
        encode_uri_component(node_name)
    )
}

/// Convert Shadowsocks nodes to newline separated `ss://` URIs
///
/// # Arguments
/// * `nodes` - List of proxy nodes to convert
/// * `group_name` - Subscription group written into every URI
/// * `filter` - Optional filter, all enabled nodes when absent
pub fn get_shadowsocks_nodes(
    nodes: &[ProxyNode],
    group_name: Option<&str>,
    filter: Option<&NodeFilter>,
) -> Result<String> {
    let selector = NodeSelector::new(filter)?;

    let uris: Vec<String> = selector
        .select(nodes)
        .filter_map(|node| match &node.config {
            NodeConfig::Shadowsocks(ss) => Some(shadowsocks_uri(&node.node_name, ss, group_name)),
            _ => {
                warn!(
                    "Skipping {} node {} in Shadowsocks subscription",
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
    use crate::utils::url::url_decode;

    fn ss_node(name: &str, obfs: bool) -> ProxyNode {
        ProxyNode::new(
            name,
            NodeConfig::Shadowsocks(ShadowsocksConfig {
                hostname: "example.com".to_string(),
                port: 8443,
                method: "chacha20-ietf-poly1305".to_string(),
                password: "password".to_string(),
                obfs: obfs.then(|| "tls".to_string()),
                obfs_host: obfs.then(|| "gateway.icloud.com".to_string()),
                udp_relay: Some(true),
                tfo: None,
            }),
        )
    }

    #[test]
    fn test_shadowsocks_uri_with_obfs() {
        let result =
            get_shadowsocks_nodes(&[ss_node("🇭🇰HK(Example)", true)], Some("GroupName"), None)
                .unwrap();
        assert_eq!(
            result,
            "ss://Y2hhY2hhMjAtaWV0Zi1wb2x5MTMwNTpwYXNzd29yZA@example.com:8443/?plugin=obfs-local%3Bobfs%3Dtls%3Bobfs-host%3Dgateway.icloud.com&group=GroupName#%F0%9F%87%AD%F0%9F%87%B0HK(Example)"
        );
    }

    #[test]
    fn test_shadowsocks_uri_without_plugin_or_group() {
        let result = get_shadowsocks_nodes(&[ss_node("plain", false)], None, None).unwrap();
        assert_eq!(
            result,
            "ss://Y2hhY2hhMjAtaWV0Zi1wb2x5MTMwNTpwYXNzd29yZA@example.com:8443/?#plain"
        );
    }

    #[test]
    fn test_group_name_is_percent_encoded() {
        let result =
            get_shadowsocks_nodes(&[ss_node("n", false)], Some("My Group&x=1"), None).unwrap();
        assert_eq!(
            result,
            "ss://Y2hhY2hhMjAtaWV0Zi1wb2x5MTMwNTpwYXNzd29yZA@example.com:8443/?group=My%20Group%26x%3D1#n"
        );

        let result = get_shadowsocks_nodes(&[ss_node("n", false)], Some("我的 订阅"), None).unwrap();
        assert!(result.contains("?group=%E6%88%91%E7%9A%84%20%E8%AE%A2%E9%98%85#n"));
        let group = result.split("group=").nth(1).and_then(|q| q.split('#').next()).unwrap();
        assert_eq!(url_decode(group), "我的 订阅");
    }

    #[test]
    fn test_userinfo_and_fragment_decode() {
        let uri = get_shadowsocks_nodes(&[ss_node("香港 01", true)], None, None).unwrap();
        let userinfo = uri
            .strip_prefix("ss://")
            .and_then(|rest| rest.split('@').next())
            .unwrap();
        assert_eq!(
            url_safe_base64_decode(userinfo),
            "chacha20-ietf-poly1305:password"
        );
        let fragment = uri.rsplit('#').next().unwrap();
        assert_eq!(url_decode(fragment), "香港 01");
    }

    #[test]
    fn test_multiple_nodes_are_newline_joined() {
        let nodes = vec![
            ss_node("a", false),
            ss_node("b", false).disabled(),
            ss_node("c", false),
        ];
        let result = get_shadowsocks_nodes(&nodes, None, None).unwrap();
        let lines: Vec<&str> = result.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("#a"));
        assert!(lines[1].ends_with("#c"));
    }
}
