use log::warn;

use crate::constants::VMESS_DEFAULT_CIPHER;
use crate::error::Result;
use crate::models::{
    HttpConfig, NodeConfig, NodeFilter, NodeSelector, ProxyNode, ShadowsocksConfig,
    ShadowsocksrConfig, TrojanConfig, VmessConfig, VmessNetwork,
};

fn flag(config: &mut Vec<String>, key: &str, value: Option<bool>) {
    if value == Some(true) {
        config.push(format!("{}=true", key));
    }
}

fn tls_verification(skip_cert_verify: Option<bool>) -> String {
    format!("tls-verification={}", skip_cert_verify != Some(true))
}

fn vmess_line(node_name: &str, vmess: &VmessConfig) -> String {
    let mut config = vec![
        format!("vmess={}:{}", vmess.hostname, vmess.port),
        format!("method={}", VMESS_DEFAULT_CIPHER),
        format!("password={}", vmess.uuid),
    ];
    flag(&mut config, "udp-relay", vmess.udp_relay);

    let aead = vmess
        .quantumult_x_config
        .as_ref()
        .and_then(|c| c.vmess_aead)
        .unwrap_or(false);
    config.push(format!("aead={}", aead));

    match vmess.network {
        VmessNetwork::Ws => {
            config.push(format!("obfs={}", if vmess.tls { "wss" } else { "ws" }));
            config.push(format!("obfs-uri={}", vmess.path_or_root()));
            config.push(format!("obfs-host={}", vmess.host_or_hostname()));
        }
        VmessNetwork::Tcp if vmess.tls => config.push("obfs=over-tls".to_string()),
        VmessNetwork::Tcp => {}
    }
    if vmess.tls {
        config.push(tls_verification(vmess.skip_cert_verify));
        flag(&mut config, "tls13", vmess.tls13);
    }

    config.push(format!("tag={}", node_name));
    config.join(", ")
}

fn shadowsocks_line(node_name: &str, ss: &ShadowsocksConfig) -> String {
    let mut config = vec![
        format!("shadowsocks={}:{}", ss.hostname, ss.port),
        format!("method={}", ss.method),
        format!("password={}", ss.password),
    ];
    if let Some(obfs) = &ss.obfs {
        config.push(format!("obfs={}", obfs));
        if let Some(host) = &ss.obfs_host {
            config.push(format!("obfs-host={}", host));
        }
    }
    flag(&mut config, "udp-relay", ss.udp_relay);
    flag(&mut config, "fast-open", ss.tfo);
    config.push(format!("tag={}", node_name));
    config.join(", ")
}

fn shadowsocksr_line(node_name: &str, ssr: &ShadowsocksrConfig) -> String {
    let mut config = vec![
        format!("shadowsocks={}:{}", ssr.hostname, ssr.port),
        format!("method={}", ssr.method),
        format!("password={}", ssr.password),
        format!("ssr-protocol={}", ssr.protocol),
        format!("ssr-protocol-param={}", ssr.protoparam),
        format!("obfs={}", ssr.obfs),
        format!("obfs-host={}", ssr.obfsparam),
    ];
    flag(&mut config, "udp-relay", ssr.udp_relay);
    flag(&mut config, "fast-open", ssr.tfo);
    config.push(format!("tag={}", node_name));
    config.join(", ")
}

fn http_line(node_name: &str, http: &HttpConfig, over_tls: bool) -> String {
    let mut config = vec![
        format!("http={}:{}", http.hostname, http.port),
        format!("username={}", http.username),
        format!("password={}", http.password),
        format!("over-tls={}", over_tls),
        tls_verification(http.skip_cert_verify),
    ];
    flag(&mut config, "tls13", http.tls13);
    config.push(format!("tag={}", node_name));
    config.join(", ")
}

fn trojan_line(node_name: &str, trojan: &TrojanConfig) -> String {
    let mut config = vec![
        format!("trojan={}:{}", trojan.hostname, trojan.port),
        format!("password={}", trojan.password),
        "over-tls=true".to_string(),
        tls_verification(trojan.skip_cert_verify),
    ];
    if let Some(sni) = &trojan.sni {
        config.push(format!("tls-host={}", sni));
    }
    flag(&mut config, "fast-open", trojan.tfo);
    flag(&mut config, "udp-relay", trojan.udp_relay);
    flag(&mut config, "tls13", trojan.tls13);
    config.push(format!("tag={}", node_name));
    config.join(", ")
}

/// Convert proxies to Quantumult X server lines
///
/// Lines are plain `key=value` lists separated by `, `, one node per line.
/// Snell nodes have no Quantumult X counterpart and are skipped.
pub fn get_quantumultx_nodes(nodes: &[ProxyNode], filter: Option<&NodeFilter>) -> Result<String> {
    let selector = NodeSelector::new(filter)?;

    let lines: Vec<String> = selector
        .select(nodes)
        .filter_map(|node| {
            let name = node.node_name.as_str();
            match &node.config {
                NodeConfig::Vmess(vmess) => Some(vmess_line(name, vmess)),
                NodeConfig::Shadowsocks(ss) => Some(shadowsocks_line(name, ss)),
                NodeConfig::ShadowsocksR(ssr) => Some(shadowsocksr_line(name, ssr)),
                NodeConfig::Http(http) => Some(http_line(name, http, false)),
                NodeConfig::Https(http) => Some(http_line(name, http, true)),
                NodeConfig::Trojan(trojan) => Some(trojan_line(name, trojan)),
                NodeConfig::Snell(_) => {
                    warn!("Quantumult X does not support snell node {}, skipped", name);
                    None
                }
            }
        })
        .collect();

    Ok(lines.join("\n"))
}
