use log::warn;

use crate::error::Result;
use crate::models::{NodeConfig, NodeFilter, NodeSelector, ProxyNode, VmessNetwork};

fn push_flag(line: &mut String, key: &str, value: Option<bool>) {
    if value == Some(true) {
        line.push_str(&format!(", {}=true", key));
    }
}

fn surge_line(node: &ProxyNode) -> Option<String> {
    let name = &node.node_name;
    let mut line;

    match &node.config {
        NodeConfig::Shadowsocks(ss) => {
            line = format!(
                "{} = ss, {}, {}, encrypt-method={}, password={}",
                name, ss.hostname, ss.port, ss.method, ss.password
            );
            if let Some(obfs) = &ss.obfs {
                line.push_str(&format!(", obfs={}", obfs));
                if let Some(host) = &ss.obfs_host {
                    line.push_str(&format!(", obfs-host={}", host));
                }
            }
            push_flag(&mut line, "udp-relay", ss.udp_relay);
            push_flag(&mut line, "tfo", ss.tfo);
        }
        NodeConfig::Vmess(vmess) => {
            line = format!(
                "{} = vmess, {}, {}, username={}",
                name, vmess.hostname, vmess.port, vmess.uuid
            );
            if vmess.network == VmessNetwork::Ws {
                line.push_str(&format!(", ws=true, ws-path={}", vmess.path_or_root()));
                line.push_str(&format!(", ws-headers=Host:{}", vmess.host_or_hostname()));
            }
            if vmess.tls {
                line.push_str(", tls=true");
                push_flag(&mut line, "tls13", vmess.tls13);
                push_flag(&mut line, "skip-cert-verify", vmess.skip_cert_verify);
            }
            push_flag(&mut line, "tfo", vmess.tfo);
        }
        NodeConfig::Trojan(trojan) => {
            line = format!(
                "{} = trojan, {}, {}, password={}",
                name, trojan.hostname, trojan.port, trojan.password
            );
            if let Some(sni) = &trojan.sni {
                line.push_str(&format!(", sni={}", sni));
            }
            push_flag(&mut line, "skip-cert-verify", trojan.skip_cert_verify);
            push_flag(&mut line, "tls13", trojan.tls13);
            push_flag(&mut line, "tfo", trojan.tfo);
            push_flag(&mut line, "udp-relay", trojan.udp_relay);
        }
        NodeConfig::Http(http) => {
            line = format!(
                "{} = http, {}, {}, {}, {}",
                name, http.hostname, http.port, http.username, http.password
            );
            push_flag(&mut line, "tfo", http.tfo);
        }
        NodeConfig::Https(http) => {
            line = format!(
                "{} = https, {}, {}, {}, {}",
                name, http.hostname, http.port, http.username, http.password
            );
            push_flag(&mut line, "tls13", http.tls13);
            push_flag(&mut line, "skip-cert-verify", http.skip_cert_verify);
            push_flag(&mut line, "tfo", http.tfo);
        }
        NodeConfig::Snell(snell) => {
            line = format!(
                "{} = snell, {}, {}, psk={}",
                name, snell.hostname, snell.port, snell.psk
            );
            if let Some(obfs) = &snell.obfs {
                line.push_str(&format!(", obfs={}", obfs));
                if let Some(host) = &snell.obfs_host {
                    line.push_str(&format!(", obfs-host={}", host));
                }
            }
            if let Some(version) = snell.version {
                line.push_str(&format!(", version={}", version));
            }
            push_flag(&mut line, "tfo", snell.tfo);
        }
        NodeConfig::ShadowsocksR(_) => {
            warn!("Surge does not support shadowsocksr node {}, skipped", name);
            return None;
        }
    }

    Some(line)
}

/// Convert proxies to Surge `[Proxy]` lines
pub fn get_surge_nodes(nodes: &[ProxyNode], filter: Option<&NodeFilter>) -> Result<String> {
    let selector = NodeSelector::new(filter)?;

    let lines: Vec<String> = selector.select(nodes).filter_map(surge_line).collect();
    Ok(lines.join("\n"))
}
