use serde_yaml::{Mapping, Value as YamlValue};

use crate::error::Result;
use crate::models::{NodeConfig, NodeFilter, NodeSelector, ProxyNode, VmessNetwork};

fn insert<V: Into<YamlValue>>(map: &mut Mapping, key: &str, value: V) {
    map.insert(YamlValue::String(key.to_string()), value.into());
}

fn insert_opt<V: Into<YamlValue>>(map: &mut Mapping, key: &str, value: Option<V>) {
    if let Some(value) = value {
        insert(map, key, value);
    }
}

fn obfs_opts(mode: &str, host: Option<&String>) -> Mapping {
    let mut opts = Mapping::new();
    insert(&mut opts, "mode", mode);
    insert_opt(&mut opts, "host", host.cloned());
    opts
}

/// Convert one node to a Clash `proxies` entry.
pub fn clash_proxy(node: &ProxyNode) -> YamlValue {
    let mut proxy = Mapping::new();
    insert(&mut proxy, "name", node.node_name.as_str());

    match &node.config {
        NodeConfig::Shadowsocks(ss) => {
            insert(&mut proxy, "type", "ss");
            insert(&mut proxy, "server", ss.hostname.as_str());
            insert(&mut proxy, "port", ss.port);
            insert(&mut proxy, "cipher", ss.method.as_str());
            insert(&mut proxy, "password", ss.password.as_str());
            insert_opt(&mut proxy, "udp", ss.udp_relay);
            if let Some(obfs) = &ss.obfs {
                insert(&mut proxy, "plugin", "obfs");
                insert(&mut proxy, "plugin-opts", obfs_opts(obfs, ss.obfs_host.as_ref()));
            }
        }
        NodeConfig::ShadowsocksR(ssr) => {
            insert(&mut proxy, "type", "ssr");
            insert(&mut proxy, "server", ssr.hostname.as_str());
            insert(&mut proxy, "port", ssr.port);
            insert(&mut proxy, "cipher", ssr.method.as_str());
            insert(&mut proxy, "password", ssr.password.as_str());
            insert(&mut proxy, "obfs", ssr.obfs.as_str());
            insert(&mut proxy, "obfs-param", ssr.obfsparam.as_str());
            insert(&mut proxy, "protocol", ssr.protocol.as_str());
            insert(&mut proxy, "protocol-param", ssr.protoparam.as_str());
            insert_opt(&mut proxy, "udp", ssr.udp_relay);
        }
        NodeConfig::Vmess(vmess) => {
            insert(&mut proxy, "type", "vmess");
            insert(&mut proxy, "server", vmess.hostname.as_str());
            insert(&mut proxy, "port", vmess.port);
            insert(&mut proxy, "uuid", vmess.uuid.as_str());
            insert(&mut proxy, "alterId", vmess.alter_id);
            insert(&mut proxy, "cipher", vmess.method.as_str());
            insert_opt(&mut proxy, "udp", vmess.udp_relay);
            insert(&mut proxy, "tls", vmess.tls);
            if vmess.tls {
                insert_opt(&mut proxy, "skip-cert-verify", vmess.skip_cert_verify);
            }
            if vmess.network == VmessNetwork::Ws {
                insert(&mut proxy, "network", "ws");
                insert(&mut proxy, "ws-path", vmess.path_or_root());
                let mut headers = Mapping::new();
                insert(&mut headers, "Host", vmess.host_or_hostname());
                if let Some(extra) = &vmess.ws_headers {
                    for (key, value) in extra {
                        insert(&mut headers, key, value.as_str());
                    }
                }
                insert(&mut proxy, "ws-headers", headers);
            }
        }
        NodeConfig::Trojan(trojan) => {
            insert(&mut proxy, "type", "trojan");
            insert(&mut proxy, "server", trojan.hostname.as_str());
            insert(&mut proxy, "port", trojan.port);
            insert(&mut proxy, "password", trojan.password.as_str());
            insert_opt(&mut proxy, "sni", trojan.sni.clone());
            insert_opt(&mut proxy, "udp", trojan.udp_relay);
            insert_opt(&mut proxy, "skip-cert-verify", trojan.skip_cert_verify);
        }
        NodeConfig::Http(http) | NodeConfig::Https(http) => {
            insert(&mut proxy, "type", "http");
            insert(&mut proxy, "server", http.hostname.as_str());
            insert(&mut proxy, "port", http.port);
            insert(&mut proxy, "username", http.username.as_str());
            insert(&mut proxy, "password", http.password.as_str());
            if matches!(node.config, NodeConfig::Https(_)) {
                insert(&mut proxy, "tls", true);
                insert_opt(&mut proxy, "skip-cert-verify", http.skip_cert_verify);
            }
        }
        NodeConfig::Snell(snell) => {
            insert(&mut proxy, "type", "snell");
            insert(&mut proxy, "server", snell.hostname.as_str());
            insert(&mut proxy, "port", snell.port);
            insert(&mut proxy, "psk", snell.psk.as_str());
            insert_opt(&mut proxy, "version", snell.version);
            if let Some(obfs) = &snell.obfs {
                insert(&mut proxy, "obfs-opts", obfs_opts(obfs, snell.obfs_host.as_ref()));
            }
        }
    }

    YamlValue::Mapping(proxy)
}

/// Convert proxies to Clash `proxies` entries
pub fn get_clash_nodes(nodes: &[ProxyNode], filter: Option<&NodeFilter>) -> Result<Vec<YamlValue>> {
    let selector = NodeSelector::new(filter)?;
    Ok(selector.select(nodes).map(clash_proxy).collect())
}
