//! Proxy node model definitions
//!
//! A node is a display name, an enable flag and one protocol specific
//! configuration. Fields that do not apply to a protocol do not exist on its
//! configuration struct, and optional fields stay `None` when absent.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::utils::deserializer::{deserialize_port, deserialize_u32};

fn default_true() -> bool {
    true
}

fn default_vmess_method() -> String {
    "auto".to_string()
}

/// Represents the kind of a proxy node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    Shadowsocks,
    #[serde(rename = "shadowsocksr")]
    ShadowsocksR,
    Vmess,
    Trojan,
    Http,
    Https,
    Snell,
}

impl NodeType {
    pub fn as_str(self) -> &'static str {
        match self {
            NodeType::Shadowsocks => "shadowsocks",
            NodeType::ShadowsocksR => "shadowsocksr",
            NodeType::Vmess => "vmess",
            NodeType::Trojan => "trojan",
            NodeType::Http => "http",
            NodeType::Https => "https",
            NodeType::Snell => "snell",
        }
    }
}

/// Transport used by a VMess node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VmessNetwork {
    #[default]
    Tcp,
    Ws,
}

impl VmessNetwork {
    pub fn as_str(self) -> &'static str {
        match self {
            VmessNetwork::Tcp => "tcp",
            VmessNetwork::Ws => "ws",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShadowsocksConfig {
    pub hostname: String,
    #[serde(deserialize_with = "deserialize_port")]
    pub port: u16,
    pub method: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub obfs: Option<String>,
    #[serde(rename = "obfs-host", default, skip_serializing_if = "Option::is_none")]
    pub obfs_host: Option<String>,
    #[serde(rename = "udp-relay", default, skip_serializing_if = "Option::is_none")]
    pub udp_relay: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tfo: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShadowsocksrConfig {
    pub hostname: String,
    #[serde(deserialize_with = "deserialize_port")]
    pub port: u16,
    pub method: String,
    pub password: String,
    pub protocol: String,
    #[serde(default)]
    pub protoparam: String,
    pub obfs: String,
    #[serde(default)]
    pub obfsparam: String,
    #[serde(rename = "udp-relay", default, skip_serializing_if = "Option::is_none")]
    pub udp_relay: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tfo: Option<bool>,
}

/// Options only understood by Quantumult X.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuantumultXConfig {
    #[serde(rename = "vmessAEAD", default, skip_serializing_if = "Option::is_none")]
    pub vmess_aead: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VmessConfig {
    pub hostname: String,
    #[serde(deserialize_with = "deserialize_port")]
    pub port: u16,
    #[serde(default = "default_vmess_method")]
    pub method: String,
    pub uuid: String,
    #[serde(deserialize_with = "deserialize_u32")]
    pub alter_id: u32,
    #[serde(default)]
    pub network: VmessNetwork,
    #[serde(default)]
    pub tls: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls13: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_cert_verify: Option<bool>,
    /// Host header of the websocket transport.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ws_headers: Option<BTreeMap<String, String>>,
    #[serde(rename = "udp-relay", default, skip_serializing_if = "Option::is_none")]
    pub udp_relay: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tfo: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantumult_x_config: Option<QuantumultXConfig>,
}

impl VmessConfig {
    /// Websocket host header, falling back to the server address.
    pub fn host_or_hostname(&self) -> &str {
        match self.host.as_deref() {
            Some(host) if !host.is_empty() => host,
            _ => &self.hostname,
        }
    }

    pub fn path_or_root(&self) -> &str {
        match self.path.as_deref() {
            Some(path) if !path.is_empty() => path,
            _ => "/",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrojanConfig {
    pub hostname: String,
    #[serde(deserialize_with = "deserialize_port")]
    pub port: u16,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sni: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_cert_verify: Option<bool>,
    #[serde(rename = "udp-relay", default, skip_serializing_if = "Option::is_none")]
    pub udp_relay: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tfo: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls13: Option<bool>,
}

/// Shared by plain HTTP and HTTPS proxies; the node kind carries the TLS bit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpConfig {
    pub hostname: String,
    #[serde(deserialize_with = "deserialize_port")]
    pub port: u16,
    pub username: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_cert_verify: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls13: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tfo: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnellConfig {
    pub hostname: String,
    #[serde(deserialize_with = "deserialize_port")]
    pub port: u16,
    pub psk: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub obfs: Option<String>,
    #[serde(rename = "obfs-host", default, skip_serializing_if = "Option::is_none")]
    pub obfs_host: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tfo: Option<bool>,
}

/// Protocol specific part of a node, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NodeConfig {
    Shadowsocks(ShadowsocksConfig),
    #[serde(rename = "shadowsocksr")]
    ShadowsocksR(ShadowsocksrConfig),
    Vmess(VmessConfig),
    Trojan(TrojanConfig),
    Http(HttpConfig),
    Https(HttpConfig),
    Snell(SnellConfig),
}

impl NodeConfig {
    pub fn node_type(&self) -> NodeType {
        match self {
            NodeConfig::Shadowsocks(_) => NodeType::Shadowsocks,
            NodeConfig::ShadowsocksR(_) => NodeType::ShadowsocksR,
            NodeConfig::Vmess(_) => NodeType::Vmess,
            NodeConfig::Trojan(_) => NodeType::Trojan,
            NodeConfig::Http(_) => NodeType::Http,
            NodeConfig::Https(_) => NodeType::Https,
            NodeConfig::Snell(_) => NodeType::Snell,
        }
    }

    pub fn hostname(&self) -> &str {
        match self {
            NodeConfig::Shadowsocks(c) => &c.hostname,
            NodeConfig::ShadowsocksR(c) => &c.hostname,
            NodeConfig::Vmess(c) => &c.hostname,
            NodeConfig::Trojan(c) => &c.hostname,
            NodeConfig::Http(c) | NodeConfig::Https(c) => &c.hostname,
            NodeConfig::Snell(c) => &c.hostname,
        }
    }

    pub fn port(&self) -> u16 {
        match self {
            NodeConfig::Shadowsocks(c) => c.port,
            NodeConfig::ShadowsocksR(c) => c.port,
            NodeConfig::Vmess(c) => c.port,
            NodeConfig::Trojan(c) => c.port,
            NodeConfig::Http(c) | NodeConfig::Https(c) => c.port,
            NodeConfig::Snell(c) => c.port,
        }
    }
}

/// Represents a proxy node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyNode {
    pub node_name: String,
    #[serde(default = "default_true")]
    pub enable: bool,
    #[serde(flatten)]
    pub config: NodeConfig,
}

impl ProxyNode {
    /// Create an enabled node.
    pub fn new(node_name: impl Into<String>, config: NodeConfig) -> Self {
        ProxyNode {
            node_name: node_name.into(),
            enable: true,
            config,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.enable = false;
        self
    }

    pub fn node_type(&self) -> NodeType {
        self.config.node_type()
    }
}
