//! V2Ray client profile builder
//!
//! Produces a complete single-node client document: a local SOCKS inbound
//! and one VMess outbound. The document is meant to be serialized with
//! `serde_json`.

use serde::Serialize;

use crate::constants::USER_AGENT;
use crate::models::{VmessConfig, VmessNetwork};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct V2rayProfile {
    pub log: LogSettings,
    pub inbound: Inbound,
    pub outbound: Outbound,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogSettings {
    pub loglevel: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Inbound {
    pub port: u16,
    pub listen: String,
    pub protocol: String,
    pub settings: InboundSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InboundSettings {
    pub auth: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Outbound {
    pub protocol: String,
    pub settings: OutboundSettings,
    pub stream_settings: StreamSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutboundSettings {
    pub vnext: Vec<VnextServer>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VnextServer {
    pub address: String,
    pub port: u16,
    pub users: Vec<VmessUser>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VmessUser {
    pub id: String,
    pub alter_id: u32,
    pub security: String,
    pub level: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamSettings {
    pub network: String,
    pub security: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls_settings: Option<TlsSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ws_settings: Option<WsSettings>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TlsSettings {
    pub server_name: String,
    pub allow_insecure: bool,
    pub allow_insecure_ciphers: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WsSettings {
    pub headers: WsHeaders,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WsHeaders {
    #[serde(rename = "Host")]
    pub host: String,
    #[serde(rename = "User-Agent")]
    pub user_agent: String,
}

/// Build a V2Ray client profile listening on `local_port` for one VMess node.
pub fn format_v2ray_config(local_port: u16, node: &VmessConfig) -> V2rayProfile {
    let tls_settings = node.tls.then(|| TlsSettings {
        server_name: node.hostname.clone(),
        allow_insecure: node.skip_cert_verify.unwrap_or(false),
        allow_insecure_ciphers: false,
    });

    let ws_settings = (node.network == VmessNetwork::Ws).then(|| WsSettings {
        headers: WsHeaders {
            host: node.host.clone().unwrap_or_default(),
            user_agent: USER_AGENT.to_string(),
        },
        path: node.path_or_root().to_string(),
    });

    V2rayProfile {
        log: LogSettings {
            loglevel: "warning".to_string(),
        },
        inbound: Inbound {
            port: local_port,
            listen: "127.0.0.1".to_string(),
            protocol: "socks".to_string(),
            settings: InboundSettings {
                auth: "noauth".to_string(),
            },
        },
        outbound: Outbound {
            protocol: "vmess".to_string(),
            settings: OutboundSettings {
                vnext: vec![VnextServer {
                    address: node.hostname.clone(),
                    port: node.port,
                    users: vec![VmessUser {
                        id: node.uuid.clone(),
                        alter_id: node.alter_id,
                        security: node.method.clone(),
                        level: 0,
                    }],
                }],
            },
            stream_settings: StreamSettings {
                network: node.network.as_str().to_string(),
                security: if node.tls { "tls" } else { "none" }.to_string(),
                tls_settings,
                ws_settings,
            },
        },
    }
}
