//! Process-wide constants used by the exporters.

/// Group name written into subscriptions when the caller does not pick one.
pub const DEFAULT_GROUP_NAME: &str = "Surgio";

/// User agent advertised by websocket transports.
pub const USER_AGENT: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 13_5 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/13.1.1 Mobile/15E148 Safari/604.1";

pub const PROXY_TEST_URL: &str = "http://www.gstatic.com/generate_204";

/// Seconds between two latency probes of an automatic proxy group.
pub const PROXY_TEST_INTERVAL: u32 = 1200;

/// Separator used when joining node names.
pub const NODE_NAME_SEPARATOR: &str = ", ";

/// Cipher Quantumult clients expect in place of `auto`.
pub const VMESS_DEFAULT_CIPHER: &str = "chacha20-ietf-poly1305";
