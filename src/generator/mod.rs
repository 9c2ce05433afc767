pub mod config;

// Re-export format converters
pub use config::formats::{
    get_clash_nodes, get_mellow_nodes, get_quantumult_nodes, get_quantumultx_nodes,
    get_shadowsocks_nodes, get_shadowsocksr_nodes, get_surge_nodes, get_v2rayn_nodes,
};

// Re-export node listing and group normalization
pub use config::group::{normalize_proxy_group, normalize_proxy_groups};
pub use config::names::{get_clash_node_names, get_node_names};
pub use config::v2ray::{format_v2ray_config, V2rayProfile};
