pub mod clash;
pub mod mellow;
pub mod quan;
pub mod quanx;
pub mod ss_sub;
pub mod ssr_sub;
pub mod surge;
pub mod v2rayn;

// Re-export all format converters
pub use clash::{clash_proxy, get_clash_nodes};
pub use mellow::{get_mellow_nodes, vmess1_uri};
pub use quan::get_quantumult_nodes;
pub use quanx::get_quantumultx_nodes;
pub use ss_sub::{get_shadowsocks_nodes, shadowsocks_uri};
pub use ssr_sub::{get_shadowsocksr_nodes, shadowsocksr_uri};
pub use surge::get_surge_nodes;
pub use v2rayn::{get_v2rayn_nodes, vmess_uri};
