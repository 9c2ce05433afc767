pub mod base64;
pub mod deserializer;
pub mod matcher;
pub mod network;
pub mod url;

// Re-export common utilities
pub use self::base64::{base64_encode, url_safe_base64_encode};
pub use self::network::is_ip;
pub use self::url::{encode_uri_component, get_download_url};
