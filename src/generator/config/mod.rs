pub mod formats;
pub mod group;
pub mod names;
pub mod v2ray;
