//! Serde helpers for loosely typed node fields.
//!
//! Node lists are often hand written, so ports and alter ids show up both as
//! JSON numbers and as numeric strings.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(u64),
    Text(String),
}

fn parse_number<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::Text(s) => s
            .trim()
            .parse::<u64>()
            .map_err(|_| D::Error::custom(format!("expected a number, got {:?}", s))),
    }
}

pub fn deserialize_port<'de, D>(deserializer: D) -> Result<u16, D::Error>
where
    D: Deserializer<'de>,
{
    let value = parse_number(deserializer)?;
    u16::try_from(value).map_err(|_| D::Error::custom(format!("port {} out of range", value)))
}

pub fn deserialize_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = parse_number(deserializer)?;
    u32::try_from(value).map_err(|_| D::Error::custom(format!("{} out of range", value)))
}
