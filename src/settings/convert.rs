use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_GROUP_NAME, PROXY_TEST_INTERVAL, PROXY_TEST_URL};
use crate::error::{ConvertError, Result};
use crate::models::{FilterDef, NodeFilter, NodeFilters, ProxyTestDefaults};
use crate::utils::matcher::{builtin_filter, builtin_filter_names};

pub fn default_group_name() -> String {
    DEFAULT_GROUP_NAME.to_string()
}

pub fn default_proxy_test_url() -> String {
    PROXY_TEST_URL.to_string()
}

pub fn default_proxy_test_interval() -> u32 {
    PROXY_TEST_INTERVAL
}

/// Settings shared by the exporters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvertSettings {
    #[serde(default = "default_group_name")]
    pub group_name: String,
    #[serde(default = "default_proxy_test_url")]
    pub proxy_test_url: String,
    #[serde(default = "default_proxy_test_interval")]
    pub proxy_test_interval: u32,
    /// Custom filters, overriding built-in ones of the same name
    #[serde(default)]
    pub filters: HashMap<String, FilterDef>,
}

impl Default for ConvertSettings {
    fn default() -> Self {
        Self {
            group_name: default_group_name(),
            proxy_test_url: default_proxy_test_url(),
            proxy_test_interval: default_proxy_test_interval(),
            filters: HashMap::new(),
        }
    }
}

impl ConvertSettings {
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| ConvertError::Settings(format!("invalid TOML settings: {}", e)))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
            .map_err(|e| ConvertError::Settings(format!("invalid YAML settings: {}", e)))
    }

    /// Load settings whose format is not known in advance.
    ///
    /// Content that parses as a TOML document is read as TOML, anything else
    /// as YAML.
    pub fn from_content(content: &str) -> Result<Self> {
        if toml::from_str::<toml::Value>(content).is_ok() {
            log::debug!("Loading settings as TOML");
            return Self::from_toml(content);
        }
        log::debug!("Loading settings as YAML");
        Self::from_yaml(content)
    }

    pub fn test_defaults(&self) -> ProxyTestDefaults {
        ProxyTestDefaults {
            proxy_test_url: self.proxy_test_url.clone(),
            proxy_test_interval: self.proxy_test_interval,
        }
    }

    /// Built-in filters overlaid with the configured ones
    pub fn named_filters(&self) -> NodeFilters {
        let mut filters: NodeFilters = builtin_filter_names()
            .into_iter()
            .filter_map(|name| builtin_filter(name).map(|f| (name.to_string(), f.clone())))
            .collect();
        for (name, def) in &self.filters {
            filters.insert(name.clone(), NodeFilter::from(def.clone()));
        }
        filters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = ConvertSettings::from_content("").unwrap();
        assert_eq!(settings, ConvertSettings::default());
        assert_eq!(settings.group_name, "Surgio");
        assert_eq!(
            settings.test_defaults(),
            ProxyTestDefaults {
                proxy_test_url: "http://www.gstatic.com/generate_204".to_string(),
                proxy_test_interval: 1200,
            }
        );
    }

    #[test]
    fn test_toml_settings() {
        let content = r#"
group_name = "MyGroup"
proxy_test_interval = 600

[filters.iplc]
kind = "keywords"
keywords = ["IPLC", "IEPL"]
"#;
        let settings = ConvertSettings::from_content(content).unwrap();
        assert_eq!(settings.group_name, "MyGroup");
        assert_eq!(settings.proxy_test_interval, 600);
        assert_eq!(settings.proxy_test_url, PROXY_TEST_URL);
        assert_eq!(
            settings.filters["iplc"],
            FilterDef::Keywords {
                keywords: vec!["IPLC".to_string(), "IEPL".to_string()],
                strict: false,
            }
        );
    }

    #[test]
    fn test_yaml_settings() {
        let content = r#"
proxy_test_url: http://cp.cloudflare.com/generate_204
filters:
  hk:
    kind: pattern
    pattern: "(?i)hong ?kong"
"#;
        let settings = ConvertSettings::from_content(content).unwrap();
        assert_eq!(settings.proxy_test_url, "http://cp.cloudflare.com/generate_204");

        let filters = settings.named_filters();
        assert!(matches!(filters["hk"], NodeFilter::Pattern(_)));
        assert!(filters.contains_key("us"));
    }

    #[test]
    fn test_invalid_settings() {
        let err = ConvertSettings::from_content("proxy_test_interval: [1, 2]").unwrap_err();
        assert!(matches!(err, ConvertError::Settings(_)));
    }
}
