use serde::{Deserialize, Serialize};

/// Type of proxy group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProxyGroupType {
    Select,
    #[serde(rename = "url-test")]
    URLTest,
    Fallback,
    LoadBalance,
}

impl ProxyGroupType {
    /// Get string representation of the proxy group type
    pub fn as_str(&self) -> &'static str {
        match self {
            ProxyGroupType::Select => "select",
            ProxyGroupType::URLTest => "url-test",
            ProxyGroupType::LoadBalance => "load-balance",
            ProxyGroupType::Fallback => "fallback",
        }
    }

    /// Whether the group picks its member by probing a test URL.
    pub fn is_auto_test(&self) -> bool {
        !matches!(self, ProxyGroupType::Select)
    }
}

/// A proxy group as produced by a group template generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProxyGroupTemplate {
    pub name: String,
    #[serde(rename = "type")]
    pub group_type: ProxyGroupType,
    /// Explicit members, node or group names, kept in front of filtered nodes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxies: Option<Vec<String>>,
    /// Name of an entry in the filter map handed to the normalizer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<u32>,
}

impl ProxyGroupTemplate {
    pub fn new(name: impl Into<String>, group_type: ProxyGroupType) -> Self {
        Self {
            name: name.into(),
            group_type,
            proxies: None,
            filter: None,
            url: None,
            interval: None,
        }
    }

    pub fn with_proxies<I, S>(mut self, proxies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.proxies = Some(proxies.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    pub fn with_test(mut self, url: impl Into<String>, interval: u32) -> Self {
        self.url = Some(url.into());
        self.interval = Some(interval);
        self
    }
}

/// A proxy group with every member resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedProxyGroup {
    pub name: String,
    #[serde(rename = "type")]
    pub group_type: ProxyGroupType,
    pub proxies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<u32>,
}

/// Latency probe used by automatic groups that do not set their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyTestDefaults {
    pub proxy_test_url: String,
    pub proxy_test_interval: u32,
}

impl Default for ProxyTestDefaults {
    fn default() -> Self {
        Self {
            proxy_test_url: crate::constants::PROXY_TEST_URL.to_string(),
            proxy_test_interval: crate::constants::PROXY_TEST_INTERVAL,
        }
    }
}

/// A collection of normalized proxy groups
pub type ProxyGroupConfigs = Vec<NormalizedProxyGroup>;
