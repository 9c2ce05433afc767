use serde_json::json;
use subexport::constants::{PROXY_TEST_INTERVAL, PROXY_TEST_URL};
use subexport::generator::normalize_proxy_groups;
use subexport::models::{
    NodeFilter, NodeFilters, NormalizedProxyGroup, ProxyGroupTemplate, ProxyGroupType, ProxyNode,
    ProxyTestDefaults,
};
use subexport::ConvertSettings;

fn nodes() -> Vec<ProxyNode> {
    serde_json::from_value(json!([{
        "nodeName": "🇭🇰HK(Example)",
        "type": "shadowsocks",
        "hostname": "example.com",
        "port": "8443",
        "method": "chacha20-ietf-poly1305",
        "password": "password"
    }]))
    .unwrap()
}

fn filters() -> NodeFilters {
    let mut filters = NodeFilters::new();
    filters.insert("hkFilter".to_string(), NodeFilter::builtin("hk"));
    filters.insert("usFilter".to_string(), NodeFilter::builtin("us"));
    filters
}

fn templates(_: &[ProxyNode], _: &NodeFilters) -> Vec<ProxyGroupTemplate> {
    vec![
        ProxyGroupTemplate::new("🚀 Proxy", ProxyGroupType::Select),
        ProxyGroupTemplate::new("🚀 Proxy 2", ProxyGroupType::Select).with_proxies(["Another Proxy"]),
        ProxyGroupTemplate::new("US", ProxyGroupType::URLTest).with_filter("usFilter"),
        ProxyGroupTemplate::new("HK", ProxyGroupType::URLTest).with_filter("hkFilter"),
        ProxyGroupTemplate::new("🍎 Apple", ProxyGroupType::Select)
            .with_proxies(["DIRECT", "🚀 Proxy", "US"]),
        ProxyGroupTemplate::new("Mixed", ProxyGroupType::URLTest)
            .with_filter("hkFilter")
            .with_proxies(["DIRECT"]),
        ProxyGroupTemplate::new("load-balance", ProxyGroupType::LoadBalance)
            .with_filter("hkFilter")
            .with_proxies(["🚀 Proxy", "US"]),
        ProxyGroupTemplate::new("fallback-auto", ProxyGroupType::Fallback)
            .with_filter("hkFilter")
            .with_proxies(["🚀 Proxy", "US"]),
        ProxyGroupTemplate::new("fallback-auto-no-filter", ProxyGroupType::Fallback)
            .with_proxies(["🚀 Proxy", "US"]),
    ]
}

fn group(
    name: &str,
    group_type: ProxyGroupType,
    proxies: &[&str],
    tested: bool,
) -> NormalizedProxyGroup {
    NormalizedProxyGroup {
        name: name.to_string(),
        group_type,
        proxies: proxies.iter().map(|p| p.to_string()).collect(),
        url: tested.then(|| PROXY_TEST_URL.to_string()),
        interval: tested.then_some(PROXY_TEST_INTERVAL),
    }
}

#[cfg(test)]
mod group_tests {
    use super::*;

    #[test]
    fn test_normalize_proxy_groups() {
        let _ = env_logger::builder().is_test(true).try_init();

        let result =
            normalize_proxy_groups(&nodes(), &filters(), templates, &ProxyTestDefaults::default())
                .unwrap();

        assert_eq!(
            result,
            vec![
                group("🚀 Proxy", ProxyGroupType::Select, &["🇭🇰HK(Example)"], false),
                group("🚀 Proxy 2", ProxyGroupType::Select, &["Another Proxy"], false),
                group("US", ProxyGroupType::URLTest, &[], true),
                group("HK", ProxyGroupType::URLTest, &["🇭🇰HK(Example)"], true),
                group(
                    "🍎 Apple",
                    ProxyGroupType::Select,
                    &["DIRECT", "🚀 Proxy", "US"],
                    false
                ),
                group(
                    "Mixed",
                    ProxyGroupType::URLTest,
                    &["DIRECT", "🇭🇰HK(Example)"],
                    true
                ),
                group(
                    "load-balance",
                    ProxyGroupType::LoadBalance,
                    &["🚀 Proxy", "US", "🇭🇰HK(Example)"],
                    true
                ),
                group(
                    "fallback-auto",
                    ProxyGroupType::Fallback,
                    &["🚀 Proxy", "US", "🇭🇰HK(Example)"],
                    true
                ),
                group(
                    "fallback-auto-no-filter",
                    ProxyGroupType::Fallback,
                    &["🚀 Proxy", "US"],
                    true
                ),
            ]
        );
    }

    #[test]
    fn test_serialized_field_order() {
        let result = normalize_proxy_groups(
            &nodes(),
            &filters(),
            |_, _| vec![ProxyGroupTemplate::new("HK", ProxyGroupType::URLTest).with_filter("hkFilter")],
            &ProxyTestDefaults::default(),
        )
        .unwrap();

        assert_eq!(
            serde_json::to_string(&result[0]).unwrap(),
            r#"{"name":"HK","type":"url-test","proxies":["🇭🇰HK(Example)"],"url":"http://www.gstatic.com/generate_204","interval":1200}"#
        );
    }

    #[test]
    fn test_missing_filter_name() {
        let err = normalize_proxy_groups(
            &nodes(),
            &filters(),
            |_, _| vec![ProxyGroupTemplate::new("JP", ProxyGroupType::Select).with_filter("jpFilter")],
            &ProxyTestDefaults::default(),
        )
        .unwrap_err();
        assert!(err.is_invalid_filter());
    }

    #[test]
    fn test_groups_from_settings() {
        let settings = ConvertSettings::from_content(
            r#"
proxy_test_url = "http://cp.cloudflare.com/generate_204"
proxy_test_interval = 300

[filters.example]
kind = "keywords"
keywords = ["Example"]
"#,
        )
        .unwrap();

        let result = normalize_proxy_groups(
            &nodes(),
            &settings.named_filters(),
            |_, filters| {
                assert!(filters.contains_key("hk"));
                vec![
                    ProxyGroupTemplate::new("Auto", ProxyGroupType::URLTest).with_filter("example"),
                    ProxyGroupTemplate::new("Japan", ProxyGroupType::Fallback).with_filter("japan"),
                ]
            },
            &settings.test_defaults(),
        )
        .unwrap();

        assert_eq!(result[0].proxies, vec!["🇭🇰HK(Example)"]);
        assert_eq!(
            result[0].url.as_deref(),
            Some("http://cp.cloudflare.com/generate_204")
        );
        assert_eq!(result[0].interval, Some(300));
        assert!(result[1].proxies.is_empty());
    }
}
