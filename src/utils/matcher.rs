use lazy_static::lazy_static;
use std::collections::HashMap;

use crate::models::{NodeFilter, NodeType};

fn keywords(list: &[&str]) -> NodeFilter {
    NodeFilter::keywords(list.iter().copied())
}

lazy_static! {
    static ref CHINA_BACK_KEYWORDS: Vec<&'static str> = vec![
        "回国", "Back", "中国上海", "中国北京", "中国徐州", "中国深圳", "中国枣庄", "中国郑州",
        "硅谷上海", "东莞",
    ];
    static ref BUILTIN_FILTERS: HashMap<&'static str, NodeFilter> = {
        let mut m = HashMap::new();
        m.insert("hk", keywords(&["港", "HK", "Hong Kong", "🇭🇰"]));
        m.insert(
            "us",
            keywords(&["美", "US", "United States", "洛杉矶", "圣何塞", "西雅图", "🇺🇸"]),
        );
        m.insert("japan", keywords(&["日", "JP", "Japan", "东京", "大阪", "🇯🇵"]));
        m.insert("korea", keywords(&["韩", "KR", "Korea", "🇰🇷"]));
        m.insert("singapore", keywords(&["新加坡", "狮城", "SG", "Singapore", "🇸🇬"]));
        m.insert("taiwan", keywords(&["台", "TW", "Taiwan", "🇹🇼"]));
        m.insert(
            "netflix",
            NodeFilter::Pattern("(?i)netflix|nf|hkbn|hkt|hgc|nbu".to_string()),
        );
        m.insert(
            "youtube-premium",
            keywords(&[
                "日本", "香港", "美国", "韩国", "JP", "HK", "US", "KR", "🇯🇵", "🇭🇰", "🇺🇸", "🇰🇷",
            ]),
        );
        m.insert("china-back", keywords(&CHINA_BACK_KEYWORDS));
        m.insert(
            "china-out",
            NodeFilter::Discard {
                keywords: CHINA_BACK_KEYWORDS.iter().map(|s| s.to_string()).collect(),
                strict: false,
            },
        );
        m.insert("shadowsocks", NodeFilter::Types(vec![NodeType::Shadowsocks]));
        m.insert("shadowsocksr", NodeFilter::Types(vec![NodeType::ShadowsocksR]));
        m.insert("vmess", NodeFilter::Types(vec![NodeType::Vmess]));
        m.insert("trojan", NodeFilter::Types(vec![NodeType::Trojan]));
        m.insert("http", NodeFilter::Types(vec![NodeType::Http, NodeType::Https]));
        m.insert("snell", NodeFilter::Types(vec![NodeType::Snell]));
        m
    };
}

/// Look up a filter shipped with the crate.
pub fn builtin_filter(name: &str) -> Option<&'static NodeFilter> {
    BUILTIN_FILTERS.get(name)
}

/// Names of every built-in filter, sorted.
pub fn builtin_filter_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = BUILTIN_FILTERS.keys().copied().collect();
    names.sort_unstable();
    names
}

/// Check a node name against a keyword list
///
/// # Arguments
/// * `name` - The node name
/// * `keywords` - Keywords searched as plain substrings
/// * `strict` - Require every keyword instead of any
pub fn keywords_match(name: &str, keywords: &[String], strict: bool) -> bool {
    if strict {
        keywords.iter().all(|k| name.contains(k.as_str()))
    } else {
        keywords.iter().any(|k| name.contains(k.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_match() {
        let kw = vec!["HK".to_string(), "IPLC".to_string()];
        assert!(keywords_match("🇭🇰HK 01", &kw, false));
        assert!(!keywords_match("🇭🇰HK 01", &kw, true));
        assert!(keywords_match("HK IPLC 01", &kw, true));
        assert!(!keywords_match("JP 01", &kw, false));
    }

    #[test]
    fn test_builtin_lookup() {
        assert!(builtin_filter("hk").is_some());
        assert!(builtin_filter("mars").is_none());
        let names = builtin_filter_names();
        assert!(names.contains(&"china-out"));
        assert!(names.windows(2).all(|w| w[0] <= w[1]));
    }
}
