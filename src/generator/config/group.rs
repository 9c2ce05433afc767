//! Proxy group normalization
//!
//! Group templates come from a caller supplied generator. Each template is
//! resolved against the node list: explicit members first, then the names of
//! the nodes picked by the template's filter, without duplicates.

use log::debug;

use crate::error::{ConvertError, Result};
use crate::generator::config::names::get_clash_node_names;
use crate::models::{
    NodeFilters, NormalizedProxyGroup, ProxyGroupTemplate, ProxyNode, ProxyTestDefaults,
};

fn push_unique(resolved: &mut Vec<String>, name: String) {
    if !resolved.contains(&name) {
        resolved.push(name);
    }
}

/// Resolves one template
///
/// A template with neither a filter nor explicit members takes every
/// enabled node. Automatic groups get a test URL and interval, from the
/// template when it has its own, otherwise from `defaults`.
pub fn normalize_proxy_group(
    nodes: &[ProxyNode],
    filters: &NodeFilters,
    template: ProxyGroupTemplate,
    defaults: &ProxyTestDefaults,
) -> Result<NormalizedProxyGroup> {
    let ProxyGroupTemplate {
        name,
        group_type,
        proxies,
        filter,
        url,
        interval,
    } = template;

    let mut resolved: Vec<String> = Vec::new();
    let has_explicit = proxies.is_some();
    for proxy in proxies.unwrap_or_default() {
        push_unique(&mut resolved, proxy);
    }

    let selected = match filter.as_deref() {
        Some(filter_name) => {
            let filter = filters.get(filter_name).ok_or_else(|| {
                ConvertError::InvalidFilter(format!(
                    "proxy group {} refers to unknown filter {}",
                    name, filter_name
                ))
            })?;
            get_clash_node_names(nodes, Some(filter), &[])?
        }
        None if !has_explicit => get_clash_node_names(nodes, None, &[])?,
        None => Vec::new(),
    };
    for node_name in selected {
        push_unique(&mut resolved, node_name);
    }

    let (url, interval) = if group_type.is_auto_test() {
        (
            Some(url.unwrap_or_else(|| defaults.proxy_test_url.clone())),
            Some(interval.unwrap_or(defaults.proxy_test_interval)),
        )
    } else {
        (None, None)
    };

    debug!(
        "Proxy group {} ({}) resolved to {} members",
        name,
        group_type.as_str(),
        resolved.len()
    );

    Ok(NormalizedProxyGroup {
        name,
        group_type,
        proxies: resolved,
        url,
        interval,
    })
}

/// Generates and resolves every proxy group
///
/// # Arguments
/// * `nodes` - All available proxy nodes
/// * `filters` - Named filters the templates may refer to
/// * `generator` - Produces the group templates from the nodes and filters
/// * `defaults` - Test URL and interval for automatic groups
///
/// # Returns
/// The groups in template order, or [`ConvertError::InvalidFilter`] when a
/// template refers to a missing or invalid filter
pub fn normalize_proxy_groups<F>(
    nodes: &[ProxyNode],
    filters: &NodeFilters,
    generator: F,
    defaults: &ProxyTestDefaults,
) -> Result<Vec<NormalizedProxyGroup>>
where
    F: FnOnce(&[ProxyNode], &NodeFilters) -> Vec<ProxyGroupTemplate>,
{
    generator(nodes, filters)
        .into_iter()
        .map(|template| normalize_proxy_group(nodes, filters, template, defaults))
        .collect()
}
