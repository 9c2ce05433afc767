//! Node name listing

use crate::error::Result;
use crate::models::{NodeFilter, NodeSelector, ProxyNode};

/// Join the names of the selected nodes
///
/// # Arguments
/// * `nodes` - All available proxy nodes
/// * `filter` - Optional filter, all enabled nodes when absent
/// * `separator` - Inserted between names, usually [`crate::constants::NODE_NAME_SEPARATOR`]
///
/// # Returns
/// The joined names in input order, an empty string when nothing matches
pub fn get_node_names(
    nodes: &[ProxyNode],
    filter: Option<&NodeFilter>,
    separator: &str,
) -> Result<String> {
    let selector = NodeSelector::new(filter)?;
    let names: Vec<&str> = selector
        .select(nodes)
        .map(|node| node.node_name.as_str())
        .collect();
    Ok(names.join(separator))
}

/// Names of the selected nodes appended to `existing`, as used in Clash groups.
pub fn get_clash_node_names(
    nodes: &[ProxyNode],
    filter: Option<&NodeFilter>,
    existing: &[String],
) -> Result<Vec<String>> {
    let selector = NodeSelector::new(filter)?;
    let mut names = existing.to_vec();
    names.extend(selector.select(nodes).map(|node| node.node_name.clone()));
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::NODE_NAME_SEPARATOR;
    use crate::models::{NodeConfig, SnellConfig};

    fn snell(name: &str) -> ProxyNode {
        ProxyNode::new(
            name,
            NodeConfig::Snell(SnellConfig {
                hostname: "example.com".to_string(),
                port: 443,
                psk: "psk".to_string(),
                obfs: None,
                obfs_host: None,
                version: None,
                tfo: None,
            }),
        )
    }

    #[test]
    fn test_get_node_names() {
        let nodes = vec![
            snell("Test Node 1"),
            snell("Test Node 2").disabled(),
            snell("Test Node 3"),
        ];

        assert_eq!(
            get_node_names(&nodes, None, NODE_NAME_SEPARATOR).unwrap(),
            "Test Node 1, Test Node 3"
        );
        assert_eq!(
            get_node_names(&nodes, None, ":").unwrap(),
            "Test Node 1:Test Node 3"
        );

        let filter = NodeFilter::predicate(|node| node.node_name != "Test Node 3");
        assert_eq!(
            get_node_names(&nodes, Some(&filter), NODE_NAME_SEPARATOR).unwrap(),
            "Test Node 1"
        );

        let nothing = NodeFilter::predicate(|_| false);
        assert_eq!(get_node_names(&nodes, Some(&nothing), ", ").unwrap(), "");
    }

    #[test]
    fn test_get_clash_node_names() {
        let nodes = vec![snell("a"), snell("b").disabled(), snell("c")];
        let names = get_clash_node_names(&nodes, None, &["DIRECT".to_string()]).unwrap();
        assert_eq!(names, vec!["DIRECT", "a", "c"]);
    }
}
