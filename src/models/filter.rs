//! Node filters
//!
//! A [`NodeFilter`] describes which nodes an exporter should keep. Every
//! exporter validates its filter through [`NodeSelector::new`] before it looks
//! at a single node, so a bad filter never produces partial output.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::error::{ConvertError, Result};
use crate::models::{NodeType, ProxyNode};
use crate::utils::matcher::{builtin_filter, keywords_match};

pub type NodePredicate = Arc<dyn Fn(&ProxyNode) -> bool + Send + Sync>;

/// Named filters handed to proxy group templates.
pub type NodeFilters = HashMap<String, NodeFilter>;

#[derive(Clone)]
pub enum NodeFilter {
    /// Arbitrary caller supplied predicate.
    Predicate(NodePredicate),
    /// Node name contains any keyword, or every keyword when `strict`.
    Keywords { keywords: Vec<String>, strict: bool },
    /// Negation of [`NodeFilter::Keywords`].
    Discard { keywords: Vec<String>, strict: bool },
    /// Regular expression searched in the node name.
    Pattern(String),
    Types(Vec<NodeType>),
    /// One of the filters shipped with the crate, looked up by name.
    Builtin(String),
    /// Any of the filters matches, or all of them when `strict`.
    Merge { filters: Vec<NodeFilter>, strict: bool },
}

impl NodeFilter {
    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(&ProxyNode) -> bool + Send + Sync + 'static,
    {
        NodeFilter::Predicate(Arc::new(f))
    }

    pub fn keywords<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        NodeFilter::Keywords {
            keywords: keywords.into_iter().map(Into::into).collect(),
            strict: false,
        }
    }

    pub fn builtin(name: impl Into<String>) -> Self {
        NodeFilter::Builtin(name.into())
    }

    fn compile(&self) -> Result<CompiledFilter<'_>> {
        match self {
            NodeFilter::Predicate(f) => Ok(CompiledFilter::Predicate(f.as_ref())),
            NodeFilter::Keywords { keywords, strict } => {
                ensure_keywords(keywords)?;
                Ok(CompiledFilter::Keywords {
                    keywords,
                    strict: *strict,
                    negate: false,
                })
            }
            NodeFilter::Discard { keywords, strict } => {
                ensure_keywords(keywords)?;
                Ok(CompiledFilter::Keywords {
                    keywords,
                    strict: *strict,
                    negate: true,
                })
            }
            NodeFilter::Pattern(pattern) => Regex::new(pattern)
                .map(CompiledFilter::Pattern)
                .map_err(|e| ConvertError::InvalidFilter(format!("{}: {}", pattern, e))),
            NodeFilter::Types(types) => {
                if types.is_empty() {
                    return Err(ConvertError::InvalidFilter(
                        "type filter without node types".to_string(),
                    ));
                }
                Ok(CompiledFilter::Types(types))
            }
            NodeFilter::Builtin(name) => match builtin_filter(name) {
                Some(filter) => filter.compile(),
                None => Err(ConvertError::InvalidFilter(format!(
                    "unknown built-in filter {}",
                    name
                ))),
            },
            NodeFilter::Merge { filters, strict } => {
                if filters.is_empty() {
                    return Err(ConvertError::InvalidFilter(
                        "merged filter without members".to_string(),
                    ));
                }
                let compiled = filters
                    .iter()
                    .map(NodeFilter::compile)
                    .collect::<Result<Vec<_>>>()?;
                Ok(CompiledFilter::Merge {
                    filters: compiled,
                    strict: *strict,
                })
            }
        }
    }
}

fn ensure_keywords(keywords: &[String]) -> Result<()> {
    if keywords.is_empty() || keywords.iter().any(String::is_empty) {
        return Err(ConvertError::InvalidFilter(
            "keyword filter needs non-empty keywords".to_string(),
        ));
    }
    Ok(())
}

impl fmt::Debug for NodeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeFilter::Predicate(_) => f.write_str("Predicate(..)"),
            NodeFilter::Keywords { keywords, strict } => f
                .debug_struct("Keywords")
                .field("keywords", keywords)
                .field("strict", strict)
                .finish(),
            NodeFilter::Discard { keywords, strict } => f
                .debug_struct("Discard")
                .field("keywords", keywords)
                .field("strict", strict)
                .finish(),
            NodeFilter::Pattern(p) => f.debug_tuple("Pattern").field(p).finish(),
            NodeFilter::Types(t) => f.debug_tuple("Types").field(t).finish(),
            NodeFilter::Builtin(n) => f.debug_tuple("Builtin").field(n).finish(),
            NodeFilter::Merge { filters, strict } => f
                .debug_struct("Merge")
                .field("filters", filters)
                .field("strict", strict)
                .finish(),
        }
    }
}

enum CompiledFilter<'a> {
    Predicate(&'a (dyn Fn(&ProxyNode) -> bool + Send + Sync)),
    Keywords {
        keywords: &'a [String],
        strict: bool,
        negate: bool,
    },
    Pattern(Regex),
    Types(&'a [NodeType]),
    Merge {
        filters: Vec<CompiledFilter<'a>>,
        strict: bool,
    },
}

impl CompiledFilter<'_> {
    fn matches(&self, node: &ProxyNode) -> bool {
        match self {
            CompiledFilter::Predicate(f) => f(node),
            CompiledFilter::Keywords {
                keywords,
                strict,
                negate,
            } => keywords_match(&node.node_name, keywords, *strict) != *negate,
            CompiledFilter::Pattern(re) => re.is_match(&node.node_name),
            CompiledFilter::Types(types) => types.contains(&node.node_type()),
            CompiledFilter::Merge { filters, strict } => {
                if *strict {
                    filters.iter().all(|f| f.matches(node))
                } else {
                    filters.iter().any(|f| f.matches(node))
                }
            }
        }
    }
}

/// A validated filter. Without a filter every enabled node is selected.
pub struct NodeSelector<'a> {
    filter: Option<CompiledFilter<'a>>,
}

impl<'a> NodeSelector<'a> {
    pub fn new(filter: Option<&'a NodeFilter>) -> Result<Self> {
        let filter = filter.map(NodeFilter::compile).transpose()?;
        Ok(NodeSelector { filter })
    }

    pub fn accepts(&self, node: &ProxyNode) -> bool {
        node.enable && self.filter.as_ref().map_or(true, |f| f.matches(node))
    }

    pub fn select(&'a self, nodes: &'a [ProxyNode]) -> impl Iterator<Item = &'a ProxyNode> {
        nodes.iter().filter(move |node| self.accepts(node))
    }
}

/// Serializable filter description, as found in settings files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FilterDef {
    Keywords {
        keywords: Vec<String>,
        #[serde(default)]
        strict: bool,
    },
    Discard {
        keywords: Vec<String>,
        #[serde(default)]
        strict: bool,
    },
    Pattern {
        pattern: String,
    },
    Types {
        types: Vec<NodeType>,
    },
    Builtin {
        name: String,
    },
    Merge {
        filters: Vec<FilterDef>,
        #[serde(default)]
        strict: bool,
    },
}

impl From<FilterDef> for NodeFilter {
    fn from(def: FilterDef) -> Self {
        match def {
            FilterDef::Keywords { keywords, strict } => NodeFilter::Keywords { keywords, strict },
            FilterDef::Discard { keywords, strict } => NodeFilter::Discard { keywords, strict },
            FilterDef::Pattern { pattern } => NodeFilter::Pattern(pattern),
            FilterDef::Types { types } => NodeFilter::Types(types),
            FilterDef::Builtin { name } => NodeFilter::Builtin(name),
            FilterDef::Merge { filters, strict } => NodeFilter::Merge {
                filters: filters.into_iter().map(NodeFilter::from).collect(),
                strict,
            },
        }
    }
}
