//! Recursive Search Filter
//!
//! Keeps a node when any of its searchable fields contains the query
//! (case-insensitive), or when at least one of its descendants does. Kept
//! nodes carry their *filtered* children, so non-matching descendants are
//! pruned even below a matching ancestor.
//!
//! The filter also reports which ids must be expanded so that surviving
//! descendants are visible without a manual toggle.

use super::{ExpandState, TreeNode};

/// Result of filtering a forest
#[derive(Debug, Clone, PartialEq)]
pub struct Filtered<N> {
    /// Filtered forest, sibling order preserved at every depth
    pub nodes: Vec<N>,

    /// Ids of kept nodes whose filtered child list is non-empty.
    ///
    /// Always includes every ancestor that was kept only because of a
    /// matching descendant. Empty when the query is empty.
    pub expanded: Vec<String>,
}

/// Filter `forest` by `query`.
///
/// An empty query returns a copy of the forest unchanged and requests no
/// expansion.
pub fn filter_forest<N: TreeNode>(forest: &[N], query: &str) -> Filtered<N> {
    if query.is_empty() {
        return Filtered {
            nodes: forest.to_vec(),
            expanded: Vec::new(),
        };
    }

    let needle = query.to_lowercase();
    let mut expanded = Vec::new();
    let nodes = filter_level(forest, &needle, &mut expanded);

    tracing::debug!(
        query,
        kept = nodes.len(),
        auto_expanded = expanded.len(),
        "filtered forest"
    );

    Filtered { nodes, expanded }
}

/// Filter `forest` and merge the auto-expand ids into `state`.
///
/// Returns the filtered forest and the new expand state; `state` itself is
/// not modified.
pub fn filter<N: TreeNode>(forest: &[N], query: &str, state: &ExpandState) -> (Vec<N>, ExpandState) {
    let Filtered { nodes, expanded } = filter_forest(forest, query);
    let state = if expanded.is_empty() {
        state.clone()
    } else {
        state.with_all(&expanded)
    };
    (nodes, state)
}

fn filter_level<N: TreeNode>(nodes: &[N], needle: &str, expanded: &mut Vec<String>) -> Vec<N> {
    nodes
        .iter()
        .filter_map(|node| {
            let children = filter_level(node.children(), needle, expanded);

            if children.is_empty() {
                return node
                    .matches_lowercase(needle)
                    .then(|| node.with_children(Vec::new()));
            }

            expanded.push(node.id().to_string());
            Some(node.with_children(children))
        })
        .collect()
}
