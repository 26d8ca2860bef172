//! Visible row flattening
//!
//! Turns a (possibly filtered) forest plus an [`ExpandState`] into the rows a
//! table renders: depth-first, each child directly after its parent, with
//! the depth used for indentation.

use super::{ExpandState, TreeNode};

/// One rendered row
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Row<'a, N> {
    pub node: &'a N,
    /// Depth in the tree being rendered; roots are 0
    pub depth: usize,
    pub has_children: bool,
    pub expanded: bool,
}

impl<N: TreeNode> Row<'_, N> {
    pub fn id(&self) -> &str {
        self.node.id()
    }

    /// Leading indentation for this row given a per-level width
    pub fn indent(&self, width: usize) -> usize {
        self.depth * width
    }
}

/// Flatten the visible part of `forest`.
///
/// A node's children contribute rows only when its id is in `state`.
pub fn visible_rows<'a, N: TreeNode>(forest: &'a [N], state: &ExpandState) -> Vec<Row<'a, N>> {
    forest
        .iter()
        .flat_map(|node| fold_with_depth(node, 0, &|n, d, child_rows| visit(n, d, state, child_rows)))
        .collect()
}

fn visit<'a, N: TreeNode>(
    node: &'a N,
    depth: usize,
    state: &ExpandState,
    child_rows: Vec<Vec<Row<'a, N>>>,
) -> Vec<Row<'a, N>> {
    let expanded = state.is_expanded(node.id());
    let mut rows = vec![Row {
        node,
        depth,
        has_children: node.has_children(),
        expanded,
    }];
    if expanded {
        rows.extend(child_rows.into_iter().flatten());
    }
    rows
}

/// Bottom-up fold with depth tracking.
///
/// Children are folded first and their results handed to `f` together with
/// the node and its depth.
fn fold_with_depth<'a, N, B, F>(node: &'a N, depth: usize, f: &F) -> B
where
    N: TreeNode,
    F: Fn(&'a N, usize, Vec<B>) -> B,
{
    let child_results: Vec<B> = node
        .children()
        .iter()
        .map(|child| fold_with_depth(child, depth + 1, f))
        .collect();
    f(node, depth, child_results)
}
