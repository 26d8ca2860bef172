//! Read-only lookups over a forest

use super::TreeNode;

/// Find the node with `id` anywhere in the forest (pre-order)
pub fn find<'a, N: TreeNode>(forest: &'a [N], id: &str) -> Option<&'a N> {
    forest.iter().find_map(|node| {
        if node.id() == id {
            Some(node)
        } else {
            find(node.children(), id)
        }
    })
}

pub fn contains<N: TreeNode>(forest: &[N], id: &str) -> bool {
    find(forest, id).is_some()
}

/// Ids from the root down to the node with `id`, inclusive
pub fn path_to<N: TreeNode>(forest: &[N], id: &str) -> Option<Vec<String>> {
    for node in forest {
        if node.id() == id {
            return Some(vec![node.id().to_string()]);
        }
        if let Some(mut tail) = path_to(node.children(), id) {
            tail.insert(0, node.id().to_string());
            return Some(tail);
        }
    }
    None
}

/// Total number of nodes in the forest
pub fn node_count<N: TreeNode>(forest: &[N]) -> usize {
    forest
        .iter()
        .map(|node| 1 + node_count(node.children()))
        .sum()
}

/// Every id in depth-first pre-order
pub fn collect_ids<N: TreeNode>(forest: &[N]) -> Vec<String> {
    let mut ids = Vec::new();
    collect_into(forest, &mut ids);
    ids
}

fn collect_into<N: TreeNode>(forest: &[N], ids: &mut Vec<String>) {
    for node in forest {
        ids.push(node.id().to_string());
        collect_into(node.children(), ids);
    }
}

/// Number of levels in the forest; 0 for an empty forest, 1 for roots only
pub fn max_depth<N: TreeNode>(forest: &[N]) -> usize {
    forest
        .iter()
        .map(|node| 1 + max_depth(node.children()))
        .max()
        .unwrap_or(0)
}
