//! Structural Mutations
//!
//! Insert, update and delete over a forest. Each operation returns a new
//! forest together with an outcome. Referencing an id that does not exist is
//! not an error: the forest comes back unchanged and the outcome is
//! [`MutationOutcome::NotFound`], so callers can branch (e.g. show a toast)
//! without the operation ever failing.

use super::{Patch, TreeNode};

/// Whether a mutation found its target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    Applied,
    NotFound,
}

/// New forest produced by a mutation
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub struct Mutation<N> {
    pub forest: Vec<N>,
    pub outcome: MutationOutcome,
}

impl<N> Mutation<N> {
    fn applied(forest: Vec<N>) -> Self {
        Self {
            forest,
            outcome: MutationOutcome::Applied,
        }
    }

    fn not_found(forest: Vec<N>) -> Self {
        Self {
            forest,
            outcome: MutationOutcome::NotFound,
        }
    }

    pub fn is_applied(&self) -> bool {
        self.outcome == MutationOutcome::Applied
    }

    pub fn into_forest(self) -> Vec<N> {
        self.forest
    }
}

/// Append `node` under `parent_id`, or to the root list when `parent_id` is `None`.
///
/// `node.id()` must be unique across the forest; this is not checked.
pub fn insert_child<N: TreeNode>(forest: &[N], parent_id: Option<&str>, node: N) -> Mutation<N> {
    let Some(parent_id) = parent_id else {
        let mut next = forest.to_vec();
        next.push(node);
        return Mutation::applied(next);
    };

    let mut next = forest.to_vec();
    let mut pending = Some(node);
    if append_under(&mut next, parent_id, &mut pending) {
        Mutation::applied(next)
    } else {
        tracing::debug!(parent_id, "insert target not found, forest unchanged");
        Mutation::not_found(next)
    }
}

/// Merge `patch` into the node with `id`.
///
/// Fields the patch does not carry are left as they are. A patch carrying
/// children replaces the whole child list.
pub fn update_node<N, P>(forest: &[N], id: &str, patch: P) -> Mutation<N>
where
    N: TreeNode,
    P: Patch<N>,
{
    let mut next = forest.to_vec();
    match find_mut(&mut next, id) {
        Some(node) => {
            patch.apply_to(node);
            Mutation::applied(next)
        }
        None => {
            tracing::debug!(id, "update target not found, forest unchanged");
            Mutation::not_found(next)
        }
    }
}

/// Remove the node with `id` and its whole subtree, wherever it occurs.
pub fn delete_subtree<N: TreeNode>(forest: &[N], id: &str) -> Mutation<N> {
    let mut removed = false;
    let next = without(forest, id, &mut removed);
    if removed {
        Mutation::applied(next)
    } else {
        tracing::debug!(id, "delete target not found, forest unchanged");
        Mutation::not_found(next)
    }
}

fn append_under<N: TreeNode>(nodes: &mut [N], parent_id: &str, pending: &mut Option<N>) -> bool {
    for node in nodes.iter_mut() {
        if node.id() == parent_id {
            if let Some(child) = pending.take() {
                node.children_mut().push(child);
            }
            return true;
        }
        if append_under(node.children_mut(), parent_id, pending) {
            return true;
        }
    }
    false
}

fn find_mut<'a, N: TreeNode>(nodes: &'a mut [N], id: &str) -> Option<&'a mut N> {
    for node in nodes.iter_mut() {
        if node.id() == id {
            return Some(node);
        }
        if let Some(found) = find_mut(node.children_mut(), id) {
            return Some(found);
        }
    }
    None
}

fn without<N: TreeNode>(nodes: &[N], id: &str, removed: &mut bool) -> Vec<N> {
    let mut kept = Vec::with_capacity(nodes.len());
    for node in nodes {
        if node.id() == id {
            *removed = true;
            continue;
        }
        kept.push(node.with_children(without(node.children(), id, removed)));
    }
    kept
}
