//! Tree Operations
//!
//! Pure, synchronous transformations over a forest of [`TreeNode`] values:
//!
//! - [`filter`] - recursive case-insensitive search with ancestor auto-expand
//! - [`expand`] - expand-state tracking keyed by node id
//! - [`mutate`] - insert child, update node, delete subtree
//! - [`query`] - lookups (find, path, counts)
//! - [`flatten`] - depth-first visible rows for the view layer
//!
//! Every operation takes the forest by reference and returns a new value.
//! The input forest is never modified in place.

pub mod expand;
pub mod filter;
pub mod flatten;
pub mod mutate;
pub mod query;

pub use expand::{toggle_expand, ExpandState};
pub use filter::{filter, filter_forest, Filtered};
pub use flatten::{visible_rows, Row};
pub use mutate::{delete_subtree, insert_child, update_node, Mutation, MutationOutcome};
pub use query::{collect_ids, contains, find, max_depth, node_count, path_to};

/// A node in a forest.
///
/// Implementors own their children outright (`Vec<Self>`), so a forest is a
/// plain `Vec<N>` with no shared or back references. Ids must be unique across
/// the whole forest, not only among siblings.
pub trait TreeNode: Clone {
    /// Stable identifier, unique across the forest
    fn id(&self) -> &str;

    /// Text attributes eligible for substring matching, in display order
    fn searchable_fields(&self) -> Vec<&str>;

    /// Ordered child nodes (empty for leaves)
    fn children(&self) -> &[Self];

    /// Mutable access to the child list
    fn children_mut(&mut self) -> &mut Vec<Self>;

    /// Copy of this node with an empty child list.
    ///
    /// Used when rebuilding a forest level by level so that subtrees are not
    /// cloned only to be thrown away.
    fn shallow_clone(&self) -> Self;

    /// Copy of this node carrying `children` instead of its own
    fn with_children(&self, children: Vec<Self>) -> Self {
        let mut node = self.shallow_clone();
        *node.children_mut() = children;
        node
    }

    fn has_children(&self) -> bool {
        !self.children().is_empty()
    }

    /// Case-insensitive substring match against any searchable field.
    ///
    /// `needle` must already be lowercased.
    fn matches_lowercase(&self, needle: &str) -> bool {
        self.searchable_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

/// Partial update applied to a node of type `N`.
///
/// Implementations merge only the fields they carry. A patch that carries a
/// child list replaces the existing children entirely; callers that want to
/// keep the subtree must leave it out.
pub trait Patch<N> {
    fn apply_to(self, node: &mut N);
}
