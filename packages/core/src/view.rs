//! Tree View State
//!
//! `TreeView` is the single owner of one tree panel's state: the full
//! forest, the expand state and the current search query. It wires together
//! the side effects that belong to each operation:
//!
//! - a search merges the ids of ancestors of matches into the expand state
//! - inserting under a parent expands that parent
//! - every mutation re-applies the current query
//!
//! There is exactly one writer (the event handler owning the view), so no
//! locking is involved. The forest and expand state are replaced by new
//! values on every transition, never patched in place.

use crate::source::{ForestSource, SourceError};
use crate::tree::{
    delete_subtree, filter, insert_child, update_node, visible_rows, ExpandState, Mutation,
    MutationOutcome, Patch, Row, TreeNode,
};

#[derive(Debug, Clone)]
pub struct TreeView<N> {
    forest: Vec<N>,
    expanded: ExpandState,
    query: String,
    visible: Vec<N>,
}

impl<N: TreeNode> TreeView<N> {
    pub fn new(forest: Vec<N>, expanded: ExpandState) -> Self {
        Self {
            visible: forest.clone(),
            forest,
            expanded,
            query: String::new(),
        }
    }

    /// Build a view from a data source
    pub async fn load<S>(source: &S, expanded: ExpandState) -> Result<Self, SourceError>
    where
        S: ForestSource<N> + ?Sized,
        N: Send,
    {
        let forest = source.list().await?;
        Ok(Self::new(forest, expanded))
    }

    /// Full, unfiltered forest
    pub fn forest(&self) -> &[N] {
        &self.forest
    }

    /// Forest after applying the current query
    pub fn visible(&self) -> &[N] {
        &self.visible
    }

    pub fn expand_state(&self) -> &ExpandState {
        &self.expanded
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.is_expanded(id)
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.refresh();
    }

    pub fn clear_query(&mut self) {
        self.set_query(String::new());
    }

    pub fn toggle(&mut self, id: &str) {
        self.expanded = self.expanded.toggled(id);
    }

    /// Swap in a freshly fetched forest, keeping query and expand state
    pub fn replace_forest(&mut self, forest: Vec<N>) {
        self.forest = forest;
        self.refresh();
    }

    /// Append `node` under `parent_id` (or at the root) and expand the parent
    pub fn insert_child(&mut self, parent_id: Option<&str>, node: N) -> MutationOutcome {
        let outcome = self.commit(insert_child(&self.forest, parent_id, node));
        if let (MutationOutcome::Applied, Some(parent_id)) = (outcome, parent_id) {
            self.expanded = self.expanded.with(parent_id);
        }
        outcome
    }

    pub fn update<P: Patch<N>>(&mut self, id: &str, patch: P) -> MutationOutcome {
        self.commit(update_node(&self.forest, id, patch))
    }

    /// Remove `id` and its subtree.
    ///
    /// Expand-state entries of removed ids are left in place; they are inert
    /// because no row carries them any more.
    pub fn delete(&mut self, id: &str) -> MutationOutcome {
        self.commit(delete_subtree(&self.forest, id))
    }

    /// Visible rows of the filtered forest, depth-first
    pub fn rows(&self) -> Vec<Row<'_, N>> {
        visible_rows(&self.visible, &self.expanded)
    }

    fn commit(&mut self, mutation: Mutation<N>) -> MutationOutcome {
        let Mutation { forest, outcome } = mutation;
        if outcome == MutationOutcome::Applied {
            self.forest = forest;
            self.refresh();
        }
        outcome
    }

    fn refresh(&mut self) {
        let (visible, expanded) = filter(&self.forest, &self.query, &self.expanded);
        self.visible = visible;
        self.expanded = expanded;
    }
}
