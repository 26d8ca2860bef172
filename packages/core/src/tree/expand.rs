//! Expand state
//!
//! The set of node ids whose children are shown. Membership does not depend on
//! whether the node currently has visible children: an id may stay expanded
//! while a search hides all of its children.
//!
//! All transitions are copy-then-modify. Methods take `&self` and return a new
//! state, so a caller holding a previous snapshot never sees it change.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpandState {
    ids: BTreeSet<String>,
}

impl ExpandState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// New state with `id` removed if present, added otherwise
    pub fn toggled(&self, id: &str) -> Self {
        let mut next = self.clone();
        if !next.ids.remove(id) {
            next.ids.insert(id.to_string());
        }
        next
    }

    /// New state with `id` added
    pub fn with(&self, id: &str) -> Self {
        self.with_all([id])
    }

    /// New state with every id in `ids` added
    pub fn with_all<I, S>(&self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut next = self.clone();
        next.ids
            .extend(ids.into_iter().map(|id| id.as_ref().to_string()));
        next
    }

    /// New state with `id` removed
    pub fn without(&self, id: &str) -> Self {
        let mut next = self.clone();
        next.ids.remove(id);
        next
    }
}

impl<S: Into<String>> FromIterator<S> for ExpandState {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Toggle `id` in `state`, returning the new state.
///
/// Leaves every other id untouched and never mutates `state`.
pub fn toggle_expand(state: &ExpandState, id: &str) -> ExpandState {
    state.toggled(id)
}
