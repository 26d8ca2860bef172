//! Generic Node
//!
//! A minimal tree node with a label and an optional secondary text (owner,
//! manager, path...). Used wherever a view does not need a dedicated type,
//! and as the reference implementation of [`TreeNode`].
//!
//! # Examples
//!
//! ```rust
//! use admin_tree_core::models::Node;
//!
//! let forest = vec![
//!     Node::branch("1", "Engineering", vec![Node::new("1-1", "Backend")]),
//!     Node::new("2", "Sales").with_secondary("Jordan"),
//! ];
//! assert_eq!(forest[0].children.len(), 1);
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;
use thiserror::Error;

use crate::tree::{Patch, TreeNode};

/// Validation errors for a forest
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Node at path '{path}' has an empty id")]
    EmptyId { path: String },

    #[error("Duplicate node id: {0}")]
    DuplicateId(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    /// Unique identifier across the forest
    pub id: String,

    /// Display name
    pub label: String,

    /// Secondary searchable text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Node {
    /// Leaf node
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            secondary: None,
            children: Vec::new(),
        }
    }

    /// Node with children
    pub fn branch(id: impl Into<String>, label: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            children,
            ..Self::new(id, label)
        }
    }

    pub fn with_secondary(mut self, secondary: impl Into<String>) -> Self {
        self.secondary = Some(secondary.into());
        self
    }
}

impl TreeNode for Node {
    fn id(&self) -> &str {
        &self.id
    }

    fn searchable_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.label.as_str()];
        if let Some(secondary) = &self.secondary {
            fields.push(secondary);
        }
        fields
    }

    fn children(&self) -> &[Self] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut Vec<Self> {
        &mut self.children
    }

    fn shallow_clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            label: self.label.clone(),
            secondary: self.secondary.clone(),
            children: Vec::new(),
        }
    }
}

/// Maps a present field to `Some`, keeping an explicit `null` as `Some(None)`.
///
/// A missing field falls back to `None` through `#[serde(default)]`.
fn deserialize_optional_field<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Some(Option::<T>::deserialize(deserializer)?))
}

/// Partial update for [`Node`]
///
/// `secondary` uses the double-Option pattern:
/// - `None`: leave unchanged
/// - `Some(None)`: clear it
/// - `Some(Some(text))`: set it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_optional_field"
    )]
    pub secondary: Option<Option<String>>,

    /// Replaces the whole child list when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Node>>,
}

impl NodeUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_secondary(mut self, secondary: impl Into<String>) -> Self {
        self.secondary = Some(Some(secondary.into()));
        self
    }

    pub fn clear_secondary(mut self) -> Self {
        self.secondary = Some(None);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.label.is_none() && self.secondary.is_none() && self.children.is_none()
    }
}

impl Patch<Node> for NodeUpdate {
    fn apply_to(self, node: &mut Node) {
        if let Some(label) = self.label {
            node.label = label;
        }
        if let Some(secondary) = self.secondary {
            node.secondary = secondary;
        }
        if let Some(children) = self.children {
            node.children = children;
        }
    }
}

/// Check the forest invariants: every id non-empty and unique across the
/// whole forest.
///
/// Reports the first violation in depth-first order.
pub fn validate_forest<N: TreeNode>(forest: &[N]) -> Result<(), ValidationError> {
    fn walk<N: TreeNode>(
        nodes: &[N],
        parent_path: &str,
        seen: &mut HashSet<String>,
    ) -> Result<(), ValidationError> {
        for (index, node) in nodes.iter().enumerate() {
            let path = if parent_path.is_empty() {
                index.to_string()
            } else {
                format!("{}/{}", parent_path, index)
            };
            if node.id().is_empty() {
                return Err(ValidationError::EmptyId { path });
            }
            if !seen.insert(node.id().to_string()) {
                return Err(ValidationError::DuplicateId(node.id().to_string()));
            }
            walk(node.children(), &path, seen)?;
        }
        Ok(())
    }

    walk(forest, "", &mut HashSet::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_searchable_fields_include_secondary() {
        let node = Node::new("1", "Backend").with_secondary("Riley");
        assert_eq!(node.searchable_fields(), vec!["Backend", "Riley"]);
        assert!(node.matches_lowercase("ril"));
        assert!(!node.matches_lowercase("front"));
    }

    #[test]
    fn test_shallow_clone_drops_children() {
        let node = Node::branch("1", "A", vec![Node::new("2", "B")]);
        let copy = node.shallow_clone();
        assert_eq!(copy.id, "1");
        assert!(copy.children.is_empty());
    }

    #[test]
    fn test_update_clear_secondary() {
        let mut node = Node::new("1", "A").with_secondary("owner");
        NodeUpdate::new().clear_secondary().apply_to(&mut node);
        assert_eq!(node.secondary, None);
    }

    #[test]
    fn test_empty_update_changes_nothing() {
        let mut node = Node::branch("1", "A", vec![Node::new("2", "B")]);
        let before = node.clone();
        let update = NodeUpdate::new();
        assert!(update.is_empty());
        update.apply_to(&mut node);
        assert_eq!(node, before);
    }

    #[test]
    fn test_validate_accepts_unique_ids() {
        let forest = vec![
            Node::branch("1", "A", vec![Node::new("1-1", "B")]),
            Node::new("2", "C"),
        ];
        assert_eq!(validate_forest(&forest), Ok(()));
    }

    #[test]
    fn test_validate_rejects_duplicate_across_levels() {
        let forest = vec![
            Node::branch("1", "A", vec![Node::new("2", "B")]),
            Node::new("2", "C"),
        ];
        assert_eq!(
            validate_forest(&forest),
            Err(ValidationError::DuplicateId("2".to_string()))
        );
    }

    #[test]
    fn test_validate_rejects_empty_id() {
        let forest = vec![Node::branch("1", "A", vec![Node::new("", "B")])];
        let err = validate_forest(&forest).unwrap_err();
        assert_eq!(err.to_string(), "Node at path '0/0' has an empty id");
    }

    #[test]
    fn test_update_null_clears_missing_leaves() {
        let clear: NodeUpdate = serde_json::from_str(r#"{"secondary":null}"#).unwrap();
        assert_eq!(clear.secondary, Some(None));

        let keep: NodeUpdate = serde_json::from_str(r#"{"label":"B"}"#).unwrap();
        assert_eq!(keep.secondary, None);
        assert_eq!(keep.label.as_deref(), Some("B"));
    }

    #[test]
    fn test_deserialize_without_children() {
        let node: Node = serde_json::from_str(r#"{"id":"1","label":"Solo"}"#).unwrap();
        assert!(node.children.is_empty());
        assert_eq!(node.secondary, None);

        let json = serde_json::to_string(&node).unwrap();
        assert_eq!(json, r#"{"id":"1","label":"Solo"}"#);
    }
}
