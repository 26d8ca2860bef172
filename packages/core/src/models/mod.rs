//! Data Models
//!
//! Node types rendered as trees by the admin console:
//!
//! - `Node` - generic labelled node
//! - `Department` - organisational unit with quota columns
//! - `MenuItem` - navigation entry
//!
//! Each type implements [`crate::tree::TreeNode`] and has a matching update
//! struct implementing [`crate::tree::Patch`].

mod department;
mod menu;
mod node;

pub use department::{
    Department, DepartmentUpdate, UsageLevel, DEFAULT_STORAGE_LIMIT, DEFAULT_TOKEN_LIMIT,
};
pub use menu::{MenuItem, MenuItemUpdate};
pub use node::{validate_forest, Node, NodeUpdate, ValidationError};
