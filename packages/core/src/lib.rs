//! Admin Tree Core
//!
//! Hierarchical data handling behind the admin console's tree tables
//! (departments, navigation menus).
//!
//! # Architecture
//!
//! - **Plain value trees**: every node owns its children (`Vec<Self>`); a
//!   forest is a `Vec<N>`. No arena, no parent pointers.
//! - **Copy-on-write**: filter and mutations return new forests and new
//!   expand states; inputs are never modified.
//! - **No-op on unknown ids**: mutations report `NotFound` instead of failing.
//!
//! # Modules
//!
//! - [`tree`] - filter, expand state, insert/update/delete, lookups, row flattening
//! - [`models`] - node types (`Node`, `Department`, `MenuItem`) and their patches
//! - [`view`] - `TreeView`, the state holder of one tree panel
//! - [`source`] - async data sources (mock, JSON file) and built-in fixtures
//! - [`config`] - persisted view preferences

pub mod config;
pub mod models;
pub mod source;
pub mod tree;
pub mod view;

// Re-export commonly used types
pub use models::*;
pub use tree::{ExpandState, MutationOutcome, Patch, TreeNode};
pub use view::TreeView;
