//! Tree Inspector
//!
//! Loads a department or menu forest, applies a search query and prints the
//! rows the console would render, indented by depth. Handy for checking a
//! JSON export or a preferences file without starting the UI.
//!
//! # Usage
//!
//! ```bash
//! # Built-in departments, search by manager
//! TREE_QUERY="chen" cargo run --bin tree-inspect
//!
//! # Menus from a file with saved expansion
//! TREE_KIND=menus TREE_FILE=menus.json TREE_PREFERENCES=prefs.json cargo run --bin tree-inspect
//! ```
//!
//! # Environment
//!
//! - `TREE_KIND` - `departments` (default) or `menus`
//! - `TREE_QUERY` - search text, empty shows the full forest
//! - `TREE_FILE` - JSON array of nodes; the built-in fixtures are used when unset
//! - `TREE_PREFERENCES` - view preferences file supplying the default expansion
//! - `RUST_LOG` - log filter, defaults to `tree_inspect=info,admin_tree_core=info`

use admin_tree_core::config::{load_preferences, PanelPreferences, ViewPreferences};
use admin_tree_core::source::{fixtures, ForestSource, JsonFileSource, MockForestSource};
use admin_tree_core::tree::{max_depth, node_count, TreeNode};
use admin_tree_core::{Department, MenuItem, TreeView};
use serde::de::DeserializeOwned;
use std::env;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy)]
enum TreeKind {
    Departments,
    Menus,
}

impl TreeKind {
    fn from_env() -> anyhow::Result<Self> {
        match env::var("TREE_KIND").ok().as_deref() {
            None | Some("") | Some("departments") => Ok(Self::Departments),
            Some("menus") => Ok(Self::Menus),
            Some(other) => Err(anyhow::anyhow!(
                "Unknown TREE_KIND '{}', expected 'departments' or 'menus'",
                other
            )),
        }
    }
}

/// Pick the file source when `TREE_FILE` is set, otherwise the fixtures
fn select_source<N>(file: Option<PathBuf>, fixture: fn() -> Vec<N>) -> Box<dyn ForestSource<N>>
where
    N: TreeNode + DeserializeOwned + Send + Sync + 'static,
{
    match file {
        Some(path) => Box::new(JsonFileSource::new(path)),
        None => Box::new(MockForestSource::new(fixture())),
    }
}

async fn inspect<N>(
    source: &dyn ForestSource<N>,
    panel: &PanelPreferences,
    indent_width: usize,
    query: &str,
) -> anyhow::Result<()>
where
    N: TreeNode + Send,
{
    let mut view = TreeView::<N>::load(source, panel.expand_state()).await?;
    view.set_query(query);

    println!(
        "{} nodes, depth {}, {} shown after filter",
        node_count(view.forest()),
        max_depth(view.forest()),
        node_count(view.visible())
    );

    for row in view.rows() {
        let marker = match (row.has_children, row.expanded) {
            (false, _) => ' ',
            (true, true) => 'v',
            (true, false) => '>',
        };
        // pixel indent rendered at 8px per column
        println!(
            "{}{} {}  [{}]",
            " ".repeat(row.indent(indent_width) / 8),
            marker,
            row.node.searchable_fields().join(" | "),
            row.id()
        );
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("tree_inspect=info,admin_tree_core=info")),
        )
        .init();

    let kind = TreeKind::from_env()?;
    let query = env::var("TREE_QUERY").unwrap_or_default();
    let file = env::var_os("TREE_FILE").map(PathBuf::from);

    let prefs = match env::var_os("TREE_PREFERENCES") {
        Some(path) => load_preferences(&PathBuf::from(path)).await?,
        None => ViewPreferences::default(),
    };

    tracing::info!(?kind, query = %query, "inspecting tree");

    match kind {
        TreeKind::Departments => {
            let source = select_source::<Department>(file, fixtures::departments);
            inspect(source.as_ref(), &prefs.departments, prefs.indent_width, &query).await
        }
        TreeKind::Menus => {
            let source = select_source::<MenuItem>(file, fixtures::menus);
            inspect(source.as_ref(), &prefs.menus, prefs.indent_width, &query).await
        }
    }
}
