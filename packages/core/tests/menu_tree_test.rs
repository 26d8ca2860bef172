//! Menu Tree Tests
//!
//! Covers the menu panel with persisted preferences: default expansion,
//! toggling, path search and visibility edits.

#[cfg(test)]
mod menu_tree_tests {
    use admin_tree_core::config::{load_preferences, save_preferences, PREF_FILE};
    use admin_tree_core::models::{MenuItem, MenuItemUpdate};
    use admin_tree_core::source::{fixtures, MockForestSource};
    use admin_tree_core::tree::{find, toggle_expand};
    use admin_tree_core::{MutationOutcome, TreeView};
    use anyhow::Result;
    use std::time::Duration;
    use tempfile::TempDir;

    fn row_ids(view: &TreeView<MenuItem>) -> Vec<String> {
        view.rows().iter().map(|row| row.id().to_string()).collect()
    }

    #[tokio::test]
    async fn test_default_preferences_expand_dashboard_and_system() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let prefs = load_preferences(&temp_dir.path().join(PREF_FILE)).await?;

        let source = MockForestSource::new(fixtures::menus()).with_delay(Duration::from_millis(1));
        let view = TreeView::<MenuItem>::load(&source, prefs.menus.expand_state()).await?;

        assert_eq!(
            row_ids(&view),
            vec!["1", "1-1", "1-2", "2", "3", "3-1", "3-2", "3-3", "3-4", "4"]
        );
        let rows = view.rows();
        let menus_row = rows.iter().find(|row| row.id() == "3-4").unwrap();
        assert!(menus_row.has_children);
        assert!(!menus_row.expanded);
        assert_eq!(menus_row.indent(prefs.indent_width), 24);
        Ok(())
    }

    #[tokio::test]
    async fn test_persisted_expansion_is_restored() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join(PREF_FILE);

        let mut prefs = load_preferences(&path).await?;
        let expanded = toggle_expand(&prefs.menus.expand_state(), "1");
        prefs.menus.default_expanded = expanded.iter().map(str::to_string).collect();
        save_preferences(&path, &prefs).await?;

        let reloaded = load_preferences(&path).await?;
        let view = TreeView::new(fixtures::menus(), reloaded.menus.expand_state());
        assert_eq!(
            row_ids(&view),
            vec!["1", "2", "3", "3-1", "3-2", "3-3", "3-4", "4"]
        );
        Ok(())
    }

    #[test]
    fn test_search_by_route_path() {
        let mut view = TreeView::new(fixtures::menus(), Default::default());
        view.set_query("/system/menus/perm");

        assert_eq!(row_ids(&view), vec!["3", "3-4", "3-4-1"]);
        assert!(view.is_expanded("3"));
        assert!(view.is_expanded("3-4"));
    }

    #[test]
    fn test_hide_menu_item() {
        let mut view = TreeView::new(fixtures::menus(), Default::default());
        let outcome = view.update(
            "2",
            MenuItemUpdate {
                visible: Some(false),
                ..Default::default()
            },
        );

        assert_eq!(outcome, MutationOutcome::Applied);
        assert!(!find(view.forest(), "2").unwrap().visible);
        assert_eq!(
            view.update("99", MenuItemUpdate::default()),
            MutationOutcome::NotFound
        );
    }
}
