//! Navigation menu tree

use serde::{Deserialize, Serialize};

use crate::tree::{Patch, TreeNode};

fn default_visible() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    pub title: String,
    /// Route path, e.g. `/admin/users`
    #[serde(default)]
    pub path: String,
    /// Icon name; unknown names fall back to a generic glyph in the view
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MenuItem>,
}

impl MenuItem {
    pub fn new(id: impl Into<String>, title: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            path: path.into(),
            icon: String::new(),
            sort_order: 0,
            visible: true,
            children: Vec::new(),
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn with_sort_order(mut self, sort_order: i32) -> Self {
        self.sort_order = sort_order;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub fn with_items(mut self, children: Vec<MenuItem>) -> Self {
        self.children = children;
        self
    }
}

impl TreeNode for MenuItem {
    fn id(&self) -> &str {
        &self.id
    }

    fn searchable_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.path.as_str()]
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
            title: self.title.clone(),
            path: self.path.clone(),
            icon: self.icon.clone(),
            sort_order: self.sort_order,
            visible: self.visible,
            children: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<MenuItem>>,
}

impl Patch<MenuItem> for MenuItemUpdate {
    fn apply_to(self, node: &mut MenuItem) {
        if let Some(title) = self.title {
            node.title = title;
        }
        if let Some(path) = self.path {
            node.path = path;
        }
        if let Some(icon) = self.icon {
            node.icon = icon;
        }
        if let Some(sort_order) = self.sort_order {
            node.sort_order = sort_order;
        }
        if let Some(visible) = self.visible {
            node.visible = visible;
        }
        if let Some(children) = self.children {
            node.children = children;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_matches_title_and_path() {
        let item = MenuItem::new("3-1", "Menu Management", "/system/menus");
        assert!(item.matches_lowercase("management"));
        assert!(item.matches_lowercase("/system"));
        assert!(!item.matches_lowercase("users"));
    }

    #[test]
    fn test_visibility_patch() {
        let mut item = MenuItem::new("1", "Dashboard", "/dashboard").with_icon("LayoutDashboard");
        MenuItemUpdate {
            visible: Some(false),
            ..Default::default()
        }
        .apply_to(&mut item);

        assert!(!item.visible);
        assert_eq!(item.icon, "LayoutDashboard");
    }

    #[test]
    fn test_deserialize_defaults_to_visible() {
        let item: MenuItem =
            serde_json::from_str(r#"{"id":"1","title":"Home","sortOrder":2}"#).unwrap();
        assert!(item.visible);
        assert_eq!(item.sort_order, 2);
        assert_eq!(item.path, "");
    }
}
