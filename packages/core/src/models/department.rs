//! Department hierarchy
//!
//! Departments carry quota columns (token limit, storage limit, usage) next to
//! the organisational data. Search matches on name and manager.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::tree::{Patch, TreeNode};

pub const DEFAULT_TOKEN_LIMIT: &str = "Unlimited";
pub const DEFAULT_STORAGE_LIMIT: &str = "100 GB";

/// Quota usage band used to colour the usage bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UsageLevel {
    Normal,
    Warning,
    Critical,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub manager: String,
    #[serde(default)]
    pub member_count: u32,
    #[serde(default)]
    pub location: String,
    #[serde(default = "default_token_limit")]
    pub token_limit: String,
    #[serde(default = "default_storage_limit")]
    pub storage_limit: String,
    /// Quota usage in percent; may fall outside 0..=100 in raw data
    #[serde(default)]
    pub usage: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Department>,
}

fn default_token_limit() -> String {
    DEFAULT_TOKEN_LIMIT.to_string()
}

fn default_storage_limit() -> String {
    DEFAULT_STORAGE_LIMIT.to_string()
}

impl Department {
    /// New department with a generated UUID and default quotas
    pub fn new(name: impl Into<String>) -> Self {
        Self::new_with_id(Uuid::new_v4().to_string(), name)
    }

    /// New department with a caller-chosen id
    pub fn new_with_id(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            manager: String::new(),
            member_count: 0,
            location: String::new(),
            token_limit: default_token_limit(),
            storage_limit: default_storage_limit(),
            usage: 0.0,
            children: Vec::new(),
        }
    }

    pub fn with_manager(mut self, manager: impl Into<String>) -> Self {
        self.manager = manager.into();
        self
    }

    pub fn with_sub_departments(mut self, children: Vec<Department>) -> Self {
        self.children = children;
        self
    }

    /// Usage clamped to 0..=100
    pub fn clamped_usage(&self) -> f64 {
        if self.usage.is_nan() {
            return 0.0;
        }
        self.usage.clamp(0.0, 100.0)
    }

    pub fn usage_level(&self) -> UsageLevel {
        let usage = self.clamped_usage();
        if usage > 80.0 {
            UsageLevel::Critical
        } else if usage > 60.0 {
            UsageLevel::Warning
        } else {
            UsageLevel::Normal
        }
    }

    /// Member count of this department and every sub-department
    pub fn total_members(&self) -> u32 {
        self.member_count
            + self
                .children
                .iter()
                .map(Department::total_members)
                .sum::<u32>()
    }
}

impl TreeNode for Department {
    fn id(&self) -> &str {
        &self.id
    }

    fn searchable_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.manager.as_str()]
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
            name: self.name.clone(),
            manager: self.manager.clone(),
            member_count: self.member_count,
            location: self.location.clone(),
            token_limit: self.token_limit.clone(),
            storage_limit: self.storage_limit.clone(),
            usage: self.usage,
            children: Vec::new(),
        }
    }
}

/// Partial update for [`Department`], as submitted by the edit form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_limit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_limit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<f64>,
    /// Replaces the whole child list when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Department>>,
}

impl DepartmentUpdate {
    /// Build a new department from a create form.
    ///
    /// Blank fields fall back to the defaults of [`Department::new`];
    /// `fallback_name` is used when no name was entered.
    pub fn into_new_department(self, fallback_name: &str) -> Department {
        let name = self
            .name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| fallback_name.to_string());

        let mut department = Department::new(name);
        if let Some(manager) = self.manager {
            department.manager = manager;
        }
        if let Some(location) = self.location {
            department.location = location;
        }
        if let Some(token_limit) = self.token_limit.filter(|v| !v.is_empty()) {
            department.token_limit = token_limit;
        }
        if let Some(storage_limit) = self.storage_limit.filter(|v| !v.is_empty()) {
            department.storage_limit = storage_limit;
        }
        department
    }
}

impl Patch<Department> for DepartmentUpdate {
    fn apply_to(self, node: &mut Department) {
        if let Some(name) = self.name {
            node.name = name;
        }
        if let Some(manager) = self.manager {
            node.manager = manager;
        }
        if let Some(member_count) = self.member_count {
            node.member_count = member_count;
        }
        if let Some(location) = self.location {
            node.location = location;
        }
        if let Some(token_limit) = self.token_limit {
            node.token_limit = token_limit;
        }
        if let Some(storage_limit) = self.storage_limit {
            node.storage_limit = storage_limit;
        }
        if let Some(usage) = self.usage {
            node.usage = usage;
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
    fn test_new_department_defaults() {
        let dept = Department::new("Platform");
        assert!(Uuid::parse_str(&dept.id).is_ok());
        assert_eq!(dept.token_limit, "Unlimited");
        assert_eq!(dept.storage_limit, "100 GB");
        assert_eq!(dept.member_count, 0);
        assert_eq!(dept.usage, 0.0);
        assert!(dept.children.is_empty());
    }

    #[test]
    fn test_generated_ids_are_distinct() {
        assert_ne!(Department::new("A").id, Department::new("A").id);
    }

    #[test]
    fn test_usage_level_bands() {
        let mut dept = Department::new_with_id("d", "D");
        for (usage, level) in [
            (0.0, UsageLevel::Normal),
            (60.0, UsageLevel::Normal),
            (60.5, UsageLevel::Warning),
            (80.0, UsageLevel::Warning),
            (81.0, UsageLevel::Critical),
            (250.0, UsageLevel::Critical),
            (-5.0, UsageLevel::Normal),
        ] {
            dept.usage = usage;
            assert_eq!(dept.usage_level(), level, "usage {}", usage);
        }
    }

    #[test]
    fn test_clamped_usage() {
        let mut dept = Department::new_with_id("d", "D");
        dept.usage = 140.0;
        assert_eq!(dept.clamped_usage(), 100.0);
        dept.usage = f64::NAN;
        assert_eq!(dept.clamped_usage(), 0.0);
    }

    #[test]
    fn test_search_fields_are_name_and_manager() {
        let dept = Department::new_with_id("d", "Finance").with_manager("Avery Chen");
        assert!(dept.matches_lowercase("avery"));
        assert!(dept.matches_lowercase("fin"));
        assert!(!dept.matches_lowercase("shanghai"));
    }

    #[test]
    fn test_total_members() {
        let mut child = Department::new_with_id("c", "C");
        child.member_count = 4;
        let mut root = Department::new_with_id("r", "R").with_sub_departments(vec![child]);
        root.member_count = 10;
        assert_eq!(root.total_members(), 14);
    }

    #[test]
    fn test_update_keeps_id_and_children() {
        let mut dept = Department::new_with_id("d", "Old")
            .with_sub_departments(vec![Department::new_with_id("c", "Child")]);
        DepartmentUpdate {
            name: Some("New".to_string()),
            usage: Some(42.0),
            ..Default::default()
        }
        .apply_to(&mut dept);

        assert_eq!(dept.id, "d");
        assert_eq!(dept.name, "New");
        assert_eq!(dept.usage, 42.0);
        assert_eq!(dept.children.len(), 1);
    }

    #[test]
    fn test_create_form_fallbacks() {
        let dept = DepartmentUpdate {
            name: Some("   ".to_string()),
            storage_limit: Some(String::new()),
            location: Some("Berlin".to_string()),
            ..Default::default()
        }
        .into_new_department("New Department");

        assert_eq!(dept.name, "New Department");
        assert_eq!(dept.storage_limit, DEFAULT_STORAGE_LIMIT);
        assert_eq!(dept.location, "Berlin");
    }

    #[test]
    fn test_deserialize_applies_defaults() {
        let dept: Department =
            serde_json::from_str(r#"{"id":"1","name":"Ops","memberCount":3}"#).unwrap();
        assert_eq!(dept.member_count, 3);
        assert_eq!(dept.token_limit, DEFAULT_TOKEN_LIMIT);
        assert!(dept.children.is_empty());
    }
}
