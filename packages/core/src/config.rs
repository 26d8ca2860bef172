//! View preferences
//!
//! Per-view defaults for the tree tables, stored as JSON. Every field uses
//! `#[serde(default)]` so older files missing new fields still load.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::fs;

use crate::source::fixtures::DEFAULT_EXPANDED_MENU_IDS;
use crate::tree::ExpandState;

pub const PREF_FILE: &str = "tree-preferences.json";

/// Horizontal indent per tree level, in pixels
pub const DEFAULT_INDENT_WIDTH: usize = 24;

#[derive(Error, Debug)]
pub enum PreferencesError {
    #[error("Failed to access preferences at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse preferences: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("Failed to serialize preferences: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl PreferencesError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Preferences of a single tree panel
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PanelPreferences {
    /// Ids expanded when the panel opens
    #[serde(default)]
    pub default_expanded: Vec<String>,
}

impl PanelPreferences {
    pub fn expand_state(&self) -> ExpandState {
        self.default_expanded.iter().map(String::as_str).collect()
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ViewPreferences {
    #[serde(default)]
    pub departments: PanelPreferences,

    #[serde(default = "default_menu_panel")]
    pub menus: PanelPreferences,

    #[serde(default = "default_indent_width")]
    pub indent_width: usize,
}

impl Default for ViewPreferences {
    fn default() -> Self {
        Self {
            departments: PanelPreferences::default(),
            menus: default_menu_panel(),
            indent_width: default_indent_width(),
        }
    }
}

fn default_menu_panel() -> PanelPreferences {
    PanelPreferences {
        default_expanded: DEFAULT_EXPANDED_MENU_IDS
            .iter()
            .map(|id| id.to_string())
            .collect(),
    }
}

fn default_indent_width() -> usize {
    DEFAULT_INDENT_WIDTH
}

/// Load preferences from `path`
///
/// Returns the defaults when the file does not exist.
pub async fn load_preferences(path: &Path) -> Result<ViewPreferences, PreferencesError> {
    if !fs::try_exists(path)
        .await
        .map_err(|e| PreferencesError::io(path, e))?
    {
        tracing::debug!(path = %path.display(), "no preferences file, using defaults");
        return Ok(ViewPreferences::default());
    }

    let contents = fs::read_to_string(path)
        .await
        .map_err(|e| PreferencesError::io(path, e))?;

    serde_json::from_str(&contents).map_err(PreferencesError::Parse)
}

/// Save preferences to `path`
///
/// Writes to a temp file next to the target and renames it into place, so a
/// crash mid-write never leaves a truncated file.
pub async fn save_preferences(path: &Path, prefs: &ViewPreferences) -> Result<(), PreferencesError> {
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .await
            .map_err(|e| PreferencesError::io(dir, e))?;
    }

    let serialized = serde_json::to_string_pretty(prefs).map_err(PreferencesError::Serialize)?;

    let mut temp_name = path.as_os_str().to_owned();
    temp_name.push(".tmp");
    let temp_file = PathBuf::from(temp_name);

    fs::write(&temp_file, serialized)
        .await
        .map_err(|e| PreferencesError::io(&temp_file, e))?;
    fs::rename(&temp_file, path)
        .await
        .map_err(|e| PreferencesError::io(path, e))?;

    tracing::info!(path = %path.display(), "saved view preferences");
    Ok(())
}
