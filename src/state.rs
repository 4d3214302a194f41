// Shared state structs to avoid circular dependencies.
// These are used by every module and serialized as-is by the session store.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::modules::routes::Icon;

fn default_icon() -> String {
    Icon::Generic.as_str().to_string()
}

/// One open workspace entry, keyed by its route path.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Tab {
    pub path: String,
    pub title: String,
    #[serde(default = "default_icon")]
    pub icon: String,
    #[serde(default)]
    pub pinned: bool,
}

impl Tab {
    /// Resolves the stored symbolic icon name, falling back to the generic glyph.
    pub fn icon(&self) -> Icon {
        Icon::from_name(&self.icon)
    }
}

/// The persisted unit: ordered tabs plus the active pointer.
#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    pub tabs: Vec<Tab>,
    pub active_path: Option<String>,
}

impl SessionState {
    pub fn position(&self, path: &str) -> Option<usize> {
        self.tabs.iter().position(|t| t.path == path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.position(path).is_some()
    }

    pub fn active_tab(&self) -> Option<&Tab> {
        let active = self.active_path.as_deref()?;
        self.tabs.iter().find(|t| t.path == active)
    }

    pub fn paths(&self) -> Vec<&str> {
        self.tabs.iter().map(|t| t.path.as_str()).collect()
    }

    /// Unique paths, and an active path that is either absent or open.
    pub fn is_consistent(&self) -> bool {
        let mut seen = HashSet::new();
        if !self.tabs.iter().all(|t| seen.insert(t.path.as_str())) {
            return false;
        }
        match &self.active_path {
            Some(active) => seen.contains(active.as_str()),
            None => true,
        }
    }
}
