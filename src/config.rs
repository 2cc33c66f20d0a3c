use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::storage::STORE_DIR;

const CONFIG_FILE: &str = "config.yaml";

/// Per-store tunables, read from `.lostfound/config.yaml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BulletinConfig {
    /// How many reports the recency view shows.
    pub recent_limit: usize,
    /// Include the category label in the free-text search haystack.
    pub search_category_text: bool,
}

impl Default for BulletinConfig {
    fn default() -> Self {
        Self {
            recent_limit: 3,
            search_category_text: false,
        }
    }
}

impl BulletinConfig {
    /// Load the config for a store root. A missing file means defaults; a
    /// malformed one is warned about and ignored.
    pub fn load(root: &Path) -> Self {
        let path = root.join(STORE_DIR).join(CONFIG_FILE);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(_) => return Self::default(),
        };

        match serde_yaml::from_str(&raw) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, path = %path.display(), "ignoring malformed config");
                Self::default()
            }
        }
    }
}
