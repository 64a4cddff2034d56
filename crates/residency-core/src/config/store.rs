//! Collection store configuration.

use serde::{Deserialize, Serialize};

/// Where journal, notification, resident and user collections live.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Backend type: `"file"` or `"memory"`.
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Directory holding persisted collections (file backend only).
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    /// Directory holding `<collection>.json` seed files.
    #[serde(default = "default_seed_dir")]
    pub seed_dir: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            data_dir: default_data_dir(),
            seed_dir: default_seed_dir(),
        }
    }
}

fn default_provider() -> String {
    "file".to_string()
}

fn default_data_dir() -> String {
    "data".to_string()
}

fn default_seed_dir() -> String {
    "seed".to_string()
}
