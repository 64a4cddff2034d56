//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from
//! an optional TOML file merged with `RESIDENCY__`-prefixed environment
//! variables. Each sub-module represents a logical configuration section.

pub mod journal;
pub mod logging;
pub mod store;

use serde::{Deserialize, Serialize};

use self::journal::JournalConfig;
use self::logging::LoggingConfig;
use self::store::StoreConfig;

use crate::error::AppError;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Collection store settings.
    #[serde(default)]
    pub store: StoreConfig,
    /// Journal workflow settings.
    #[serde(default)]
    pub journal: JournalConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file and the environment.
    ///
    /// The file is optional; every section falls back to its defaults.
    /// Environment variables use the `RESIDENCY__` prefix and `__` as the
    /// section separator, e.g. `RESIDENCY__STORE__PROVIDER=memory`.
    pub fn load(path: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("RESIDENCY")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = AppConfig::load("does/not/exist/residency").expect("defaults");
        assert_eq!(config.store.provider, "file");
        assert!(config.journal.enforce_punch_sequence);
        assert!(config.journal.strict_transitions);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_sections_keep_other_defaults() {
        let parsed: AppConfig = from_json(
            r#"{ "store": { "provider": "memory" }, "journal": { "strict_transitions": false } }"#,
        );
        assert_eq!(parsed.store.provider, "memory");
        assert_eq!(parsed.store.seed_dir, "seed");
        assert!(!parsed.journal.strict_transitions);
        assert!(parsed.journal.enforce_punch_sequence);
    }

    fn from_json(json: &str) -> AppConfig {
        serde_json::from_str(json).expect("valid config json")
    }
}
