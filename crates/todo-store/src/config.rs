//! Store configuration.

use serde::{Deserialize, Serialize};

/// Key the todo array is stored under unless configured otherwise
pub const DEFAULT_STORAGE_KEY: &str = "todos";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub storage_key: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_key() {
        assert_eq!(StoreConfig::default().storage_key, "todos");
    }

    #[test]
    fn test_missing_fields_fall_back_to_default() {
        let config: StoreConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, StoreConfig::default());

        let config: StoreConfig = serde_json::from_str(r#"{"storage_key":"work"}"#).unwrap();
        assert_eq!(config.storage_key, "work");
    }
}
