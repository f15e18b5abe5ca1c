use crate::error::{LibraError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const DEFAULT_CURRENCY: &str = "Rs.";

/// Presentation settings for the shell.
///
/// Fine amounts and the grace period are fixed; only how things are shown can be changed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LibraConfig {
    /// Prefix printed in front of fine amounts (e.g. "Rs.", "$")
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Whether output is coloured
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

fn default_color() -> bool {
    true
}

impl Default for LibraConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            color: default_color(),
        }
    }
}

impl LibraConfig {
    /// Load config from a JSON file. Unlike an implicit location, an explicitly
    /// named file must exist.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(LibraError::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }

        let content = fs::read_to_string(path).map_err(LibraError::Io)?;
        let config: LibraConfig =
            serde_json::from_str(&content).map_err(LibraError::Serialization)?;
        Ok(config)
    }

    /// Formats an amount with the configured currency prefix.
    pub fn format_amount(&self, amount: f64) -> String {
        format!("{}{:.1}", self.currency, amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = LibraConfig::default();
        assert_eq!(config.currency, "Rs.");
        assert!(config.color);
    }

    #[test]
    fn test_format_amount() {
        let config = LibraConfig::default();
        assert_eq!(config.format_amount(20.0), "Rs.20.0");
        assert_eq!(config.format_amount(0.0), "Rs.0.0");
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let result = LibraConfig::load(temp.path().join("absent.json"));
        assert!(matches!(result, Err(LibraError::Config(_))));
    }

    #[test]
    fn test_load_partial_config_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("libranet.json");
        fs::write(&path, r#"{ "currency": "$" }"#).unwrap();

        let config = LibraConfig::load(&path).unwrap();
        assert_eq!(config.currency, "$");
        assert!(config.color);
    }

    #[test]
    fn test_load_invalid_json() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.json");
        fs::write(&path, "{ currency: ").unwrap();

        assert!(matches!(
            LibraConfig::load(&path),
            Err(LibraError::Serialization(_))
        ));
    }
}
