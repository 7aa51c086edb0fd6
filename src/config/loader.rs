//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::BridgeConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<BridgeConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: BridgeConfig = toml::from_str(&content).map_err(ConfigError::Parse)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_io_error() {
        let got = load_config(Path::new("/nonexistent/bridge.toml"));
        assert!(matches!(got, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let path = std::env::temp_dir().join("bridge-loader-test-parse.toml");
        fs::write(&path, "service = not toml").unwrap();

        let got = load_config(&path);
        assert!(matches!(got, Err(ConfigError::Parse(_))));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_valid_file_loads() {
        let path = std::env::temp_dir().join("bridge-loader-test-valid.toml");
        fs::write(&path, "[service]\nhostname = \"127.0.0.1\"\nport = 19360\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.service.hostname, "127.0.0.1");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_semantic_violations_are_reported_together() {
        let path = std::env::temp_dir().join("bridge-loader-test-invalid.toml");
        fs::write(&path, "[service]\nhostname = \"\"\ntimeout_ms = 0\n").unwrap();

        match load_config(&path) {
            Err(ConfigError::Validation(errors)) => assert_eq!(errors.len(), 2),
            other => panic!("expected validation failure, got {:?}", other.map(|_| ())),
        }

        let _ = fs::remove_file(&path);
    }
}
