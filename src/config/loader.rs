//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::RouterConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn read_config(path: &Path) -> Result<RouterConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Load configuration and validate it.
///
/// Starts from the TOML file at `path`, or from defaults without one, then
/// applies `overrides` (command-line values) before validating the result.
pub fn load_config<F>(path: Option<&Path>, overrides: F) -> Result<RouterConfig, ConfigError>
where
    F: FnOnce(&mut RouterConfig),
{
    let mut config = match path {
        Some(path) => read_config(path)?,
        None => RouterConfig::default(),
    };
    overrides(&mut config);

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("relay-router-{}-{}", std::process::id(), name));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_valid_config() {
        let path = temp_file(
            "valid.toml",
            "[provider]\nrelays = [\"https://0xabc@relay.example\"]\n",
        );
        let config = load_config(Some(path.as_path()), |_| {}).unwrap();
        assert_eq!(config.provider.relays.len(), 1);
        fs::remove_file(path).unwrap_or_default();
    }

    #[test]
    fn test_load_reports_validation_errors() {
        let path = temp_file("invalid.toml", "[sync]\ninterval_secs = 0\n");
        let err = load_config(Some(path.as_path()), |_| {}).unwrap_err();
        match &err {
            ConfigError::Validation(errors) => assert_eq!(errors.len(), 2),
            other => panic!("unexpected error: {other}"),
        }
        assert!(err.to_string().starts_with("Validation failed: "));
        fs::remove_file(path).unwrap_or_default();
    }

    #[test]
    fn test_load_reports_parse_and_io_errors() {
        let path = temp_file("broken.toml", "[provider\n");
        assert!(matches!(load_config(Some(path.as_path()), |_| {}), Err(ConfigError::Parse(_))));
        fs::remove_file(path).unwrap_or_default();

        assert!(matches!(
            load_config(Some(Path::new("/nonexistent/relay-router.toml")), |_| {}),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn test_overrides_apply_before_validation() {
        let path = temp_file("overridden.toml", "[sync]\ninterval_secs = 30\n");

        assert!(matches!(load_config(Some(path.as_path()), |_| {}), Err(ConfigError::Validation(_))));

        let config = load_config(Some(path.as_path()), |config| {
            config.provider.relays.push("https://0xabc@relay.example".into());
        })
        .unwrap();
        assert_eq!(config.sync.interval_secs, 30);
        assert_eq!(config.provider.relays.len(), 1);
        fs::remove_file(path).unwrap_or_default();
    }

    #[test]
    fn test_defaults_without_file() {
        let config = load_config(None, |config| {
            config.provider.relays.push("https://0xabc@relay.example".into());
        })
        .unwrap();
        assert_eq!(config.sync.interval_secs, RouterConfig::default().sync.interval_secs);
    }
}
