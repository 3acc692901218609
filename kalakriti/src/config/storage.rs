use std::fs;
use std::path::{Path, PathBuf};

use super::errors::ConfigError;
use super::model::AppConfig;

/// Status describing how settings were loaded from disk.
#[derive(Debug, Clone)]
pub(crate) enum ConfigLoadStatus {
    Loaded,
    Missing,
    Invalid(String),
}

/// Result of loading settings from disk.
#[derive(Debug, Clone)]
pub(crate) struct ConfigLoad {
    config: AppConfig,
    status: ConfigLoadStatus,
}

impl ConfigLoad {
    fn new(config: AppConfig, status: ConfigLoadStatus) -> Self {
        Self { config, status }
    }

    /// Consume the value and return both payload and status.
    pub(crate) fn into_parts(self) -> (AppConfig, ConfigLoadStatus) {
        (self.config, self.status)
    }
}

pub(crate) fn load_config() -> Result<ConfigLoad, ConfigError> {
    let path = config_path();
    log::debug!("reading settings from {}", path.display());
    load_config_from_path(&path)
}

fn load_config_from_path(path: &Path) -> Result<ConfigLoad, ConfigError> {
    let data = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(ConfigLoad::new(
                AppConfig::default(),
                ConfigLoadStatus::Missing,
            ));
        },
        Err(err) => return Err(err.into()),
    };

    let parsed = match serde_json::from_str::<serde_json::Value>(&data) {
        Ok(value) => value,
        Err(err) => {
            return Ok(ConfigLoad::new(
                AppConfig::default(),
                ConfigLoadStatus::Invalid(format!("{err}")),
            ));
        },
    };

    Ok(ConfigLoad::new(
        AppConfig::from_json(&parsed),
        ConfigLoadStatus::Loaded,
    ))
}

fn config_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home)
            .join(".config")
            .join("kalakriti")
            .join("settings.json");
    }

    std::env::temp_dir().join("kalakriti").join("settings.json")
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::{AppConfig, ConfigError, ConfigLoadStatus, load_config_from_path};

    #[test]
    fn given_missing_file_when_load_then_returns_default_with_missing_status() {
        let root = test_temp_dir("missing");
        let path = root.join("settings.json");

        let loaded = load_config_from_path(&path)
            .expect("missing settings should not be an error");
        let (config, status) = loaded.into_parts();

        assert!(matches!(status, ConfigLoadStatus::Missing));
        assert_eq!(config, AppConfig::default());

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_valid_file_when_load_then_values_are_applied() {
        let root = test_temp_dir("valid");
        let path = root.join("settings.json");
        fs::write(
            &path,
            r##"{ "ui": { "font_size": 18 }, "start_route": "/dashboard/supply-chain" }"##,
        )
        .expect("test payload should be written");

        let loaded = load_config_from_path(&path)
            .expect("settings should load successfully");
        let (config, status) = loaded.into_parts();

        assert!(matches!(status, ConfigLoadStatus::Loaded));
        assert_eq!(config.font_size, 18.0);
        assert_eq!(
            config.start_route.as_deref(),
            Some("/dashboard/supply-chain")
        );

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_invalid_json_when_load_then_returns_default_with_invalid_status() {
        let root = test_temp_dir("invalid_json");
        let path = root.join("settings.json");
        fs::write(&path, "{ this is not valid json")
            .expect("invalid test payload should be written");

        let loaded = load_config_from_path(&path)
            .expect("loading invalid settings should not fail with io error");
        let (config, status) = loaded.into_parts();

        assert_eq!(config, AppConfig::default());
        match status {
            ConfigLoadStatus::Invalid(message) => {
                assert!(!message.is_empty());
            },
            other => panic!("expected invalid status, got {other:?}"),
        }

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_directory_in_place_of_file_when_load_then_io_error_is_returned() {
        let root = test_temp_dir("directory");

        let result = load_config_from_path(&root);

        assert!(matches!(result, Err(ConfigError::Io(_))));

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    fn test_temp_dir(test_name: &str) -> std::path::PathBuf {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be monotonic")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!(
            "kalakriti-config-{test_name}-{stamp}-{}",
            std::process::id()
        ));

        fs::create_dir_all(&dir)
            .expect("temporary directory should be created");
        dir
    }
}
