use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use flatgen_core::LoadType;
use flatgen_generate::model::DEFAULT_OUTPUT_ROOT;

use super::atomic::write_bytes_atomic;
use super::{ConfigError, ConfigResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    Text,
    Json,
}

/// Contents of `flatgen.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub output_root: PathBuf,
    pub log_level: String,
    pub log_format: LogFormat,
    /// Load type for runs that do not name one.
    pub default_load_type: LoadType,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_root: PathBuf::from(DEFAULT_OUTPUT_ROOT),
            log_level: "info".to_string(),
            log_format: LogFormat::Text,
            default_load_type: LoadType::Full,
        }
    }
}

pub fn load_or_create_settings(path: &Path) -> ConfigResult<Settings> {
    if path.exists() {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = toml::from_str(&content)?;
        return Ok(settings);
    }

    let settings = Settings::default();
    save_settings(path, &settings)?;
    Ok(settings)
}

pub fn save_settings(path: &Path, settings: &Settings) -> ConfigResult<()> {
    let encoded = toml::to_string_pretty(settings)?;
    write_bytes_atomic(path, encoded.as_bytes()).map_err(ConfigError::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config() -> PathBuf {
        std::env::temp_dir()
            .join(format!("flatgen_settings_{}", uuid::Uuid::new_v4()))
            .join("flatgen.toml")
    }

    #[test]
    fn missing_file_is_created_with_defaults() {
        let path = temp_config();

        let settings = load_or_create_settings(&path).expect("create settings");
        assert_eq!(settings, Settings::default());
        assert!(path.exists());

        let content = std::fs::read_to_string(&path).expect("read settings");
        assert!(content.contains("output_root = \"/tmp/data\""));
        assert!(content.contains("default_load_type = \"F\""));
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let path = temp_config();
        std::fs::create_dir_all(path.parent().expect("parent")).expect("create dir");
        std::fs::write(&path, "log_format = \"json\"\ndefault_load_type = \"I\"\n")
            .expect("write settings");

        let settings = load_or_create_settings(&path).expect("load settings");
        assert_eq!(settings.log_format, LogFormat::Json);
        assert_eq!(settings.default_load_type, LoadType::Incremental);
        assert_eq!(settings.log_level, "info");
    }
}
