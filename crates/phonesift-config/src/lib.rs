use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use phonesift_core::ExportFormat;
use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "phonesift";
const CONFIG_FILENAME: &str = "config.toml";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub export_dir: Option<PathBuf>,
    pub default_format: ExportFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            export_dir: None,
            default_format: ExportFormat::Txt,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("invalid export_dir value: {0}")]
    InvalidExportDir(PathBuf),
    #[error("invalid default_format value: {0}")]
    InvalidExportFormat(String),
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    export_dir: Option<PathBuf>,
    default_format: Option<String>,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path.clone()) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(dir) = parsed.export_dir {
        if dir.as_os_str().is_empty() {
            return Err(ConfigError::InvalidExportDir(dir));
        }
        config.export_dir = Some(dir);
    }

    if let Some(raw) = parsed.default_format {
        let format = raw
            .parse::<ExportFormat>()
            .map_err(|_| ConfigError::InvalidExportFormat(raw))?;
        config.default_format = format;
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::{load_at_path, merge_config, ConfigFile};
    use phonesift_core::ExportFormat;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn merge_config_applies_values() {
        let parsed = ConfigFile {
            export_dir: Some(PathBuf::from("/tmp/exports")),
            default_format: Some("csv".to_string()),
        };
        let merged = merge_config(parsed).expect("merge");
        assert_eq!(merged.export_dir, Some(PathBuf::from("/tmp/exports")));
        assert_eq!(merged.default_format, ExportFormat::Csv);
    }

    #[test]
    fn merge_config_rejects_unknown_format() {
        let parsed = ConfigFile {
            export_dir: None,
            default_format: Some("pdf".to_string()),
        };
        let err = merge_config(parsed).unwrap_err();
        assert!(err.to_string().contains("invalid default_format"));
    }

    #[test]
    fn load_at_path_requires_file_when_requested() {
        let temp = TempDir::new().expect("tempdir");
        let missing = temp.path().join("config.toml");
        let err = load_at_path(&missing, true).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn load_at_path_parses_toml() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(&path, "export_dir = \"out\"\ndefault_format = \"txt\"\n")
            .expect("write config");

        let config = load_at_path(&path, true).expect("load").expect("config");
        assert_eq!(config.export_dir, Some(PathBuf::from("out")));
        assert_eq!(config.default_format, ExportFormat::Txt);
    }

    #[test]
    fn load_at_path_rejects_unknown_keys() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(&path, "exprot_dir = \"out\"\n").expect("write config");

        let err = load_at_path(&path, true).unwrap_err();
        assert!(err.to_string().contains("failed to parse"));
    }
}
