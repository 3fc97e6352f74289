//! Runtime configuration resolved from the environment.

use std::path::{Path, PathBuf};

/// Environment variable that overrides the data directory.
pub const DATA_DIR_ENV: &str = "TCALC_DATA_DIR";

const APP_DIR_NAME: &str = "tcalc";
const SETTINGS_FILE: &str = "settings.json";
const LOG_DIR: &str = "logs";

/// Where tcalc keeps its settings file and logs.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub data_dir: PathBuf,
}

impl Config {
    /// Resolves the data directory: `$TCALC_DATA_DIR`, then the platform
    /// config directory, then `./.tcalc`.
    pub fn from_env() -> Self {
        let data_dir = std::env::var_os(DATA_DIR_ENV)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .or_else(|| dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME)))
            .unwrap_or_else(|| PathBuf::from(format!(".{}", APP_DIR_NAME)));

        Self { data_dir }
    }

    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn settings_path(&self) -> PathBuf {
        self.data_dir.join(SETTINGS_FILE)
    }

    pub fn log_dir(&self) -> PathBuf {
        self.data_dir.join(LOG_DIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_paths() {
        let config = Config::with_data_dir("/tmp/tcalc-test");
        assert_eq!(config.settings_path(), PathBuf::from("/tmp/tcalc-test/settings.json"));
        assert_eq!(config.log_dir(), PathBuf::from("/tmp/tcalc-test/logs"));
    }

    #[test]
    fn test_from_env_is_never_empty() {
        let config = Config::from_env();
        assert!(!config.data_dir().as_os_str().is_empty());
    }
}
