//! Configuration module
//!
//! Handles loading and saving of the wm.toml configuration file, creating
//! it with default settings when absent. The file location can be
//! overridden with the WMCFG environment variable.

mod types;

pub use types::Config;

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, WmError};

/// Environment variable overriding the configuration file location
const CONFIG_PATH_VAR: &str = "WMCFG";

/// Default configuration file name, relative to the working directory
const DEFAULT_CONFIG_FILE: &str = "wm.toml";

/// Resolve the configuration file path from WMCFG, falling back to
/// wm.toml in the working directory.
pub fn file_path() -> PathBuf {
    env::var(CONFIG_PATH_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE))
}

/// Load configuration from a TOML file, writing one with default settings
/// first if it does not exist yet.
pub fn load_or_init(path: &Path) -> Result<Config> {
    if !path.exists() {
        save(&Config::default(), path)?;
    }

    let content = fs::read_to_string(path).map_err(|e| {
        WmError::Config(format!(
            "cannot read config from '{}': {}",
            path.display(),
            e
        ))
    })?;

    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Save configuration to a TOML file
pub fn save(config: &Config, path: &Path) -> Result<()> {
    let toml = toml::to_string_pretty(config)
        .map_err(|e| WmError::Config(format!("failed to serialize config: {}", e)))?;

    // parent() of a bare file name is an empty path, not a directory
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, toml)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    fn test_load_or_init_creates_defaults() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("wm.toml");

        assert!(!config_path.exists());
        let config = load_or_init(&config_path).unwrap();

        assert!(config_path.exists());
        assert_eq!(config.root, "~/.wm/logs");
        assert_eq!(config.context_size, 200);
    }

    #[test]
    fn test_load_or_init_reads_existing_file() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("wm.toml");

        fs::write(
            &config_path,
            "root = \"/srv/logs\"\neditor = \"nano\"\ncontext_size = 42\n",
        )
        .unwrap();

        let config = load_or_init(&config_path).unwrap();
        assert_eq!(config.root, "/srv/logs");
        assert_eq!(config.editor, "nano");
        assert_eq!(config.context_size, 42);
    }

    #[test]
    fn test_load_or_init_rejects_invalid_toml() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("wm.toml");

        fs::write(&config_path, "root = [not toml").unwrap();

        let result = load_or_init(&config_path);
        assert!(matches!(result, Err(WmError::TomlParse(_))));
    }

    #[test]
    fn test_save_creates_directories() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("nested/dir/wm.toml");

        save(&Config::default(), &config_path).unwrap();
        assert!(config_path.exists());
    }

    #[test]
    fn test_roundtrip() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("wm.toml");

        let mut config = Config::default();
        config.root = "/data/wm".to_string();
        config.context_size = 80;

        save(&config, &config_path).unwrap();
        let loaded = load_or_init(&config_path).unwrap();

        assert_eq!(loaded.root, "/data/wm");
        assert_eq!(loaded.context_size, 80);
    }

    #[test]
    #[serial]
    fn test_file_path_default() {
        let original = env::var(CONFIG_PATH_VAR).ok();
        env::remove_var(CONFIG_PATH_VAR);

        assert_eq!(file_path(), PathBuf::from("wm.toml"));

        if let Some(value) = original {
            env::set_var(CONFIG_PATH_VAR, value);
        }
    }

    #[test]
    #[serial]
    fn test_file_path_from_env() {
        let original = env::var(CONFIG_PATH_VAR).ok();
        env::set_var(CONFIG_PATH_VAR, "/etc/wm/custom.toml");

        assert_eq!(file_path(), PathBuf::from("/etc/wm/custom.toml"));

        match original {
            Some(value) => env::set_var(CONFIG_PATH_VAR, value),
            None => env::remove_var(CONFIG_PATH_VAR),
        }
    }
}
