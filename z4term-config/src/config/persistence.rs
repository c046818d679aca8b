//! Config persistence and path resolution for `Config`.
//!
//! Covers:
//! - `load` / `load_from` (YAML file I/O, default file creation)
//! - `save_to` (atomic write with owner-only permissions)
//! - XDG-compliant path helpers (`config_dir`, `config_path`, `session_path`)

use super::config_struct::Config;
use crate::error::ConfigError;
use anyhow::{Context, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

impl Config {
    /// Load configuration from the default location, creating it if missing.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();
        log::info!("Config path: {:?}", config_path);
        Self::load_from(&config_path)
    }

    /// Load configuration from a specific file.
    ///
    /// A missing file is created with defaults. A file that fails to parse
    /// is reported and replaced in memory by defaults; it is left untouched
    /// on disk so the user can fix it.
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut config = match fs::read_to_string(path) {
            Ok(contents) => match serde_yaml_ng::from_str::<Config>(&contents) {
                Ok(mut config) => {
                    log::info!("Loaded config from {:?}", path);
                    config.merge_default_keybindings();
                    config
                }
                Err(e) => {
                    log::warn!(
                        "{}; using defaults",
                        ConfigError::Parse(e)
                    );
                    Self::default()
                }
            },
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("Config file not found, creating default at {:?}", path);
                let config = Self::default();
                if let Err(e) = config.save_to(path) {
                    log::error!("Failed to save default config: {:#}", e);
                }
                config
            }
            Err(e) => {
                return Err(ConfigError::Io(e))
                    .with_context(|| format!("Failed to read config {:?}", path));
            }
        };

        config.validate();
        Ok(config)
    }

    /// Save configuration to a specific file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            create_private_dir(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let yaml = serde_yaml_ng::to_string(self).map_err(ConfigError::Parse)?;

        // Atomic save: write to temp file then rename to prevent corruption on crash
        let temp_path = path.with_extension("yaml.tmp");
        write_private(&temp_path, yaml.as_bytes())
            .with_context(|| format!("Failed to write {:?}", temp_path))?;
        fs::rename(&temp_path, path).with_context(|| format!("Failed to replace {:?}", path))?;

        Ok(())
    }

    /// Get the configuration directory path: `~/.config/z4term`
    pub fn config_dir() -> PathBuf {
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir()
                .map(|d| d.join("z4term"))
                .unwrap_or_else(|| PathBuf::from("."))
        }
        #[cfg(not(target_os = "windows"))]
        {
            dirs::home_dir()
                .map(|home| home.join(".config").join("z4term"))
                .unwrap_or_else(|| PathBuf::from("."))
        }
    }

    /// Get the configuration file path
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.yaml")
    }

    /// Get the transient session document path
    pub fn session_path() -> PathBuf {
        Self::config_dir().join("session.json")
    }
}

/// Create a directory (and parents) readable only by the owner.
pub fn create_private_dir(dir: &Path) -> std::io::Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        fs::DirBuilder::new().recursive(true).mode(0o700).create(dir)
    }
    #[cfg(not(unix))]
    {
        fs::create_dir_all(dir)
    }
}

/// Write a file truncating any previous content, readable only by the owner.
pub fn write_private(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    use std::io::Write;

    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    let mut file = options.open(path)?;
    file.write_all(contents)?;
    file.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::KeyBinding;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_creates_default() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("nested").join("config.yaml");

        let config = Config::load_from(&path).unwrap();
        assert!(path.exists());
        assert_eq!(config.font_size, 12);
        assert_eq!(config.keybindings.len(), 14);
    }

    #[test]
    fn test_unreadable_path_reports_io_error() {
        let temp = tempdir().unwrap();

        // A directory cannot be read as a config file
        let err = Config::load_from(temp.path()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::Io(_))
        ));
    }

    #[test]
    fn test_corrupt_file_uses_defaults() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.yaml");
        fs::write(&path, "font_size: [[[").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.font_size, 12);
        // The broken file is not overwritten
        assert_eq!(fs::read_to_string(&path).unwrap(), "font_size: [[[");
    }

    #[test]
    fn test_partial_file_merges_keybindings() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.yaml");
        fs::write(
            &path,
            "font_size: 14\nopacity: 0.05\nkeybindings:\n  - key: Ctrl+Alt+T\n    action: new_tab\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.font_size, 14);
        assert!((config.opacity - 0.1).abs() < f32::EPSILON);
        assert_eq!(config.binding_for("new_tab"), Some("Ctrl+Alt+T"));
        assert_eq!(config.binding_for("copy"), Some("Ctrl+Shift+C"));
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.yaml");

        let mut config = Config {
            font_family: "Fira Code".to_string(),
            theme: "dracula".to_string(),
            ..Config::default()
        };
        config.keybindings.push(KeyBinding::new("F9", "custom"));
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.font_family, "Fira Code");
        assert_eq!(loaded.theme, "dracula");
        assert_eq!(loaded.binding_for("custom"), Some("F9"));
    }

    #[cfg(unix)]
    #[test]
    fn test_saved_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let temp = tempdir().unwrap();
        let path = temp.path().join("config.yaml");
        Config::default().save_to(&path).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o077, 0);
    }
}
