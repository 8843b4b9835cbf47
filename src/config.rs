//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/famtree/famtree.toml`
//! 3. Explicit config file (`--config`)
//! 4. Environment variables: `FAMTREE_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;
use crate::domain::OutlineStyle;

/// Unified configuration for famtree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Outline drawn by `show` (default: classic)
    pub outline_style: OutlineStyle,
    /// Directory for `save` without an explicit path (default: cwd)
    pub snapshot_dir: PathBuf,
    /// File name for `save` without an explicit path
    pub snapshot_name: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            outline_style: OutlineStyle::Classic,
            snapshot_dir: PathBuf::from("."),
            snapshot_name: "family_tree.txt".into(),
        }
    }
}

/// Raw settings for intermediate parsing (None = not specified, inherit).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub outline_style: Option<OutlineStyle>,
    pub snapshot_dir: Option<PathBuf>,
    pub snapshot_name: Option<String>,
}

/// Get the XDG config directory for famtree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "famtree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("famtree.toml"))
}

/// Expand `~`, `$VAR` and `${VAR}` in a user-supplied path.
///
/// Unset variables are left as written.
pub fn expand_path(raw: &str) -> PathBuf {
    match shellexpand::full(raw) {
        Ok(expanded) => PathBuf::from(expanded.into_owned()),
        Err(_) => PathBuf::from(raw),
    }
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Default target of `save`.
    pub fn snapshot_path(&self) -> PathBuf {
        self.snapshot_dir.join(&self.snapshot_name)
    }

    fn expand_paths(&mut self) {
        self.snapshot_dir = expand_path(&self.snapshot_dir.to_string_lossy());
    }

    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            outline_style: overlay.outline_style.unwrap_or(self.outline_style),
            snapshot_dir: overlay
                .snapshot_dir
                .clone()
                .unwrap_or_else(|| self.snapshot_dir.clone()),
            snapshot_name: overlay
                .snapshot_name
                .clone()
                .unwrap_or_else(|| self.snapshot_name.clone()),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file; it must exist
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        Self::load_from(global_config_path().as_deref(), config_file)
    }

    /// Same as [`Settings::load`] with the global config location given.
    ///
    /// A missing global file is skipped; `None` skips the global layer.
    pub fn load_from(
        global_file: Option<&Path>,
        config_file: Option<&Path>,
    ) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_file {
            if global_path.exists() {
                let raw = load_raw_settings(global_path)?;
                current = current.merge_with(&raw);
            }
        }

        if let Some(path) = config_file {
            let raw = load_raw_settings(path)?;
            current = current.merge_with(&raw);
        }

        current = Self::apply_env_overrides(current)?;
        current.expand_paths();

        Ok(current)
    }

    /// Apply FAMTREE_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        // Use config crate just for env var parsing
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("FAMTREE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("outline_style") {
            settings.outline_style = val
                .parse::<OutlineStyle>()
                .map_err(|message| ApplicationError::Config { message })?;
        }
        if let Ok(val) = config.get_string("snapshot_dir") {
            settings.snapshot_dir = PathBuf::from(val);
        }
        if let Ok(val) = config.get_string("snapshot_name") {
            settings.snapshot_name = val;
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# famtree configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/famtree/famtree.toml
#   Local:  file passed with --config
#   Env:    FAMTREE_* environment variables (explicit overrides)

# Outline drawn by `show`: "classic" or "tree"
# outline_style = "classic"

# Where `save` writes when no path is given
# snapshot_dir = "~/Documents"
# snapshot_name = "family_tree.txt"
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
