// Configuration loader
//
// Mirrors the appearance settings the GUI stores for menus: the only knob
// that matters to this tool is how item labels are decorated with their
// command names.

use miette::{IntoDiagnostic, Result, WrapErr};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Default config file names, probed next to the input file and in the
/// current directory.
const CONFIG_NAMES: &[&str] = &["menutree.toml", ".menutree.toml"];

/// How menu item labels are rendered when the item carries a command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MenuStyle {
    /// Plain label only.
    #[default]
    Labels,
    /// Label followed by the command in brackets.
    LabelsCommands,
    /// Command in brackets only.
    Commands,
}

/// Configuration for menutree
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Appearance settings
    pub appearance: AppearanceConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceConfig {
    /// Label decoration for items with commands
    pub menu_style: MenuStyle,
}

impl Config {
    /// Load configuration from a specific file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&contents)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to parse config file: {}", path.display()))?;

        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load configuration from default locations, falling back to defaults
    /// when no config file exists.
    pub fn from_default_locations(near: &Path) -> Result<Self> {
        let mut dirs = Vec::new();
        if let Some(parent) = near.parent() {
            dirs.push(parent.to_path_buf());
        }
        dirs.push(std::path::PathBuf::from("."));

        for dir in dirs {
            for name in CONFIG_NAMES {
                let candidate = dir.join(name);
                if candidate.exists() {
                    return Self::from_file(&candidate);
                }
            }
        }

        debug!("No config file found, using defaults");
        Ok(Config::default())
    }
}
