//! Parser configuration persistence
//!
//! Stores defaults for the command line tool in
//! `~/.config/reaper-keymap/config.yaml`. Command line flags override them.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::keymap::{CommentMode, DecodeOptions, ErrorPolicy};

/// Serialization format for decoded keymaps
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

/// Configuration that persists across runs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// How trailing `#` comments are located
    pub comment_mode: CommentMode,
    /// Abort on, or skip, lines with unparsable numbers
    pub error_policy: ErrorPolicy,
    /// Default output format
    pub output_format: OutputFormat,
    /// Also write debug logs to `~/.config/reaper-keymap/logs/`
    pub log_to_file: bool,
}

impl ParserConfig {
    /// Load config from disk; a missing file yields the defaults
    ///
    /// Errors are returned rather than logged so the caller can report them
    /// once tracing is set up.
    pub fn try_load() -> Result<Self, String> {
        let Some(path) = crate::config_paths::config_file() else {
            return Ok(Self::default());
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        Self::try_load_from(&path)
    }

    /// Load config from a specific file
    pub fn try_load_from(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config at {}: {}", path.display(), e))?;

        serde_yaml::from_str(&content)
            .map_err(|e| format!("Failed to parse config at {}: {}", path.display(), e))
    }

    /// Load config from a specific file, falling back to defaults on error
    pub fn load_from(path: &Path) -> Self {
        match Self::try_load_from(path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("{}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Save config to a file, creating its directory if needed
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Decoder options described by this config
    pub fn decode_options(&self) -> DecodeOptions {
        DecodeOptions {
            comment_mode: self.comment_mode,
            error_policy: self.error_policy,
        }
    }
}
