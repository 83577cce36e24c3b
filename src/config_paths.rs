//! Where reaper-keymap keeps its own files
//!
//! ```text
//! <config dir>/reaper-keymap/
//!     config.yaml          decoder and output defaults (optional)
//!     logs/
//!         reaper-keymap.log.YYYY-MM-DD   written only with log_to_file
//! ```
//!
//! The keymap being decoded is always passed on the command line; nothing
//! here points into a REAPER resource directory.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

const APP_DIR: &str = "reaper-keymap";

/// Directory holding the config file and logs
///
/// `$XDG_CONFIG_HOME/reaper-keymap`, falling back to `~/.config/reaper-keymap`.
/// On Windows this is `%APPDATA%\reaper-keymap`.
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

/// The YAML file read by [`crate::config::ParserConfig::try_load`]
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// Target of the daily rolling log when `log_to_file` is set
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

fn ensure_dir(path: &Path) -> Result<(), String> {
    fs::create_dir_all(path)
        .map_err(|e| format!("Failed to create directory {}: {}", path.display(), e))
}

/// Create the log directory on first use
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let logs = logs_dir().ok_or_else(|| "No config directory available".to_string())?;
    ensure_dir(&logs)?;
    Ok(logs)
}
