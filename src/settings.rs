//! Code for loading program settings.
use crate::input::read_toml;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const SETTINGS_FILE_NAME: &str = "settings.toml";

/// Get the directory in which program configuration is stored
pub fn get_config_dir() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_default();
    path.push("chaseplan");

    path
}

/// Get the path to where the settings file will be read from
pub fn get_settings_file_path() -> PathBuf {
    let mut path = get_config_dir();
    path.push(SETTINGS_FILE_NAME);

    path
}

/// Program settings from config file
#[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    /// The default program log level
    pub log_level: Option<String>,
    /// Whether to overwrite output files by default
    #[serde(default)]
    pub overwrite: bool,
}

impl Settings {
    /// Read the settings file from the user's configuration directory.
    ///
    /// If the file is not present, default values for settings will be used.
    ///
    /// # Returns
    ///
    /// The program settings as a `Settings` struct or an error if the file is invalid
    pub fn load() -> Result<Settings> {
        Self::load_from_path(&get_settings_file_path())
    }

    /// Read the settings file from the specified path
    fn load_from_path(file_path: &Path) -> Result<Settings> {
        if !file_path.is_file() {
            return Ok(Settings::default());
        }

        read_toml(file_path)
    }
}
