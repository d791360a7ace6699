//! Configuration management for the satchel application.
//!
//! The configuration records where the roster of children lives and how wide
//! the date strip is. Both are optional: without a file the library defaults
//! apply and the roster must be passed on the command line.
//!
//! ## Storage
//!
//! - Stored as pretty-printed JSON named [`CONFIG_FILE_NAME`]
//! - Lives in the platform data directory resolved by [`DataStorage`]:
//!   - **Windows**: `%LOCALAPPDATA%\satchel-app\satchel\config.json`
//!   - **macOS**: `~/Library/Application Support/satchel-app/satchel/config.json`
//!   - **Linux**: `~/.local/share/satchel-app/satchel/config.json`
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use satchel::libs::config::Config;
//!
//! let config = Config::read()?;
//! let window = config.strip_window();
//! println!("strip covers {} days back", window.past_days);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use super::date_strip::StripWindow;
use super::messages::prompts;
use crate::libs::messages::Message;
use crate::{msg_print, msg_warning};
use anyhow::{Context, Result};
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

/// Configuration file name inside the application data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Represents a configurable section offered by the setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    /// Unique identifier used to route the wizard
    pub key: String,
    /// Display name shown to users during interactive setup
    pub name: String,
}

/// Root configuration object.
///
/// Unset sections are omitted from the JSON output.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    /// JSON file with the children's attendance datasets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roster: Option<PathBuf>,

    /// Date strip window override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strip: Option<StripWindow>,
}

impl Config {
    /// Reads the configuration, returning defaults when no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(&config_file_path)
            .with_context(|| format!("reading {}", config_file_path.display()))?;
        let config: Config = serde_json::from_str(&config_str)
            .with_context(|| format!("parsing {}", config_file_path.display()))?;
        tracing::debug!(path = %config_file_path.display(), "configuration loaded");
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON, overwriting any existing file.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(&config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        tracing::debug!(path = %config_file_path.display(), "configuration saved");
        Ok(())
    }

    /// Removes the configuration file. Returns `false` when there was nothing to remove.
    pub fn delete() -> Result<bool> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(false);
        }
        fs::remove_file(&config_file_path)?;
        Ok(true)
    }

    /// Effective strip window: the configured one or the library default,
    /// capped at [`StripWindow::MAX_DAYS`] per side.
    pub fn strip_window(&self) -> StripWindow {
        let window = self.strip.unwrap_or_default();
        if !window.is_within_bounds() {
            msg_warning!(Message::StripWindowCapped(StripWindow::MAX_DAYS));
        }
        window.clamped()
    }

    /// Runs the interactive setup wizard, starting from the current configuration.
    ///
    /// Only the sections the user selects are prompted for; the others keep
    /// their current values.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = [
            ConfigModule {
                key: "roster".to_string(),
                name: Message::ConfigModuleRoster.to_string(),
            },
            ConfigModule {
                key: "strip".to_string(),
                name: Message::ConfigModuleStrip.to_string(),
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(prompts::PROMPT_SELECT_MODULES)
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "roster" => {
                    msg_print!(Message::ConfigModuleRoster);
                    let default = config
                        .roster
                        .as_ref()
                        .map(|path| path.display().to_string())
                        .unwrap_or_else(|| "roster.json".to_string());
                    let path: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(prompts::PROMPT_ROSTER_PATH)
                        .default(default)
                        .interact_text()?;
                    config.roster = Some(PathBuf::from(path));
                }
                "strip" => {
                    msg_print!(Message::ConfigModuleStrip);
                    let default = config.strip.unwrap_or_default();
                    config.strip = Some(StripWindow {
                        past_days: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(prompts::PROMPT_STRIP_PAST_DAYS)
                            .default(default.past_days)
                            .interact_text()?,
                        future_days: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(prompts::PROMPT_STRIP_FUTURE_DAYS)
                            .default(default.future_days)
                            .interact_text()?,
                    }
                    .clamped());
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
