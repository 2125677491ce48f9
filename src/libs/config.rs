//! Application configuration.
//!
//! Settings are stored as pretty-printed JSON in `config.json` inside the
//! application data directory. Each integration has its own optional section,
//! and `Config::init` walks the user through the sections they pick.
//!
//! The API token is not part of this file; see [`crate::libs::secret`].
//!
//! ```rust,no_run
//! use actime::libs::config::Config;
//!
//! let config = Config::init()?;
//! config.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::api::activecollab::ActiveCollabConfig;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Identifies a configurable section in the setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

/// Parameters of randomized apportionment.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SyncConfig {
    /// Hours a day's random split must add up to.
    pub daily_hours: f64,
    /// Granularity of every random value, in hours.
    pub step: f64,
}

impl Default for SyncConfig {
    fn default() -> Self {
        SyncConfig {
            daily_hours: 8.0,
            step: 0.5,
        }
    }
}

impl SyncConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "sync".to_string(),
            name: "Sync".to_string(),
        }
    }

    pub fn init(config: &Option<Self>) -> Result<Self> {
        let default = config.clone().unwrap_or_default();
        msg_print!(Message::ConfigModuleSync);
        Ok(Self {
            daily_hours: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptDailyHours.to_string())
                .default(default.daily_hours)
                .interact_text()?,
            step: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptStep.to_string())
                .default(default.step)
                .interact_text()?,
        })
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activecollab: Option<ActiveCollabConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync: Option<SyncConfig>,
}

impl Config {
    /// Loads `config.json`, or the default configuration when it does not exist.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        Ok(serde_json::from_str(&config_str)?)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes `config.json`. A missing file is not an error.
    pub fn delete() -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if config_file_path.exists() {
            fs::remove_file(config_file_path)?;
        }
        Ok(())
    }

    /// Sync settings, falling back to the defaults when the section is absent.
    pub fn sync_or_default(&self) -> SyncConfig {
        self.sync.clone().unwrap_or_default()
    }

    /// Interactive setup of the selected sections, starting from the current file.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = [ActiveCollabConfig::module(), SyncConfig::module()];
        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "activecollab" => config.activecollab = Some(ActiveCollabConfig::init(&config.activecollab)?),
                "sync" => config.sync = Some(SyncConfig::init(&config.sync)?),
                _ => {}
            }
        }

        Ok(config)
    }
}
