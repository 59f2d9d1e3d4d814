//! Configuration management for taskmaster.
//!
//! Settings live in `config.json` inside the platform data directory:
//!
//! - **Windows**: `%LOCALAPPDATA%\taskmaster\config.json`
//! - **macOS**: `~/Library/Application Support/taskmaster/config.json`
//! - **Linux**: `~/.local/share/taskmaster/config.json`
//!
//! A missing file is a default configuration. `TASKMASTER_URL` (also read
//! from a `.env` file) overrides the configured server URL.
//!
//! ```rust,no_run
//! use taskmaster::libs::config::Config;
//!
//! let config = Config::read()?;
//! let url = config.base_url()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use super::session::Session;
use super::sorting::DayOrder;
use super::task::Weekday;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Environment variable that overrides [`ServerConfig::base_url`].
pub const URL_ENV: &str = "TASKMASTER_URL";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    /// Root URL of the Task Master web application, e.g. `https://tasks.example.com`.
    pub base_url: String,
}

/// How the task table is paged and ordered.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TableConfig {
    pub page_size: usize,
    /// Day weekly tasks are ordered from.
    pub week_start: Weekday,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size: 10,
            week_start: Weekday::Monday,
        }
    }
}

impl TableConfig {
    pub fn day_order(&self) -> DayOrder {
        DayOrder::starting_on(self.week_start)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerConfig>,

    /// Owner of created tasks when the session doesn't know it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,

    #[serde(default)]
    pub table: TableConfig,
}

impl Config {
    /// Loads the configuration, falling back to defaults when no file exists.
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

    /// Server URL, with `TASKMASTER_URL` taking precedence over the file.
    pub fn base_url(&self) -> Result<String> {
        env::var(URL_ENV)
            .ok()
            .filter(|url| !url.trim().is_empty())
            .or_else(|| self.server.as_ref().map(|server| server.base_url.clone()))
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| msg_error_anyhow!(Message::ConfigServerMissing))
    }

    /// User id that owns created tasks: the logged-in user first, then the configured one.
    pub fn owner(&self, session: &Session) -> Result<i64> {
        session
            .user_id
            .or(self.user_id)
            .ok_or_else(|| msg_error_anyhow!(Message::OwnerUnknown))
    }

    /// Interactive setup, using the current values as defaults.
    pub fn init() -> Result<Self> {
        let config = Self::read().unwrap_or_default();
        let theme = ColorfulTheme::default();

        let base_url: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptServerUrl.to_string())
            .default(config.server.map(|s| s.base_url).unwrap_or_else(|| "http://localhost:8000".to_string()))
            .interact_text()?;
        let user_id: i64 = Input::with_theme(&theme)
            .with_prompt(Message::PromptUserId.to_string())
            .default(config.user_id.unwrap_or(0))
            .interact_text()?;
        let page_size: usize = Input::with_theme(&theme)
            .with_prompt(Message::PromptPageSize.to_string())
            .default(config.table.page_size)
            .interact_text()?;
        let week_start = Select::with_theme(&theme)
            .with_prompt(Message::PromptWeekStart.to_string())
            .items(&Weekday::ALL.map(|day| day.name()))
            .default(Weekday::ALL.iter().position(|d| *d == config.table.week_start).unwrap_or(1))
            .interact()?;

        Ok(Self {
            server: Some(ServerConfig { base_url }),
            user_id: (user_id > 0).then_some(user_id),
            table: TableConfig {
                page_size: page_size.max(1),
                week_start: Weekday::ALL[week_start],
            },
        })
    }
}
