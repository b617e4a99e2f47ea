//! Configuration management for the kanbo application.
//!
//! Settings live in a JSON file in the platform data directory, next to
//! the storage file. Reading falls back to defaults when the file is
//! missing, so a fresh install works without running `init` first. The
//! interactive setup wizard is driven by `init`.

use super::data_storage::DataStorage;
use crate::db::tasks::IdStrategy;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use serde::{Deserialize, Serialize};
use std::fs;

pub const CONFIG_FILE_NAME: &str = "config.json";

fn default_statuses() -> Vec<String> {
    vec!["todo".to_string(), "doing".to_string(), "done".to_string()]
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    /// Status columns in display order. This is also the set of statuses a
    /// task can be created with; a task whose status is not listed here is
    /// stored but rendered in no column.
    #[serde(default = "default_statuses")]
    pub statuses: Vec<String>,

    /// Id assignment policy for new tasks. The default matches the
    /// original append-based numbering; see [`IdStrategy`].
    #[serde(default)]
    pub id_strategy: IdStrategy,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            statuses: default_statuses(),
            id_strategy: IdStrategy::default(),
        }
    }
}

impl Config {
    /// Loads the configuration, falling back to defaults when the file
    /// does not exist yet. A present-but-unreadable file is an error.
    pub fn read() -> Result<Self> {
        let path = DataStorage::new()
            .get_path(CONFIG_FILE_NAME)
            .map_err(|e| anyhow::anyhow!(e.to_string()))?;
        if !path.exists() {
            return Ok(Config::default());
        }
        let contents = fs::read_to_string(&path)?;
        serde_json::from_str(&contents).map_err(|_| msg_error_anyhow!(Message::ConfigParseError))
    }

    pub fn save(&self) -> Result<()> {
        let path = DataStorage::new()
            .get_path(CONFIG_FILE_NAME)
            .map_err(|e| anyhow::anyhow!(e.to_string()))?;
        fs::write(&path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Interactive setup wizard; returns the configured values without
    /// saving them.
    pub fn init() -> Result<Self> {
        let defaults = Config::default();

        let statuses: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptStatuses.to_string())
            .default(defaults.statuses.join(","))
            .interact_text()?;
        let statuses: Vec<String> = statuses
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let statuses = if statuses.is_empty() { defaults.statuses } else { statuses };

        let strategies = ["sequential (original numbering)", "max (collision-free)"];
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptIdStrategy.to_string())
            .items(&strategies)
            .default(0)
            .interact()?;
        let id_strategy = if selection == 1 { IdStrategy::Max } else { IdStrategy::Sequential };

        Ok(Config { statuses, id_strategy })
    }
}
