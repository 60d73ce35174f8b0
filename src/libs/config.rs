//! Configuration management for the tasktrack application.
//!
//! The configuration lives in `config.json` inside the data directory and
//! currently carries the tag vocabulary. A missing file means defaults, so
//! the tracker works without any setup; `tasktrack init` runs an interactive
//! wizard to edit it.
//!
//! ```rust,no_run
//! use tasktrack::libs::config::Config;
//! use tasktrack::libs::data_storage::DataStorage;
//!
//! let storage = DataStorage::new();
//! let config = Config::read(&storage)?;
//! let vocabulary = config.vocabulary()?;
//! println!("Tags: {}", vocabulary.names().join(", "));
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use super::messages::Message;
use super::tag::{TagVocabulary, DEFAULT_TAGS, FALLBACK_TAG};
use crate::msg_print;
use anyhow::{Context, Result};
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    /// Tag vocabulary; the built-in tags are used when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl Config {
    pub fn read(storage: &DataStorage) -> Result<Config> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(&config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)
            .with_context(|| Message::ConfigParseError(config_file_path.display().to_string()).to_string())?;
        Ok(config)
    }

    pub fn save(&self, storage: &DataStorage) -> Result<()> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// The configured vocabulary, validated. `OTHER` is always included.
    pub fn vocabulary(&self) -> Result<TagVocabulary> {
        match &self.tags {
            Some(tags) => Ok(TagVocabulary::new(tags)?),
            None => Ok(TagVocabulary::default()),
        }
    }

    /// Interactive setup of the tag vocabulary.
    ///
    /// Built-in tags are offered as a checklist, then extra tags can be typed
    /// as a comma separated list.
    pub fn init(storage: &DataStorage) -> Result<Self> {
        let config = Self::read(storage).unwrap_or_default();
        let current = config.vocabulary().unwrap_or_default();

        msg_print!(Message::ConfigModuleTags);

        let builtin: Vec<&str> = DEFAULT_TAGS.iter().copied().filter(|tag| *tag != FALLBACK_TAG).collect();
        let checked: Vec<bool> = builtin.iter().map(|tag| current.contains(tag)).collect();
        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectTags.to_string())
            .items(&builtin)
            .defaults(&checked)
            .interact()?;

        let custom_default = current
            .names()
            .iter()
            .filter(|name| !DEFAULT_TAGS.contains(&name.as_str()))
            .cloned()
            .collect::<Vec<_>>()
            .join(", ");
        let custom: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptCustomTags.to_string())
            .default(custom_default)
            .allow_empty(true)
            .interact_text()?;

        let mut tags: Vec<String> = selected.iter().map(|&index| builtin[index].to_string()).collect();
        tags.extend(custom.split(',').map(str::trim).filter(|name| !name.is_empty()).map(str::to_string));

        let vocabulary = TagVocabulary::new(&tags)?;
        Ok(Config {
            tags: Some(vocabulary.names().to_vec()),
        })
    }
}
