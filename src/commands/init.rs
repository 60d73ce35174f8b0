//! Interactive configuration of the tag vocabulary.

use crate::{
    libs::{config::Config, data_storage::DataStorage, messages::Message},
    msg_print, msg_success,
};
use anyhow::Result;

pub fn cmd(storage: &DataStorage) -> Result<()> {
    let config = Config::init(storage)?;
    config.save(storage)?;

    msg_success!(Message::ConfigSaved);
    msg_print!(Message::TagsConfigured(config.vocabulary()?.names().join(", ")));
    Ok(())
}
