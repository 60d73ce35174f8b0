use super::open_store;
use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::{msg_info, msg_success};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm};

pub fn cmd(storage: &DataStorage) -> Result<()> {
    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmClearDatabase.to_string())
        .default(false)
        .interact()?;

    if !confirmed {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    let removed = open_store(storage)?.clear()?;
    msg_success!(Message::DatabaseCleared(removed));

    Ok(())
}
