use super::open_store;
use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;

pub fn cmd(storage: &DataStorage) -> Result<()> {
    let totals = open_store(storage)?.aggregate_by_day_and_tag()?;

    if totals.is_empty() {
        msg_info!(Message::NoCompletedTasks);
        return Ok(());
    }

    msg_print!(Message::ReportHeader, true);
    View::daily_totals(&totals);

    Ok(())
}
