use super::open_store;
use crate::db::completed_tasks::DEFAULT_RECENT_COUNT;
use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;
use clap::Args;
use std::num::NonZeroU32;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Number of tasks to show
    #[arg(default_value_t = DEFAULT_RECENT_COUNT)]
    n: NonZeroU32,
}

pub fn cmd(storage: &DataStorage, args: ShowArgs) -> Result<()> {
    let tasks = open_store(storage)?.recent(args.n)?;

    if tasks.is_empty() {
        msg_info!(Message::NoCompletedTasks);
        return Ok(());
    }

    msg_print!(Message::RecentTasksHeader(args.n.get()), true);
    View::completed_tasks(&tasks);

    Ok(())
}
