pub mod clear;
pub mod init;
pub mod report;
pub mod show;
pub mod start;
pub mod task;

use crate::db::completed_tasks::CompletedTasks;
use crate::db::db::Db;
use crate::libs::clock::SystemClock;
use crate::libs::config::Config;
use crate::libs::current_task::{CurrentTaskFile, CURRENT_TASK_FILE_NAME};
use crate::libs::data_storage::DataStorage;
use crate::libs::error::TrackerError;
use crate::libs::lifecycle::TaskLifecycleManager;
use crate::libs::messages::Message;
use crate::msg_error;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Lifecycle manager wired to the on-disk state file, SQLite and the system clock.
pub type Tracker = TaskLifecycleManager<CompletedTasks, SystemClock>;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configure the tag vocabulary")]
    Init,
    #[command(about = "Start a new task", arg_required_else_help = true)]
    Start(start::StartArgs),
    #[command(about = "Pause current task")]
    Pause,
    #[command(about = "Resume paused task")]
    Resume,
    #[command(about = "Mark current task as completed")]
    Finish,
    #[command(about = "Abandon current task")]
    Abort,
    #[command(about = "Reset the current task")]
    Reset,
    #[command(about = "Show what task is being worked on and its status")]
    Status,
    #[command(about = "Show time per day and tag for all tasks")]
    Report,
    #[command(about = "Show the last n tasks")]
    Show(show::ShowArgs),
    #[command(about = "Clear all tasks from the database")]
    Clear,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    /// Directory holding the current task, the database and the configuration
    #[arg(long, global = true, value_name = "DIR")]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        let storage = match cli.root {
            Some(root) => DataStorage::with_base_path(root),
            None => DataStorage::new(),
        };

        let result = match cli.command {
            Commands::Init => init::cmd(&storage),
            Commands::Start(args) => start::cmd(&storage, args),
            Commands::Pause => task::cmd(&storage, task::Action::Pause),
            Commands::Resume => task::cmd(&storage, task::Action::Resume),
            Commands::Finish => task::cmd(&storage, task::Action::Finish),
            Commands::Abort => task::cmd(&storage, task::Action::Abort),
            Commands::Reset => task::cmd(&storage, task::Action::Reset),
            Commands::Status => task::cmd(&storage, task::Action::Status),
            Commands::Report => report::cmd(&storage),
            Commands::Show(args) => show::cmd(&storage, args),
            Commands::Clear => clear::cmd(&storage),
        };

        if let Err(error) = &result {
            if let Some(TrackerError::CorruptState { path, .. }) = error.downcast_ref::<TrackerError>() {
                msg_error!(Message::CorruptStateHint(path.display().to_string()));
            }
        }

        result
    }
}

/// Opens the lifecycle manager for the data directory.
pub fn open_tracker(storage: &DataStorage) -> Result<Tracker> {
    let vocabulary = Config::read(storage)?.vocabulary()?;
    let state = CurrentTaskFile::new(storage.get_path(CURRENT_TASK_FILE_NAME)?, vocabulary);
    let log = CompletedTasks::new(Db::new(storage)?);

    Ok(TaskLifecycleManager::new(state, log, SystemClock))
}

pub fn open_store(storage: &DataStorage) -> Result<CompletedTasks> {
    Ok(CompletedTasks::new(Db::new(storage)?))
}
