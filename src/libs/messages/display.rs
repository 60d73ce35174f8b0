//! Display implementation for tasktrack messages.
//!
//! All user-facing text is defined here, in one place. Commands and library
//! code only ever refer to [`Message`] variants; the wording and parameter
//! interpolation happen in this `Display` impl.
//!
//! ```rust
//! use tasktrack::libs::messages::Message;
//!
//! let message = Message::TaskPaused("CODING".to_string());
//! assert_eq!(message.to_string(), "Paused CODING.");
//! ```

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === LIFECYCLE MESSAGES ===
            Message::TaskStarted(tag, start) => format!("Started {} at {}.", tag, start),
            Message::AlreadyWorkingOn(tag) => format!("Already working on {}.", tag),
            Message::TaskPaused(tag) => format!("Paused {}.", tag),
            Message::TaskAlreadyPaused(tag) => format!("{} is already paused.", tag),
            Message::TaskResumed(tag) => format!("Resumed {}.", tag),
            Message::TaskResumedFromStart(tag) => format!("{} was paused. Resuming the task.", tag),
            Message::TaskAlreadyInProgress(tag) => format!("{} is already in progress.", tag),
            Message::TaskFinished(tag, duration) => format!("Finished {}. Duration: {}.", tag, duration),
            Message::TaskAborted(tag) => format!("Aborted {}.", tag),
            Message::TaskReset(tag) => format!("Reset {} duration.", tag),
            Message::NoTaskRunning => "No task is currently running.".to_string(),

            // === STATUS MESSAGES ===
            Message::StatusTag(tag) => format!("Task: {}", tag),
            Message::StatusStartedAt(start) => format!("Started at: {}", start),
            Message::StatusState(status) => format!("Status: {}", status),
            Message::StatusElapsed(elapsed) => format!("Tracked: {}", elapsed),

            // === TAG MESSAGES ===
            Message::UnknownTag(tag, valid) => format!(
                "Unknown tag {}. Valid task tags are {}.\nDo you want to create a new task using the tag 'OTHER'?",
                tag, valid
            ),
            Message::FallingBackToTag(tag) => format!("Using tag {}.", tag),
            Message::TagsConfigured(tags) => format!("Tags: {}", tags),

            // === STORE MESSAGES ===
            Message::ConfirmClearDatabase => "Do you want to clear the database? This cannot be undone.".to_string(),
            Message::DatabaseCleared(count) => format!("Database cleared. Removed {} task(s).", count),
            Message::NoCompletedTasks => "No completed tasks yet.".to_string(),
            Message::RecentTasksHeader(count) => format!("Last {} task(s):", count),
            Message::ReportHeader => "Time per day and tag:".to_string(),
            Message::CorruptStateHint(path) => {
                format!("The current task file was left untouched. Inspect or remove {} to continue.", path)
            }

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigParseError(path) => format!("Failed to parse configuration file {}", path),
            Message::ConfigModuleTags => "Tag settings".to_string(),
            Message::PromptSelectTags => "Select built-in tags (OTHER is always available)".to_string(),
            Message::PromptCustomTags => "Additional tags, comma separated".to_string(),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending migration(s)", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),

            // === GENERAL MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
        };
        write!(f, "{}", text)
    }
}
