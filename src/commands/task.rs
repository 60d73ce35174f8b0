//! Lifecycle commands that act on the current task without arguments.

use super::open_tracker;
use crate::libs::current_task::{format_timestamp, TaskStatus};
use crate::libs::data_storage::DataStorage;
use crate::libs::formatter::format_seconds;
use crate::libs::lifecycle::Outcome;
use crate::libs::messages::Message;
use crate::{msg_info, msg_print, msg_success};
use anyhow::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Pause,
    Resume,
    Finish,
    Abort,
    Reset,
    Status,
}

pub fn cmd(storage: &DataStorage, action: Action) -> Result<()> {
    let mut tracker = open_tracker(storage)?;

    let outcome = match action {
        Action::Pause => tracker.pause()?,
        Action::Resume => tracker.resume()?,
        Action::Finish => tracker.finish()?,
        Action::Abort => tracker.abort()?,
        Action::Reset => tracker.reset()?,
        Action::Status => tracker.status()?,
    };
    print_outcome(&outcome);

    Ok(())
}

/// Prints the user-facing messages for a lifecycle outcome.
///
/// Status is a plain listing; everything else is a success or info notice.
pub fn print_outcome(outcome: &Outcome) {
    let is_status = matches!(outcome, Outcome::Status { .. });
    for (is_change, message) in outcome_messages(outcome) {
        if is_status {
            msg_print!(message);
        } else if is_change {
            msg_success!(message);
        } else {
            msg_info!(message);
        }
    }
}

/// Messages describing `outcome`, each flagged with whether it reports a state change.
///
/// A paused task is shown without its start time: its clock is stopped, so
/// "started at" would be misleading.
pub fn outcome_messages(outcome: &Outcome) -> Vec<(bool, Message)> {
    match outcome {
        Outcome::Started(task) => vec![(
            true,
            Message::TaskStarted(task.tag.to_string(), format_timestamp(&task.start_time)),
        )],
        Outcome::Switched { finished, started } => vec![
            (true, Message::TaskFinished(finished.tag.clone(), format_seconds(finished.duration))),
            (
                true,
                Message::TaskStarted(started.tag.to_string(), format_timestamp(&started.start_time)),
            ),
        ],
        Outcome::AlreadyRunning(tag) => vec![(false, Message::AlreadyWorkingOn(tag.to_string()))],
        Outcome::Paused(task) => vec![(true, Message::TaskPaused(task.tag.to_string()))],
        Outcome::AlreadyPaused(tag) => vec![(false, Message::TaskAlreadyPaused(tag.to_string()))],
        Outcome::Resumed(task) => vec![(true, Message::TaskResumed(task.tag.to_string()))],
        Outcome::AlreadyInProgress(tag) => vec![(false, Message::TaskAlreadyInProgress(tag.to_string()))],
        Outcome::Finished(record) => vec![(
            true,
            Message::TaskFinished(record.tag.clone(), format_seconds(record.duration)),
        )],
        Outcome::Aborted(tag) => vec![(true, Message::TaskAborted(tag.to_string()))],
        Outcome::Reset(task) => vec![(true, Message::TaskReset(task.tag.to_string()))],
        Outcome::Status { task, elapsed } => {
            let mut messages = vec![(false, Message::StatusTag(task.tag.to_string()))];
            if task.status == TaskStatus::InProgress {
                messages.push((false, Message::StatusStartedAt(format_timestamp(&task.start_time))));
            }
            messages.push((false, Message::StatusState(task.status.to_string())));
            messages.push((false, Message::StatusElapsed(format_seconds(*elapsed))));
            messages
        }
        Outcome::NoTask => vec![(false, Message::NoTaskRunning)],
    }
}
