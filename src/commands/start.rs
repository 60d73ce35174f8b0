//! `start <tag>`: begin tracking a task.
//!
//! Free-text tags are checked against the configured vocabulary here, before
//! the lifecycle manager sees them. An unknown tag is only accepted as
//! `OTHER` after the user confirms; declining cancels the whole command
//! without touching the current task.

use super::open_tracker;
use super::task::print_outcome;
use crate::libs::data_storage::DataStorage;
use crate::libs::lifecycle::Outcome;
use crate::libs::messages::Message;
use crate::libs::tag::{Tag, TagVocabulary};
use crate::{msg_info, msg_warning};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct StartArgs {
    /// The tag for the task
    #[arg(required = true)]
    tag: String,
}

pub fn cmd(storage: &DataStorage, args: StartArgs) -> Result<()> {
    let mut tracker = open_tracker(storage)?;

    let vocabulary = tracker.vocabulary().clone();
    let tag = resolve_input(&vocabulary, &args.tag, |question| {
        Ok(Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(question.to_string())
            .default(false)
            .interact()?)
    })?;
    let Some(tag) = tag else {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    };

    let outcome = tracker.start(tag.as_str())?;
    if let Outcome::Resumed(task) = &outcome {
        msg_info!(Message::TaskResumedFromStart(task.tag.to_string()));
    }
    print_outcome(&outcome);

    Ok(())
}

/// Maps user input to a tag, asking `confirm` before falling back to `OTHER`.
///
/// Returns `None` when the user declines the fallback.
pub fn resolve_input<F>(vocabulary: &TagVocabulary, input: &str, confirm: F) -> Result<Option<Tag>>
where
    F: FnOnce(&Message) -> Result<bool>,
{
    if let Ok(tag) = vocabulary.resolve(input) {
        return Ok(Some(tag));
    }

    let question = Message::UnknownTag(input.trim().to_uppercase(), vocabulary.names().join(", "));
    if !confirm(&question)? {
        return Ok(None);
    }

    let fallback = vocabulary.fallback();
    msg_warning!(Message::FallingBackToTag(fallback.to_string()));
    Ok(Some(fallback))
}
