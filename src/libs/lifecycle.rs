//! State machine for the single current task.
//!
//! Every operation loads the persisted state, applies one transition,
//! persists the result and reports what happened as an [`Outcome`]:
//!
//! ```text
//!            start                pause
//!   EMPTY ──────────▶ IN PROGRESS ─────▶ PAUSED
//!     ▲                 │   ▲   resume    │
//!     │  finish/abort   │   └─────────────┘
//!     └─────────────────┴─────────────────┘
//! ```
//!
//! Starting a different tag while a task is active is the composite
//! [`Outcome::Switched`] transition: the active task is finished and logged,
//! then the new task begins. Operations that find no active task, or that
//! would not change the state, return informational outcomes and leave the
//! state file untouched.
//!
//! Duration is accumulated only when a running segment ends (pause or
//! finish), measured from `last_resumed`. The total therefore equals the
//! time spent in progress however many pauses occurred.

use super::clock::Clock;
use super::current_task::{ActiveTask, CurrentTask, CurrentTaskFile, TaskStatus};
use super::error::Result;
use super::tag::{Tag, TagVocabulary};
use super::task::CompletedTask;
use crate::db::completed_tasks::TaskLog;
use crate::msg_debug;
use chrono::NaiveDateTime;

/// Result of a lifecycle operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Started(ActiveTask),
    /// The previous task was finished and logged before the new one began.
    Switched { finished: CompletedTask, started: ActiveTask },
    /// `start` with the tag that is already running.
    AlreadyRunning(Tag),
    Paused(ActiveTask),
    AlreadyPaused(Tag),
    Resumed(ActiveTask),
    AlreadyInProgress(Tag),
    Finished(CompletedTask),
    Aborted(Tag),
    Reset(ActiveTask),
    /// Snapshot of the active task with its engaged seconds so far.
    Status { task: ActiveTask, elapsed: f64 },
    /// The operation needs an active task and there is none.
    NoTask,
}

/// Owns the transitions of the current task.
pub struct TaskLifecycleManager<L, C>
where
    L: TaskLog,
    C: Clock,
{
    state: CurrentTaskFile,
    log: L,
    clock: C,
}

impl<L, C> TaskLifecycleManager<L, C>
where
    L: TaskLog,
    C: Clock,
{
    pub fn new(state: CurrentTaskFile, log: L, clock: C) -> Self {
        Self { state, log, clock }
    }

    pub fn vocabulary(&self) -> &TagVocabulary {
        self.state.vocabulary()
    }

    /// The persisted current task, without changing it.
    pub fn current(&self) -> Result<CurrentTask> {
        self.state.load()
    }

    /// Starts tracking `token`.
    ///
    /// The token must belong to the vocabulary; unknown tokens fail with
    /// `InvalidTag` before any state is read or written.
    pub fn start(&mut self, token: &str) -> Result<Outcome> {
        let tag = self.state.vocabulary().resolve(token)?;
        let current = self.state.load()?;
        let now = self.clock.now();

        match current {
            Some(task) if task.tag == tag && task.status == TaskStatus::InProgress => {
                Ok(Outcome::AlreadyRunning(task.tag))
            }
            Some(task) if task.tag == tag => self.resume_paused(task, now),
            Some(task) => {
                let finished = self.finish_active(task, now)?;
                let started = self.begin(tag, now)?;
                msg_debug!(format!("Switched from {} to {}", finished.tag, started.tag));
                Ok(Outcome::Switched { finished, started })
            }
            None => Ok(Outcome::Started(self.begin(tag, now)?)),
        }
    }

    pub fn pause(&mut self) -> Result<Outcome> {
        match self.state.load()? {
            None => Ok(Outcome::NoTask),
            Some(task) if task.status == TaskStatus::Paused => Ok(Outcome::AlreadyPaused(task.tag)),
            Some(mut task) => {
                task.close_segment(self.clock.now());
                task.status = TaskStatus::Paused;
                self.persist(&task)?;
                msg_debug!(format!("Paused {} at {:.0}s", task.tag, task.duration));
                Ok(Outcome::Paused(task))
            }
        }
    }

    pub fn resume(&mut self) -> Result<Outcome> {
        match self.state.load()? {
            None => Ok(Outcome::NoTask),
            Some(task) if task.status == TaskStatus::InProgress => Ok(Outcome::AlreadyInProgress(task.tag)),
            Some(task) => {
                let now = self.clock.now();
                self.resume_paused(task, now)
            }
        }
    }

    /// Logs the active task and clears the current state.
    ///
    /// The state is cleared only after the store accepted the record; if the
    /// append fails the task stays active and can be finished again.
    pub fn finish(&mut self) -> Result<Outcome> {
        match self.state.load()? {
            None => Ok(Outcome::NoTask),
            Some(task) => {
                let now = self.clock.now();
                Ok(Outcome::Finished(self.finish_active(task, now)?))
            }
        }
    }

    /// Discards the active task without logging it.
    pub fn abort(&mut self) -> Result<Outcome> {
        match self.state.load()? {
            None => Ok(Outcome::NoTask),
            Some(task) => {
                self.state.save(&None)?;
                msg_debug!(format!("Aborted {} after {:.0}s", task.tag, task.duration));
                Ok(Outcome::Aborted(task.tag))
            }
        }
    }

    /// Restarts the active task's clock, dropping its accumulated time.
    pub fn reset(&mut self) -> Result<Outcome> {
        match self.state.load()? {
            None => Ok(Outcome::NoTask),
            Some(task) => {
                let now = self.clock.now();
                Ok(Outcome::Reset(self.begin(task.tag, now)?))
            }
        }
    }

    pub fn status(&self) -> Result<Outcome> {
        match self.state.load()? {
            None => Ok(Outcome::NoTask),
            Some(task) => {
                let elapsed = task.elapsed(self.clock.now());
                Ok(Outcome::Status { task, elapsed })
            }
        }
    }

    fn begin(&mut self, tag: Tag, now: NaiveDateTime) -> Result<ActiveTask> {
        let task = ActiveTask::start(tag, now);
        self.persist(&task)?;
        Ok(task)
    }

    fn resume_paused(&mut self, mut task: ActiveTask, now: NaiveDateTime) -> Result<Outcome> {
        task.last_resumed = now;
        task.status = TaskStatus::InProgress;
        self.persist(&task)?;
        Ok(Outcome::Resumed(task))
    }

    fn finish_active(&mut self, mut task: ActiveTask, now: NaiveDateTime) -> Result<CompletedTask> {
        task.close_segment(now);

        let mut record = CompletedTask::new(task.tag.as_str(), task.start_time, task.duration);
        record.id = Some(self.log.append(&record)?);
        self.state.save(&None)?;
        msg_debug!(format!("Logged {} with {:.0}s", record.tag, record.duration));

        Ok(record)
    }

    fn persist(&self, task: &ActiveTask) -> Result<()> {
        self.state.save(&Some(task.clone()))
    }
}
