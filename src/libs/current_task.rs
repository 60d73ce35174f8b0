//! The single current task and its on-disk representation.
//!
//! At most one task is tracked at a time. In memory the "no task" case is
//! simply `None` ([`CurrentTask`]); on disk it is the empty record
//!
//! ```text
//! {"tag":"NONE","start_time":null,"last_resumed":null,"duration":0.0,"status":null}
//! ```
//!
//! [`CurrentTaskFile`] owns the JSON file. Loading never repairs a damaged
//! file: anything that does not decode into a valid state is reported as
//! [`TrackerError::CorruptState`] so the user can inspect it before data is
//! lost. A missing file is different and is replaced by the empty record.
//! The stored tag is not checked against the configured vocabulary, so a
//! running task survives a configuration change.

use super::error::{Result, TrackerError};
use super::tag::{Tag, TagVocabulary, RESERVED_NONE};
use crate::msg_debug;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// File name of the current task state inside the data directory.
pub const CURRENT_TASK_FILE_NAME: &str = "current_task.json";

/// Timestamp format shared by the state file and the completed task store.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const STATUS_IN_PROGRESS: &str = "IN PROGRESS";
const STATUS_IN_PROGRESS_ALIAS: &str = "IN_PROGRESS";
const STATUS_PAUSED: &str = "PAUSED";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    InProgress,
    Paused,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::InProgress => STATUS_IN_PROGRESS,
            TaskStatus::Paused => STATUS_PAUSED,
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value {
            STATUS_IN_PROGRESS | STATUS_IN_PROGRESS_ALIAS => Some(TaskStatus::InProgress),
            STATUS_PAUSED => Some(TaskStatus::Paused),
            _ => None,
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A task that is either running or paused.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveTask {
    pub tag: Tag,
    /// When the task was first started; never changes across pauses.
    pub start_time: NaiveDateTime,
    /// Baseline of the currently running segment.
    pub last_resumed: NaiveDateTime,
    /// Seconds accumulated by segments that have already ended.
    pub duration: f64,
    pub status: TaskStatus,
}

impl ActiveTask {
    /// A fresh running task with nothing accumulated.
    pub fn start(tag: Tag, now: NaiveDateTime) -> Self {
        Self {
            tag,
            start_time: now,
            last_resumed: now,
            duration: 0.0,
            status: TaskStatus::InProgress,
        }
    }

    pub fn is_running(&self) -> bool {
        self.status == TaskStatus::InProgress
    }

    /// Closes the running segment, adding it to `duration`.
    ///
    /// Does nothing for a paused task: its clock is already stopped.
    pub(crate) fn close_segment(&mut self, now: NaiveDateTime) {
        if self.is_running() {
            self.duration += segment_seconds(self.last_resumed, now);
        }
    }

    /// Engaged time so far, including the open segment of a running task.
    pub fn elapsed(&self, now: NaiveDateTime) -> f64 {
        if self.is_running() {
            self.duration + segment_seconds(self.last_resumed, now)
        } else {
            self.duration
        }
    }
}

/// The tracker's working record: `None` when no task is active.
pub type CurrentTask = Option<ActiveTask>;

// A clock that moved backwards must not shrink the accumulated duration.
fn segment_seconds(from: NaiveDateTime, to: NaiveDateTime) -> f64 {
    let millis = (to - from).num_milliseconds().max(0);
    millis as f64 / 1000.0
}

pub fn format_timestamp(time: &NaiveDateTime) -> String {
    time.format(DATETIME_FORMAT).to_string()
}

pub fn parse_timestamp(value: &str) -> std::result::Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(value, DATETIME_FORMAT)
}

/// Serialized shape of the state file.
#[derive(Debug, Serialize, Deserialize)]
struct StateRecord {
    tag: String,
    start_time: Option<String>,
    last_resumed: Option<String>,
    duration: f64,
    status: Option<String>,
}

impl StateRecord {
    fn empty() -> Self {
        Self {
            tag: RESERVED_NONE.to_string(),
            start_time: None,
            last_resumed: None,
            duration: 0.0,
            status: None,
        }
    }

    fn encode(task: &CurrentTask) -> Self {
        match task {
            None => Self::empty(),
            Some(task) => Self {
                tag: task.tag.to_string(),
                start_time: Some(format_timestamp(&task.start_time)),
                last_resumed: Some(format_timestamp(&task.last_resumed)),
                duration: task.duration,
                status: Some(task.status.as_str().to_string()),
            },
        }
    }

    fn decode(self) -> std::result::Result<CurrentTask, String> {
        let is_empty_tag = self.tag.trim().eq_ignore_ascii_case(RESERVED_NONE);
        let status = match (is_empty_tag, self.status) {
            (true, None) => return Ok(None),
            (true, Some(status)) => return Err(format!("tag NONE cannot have status '{}'", status)),
            (false, None) => return Err(format!("task '{}' has no status", self.tag)),
            (false, Some(status)) => TaskStatus::parse(&status).ok_or_else(|| format!("unknown status '{}'", status))?,
        };

        let tag = Tag::from_persisted(&self.tag).ok_or_else(|| format!("invalid tag '{}'", self.tag))?;
        let start_time = required_timestamp("start_time", self.start_time)?;
        let last_resumed = required_timestamp("last_resumed", self.last_resumed)?;
        if !self.duration.is_finite() || self.duration < 0.0 {
            return Err(format!("invalid duration {}", self.duration));
        }

        Ok(Some(ActiveTask {
            tag,
            start_time,
            last_resumed,
            duration: self.duration,
            status,
        }))
    }
}

fn required_timestamp(field: &str, value: Option<String>) -> std::result::Result<NaiveDateTime, String> {
    let value = value.ok_or_else(|| format!("missing {}", field))?;
    parse_timestamp(&value).map_err(|e| format!("invalid {} '{}': {}", field, value, e))
}

/// Persistence of the current task in a single JSON file.
#[derive(Debug, Clone)]
pub struct CurrentTaskFile {
    path: PathBuf,
    vocabulary: TagVocabulary,
}

impl CurrentTaskFile {
    pub fn new(path: impl Into<PathBuf>, vocabulary: TagVocabulary) -> Self {
        Self {
            path: path.into(),
            vocabulary,
        }
    }

    pub fn vocabulary(&self) -> &TagVocabulary {
        &self.vocabulary
    }

    /// Reads the current task, writing the empty record first on first run.
    pub fn load(&self) -> Result<CurrentTask> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                msg_debug!(format!("No current task file at {}, creating one", self.path.display()));
                self.save(&None)?;
                fs::read_to_string(&self.path)?
            }
            Err(e) => return Err(e.into()),
        };

        let record: StateRecord = serde_json::from_str(&contents).map_err(|e| self.corrupt(e.to_string()))?;
        record.decode().map_err(|reason| self.corrupt(reason))
    }

    /// Replaces the state file.
    ///
    /// The record is written to a sibling temporary file and renamed over the
    /// target, so a concurrent `load` sees either the old or the new state.
    pub fn save(&self, task: &CurrentTask) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let bytes = serde_json::to_vec(&StateRecord::encode(task)).map_err(|e| TrackerError::StorageUnavailable(e.to_string()))?;
        let temp_path = self.path.with_extension("json.tmp");
        let written = fs::write(&temp_path, bytes).and_then(|_| fs::rename(&temp_path, &self.path));
        if let Err(e) = written {
            let _ = fs::remove_file(&temp_path);
            return Err(e.into());
        }

        Ok(())
    }

    fn corrupt(&self, reason: String) -> TrackerError {
        TrackerError::CorruptState {
            path: self.path.clone(),
            reason,
        }
    }
}
