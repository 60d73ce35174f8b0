use chrono::{NaiveDate, NaiveDateTime};

/// One finished task as logged in the completed task store.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletedTask {
    /// Assigned by the store; `None` until appended.
    pub id: Option<i64>,
    pub tag: String,
    /// When the task was first started, not when it was finished.
    pub date_started: NaiveDateTime,
    /// Engaged seconds.
    pub duration: f64,
}

impl CompletedTask {
    pub fn new(tag: &str, date_started: NaiveDateTime, duration: f64) -> Self {
        CompletedTask {
            id: None,
            tag: tag.to_string(),
            date_started,
            duration,
        }
    }
}

/// Total time spent on one tag during one calendar day.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyTagTotal {
    pub date: NaiveDate,
    pub tag: String,
    pub duration: f64,
}
