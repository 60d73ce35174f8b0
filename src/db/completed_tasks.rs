use super::db::Db;
use crate::libs::current_task::{format_timestamp, parse_timestamp};
use crate::libs::error::Result;
use crate::libs::task::{CompletedTask, DailyTagTotal};
use chrono::NaiveDate;
use rusqlite::types::Type;
use rusqlite::{params, Connection, Row};
use std::num::NonZeroU32;

const INSERT_TASK: &str = "INSERT INTO completed_tasks (tag, date_started, duration) VALUES (?1, ?2, ?3)";
const SELECT_TASKS: &str = "SELECT id, tag, date_started, duration FROM completed_tasks";
const ORDER_BY_ID: &str = "ORDER BY id";
const ORDER_RECENT: &str = "ORDER BY date_started DESC, id DESC LIMIT ?1";
const SELECT_DAILY_TOTALS: &str = "SELECT DATE(date_started) AS day, tag, SUM(duration) AS total
    FROM completed_tasks
    GROUP BY day, tag
    ORDER BY day ASC, total DESC, tag ASC";
const DELETE_ALL: &str = "DELETE FROM completed_tasks";

/// Number of tasks `show` lists when no count is given.
pub const DEFAULT_RECENT_COUNT: NonZeroU32 = match NonZeroU32::new(5) {
    Some(count) => count,
    None => unreachable!(),
};

/// Durable destination for finished tasks.
///
/// The lifecycle manager only needs to append, so it depends on this trait
/// rather than on the SQLite store.
pub trait TaskLog {
    /// Appends the task and returns its new id.
    fn append(&mut self, task: &CompletedTask) -> Result<i64>;
}

/// Append-only log of completed tasks.
pub struct CompletedTasks {
    pub conn: Connection,
}

impl CompletedTasks {
    pub fn new(db: Db) -> Self {
        CompletedTasks { conn: db.conn }
    }

    pub fn insert(&mut self, task: &CompletedTask) -> Result<i64> {
        self.conn
            .execute(INSERT_TASK, params![task.tag, format_timestamp(&task.date_started), task.duration])?;

        Ok(self.conn.last_insert_rowid())
    }

    /// The `count` most recently started tasks, newest first.
    pub fn recent(&mut self, count: NonZeroU32) -> Result<Vec<CompletedTask>> {
        let mut stmt = self.conn.prepare(&format!("{} {}", SELECT_TASKS, ORDER_RECENT))?;
        let task_iter = stmt.query_map(params![count.get()], task_from_row)?;

        let mut tasks = Vec::new();
        for task_result in task_iter {
            tasks.push(task_result?);
        }

        Ok(tasks)
    }

    /// Every logged task in insertion order.
    pub fn all(&mut self) -> Result<Vec<CompletedTask>> {
        let mut stmt = self.conn.prepare(&format!("{} {}", SELECT_TASKS, ORDER_BY_ID))?;
        let task_iter = stmt.query_map([], task_from_row)?;

        let mut tasks = Vec::new();
        for task_result in task_iter {
            tasks.push(task_result?);
        }

        Ok(tasks)
    }

    /// Summed durations per calendar day and tag.
    ///
    /// Days are ascending; within a day the largest total comes first.
    pub fn aggregate_by_day_and_tag(&mut self) -> Result<Vec<DailyTagTotal>> {
        let mut stmt = self.conn.prepare(SELECT_DAILY_TOTALS)?;
        let total_iter = stmt.query_map([], |row| {
            let day: String = row.get(0)?;
            let date = NaiveDate::parse_from_str(&day, "%Y-%m-%d")
                .map_err(|e| rusqlite::Error::FromSqlConversionFailure(0, Type::Text, Box::new(e)))?;

            Ok(DailyTagTotal {
                date,
                tag: row.get(1)?,
                duration: row.get(2)?,
            })
        })?;

        let mut totals = Vec::new();
        for total in total_iter {
            totals.push(total?);
        }

        Ok(totals)
    }

    /// Deletes every logged task and returns how many were removed.
    pub fn clear(&mut self) -> Result<usize> {
        Ok(self.conn.execute(DELETE_ALL, [])?)
    }
}

impl TaskLog for CompletedTasks {
    fn append(&mut self, task: &CompletedTask) -> Result<i64> {
        self.insert(task)
    }
}

fn task_from_row(row: &Row<'_>) -> rusqlite::Result<CompletedTask> {
    let date_started: String = row.get(2)?;
    let date_started =
        parse_timestamp(&date_started).map_err(|e| rusqlite::Error::FromSqlConversionFailure(2, Type::Text, Box::new(e)))?;

    Ok(CompletedTask {
        id: row.get(0)?,
        tag: row.get(1)?,
        date_started,
        duration: row.get(3)?,
    })
}
