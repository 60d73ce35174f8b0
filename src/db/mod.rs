//! Database layer for the tasktrack application.
//!
//! Completed tasks are stored in SQLite. Opening a [`db::Db`] applies any
//! pending schema migrations first.
//!
//! ```rust,no_run
//! use chrono::Local;
//! use tasktrack::db::{completed_tasks::CompletedTasks, db::Db};
//! use tasktrack::libs::task::CompletedTask;
//!
//! let mut store = CompletedTasks::new(Db::open("tasks.db")?);
//! store.insert(&CompletedTask::new("CODING", Local::now().naive_local(), 1800.0))?;
//! # Ok::<(), tasktrack::libs::error::TrackerError>(())
//! ```

/// Connection opening and migration bootstrap.
pub mod db;

/// Versioned schema changes.
pub mod migrations;

/// Append-only log of completed tasks and its report queries.
pub mod completed_tasks;
