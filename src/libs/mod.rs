//! Core library modules for the tasktrack application.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tasktrack::db::completed_tasks::CompletedTasks;
//! use tasktrack::db::db::Db;
//! use tasktrack::libs::clock::SystemClock;
//! use tasktrack::libs::current_task::CurrentTaskFile;
//! use tasktrack::libs::lifecycle::TaskLifecycleManager;
//! use tasktrack::libs::tag::TagVocabulary;
//!
//! let state = CurrentTaskFile::new("current_task.json", TagVocabulary::default());
//! let log = CompletedTasks::new(Db::open("tasks.db")?);
//! let mut tracker = TaskLifecycleManager::new(state, log, SystemClock);
//! tracker.start("coding")?;
//! tracker.pause()?;
//! # Ok::<(), tasktrack::libs::error::TrackerError>(())
//! ```

pub mod clock;
pub mod config;
pub mod current_task;
pub mod data_storage;
pub mod error;
pub mod formatter;
pub mod lifecycle;
pub mod messages;
pub mod tag;
pub mod task;
pub mod view;
