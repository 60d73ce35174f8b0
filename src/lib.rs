//! # tasktrack
//!
//! A command-line time tracker built around a single current task.
//!
//! ## Features
//!
//! - **Task Lifecycle**: Start, pause, resume, finish, abort and reset the current task
//! - **Exact Accounting**: Only time spent in progress is counted, across any number of pauses
//! - **Completed Task Log**: Finished tasks are appended to a local SQLite database
//! - **Reports**: Recent tasks and time per day and tag as terminal tables
//! - **Configurable Tags**: The tag vocabulary lives in `config.json`
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tasktrack::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
