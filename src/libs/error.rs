//! Error types shared by the tracker core and the storage layer.
//!
//! Only genuine failures live here. Operations invoked while no task is
//! running, or re-invocations of the current state (pausing a paused task),
//! are reported as informational [`Outcome`](crate::libs::lifecycle::Outcome)
//! values instead.

use std::path::PathBuf;
use thiserror::Error;

/// Errors returned by the tracker core.
#[derive(Debug, Error)]
pub enum TrackerError {
    /// A tag token outside the configured vocabulary reached the core.
    #[error("invalid tag '{tag}', expected one of: {expected}")]
    InvalidTag { tag: String, expected: String },

    /// The persisted current task cannot be read back into a valid state.
    #[error("current task file {} is corrupt: {reason}", path.display())]
    CorruptState { path: PathBuf, reason: String },

    /// The state directory or the completed task store cannot be used.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),
}

impl From<rusqlite::Error> for TrackerError {
    fn from(error: rusqlite::Error) -> Self {
        TrackerError::StorageUnavailable(error.to_string())
    }
}

impl From<std::io::Error> for TrackerError {
    fn from(error: std::io::Error) -> Self {
        TrackerError::StorageUnavailable(error.to_string())
    }
}

/// Result alias used throughout the tracker core.
pub type Result<T, E = TrackerError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_maps_to_storage_unavailable() {
        let error: TrackerError = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        assert!(matches!(error, TrackerError::StorageUnavailable(ref msg) if msg.contains("denied")));
    }

    #[test]
    fn test_corrupt_state_mentions_path() {
        let error = TrackerError::CorruptState {
            path: PathBuf::from("/tmp/current_task.json"),
            reason: "expected value".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "current task file /tmp/current_task.json is corrupt: expected value"
        );
    }
}
