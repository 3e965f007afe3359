use std::path::PathBuf;

use thiserror::Error;

use crate::models::EmployeeId;

/// Reasons a single move is rejected. No mutation has happened when one of
/// these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("Employee {0} not found")]
    EmployeeNotFound(EmployeeId),

    #[error("Supervisor {0} not found")]
    SupervisorNotFound(EmployeeId),

    #[error("Employee {0} is the CEO and cannot be moved")]
    CannotMoveRoot(EmployeeId),
}

/// Errors raised while loading a chart or parsing steps.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("Failed to read chart file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid chart JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Employee id {0} appears more than once")]
    DuplicateId(EmployeeId),

    #[error("Invalid step `{0}`: expected `move:<employee>:<supervisor>`, `undo` or `redo`")]
    InvalidStep(String),
}
