use std::collections::TryReserveError;
use std::fmt;

use thiserror::Error;

use super::constants::ExitStatus;

/// What was wrong with a single input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputFault {
    LineTooLong { length: usize, max: usize },
    EmptyLine,
    FieldCount { found: usize, expected: usize },
    BadNumber { field: &'static str, value: String },
    ZeroDuration,
    TooManyJobs { max: u32 },
}

impl fmt::Display for InputFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputFault::LineTooLong { length, max } => {
                write!(f, "line is {} bytes long, at most {} are accepted", length, max)
            }
            InputFault::EmptyLine => write!(f, "line is empty"),
            InputFault::FieldCount { found, expected } => {
                write!(f, "expected {} fields, found {}", expected, found)
            }
            InputFault::BadNumber { field, value } => {
                write!(f, "{} '{}' is not a non-negative integer", field, value)
            }
            InputFault::ZeroDuration => write!(f, "duration must be at least 1"),
            InputFault::TooManyJobs { max } => write!(f, "more than {} jobs", max),
        }
    }
}

/// Errors that abort a scheduling run.
#[derive(Error, Debug)]
pub enum SchedulingError {
    #[error("allocation failed: {0}")]
    Allocation(#[from] TryReserveError),
    #[error("time overflow: job '{0}' runs past the end of representable time")]
    TimeOverflow(String),
    #[error("input line {line}: {fault}")]
    InputFormat { line: usize, fault: InputFault },
    #[error("internal invariant violated: {0}")]
    Invariant(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl SchedulingError {
    pub fn input(line: usize, fault: InputFault) -> Self {
        SchedulingError::InputFormat { line, fault }
    }

    /// Exit status the binary reports for this error.
    pub fn exit_status(&self) -> ExitStatus {
        match self {
            SchedulingError::InputFormat { .. }
            | SchedulingError::Io(_)
            | SchedulingError::Csv(_) => ExitStatus::InputError,
            SchedulingError::Allocation(_)
            | SchedulingError::TimeOverflow(_)
            | SchedulingError::Invariant(_) => ExitStatus::InternalError,
        }
    }
}
