use std::path::PathBuf;

use thiserror::Error;

/// Reasons a batch of raw inputs is rejected. Only the first violation found
/// is ever reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Please enter a number")]
    NotANumber,

    #[error("Please enter a positive number of students")]
    InvalidCount,

    #[error("Maximum {max} students allowed")]
    TooManyStudents { max: usize },

    #[error("Please enter a score for student {student}")]
    MissingScore { student: usize },

    #[error("Score for student {student} must be an integer")]
    NonIntegerScore { student: usize },

    #[error("Score for student {student} must be between 0 and 100")]
    OutOfRange { student: usize },
}

impl InputError {
    pub fn kind(&self) -> &'static str {
        match self {
            InputError::NotANumber => "NotANumber",
            InputError::InvalidCount => "InvalidCount",
            InputError::TooManyStudents { .. } => "TooManyStudents",
            InputError::MissingScore { .. } => "MissingScore",
            InputError::NonIntegerScore { .. } => "NonIntegerScore",
            InputError::OutOfRange { .. } => "OutOfRange",
        }
    }
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to open {path} for writing: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write CSV to {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}
