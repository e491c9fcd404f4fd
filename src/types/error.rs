//! Error types for the QIF converter
//!
//! Only the file boundaries can fail. Parsing itself never errors: unknown
//! lines are skipped and unparseable dates fall back to their raw text.
//!
//! # Error Categories
//!
//! - **Input Errors**: File not found, unreadable or not valid UTF-8
//! - **Output Errors**: Temporary file creation, writing or committing failed
//! - **CSV Errors**: The CSV serializer rejected a record

use thiserror::Error;

/// Main error type for a conversion run
///
/// Every variant is fatal: the run aborts and no output file is replaced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QifError {
    /// Input file does not exist
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// Input file exists but could not be read
    #[error("Failed to read '{path}': {message}")]
    InputRead {
        /// Input path
        path: String,
        /// Description of the I/O error
        message: String,
    },

    /// An output file could not be written or moved into place
    #[error("Failed to write '{path}': {message}")]
    OutputWrite {
        /// Output path
        path: String,
        /// Description of the I/O error
        message: String,
    },

    /// CSV serialization error
    #[error("CSV write error: {message}")]
    CsvWrite {
        /// Description of the serializer error
        message: String,
    },
}

// Path-less I/O failures happen while rendering into an in-memory or
// temporary writer; the pipeline attaches the path afterwards.
impl From<std::io::Error> for QifError {
    fn from(error: std::io::Error) -> Self {
        QifError::OutputWrite {
            path: String::new(),
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for QifError {
    fn from(error: csv::Error) -> Self {
        QifError::CsvWrite {
            message: error.to_string(),
        }
    }
}

impl QifError {
    /// Create an InputRead error, mapping `NotFound` to FileNotFound
    pub fn input(path: &str, error: &std::io::Error) -> Self {
        if error.kind() == std::io::ErrorKind::NotFound {
            return QifError::FileNotFound {
                path: path.to_string(),
            };
        }
        QifError::InputRead {
            path: path.to_string(),
            message: error.to_string(),
        }
    }

    /// Create an OutputWrite error
    pub fn output(path: &str, message: impl ToString) -> Self {
        QifError::OutputWrite {
            path: path.to_string(),
            message: message.to_string(),
        }
    }

    /// Attach an output path to an error raised while rendering
    pub fn with_output_path(self, path: &str) -> Self {
        match self {
            QifError::OutputWrite { message, .. } => QifError::OutputWrite {
                path: path.to_string(),
                message,
            },
            QifError::CsvWrite { message } => QifError::OutputWrite {
                path: path.to_string(),
                message,
            },
            other => other,
        }
    }
}
