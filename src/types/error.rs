//! Error types for genesis tools
//!
//! Every failure aborts the run; nothing here is recovered locally. The driver
//! turns these into a message on stderr and a non-zero exit code.
//!
//! # Error Categories
//!
//! - **File access**: an input path is missing or unreadable
//! - **Configuration**: command-line values that fail validation (empty chain-id)
//! - **Data format**: malformed genesis JSON or a malformed vesting CSV row
//! - **Serialization**: the transformation result cannot be rendered as JSON

use thiserror::Error;

/// Main error type for genesis tools
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenesisError {
    /// An input path could not be opened for reading
    #[error("Cannot open '{path}': {message}")]
    FileAccess {
        /// The path that failed to open
        path: String,
        /// Description of the underlying I/O error
        message: String,
    },

    /// A command-line value failed validation
    #[error("{message}")]
    Configuration {
        /// Description of the invalid setting
        message: String,
    },

    /// One of the inputs is not well formed
    #[error(
        "Malformed {input}{}: {message}",
        format_position(*line, *column)
    )]
    DataFormat {
        /// Which input was being parsed ("genesis" or "vesting-info")
        input: String,
        /// Line where the problem was detected (if known)
        line: Option<u64>,
        /// Column where the problem was detected (if known)
        column: Option<u64>,
        /// Description of the problem
        message: String,
    },

    /// The transformation result could not be serialized as JSON
    #[error("Cannot serialize result: {message}")]
    Serialization {
        /// Description of the serializer error
        message: String,
    },

    /// I/O error while reading an input or writing the output
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },

    /// The transformation itself rejected its inputs
    #[error("Transform failed: {message}")]
    Transform {
        /// Description supplied by the transformation
        message: String,
    },
}

fn format_position(line: Option<u64>, column: Option<u64>) -> String {
    match (line, column) {
        (Some(l), Some(c)) => format!(" at line {}, column {}", l, c),
        (Some(l), None) => format!(" at line {}", l),
        _ => String::new(),
    }
}

impl From<std::io::Error> for GenesisError {
    fn from(error: std::io::Error) -> Self {
        GenesisError::Io {
            message: error.to_string(),
        }
    }
}

// csv errors only ever come from the vesting-info input
impl From<csv::Error> for GenesisError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        let message = match error.kind() {
            csv::ErrorKind::Io(_) => {
                return GenesisError::Io {
                    message: error.to_string(),
                }
            }
            csv::ErrorKind::Utf8 { err, .. } => err.to_string(),
            _ => error.to_string(),
        };

        GenesisError::DataFormat {
            input: "vesting-info".to_string(),
            line,
            column: None,
            message,
        }
    }
}

impl GenesisError {
    /// Create a FileAccess error
    pub fn file_access(path: &str, error: &std::io::Error) -> Self {
        GenesisError::FileAccess {
            path: path.to_string(),
            message: error.to_string(),
        }
    }

    /// Create a Configuration error
    pub fn configuration(message: &str) -> Self {
        GenesisError::Configuration {
            message: message.to_string(),
        }
    }

    /// Create a DataFormat error for a malformed genesis document
    ///
    /// serde_json reports line 0 for errors without a position (e.g. I/O).
    pub fn invalid_genesis(error: &serde_json::Error) -> Self {
        let message = error.to_string();

        let (line, column, message) = match error.line() {
            0 => (None, None, message),
            l => {
                // serde_json appends the position to its message
                let suffix = format!(" at line {} column {}", l, error.column());
                let message = message
                    .strip_suffix(&suffix)
                    .map(str::to_string)
                    .unwrap_or(message);
                (Some(l as u64), Some(error.column() as u64), message)
            }
        };

        GenesisError::DataFormat {
            input: "genesis".to_string(),
            line,
            column,
            message,
        }
    }

    /// Create a Serialization error
    pub fn serialization(error: &serde_json::Error) -> Self {
        GenesisError::Serialization {
            message: error.to_string(),
        }
    }

    /// Create a Transform error
    pub fn transform(message: impl Into<String>) -> Self {
        GenesisError::Transform {
            message: message.into(),
        }
    }
}
