//! Input sources for the two positional arguments
//!
//! A source is either a filesystem path or standard input (`-`). Paths are
//! checked for readability while the command line is parsed; the driver opens
//! them again when it actually reads.

use crate::types::GenesisError;
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

/// Path conventionally used on the command line for standard input
pub const STDIN_PATH: &str = "-";

/// Where an input is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input
    Stdin,
    /// A file on disk
    File(PathBuf),
}

impl InputSource {
    /// Parse a command-line value and check that it can be opened for reading
    ///
    /// Used as the clap value parser for both positionals, so a missing or
    /// unreadable path is reported as a usage error before anything runs.
    ///
    /// # Errors
    ///
    /// Returns `GenesisError::FileAccess` if the file cannot be opened.
    pub fn parse_readable(value: &str) -> Result<Self, GenesisError> {
        if value == STDIN_PATH {
            return Ok(InputSource::Stdin);
        }

        File::open(value).map_err(|e| GenesisError::file_access(value, &e))?;
        Ok(InputSource::File(PathBuf::from(value)))
    }

    /// Open the source for reading
    ///
    /// # Errors
    ///
    /// Returns `GenesisError::FileAccess` if the file cannot be opened (it may
    /// have disappeared since the command line was parsed).
    pub fn open(&self) -> Result<Box<dyn Read>, GenesisError> {
        match self {
            InputSource::Stdin => Ok(Box::new(std::io::stdin())),
            InputSource::File(path) => {
                let file = File::open(path)
                    .map_err(|e| GenesisError::file_access(&path.display().to_string(), &e))?;
                Ok(Box::new(file))
            }
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => write!(f, "<stdin>"),
            InputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}
