//! Crate error type.
//!
//! Gameplay never fails with an error: running out of time is an
//! [`Outcome`](crate::Outcome), and a frame that can't be acquired is skipped.
//! What is left are configuration and thread-setup problems.

use std::fmt;
use std::io;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    /// Settings file could not be read or written.
    SettingsIo {
        path: PathBuf,
        source: io::Error,
    },

    /// Settings file exists but is not valid JSON for [`Settings`](crate::Settings).
    SettingsParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// A settings value is outside the range the simulation can work with.
    InvalidSetting {
        /// Name of the field (for logging).
        name: &'static str,
        /// Human-readable description of the accepted range.
        expected: &'static str,
    },

    /// The OS refused to start a worker thread.
    ThreadSpawn {
        /// Name the thread would have had.
        name: &'static str,
        source: io::Error,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::SettingsIo { path, source } => {
                write!(f, "settings file '{}': {}", path.display(), source)
            }
            Error::SettingsParse { path, source } => {
                write!(f, "settings file '{}' is malformed: {}", path.display(), source)
            }
            Error::InvalidSetting { name, expected } => {
                write!(f, "setting '{}' is invalid: expected {}", name, expected)
            }
            Error::ThreadSpawn { name, source } => {
                write!(f, "failed to spawn thread '{}': {}", name, source)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::SettingsIo { source, .. } => Some(source),
            Error::SettingsParse { source, .. } => Some(source),
            Error::ThreadSpawn { source, .. } => Some(source),
            Error::InvalidSetting { .. } => None,
        }
    }
}
