//! Error type shared by the configuration resolver, the connection layer and the checks.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Usage(String),

    #[error("failed to load ini file '{}', because {reason}", .path.display())]
    IniFile { path: PathBuf, reason: String },

    #[error("expected number of nodes '{0}' is not a non-negative integer")]
    InvalidExpected(String),

    #[error("port '{0}' is not a valid TCP port")]
    InvalidPort(String),

    #[error("{0}")]
    Mysql(#[from] mysql::Error),

    #[error("connection has already been closed")]
    Closed,

    #[error("status variable '{0}' not found")]
    MissingStatus(String),

    #[error("status variable '{name}' has unexpected value '{value}'")]
    InvalidStatus { name: String, value: String },
}

impl Error {
    /// Configuration errors are reported as UNKNOWN, everything else as CRITICAL.
    pub fn is_config_error(&self) -> bool {
        match *self {
            Error::Usage(_) | Error::IniFile { .. } | Error::InvalidExpected(_) | Error::InvalidPort(_) => true,
            Error::Mysql(_) | Error::Closed | Error::MissingStatus(_) | Error::InvalidStatus { .. } => false,
        }
    }
}
