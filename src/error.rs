use std::{fmt, io, path::PathBuf};
use thiserror::Error;

/// Which file a `FileNotFound` refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    PrivateKey,
    UpdateTool,
    Config,
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileKind::PrivateKey => f.write_str("The private key file"),
            FileKind::UpdateTool => f.write_str("The nsupdate utility"),
            FileKind::Config => f.write_str("The config file"),
        }
    }
}

#[derive(Debug, Error)]
pub enum UpdateError {
    #[error("The ip address is not valid! ({0:?})")]
    InvalidAddress(String),

    #[error("{0}")]
    MissingRequiredField(RequiredField),

    #[error("The {field} must be a positive integer, got {value}")]
    InvalidInteger { field: &'static str, value: String },

    #[error("{kind} was not found! ({})", .path.display())]
    FileNotFound { kind: FileKind, path: PathBuf },

    #[error("Failed to parse config file {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to read config file {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to start the nsupdate utility at {}: {source}", .path.display())]
    ExternalToolUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("I/O error while talking to the nsupdate utility: {0}")]
    ToolIo(#[from] io::Error),
}

/// The required string settings, in validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    Server,
    Domain,
    Zone,
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequiredField::Server => f.write_str("The domain nameserver is required!"),
            RequiredField::Domain => f.write_str("The domain name is required!"),
            RequiredField::Zone => f.write_str("The zone is required!"),
        }
    }
}

impl UpdateError {
    /// True for errors raised before anything was spawned.
    pub fn is_settings_error(&self) -> bool {
        !matches!(
            self,
            UpdateError::ExternalToolUnavailable { .. } | UpdateError::ToolIo(_)
        )
    }
}
