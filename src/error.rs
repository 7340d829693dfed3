use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClaudebarError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
    #[error("Error: {shell} is required to run claudebar.")]
    ShellNotFound {
        shell: String,
        hint: Option<&'static str>,
    },
    #[error("Error: {0}")]
    Launch(#[source] std::io::Error),
    #[error("Error: failed to read {}: {source}", .path.display())]
    Manifest {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Error: invalid package manifest {}: {source}", .path.display())]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Error: {0}")]
    Io(#[from] std::io::Error),
}

impl ClaudebarError {
    /// Follow-up line printed after the error message, if any.
    pub fn hint(&self) -> Option<&str> {
        match self {
            ClaudebarError::UnknownCommand(_) => Some("Run \"claudebar --help\" for usage."),
            ClaudebarError::ShellNotFound { hint, .. } => *hint,
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ClaudebarError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_command_names_token_and_hints_help() {
        let err = ClaudebarError::UnknownCommand("bogus".to_string());
        assert_eq!(err.to_string(), "Unknown command: bogus");
        assert_eq!(err.hint(), Some("Run \"claudebar --help\" for usage."));
    }

    #[test]
    fn launch_error_carries_raw_message() {
        let err = ClaudebarError::Launch(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "permission denied",
        ));
        assert_eq!(err.to_string(), "Error: permission denied");
        assert!(err.hint().is_none());
    }
}
