use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures raised while resolving the runtime configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid log level '{0}' (expected one of trace, debug, info, warn, error)")]
    InvalidLevel(String),

    #[error("invalid value '{value}' for {key}")]
    InvalidValue { key: String, value: String },
}

/// Everything that can abort a run.
///
/// The classifier itself never fails; these come from the collaborators
/// around it and are fatal to the invocation.
#[derive(Debug, Error)]
pub enum ReconError {
    #[error("failed to read targets file {}: {source}", path.display())]
    TargetsFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to run '{program}': {source}")]
    ToolSpawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("'{program}' exited with {status} for target '{target}': {stderr}")]
    ToolFailed {
        program: String,
        target: String,
        status: String,
        stderr: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_level_lists_accepted_names() {
        let err = ConfigError::InvalidLevel("loud".into());
        assert!(err.to_string().starts_with("invalid log level 'loud'"));
    }

    #[test]
    fn tool_failure_message_names_program_and_target() {
        let err = ReconError::ToolFailed {
            program: "amass".into(),
            target: "acme".into(),
            status: "exit status: 1".into(),
            stderr: "no results".into(),
        };
        assert_eq!(
            err.to_string(),
            "'amass' exited with exit status: 1 for target 'acme': no results"
        );
    }
}
