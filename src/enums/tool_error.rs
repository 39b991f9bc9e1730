use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("failed to stage code: {0}")]
    Staging(#[source] std::io::Error),
    #[error("executable '{program}' not found")]
    NotFound { program: String },
    #[error("failed to run '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("timed out after {}s", .0.as_secs_f64())]
    Timeout(Duration),
}

impl ToolError {
    pub fn spawn(program: &str, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            ToolError::NotFound { program: program.to_string() }
        } else {
            ToolError::Spawn { program: program.to_string(), source }
        }
    }
}
