use std::io;
use std::sync::Arc;

use thiserror::Error;

/// Failure of a single external command.
#[derive(Error, Debug, Clone)]
pub enum CommandError {
    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: Arc<io::Error>,
    },

    #[error("{program} exited with {}: {stderr}", exit_code_label(.code))]
    Status {
        program: String,
        code: Option<i32>,
        stderr: String,
    },
}

fn exit_code_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("code {}", code),
        None => "no exit code".to_string(),
    }
}

impl CommandError {
    pub fn spawn(program: &str, source: io::Error) -> Self {
        Self::Spawn {
            program: program.to_string(),
            source: Arc::new(source),
        }
    }
}

/// Failures that stop the application from starting.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex_lite::Error),
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;
