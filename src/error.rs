//! Error type shared by every stage of a run.

use thiserror::Error;

/// Everything that can stop a run. None of these are retried; they bubble up
/// to `main`, which prints the message and exits non-zero.
#[derive(Debug, Error)]
pub enum AppError {
    /// Bad or missing command line arguments (also carries `--help`/`--version`).
    #[error("{0}")]
    Argument(#[from] clap::Error),

    #[error("failed to obtain a credential: {0}")]
    Auth(String),

    #[error("failed to create client: {0}")]
    ClientConstruction(String),

    #[error("failed to {operation}: {message}")]
    Request {
        operation: &'static str,
        message: String,
    },

    /// JSON body did not match the expected shape; `path` points at the field.
    #[error("failed to parse {operation} response: path={path} error={message}")]
    Decode {
        operation: &'static str,
        path: String,
        message: String,
    },

    #[error("metrics task failed: {0}")]
    Task(String),

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl AppError {
    pub fn request(operation: &'static str, message: impl ToString) -> Self {
        AppError::Request {
            operation,
            message: message.to_string(),
        }
    }
}
