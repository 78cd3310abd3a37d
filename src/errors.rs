use thiserror::Error;

/// Error depicting a forecast payload that can't be turned into rain events
///
#[derive(Debug, Error)]
pub enum RainfallError {
    #[error("InvalidInput: {0}")]
    InvalidInput(String),
}

/// Error depicting errors that occur while running the worker
///
#[derive(Debug, Error)]
#[error("error while running worker: {0}")]
pub struct RunError(pub String);
