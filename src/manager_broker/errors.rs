use thiserror::Error;

/// Error depicting errors that occur while talking to the workflow broker
///
#[derive(Debug, Error)]
pub enum BrokerError {
    #[error("ClientError: {0}")]
    ClientError(String),
    #[error("TopologyError: {0}")]
    TopologyError(String),
    #[error("PublishError: {0}")]
    PublishError(String),
    #[error("WorkerError: {0}")]
    WorkerError(String),
    #[error("CompleteJobError: {0}")]
    CompleteJobError(String),
    #[error("FailJobError: {0}")]
    FailJobError(String),
}
