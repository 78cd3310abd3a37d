pub mod errors;

use std::future::Future;
use std::time::Duration;
use log::info;
use zeebe::{Client, ClientConfig, Job};
use crate::config::{BrokerParameters, MessageParameters, WorkerParameters};
use crate::manager_broker::errors::BrokerError;

/// Struct for talking to the workflow broker gateway
pub struct Broker {
    client: Client,
}

impl Broker {
    /// Returns a broker struct connected to the configured gateway
    ///
    /// # Arguments
    ///
    /// * 'config' - broker configuration
    pub fn new(config: &BrokerParameters) -> Result<Broker, BrokerError> {
        let client_config = ClientConfig::with_endpoints(vec![config.address.clone()]);
        let client = Client::from_config(client_config)
            .map_err(|e| BrokerError::ClientError(format!("{}: {}", config.address, e.to_string())))?;

        Ok(Broker { client })
    }

    /// Wraps a client handed over by the job worker
    ///
    /// # Arguments
    ///
    /// * 'client' - client to wrap
    pub fn from_client(client: Client) -> Broker {
        Broker { client }
    }

    /// Retrieves the cluster topology as a human-readable description
    ///
    pub async fn topology(&self) -> Result<String, BrokerError> {
        let topology = self.client
            .topology()
            .send()
            .await
            .map_err(|e| BrokerError::TopologyError(e.to_string()))?;

        Ok(format!("{:#?}", topology))
    }

    /// Publishes a message to the broker
    ///
    /// # Arguments
    ///
    /// * 'message' - name, correlation key and variables of the message
    pub async fn publish_message(&self, message: &MessageParameters) -> Result<(), BrokerError> {
        let mut builder = self.client
            .publish_message()
            .with_name(message.name.clone())
            .with_correlation_key(message.correlation_key.clone());

        if let Some(variables) = &message.variables {
            builder = builder.with_variables(variables.clone());
        }
        if let Some(ttl) = message.time_to_live_secs {
            builder = builder.with_time_to_live(ttl_millis(ttl));
        }

        builder.send()
            .await
            .map_err(|e| BrokerError::PublishError(format!("message {}: {}", message.name, e.to_string())))?;

        info!("published message {} with correlation key {}", message.name, message.correlation_key);

        Ok(())
    }

    /// Registers a job handler and keeps fetching jobs until the worker stops
    ///
    /// # Arguments
    ///
    /// * 'config' - worker configuration
    /// * 'handler' - async function called once per activated job
    pub async fn run_worker<F, R>(&self, config: &WorkerParameters, handler: F) -> Result<(), BrokerError>
    where
        F: Fn(Client, Job) -> R + 'static,
        R: Future<Output = ()> + 'static,
    {
        info!("opening worker {} for job type {}, max active jobs: {}, timeout: {}s",
            config.worker_name, config.job_type, config.max_jobs_active, config.timeout_secs);

        self.client
            .job_worker()
            .with_job_type(config.job_type.clone())
            .with_worker_name(config.worker_name.clone())
            .with_max_jobs_active(config.max_jobs_active)
            .with_concurrency(config.max_jobs_active)
            .with_timeout(Duration::from_secs(config.timeout_secs))
            .with_fetch_variables(config.fetch_variables.clone())
            .with_handler(handler)
            .run()
            .await
            .map_err(|e| BrokerError::WorkerError(format!("job type {}: {}", config.job_type, e.to_string())))
    }

    /// Marks a job as completed
    ///
    /// # Arguments
    ///
    /// * 'job_key' - key of the job to complete
    pub async fn complete_job(&self, job_key: i64) -> Result<(), BrokerError> {
        self.client
            .complete_job()
            .with_job_key(job_key)
            .send()
            .await
            .map_err(|e| BrokerError::CompleteJobError(format!("job {}: {}", job_key, e.to_string())))?;

        Ok(())
    }

    /// Marks a job as failed
    ///
    /// # Arguments
    ///
    /// * 'job_key' - key of the job to fail
    /// * 'retries' - retries left for the job
    /// * 'message' - reason for the failure
    pub async fn fail_job(&self, job_key: i64, retries: u32, message: String) -> Result<(), BrokerError> {
        self.client
            .fail_job()
            .with_job_key(job_key)
            .with_retries(retries)
            .with_error_message(message)
            .send()
            .await
            .map_err(|e| BrokerError::FailJobError(format!("job {}: {}", job_key, e.to_string())))?;

        Ok(())
    }
}

/// Converts a message time to live from seconds to the milliseconds the gateway expects
///
/// # Arguments
///
/// * 'ttl_secs' - time to live in seconds
fn ttl_millis(ttl_secs: u64) -> u64 {
    ttl_secs.saturating_mul(1000)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ttl_millis() {
        assert_eq!(ttl_millis(0), 0);
        assert_eq!(ttl_millis(60), 60_000);
        assert_eq!(ttl_millis(u64::MAX), u64::MAX);
    }
}
