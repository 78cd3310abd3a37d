use log::{error, info};
use zeebe::{Client, Job};
use crate::config::Config;
use crate::errors::{RainfallError, RunError};
use crate::initialization::Mgr;
use crate::manager_broker::Broker;
use crate::manager_forecast::parse_variables;
use crate::rainfall::report_lines;
use crate::retry;

/// Runs the worker: prints the topology, publishes the test message and then serves jobs
/// until the worker stops or the process receives a shutdown signal
///
/// # Arguments
///
/// * 'config' - configuration
/// * 'mgr' - struct with configured managers
pub async fn run(config: &Config, mgr: &Mgr) -> Result<(), RunError> {
    let topology = retry!(mgr.broker.topology())
        .map_err(|e| RunError(format!("error getting topology: {}", e.to_string())))?;
    println!("{}", topology);

    retry!(mgr.broker.publish_message(&config.message))
        .map_err(|e| RunError(format!("error publishing message: {}", e.to_string())))?;

    tokio::select! {
        result = mgr.broker.run_worker(&config.worker, handle_job) => {
            result.map_err(|e| RunError(format!("worker stopped: {}", e.to_string())))
        }
        _ = shutdown_signal() => {
            info!("shutdown signal received, stopping worker");
            Ok(())
        }
    }
}

/// Handles one weather job: reports the upcoming hours with rain, then completes the job.
/// A job whose forecast can't be read is failed instead.
///
/// # Arguments
///
/// * 'client' - client handed over by the job worker
/// * 'job' - the activated job
async fn handle_job(client: Client, job: Job) {
    let broker = Broker::from_client(client);
    let job_key = job.key();
    info!("Handling job: {} ({}), retries: {}", job_key, job.job_type(), job.retries());

    match process_variables(job.variables_str()) {
        Ok(lines) => {
            for line in lines {
                println!("{}", line);
            }
            if let Err(e) = broker.complete_job(job_key).await {
                error!("{}", e);
            }
        }
        Err(e) => {
            error!("job {} has an invalid forecast: {}", job_key, e);
            if let Err(e) = broker.fail_job(job_key, remaining_retries(job.retries()), e.to_string()).await {
                error!("{}", e);
            }
        }
    }
}

/// Turns job variables into the lines of the rain report
///
/// # Arguments
///
/// * 'variables' - the job variables document
fn process_variables(variables: &str) -> Result<Vec<String>, RainfallError> {
    let vars = parse_variables(variables)?;
    let events = vars.rain_events()?;
    info!("forecast status: {:?}, timezone: {}, holds {} hours, {} with rain",
        vars.status, vars.weather.timezone.as_deref().unwrap_or("n/a"), vars.weather.hourly.time.len(), events.len());

    Ok(report_lines(&events))
}

/// Returns the retries left for a job that is about to be failed, never below zero
///
/// # Arguments
///
/// * 'retries' - retries the job had when it was activated
fn remaining_retries(retries: i32) -> u32 {
    (retries - 1).max(0) as u32
}

/// Completes when the process is asked to stop
///
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut term) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {}
                    _ = term.recv() => {}
                }
            }
            Err(e) => {
                error!("unable to listen for SIGTERM: {}", e);
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_rainy_forecast() {
        let json = r#"{"status":200,"weather":{"hourly":{
            "time":["2022-10-19T00:00","2022-10-19T01:00","2022-10-19T02:00"],
            "rain":[0.0,1.5,0.0]}}}"#;

        assert_eq!(process_variables(json).unwrap(), vec![
            "".to_string(),
            "Upcoming days and times with rain".to_string(),
            "2022-10-19 01:00:00 - 1.5mm".to_string(),
        ]);
    }

    #[test]
    fn test_process_dry_forecast() {
        let json = r#"{"weather":{"hourly":{"time":["2022-10-19T00:00"],"rain":[0.0]}}}"#;

        assert!(process_variables(json).unwrap().is_empty());
    }

    #[test]
    fn test_remaining_retries() {
        assert_eq!(remaining_retries(3), 2);
        assert_eq!(remaining_retries(1), 0);
        assert_eq!(remaining_retries(0), 0);
        assert_eq!(remaining_retries(-2), 0);
    }

    #[test]
    fn test_process_invalid_forecast() {
        let json = r#"{"weather":{"hourly":{"time":["2022-10-19T00:00"],"rain":[0.0, 2.0]}}}"#;

        assert!(matches!(process_variables(json), Err(RainfallError::InvalidInput(_))));
    }
}
