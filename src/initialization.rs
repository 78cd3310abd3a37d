use std::env;
use log::info;
use thiserror::Error;
use crate::config::{load_config, Config, LoadConfigurationError};
use crate::logging::{setup_logger, LoggerError};
use crate::manager_broker::Broker;
use crate::manager_broker::errors::BrokerError;

pub struct Mgr {
    pub broker: Broker,
}

/// Initializes and returns configuration and a Mgr struct holding various of initialized structs
///
pub fn init() -> Result<(Config, Mgr), InitializationError> {
    let args: Vec<String> = env::args().collect();
    let config_path = config_path(&args)?;

    // Load configuration
    let config = load_config(config_path)?;

    // Setup logging
    let _ = setup_logger(&config.general.log_path, config.general.log_level, config.general.log_to_stdout)?;

    // Print version
    info!("starting weather worker version: {}", env!("CARGO_PKG_VERSION"));

    // Instantiate structs
    let broker = Broker::new(&config.broker)?;
    info!("broker client created for {}", config.broker.address);

    let mgr = Mgr {
        broker,
    };

    Ok((config, mgr))
}

/// Finds the configuration file path among the command line arguments
///
/// # Arguments
///
/// * 'args' - command line arguments
fn config_path(args: &[String]) -> Result<&str, InitializationError> {
    args.iter()
        .find(|p| p.starts_with("--config="))
        .and_then(|p| p.split_once('='))
        .map(|(_, path)| path)
        .filter(|path| !path.is_empty())
        .ok_or_else(|| InitializationError::ArgumentError("usage: weather_worker --config=<path>".into()))
}

/// Error depicting errors that occur while initializing the worker
///
#[derive(Debug, Error)]
pub enum InitializationError {
    #[error("ArgumentError: {0}")]
    ArgumentError(String),
    #[error("ConfigurationError: {0}")]
    ConfigurationError(#[from] LoadConfigurationError),
    #[error("SetupLoggerError: {0}")]
    SetupLoggerError(#[from] LoggerError),
    #[error("BrokerSetupError: {0}")]
    BrokerSetupError(#[from] BrokerError),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|a| a.to_string()).collect()
    }

    #[test]
    fn test_config_path_found() {
        let a = args(&["weather_worker", "--config=/etc/weather_worker/config.toml"]);

        assert_eq!(config_path(&a).unwrap(), "/etc/weather_worker/config.toml");
    }

    #[test]
    fn test_config_path_missing() {
        assert!(matches!(config_path(&args(&["weather_worker"])), Err(InitializationError::ArgumentError(_))));
        assert!(matches!(config_path(&args(&["weather_worker", "--config="])), Err(InitializationError::ArgumentError(_))));
    }
}
