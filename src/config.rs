use std::fs;
use log::LevelFilter;
use serde::Deserialize;
use thiserror::Error;

#[derive(Deserialize)]
pub struct BrokerParameters {
    pub address: String,
}

#[derive(Deserialize)]
pub struct WorkerParameters {
    pub job_type: String,
    #[serde(default = "default_worker_name")]
    pub worker_name: String,
    #[serde(default = "default_max_jobs_active")]
    pub max_jobs_active: u32,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub fetch_variables: Vec<String>,
}

#[derive(Deserialize)]
pub struct MessageParameters {
    pub name: String,
    pub correlation_key: String,
    #[serde(default)]
    pub variables: Option<serde_json::Value>,
    #[serde(default)]
    pub time_to_live_secs: Option<u64>,
}

#[derive(Deserialize)]
pub struct General {
    pub log_path: String,
    pub log_level: LevelFilter,
    pub log_to_stdout: bool,
}

#[derive(Deserialize)]
pub struct Config {
    pub broker: BrokerParameters,
    pub worker: WorkerParameters,
    pub message: MessageParameters,
    pub general: General,
}

fn default_worker_name() -> String {
    std::env::var("HOSTNAME").unwrap_or_else(|_| "weather-worker".to_string())
}

fn default_max_jobs_active() -> u32 {
    5
}

fn default_timeout_secs() -> u64 {
    10
}

/// Loads the configuration file and returns a struct with all configuration items
///
/// # Arguments
///
/// * 'config_path' - path to the configuration file
pub fn load_config(config_path: &str) -> Result<Config, LoadConfigurationError> {
    let toml = fs::read_to_string(config_path)?;
    parse_config(&toml)
}

/// Parses configuration from a TOML document
///
/// # Arguments
///
/// * 'toml' - the configuration document
fn parse_config(toml: &str) -> Result<Config, LoadConfigurationError> {
    let config: Config = toml::from_str(toml)?;

    Ok(config)
}

/// Error depicting errors that occur while loading the configuration
///
#[derive(Debug, Error)]
pub enum LoadConfigurationError {
    #[error("ConfigFileError: {0}")]
    ConfigFile(#[from] std::io::Error),
    #[error("ParseError: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = r#"
        [broker]
        address = "http://zeebe:26500"

        [worker]
        job_type = "weather-service"
        worker_name = "worker-1"
        max_jobs_active = 3
        timeout_secs = 30
        fetch_variables = ["weather", "status"]

        [message]
        name = "csharp"
        correlation_key = "wow"
        variables = { realValue = 2 }
        time_to_live_secs = 60

        [general]
        log_path = "/tmp/weather_worker.log"
        log_level = "Debug"
        log_to_stdout = true
    "#;

    #[test]
    fn test_parse_full_config() {
        let config = parse_config(FULL).unwrap();

        assert_eq!(config.broker.address, "http://zeebe:26500");
        assert_eq!(config.worker.job_type, "weather-service");
        assert_eq!(config.worker.worker_name, "worker-1");
        assert_eq!(config.worker.max_jobs_active, 3);
        assert_eq!(config.worker.timeout_secs, 30);
        assert_eq!(config.worker.fetch_variables, vec!["weather".to_string(), "status".to_string()]);
        assert_eq!(config.message.variables, Some(serde_json::json!({"realValue": 2})));
        assert_eq!(config.message.time_to_live_secs, Some(60));
        assert_eq!(config.general.log_level, LevelFilter::Debug);
        assert!(config.general.log_to_stdout);
    }

    #[test]
    fn test_worker_defaults() {
        let toml = r#"
            [broker]
            address = "http://localhost:26500"

            [worker]
            job_type = "weather-service"

            [message]
            name = "csharp"
            correlation_key = "wow"

            [general]
            log_path = "weather_worker.log"
            log_level = "Info"
            log_to_stdout = false
        "#;
        let config = parse_config(toml).unwrap();

        assert_eq!(config.worker.max_jobs_active, 5);
        assert_eq!(config.worker.timeout_secs, 10);
        assert!(config.worker.fetch_variables.is_empty());
        assert!(!config.worker.worker_name.is_empty());
        assert!(config.message.variables.is_none());
    }

    #[test]
    fn test_missing_section_is_an_error() {
        let result = parse_config("[broker]\naddress = \"http://localhost:26500\"\n");

        assert!(matches!(result, Err(LoadConfigurationError::Parse(_))));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = load_config("/nonexistent/weather_worker.toml");

        assert!(matches!(result, Err(LoadConfigurationError::ConfigFile(_))));
    }
}
