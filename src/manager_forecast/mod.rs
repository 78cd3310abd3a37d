pub mod models;

use crate::errors::RainfallError;
use crate::manager_forecast::models::JobVariables;
use crate::models::RainEvent;
use crate::rainfall::extract_rain_events;

/// Decodes job variables holding a weather forecast
///
/// # Arguments
///
/// * 'json' - the variables document as delivered with the job
pub fn parse_variables(json: &str) -> Result<JobVariables, RainfallError> {
    serde_json::from_str(json)
        .map_err(|e| RainfallError::InvalidInput(format!("error parsing job variables: {}", e.to_string())))
}

impl JobVariables {
    /// Returns the hours with rain found in the forecast
    ///
    pub fn rain_events(&self) -> Result<Vec<RainEvent>, RainfallError> {
        extract_rain_events(&self.weather.hourly.time, &self.weather.hourly.rain)
    }
}
