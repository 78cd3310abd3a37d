use chrono::NaiveDateTime;
use crate::errors::RainfallError;
use crate::models::RainEvent;

const REPORT_HEADING: &str = "Upcoming days and times with rain";

/// Returns all hours with rainfall, in the same order as they appear in the forecast
///
/// Comparison against zero is exact, so `-0.0` counts as dry while `NaN` counts as rain.
///
/// # Arguments
///
/// * 'time' - hourly timestamps from the forecast
/// * 'rain' - rainfall in mm, one value per timestamp
pub fn extract_rain_events(time: &[NaiveDateTime], rain: &[f64]) -> Result<Vec<RainEvent>, RainfallError> {
    if time.len() != rain.len() {
        return Err(RainfallError::InvalidInput(
            format!("forecast has {} timestamps but {} rain values", time.len(), rain.len())));
    }

    let events = time.iter()
        .zip(rain.iter())
        .filter(|(_, amount)| **amount != 0.0)
        .map(|(time, amount)| RainEvent { time: *time, amount: *amount })
        .collect::<Vec<RainEvent>>();

    Ok(events)
}

/// Formats rain events into report lines ready for printing.
/// Nothing is produced for an empty list, otherwise the lines start with a blank separator line.
///
/// # Arguments
///
/// * 'events' - rain events to report
pub fn report_lines(events: &[RainEvent]) -> Vec<String> {
    if events.is_empty() {
        return Vec::new();
    }

    let mut lines = Vec::with_capacity(events.len() + 2);
    lines.push(String::new());
    lines.push(REPORT_HEADING.to_string());
    for e in events {
        lines.push(e.to_string());
    }

    lines
}
