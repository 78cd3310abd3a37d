use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer};
use serde::de::Error;

/// Forecast timestamps come without seconds (e.g. `2022-10-19T13:00`) but full precision is accepted too
const TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S%.f"];

#[derive(Deserialize, Debug)]
pub struct JobVariables {
    #[serde(default)]
    pub status: Option<i64>,
    pub weather: Weather,
}

#[derive(Deserialize, Debug)]
pub struct Weather {
    pub hourly: Hourly,
    #[serde(default)]
    pub timezone: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct Hourly {
    #[serde(deserialize_with = "deserialize_times")]
    pub time: Vec<NaiveDateTime>,
    pub rain: Vec<f64>,
}

fn deserialize_times<'de, D>(deserializer: D) -> Result<Vec<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Vec<String> = Vec::deserialize(deserializer)?;

    raw.iter()
        .map(|s| TIME_FORMATS.iter()
            .find_map(|f| NaiveDateTime::parse_from_str(s, f).ok())
            .ok_or_else(|| D::Error::custom(format!("invalid forecast time: {}", s))))
        .collect()
}
