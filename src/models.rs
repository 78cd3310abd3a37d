use std::fmt;
use chrono::NaiveDateTime;

/// An hour in the forecast with non-zero rainfall
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RainEvent {
    pub time: NaiveDateTime,
    pub amount: f64,
}

impl fmt::Display for RainEvent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} - {}mm", self.time.format("%Y-%m-%d %H:%M:%S"), self.amount)
    }
}
