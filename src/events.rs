//! Activity events
//!
//! Timestamped entries shown in the dashboard's activity log. Level
//! filtering happens once, in the logger that creates them.

use crate::logging::LogLevel;
use chrono::Local;
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub msg: String,
    pub timestamp: String,
    pub log_level: LogLevel,
}

impl Event {
    pub fn new(msg: impl Into<String>, log_level: LogLevel) -> Self {
        Self {
            msg: msg.into(),
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            log_level,
        }
    }

    pub fn from_record(record: &log::Record) -> Self {
        Self::new(record.args().to_string(), record.level().into())
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} [{}] {}", self.log_level, self.timestamp, self.msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_display() {
        let mut event = Event::new("Switched to table view", LogLevel::Info);
        event.timestamp = "2024-12-18 14:22:15".to_string();
        assert_eq!(
            event.to_string(),
            "Info [2024-12-18 14:22:15] Switched to table view"
        );
    }
}
