//! Timestamp utilities.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

/// A wrapper around DateTime<Utc> with consistent serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Create a new timestamp from the current time.
    pub fn now() -> Self {
        Timestamp(Utc::now())
    }

    /// Create a timestamp from a DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Timestamp(dt)
    }

    /// Milliseconds since the Unix epoch.
    pub fn epoch_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }

    /// Format as ISO 8601 string.
    pub fn to_iso8601(&self) -> String {
        self.0.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
    }

    /// Format as `year.month.day-epochMillis`.
    ///
    /// Month and day are 1-indexed and not zero-padded.
    pub fn to_publish_version(&self) -> String {
        format!(
            "{}.{}.{}-{}",
            self.0.year(),
            self.0.month(),
            self.0.day(),
            self.epoch_millis()
        )
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_iso8601())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_timestamp_serialization() {
        let ts = Timestamp::now();
        let json = serde_json::to_string(&ts).unwrap();
        let parsed: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(ts, parsed);
    }

    #[test]
    fn test_publish_version_is_not_zero_padded() {
        let dt = Utc.with_ymd_and_hms(2022, 3, 7, 8, 9, 10).unwrap();
        let ts = Timestamp::from_datetime(dt);
        assert_eq!(
            ts.to_publish_version(),
            format!("2022.3.7-{}", dt.timestamp_millis())
        );
    }

    #[test]
    fn test_publish_version_uses_utc_date() {
        let dt = Utc.with_ymd_and_hms(2021, 12, 31, 23, 59, 59).unwrap();
        let ts = Timestamp::from_datetime(dt);
        assert!(ts.to_publish_version().starts_with("2021.12.31-"));
        assert_eq!(ts.epoch_millis(), 1_640_995_199_000);
    }
}
