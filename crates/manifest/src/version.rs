//! Timestamp-derived publish versions.

use lugia_pack_common::{Error, Result, Timestamp};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Pattern every publish version matches: `year.month.day-epochMillis`.
pub static VERSION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})\.(\d{1,2})\.(\d{1,2})-(\d+)$").unwrap());

/// A version string of the form `{UTCYear}.{UTCMonth}.{UTCDay}-{epochMillis}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PublishVersion(String);

impl PublishVersion {
    /// Derive the version for a run started at `ts`.
    pub fn from_timestamp(ts: &Timestamp) -> Self {
        PublishVersion(ts.to_publish_version())
    }

    /// Derive the version from the current time.
    ///
    /// Call once per run so every output of the run shares one version.
    pub fn now() -> Self {
        Self::from_timestamp(&Timestamp::now())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The epoch-milliseconds component.
    pub fn epoch_millis(&self) -> u64 {
        VERSION_PATTERN
            .captures(&self.0)
            .and_then(|c| c.get(4))
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(0)
    }
}

impl FromStr for PublishVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if VERSION_PATTERN.is_match(s) {
            Ok(PublishVersion(s.to_string()))
        } else {
            Err(Error::InvalidManifest(format!(
                "version '{}' does not match year.month.day-timestamp",
                s
            )))
        }
    }
}

impl fmt::Display for PublishVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
