//! The repository's own `package.json`.

use lugia_pack_common::{Error, Result};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::path::Path;

/// Deserialize a present field, keeping an explicit `null` as `Some(Null)`.
///
/// Paired with `default` on the field, an absent field stays `None`.
fn present<'de, D>(deserializer: D) -> std::result::Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Fields read from the source `package.json`.
///
/// Values are kept as raw JSON so string and object forms (for example
/// `"author": "Perp"` versus `"author": {"name": "Perp"}`) are copied as-is.
/// An absent field is `None`; a field set to `null` is `Some(Value::Null)`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SourceManifest {
    #[serde(default, deserialize_with = "present")]
    pub license: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub author: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub repository: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub homepage: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub keywords: Option<Value>,
}

impl SourceManifest {
    /// Parse from `package.json` content. Unrelated fields are ignored.
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Read and parse the manifest at `path`.
    pub fn read(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::input(path, e))?;
        Self::from_json(&content)
    }
}
