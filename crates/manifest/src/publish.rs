//! The `package.json` written into the output tree for publishing.

use crate::source::SourceManifest;
use crate::validation::validate_publish_manifest;
use crate::version::PublishVersion;
use lugia_pack_common::{Error, Result};
use serde::Serialize;
use serde_json::Value;
use std::path::Path;

/// Registry name of the published bundle.
pub const PUBLISH_NAME: &str = "@perp/lugia-deployments";

/// Description of the published bundle.
pub const PUBLISH_DESCRIPTION: &str =
    "Perpetual Protocol Lugia contract artifacts (ABIs) and deployed addresses";

/// Publish manifest. Field order is the order they are written in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PublishManifest {
    pub name: String,
    pub version: PublishVersion,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homepage: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Value>,
}

impl PublishManifest {
    /// Build the publish manifest from the source manifest and a run version.
    ///
    /// Name and description are fixed; nothing in `source` can change them.
    pub fn new(version: PublishVersion, source: &SourceManifest) -> Self {
        Self {
            name: PUBLISH_NAME.to_string(),
            version,
            description: PUBLISH_DESCRIPTION.to_string(),
            license: source.license.clone(),
            author: source.author.clone(),
            repository: source.repository.clone(),
            homepage: source.homepage.clone(),
            keywords: source.keywords.clone(),
        }
    }

    /// Serialize as JSON with 2-space indentation.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate and write to `path`.
    pub fn write(&self, path: &Path) -> Result<()> {
        let result = validate_publish_manifest(self);
        if !result.valid {
            return Err(Error::InvalidManifest(result.errors.join("; ")));
        }

        let json = self.to_json_pretty()?;
        std::fs::write(path, json).map_err(|e| Error::fs(path, e))
    }
}
