//! Publish manifest validation.

use crate::publish::{PublishManifest, PUBLISH_NAME};
use crate::version::VERSION_PATTERN;

/// Result of manifest validation.
#[derive(Debug)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<String>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
        }
    }

    pub fn add_error(&mut self, error: String) {
        self.valid = false;
        self.errors.push(error);
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

/// Check the invariants a publish manifest must hold before it is written.
pub fn validate_publish_manifest(manifest: &PublishManifest) -> ValidationResult {
    let mut result = ValidationResult::new();

    if manifest.name != PUBLISH_NAME {
        result.add_error(format!(
            "name must be '{}', got '{}'",
            PUBLISH_NAME, manifest.name
        ));
    }

    if !VERSION_PATTERN.is_match(manifest.version.as_str()) {
        result.add_error(format!("malformed version '{}'", manifest.version));
    }

    if manifest.description.is_empty() {
        result.add_error("description must not be empty".to_string());
    }

    result
}
