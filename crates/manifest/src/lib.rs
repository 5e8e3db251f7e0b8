//! Manifest definitions for lugia-pack.
//!
//! This crate models the repository's source `package.json` and the
//! `package.json` synthesized for publishing the artifact bundle.

pub mod publish;
pub mod source;
pub mod validation;
pub mod version;

pub use publish::{PublishManifest, PUBLISH_DESCRIPTION, PUBLISH_NAME};
pub use source::SourceManifest;
pub use validation::{validate_publish_manifest, ValidationResult};
pub use version::PublishVersion;
