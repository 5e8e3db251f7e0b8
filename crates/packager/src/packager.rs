//! The packaging run.
//!
//! A run is a fixed sequence: reset the output directory, copy the README,
//! discover packages, materialize each package, then emit the publish
//! manifest. Any failure aborts the run and leaves already-written output
//! in place.

use crate::archive;
use crate::discovery::{self, PackageEntry};
use crate::fsops;
use crate::layout::{PackLayout, ARTIFACT_SUBTREES, DEBUG_SUFFIX, SHARED_PACKAGE};
use crate::report::{PackReport, PackageReport};
use lugia_pack_common::{Error, Result, Timestamp};
use lugia_pack_manifest::{PublishManifest, PublishVersion, SourceManifest};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Assembles the publishable bundle described by a [`PackLayout`].
#[derive(Debug, Clone)]
pub struct Packager {
    layout: PackLayout,
    archive: Option<PathBuf>,
}

impl Packager {
    pub fn new(layout: PackLayout) -> Self {
        Self {
            layout,
            archive: None,
        }
    }

    /// Also write a tarball of the output tree to `path` after the manifest.
    pub fn with_archive(mut self, path: impl Into<PathBuf>) -> Self {
        self.archive = Some(path.into());
        self
    }

    /// Run the full sequence.
    pub fn run(&self) -> Result<PackReport> {
        self.check_paths()?;

        let started_at = Timestamp::now();
        let version = PublishVersion::from_timestamp(&started_at);
        info!("Packing version {} at {}", version, started_at);

        self.reset_output()?;
        self.copy_readme()?;

        let packages = self.discover_packages()?;
        info!("Found {} packages", packages.len());

        let mut reports = Vec::with_capacity(packages.len());
        for package in &packages {
            reports.push(self.materialize_package(&package.name)?);
        }

        self.emit_manifest(&version)?;

        let archive = match &self.archive {
            Some(path) => Some(archive::write_archive(&self.layout.output_dir, path)?),
            None => None,
        };

        Ok(PackReport {
            version: version.to_string(),
            output_dir: self.layout.output_dir.clone(),
            packages: reports,
            archive,
        })
    }

    /// Refuse layouts where resetting the output would destroy the inputs,
    /// or where the archive would be written into the tree it archives.
    fn check_paths(&self) -> Result<()> {
        if self.layout.is_inside_output(&self.layout.root) {
            return Err(Error::Config(format!(
                "output directory {:?} contains the repository root {:?}",
                self.layout.output_dir, self.layout.root
            )));
        }

        if let Some(archive) = &self.archive {
            if self.layout.is_inside_output(archive) {
                return Err(Error::Config(format!(
                    "archive {:?} must not be inside the output directory {:?}",
                    archive, self.layout.output_dir
                )));
            }
        }

        Ok(())
    }

    /// Delete the output directory and recreate it empty.
    pub fn reset_output(&self) -> Result<()> {
        info!("Resetting {:?}", self.layout.output_dir);
        fsops::reset_dir(&self.layout.output_dir)
    }

    pub fn copy_readme(&self) -> Result<()> {
        fsops::copy_file(&self.layout.readme(), &self.layout.output_readme())
    }

    pub fn discover_packages(&self) -> Result<Vec<PackageEntry>> {
        discovery::discover_packages(&self.layout.packages_dir(), SHARED_PACKAGE)
    }

    /// Copy one package's artifacts and metadata into the output tree.
    pub fn materialize_package(&self, name: &str) -> Result<PackageReport> {
        let src_artifacts = self.layout.package_artifacts(name);
        let dst_artifacts = self.layout.output_artifacts(name);
        create_dir(&dst_artifacts)?;

        let mut files_copied = 0;
        for subtree in ARTIFACT_SUBTREES {
            files_copied +=
                fsops::copy_tree(&src_artifacts.join(subtree), &dst_artifacts.join(subtree))?;
        }

        let files_pruned = fsops::prune_suffix(&dst_artifacts, DEBUG_SUFFIX)?;
        debug!("Pruned {} debug files from {}", files_pruned, name);

        fsops::copy_file(
            &self.layout.package_metadata(name),
            &self.layout.output_metadata(name),
        )?;
        files_copied += 1;

        info!(
            "Packed {}: {} files ({} pruned)",
            name,
            files_copied.saturating_sub(files_pruned),
            files_pruned
        );

        Ok(PackageReport {
            name: name.to_string(),
            files_copied,
            files_pruned,
        })
    }

    /// Write `output/package.json` from the source manifest and `version`.
    pub fn emit_manifest(&self, version: &PublishVersion) -> Result<PublishManifest> {
        let source = SourceManifest::read(&self.layout.source_manifest())?;
        let manifest = PublishManifest::new(version.clone(), &source);

        let path = self.layout.output_manifest();
        manifest.write(&path)?;
        info!("Manifest written to {:?}", path);

        Ok(manifest)
    }
}

fn create_dir(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path).map_err(|e| Error::fs(path, e))
}
