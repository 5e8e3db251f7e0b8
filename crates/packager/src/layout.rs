//! Source and output paths of a packaging run.

use std::path::{Component, Path, PathBuf};

/// README copied into the output root.
pub const README_FILE: &str = "README.md";

/// Repository manifest the publish manifest copies fields from.
pub const SOURCE_MANIFEST_FILE: &str = "package.json";

/// Directory holding one subdirectory per contract package.
pub const PACKAGES_DIR: &str = "packages";

/// Shared-code package that is never published.
pub const SHARED_PACKAGE: &str = "common";

/// Default output directory name, relative to the root.
pub const OUTPUT_DIR: &str = "output";

/// Artifact subtrees copied for every package.
pub const ARTIFACT_SUBTREES: [&str; 2] = ["lib", "src"];

/// Suffix of compiler debug sidecars pruned from the output.
pub const DEBUG_SUFFIX: &str = ".dbg.json";

/// Where a run reads from and writes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackLayout {
    /// Repository root.
    pub root: PathBuf,
    /// Output directory, recreated on every run.
    pub output_dir: PathBuf,
}

impl PackLayout {
    /// Layout rooted at `root` with the default `output/` directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let output_dir = root.join(OUTPUT_DIR);
        Self { root, output_dir }
    }

    /// Replace the output directory.
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn readme(&self) -> PathBuf {
        self.root.join(README_FILE)
    }

    pub fn source_manifest(&self) -> PathBuf {
        self.root.join(SOURCE_MANIFEST_FILE)
    }

    pub fn packages_dir(&self) -> PathBuf {
        self.root.join(PACKAGES_DIR)
    }

    /// `packages/{name}/artifacts`
    pub fn package_artifacts(&self, name: &str) -> PathBuf {
        self.packages_dir().join(name).join("artifacts")
    }

    /// `packages/{name}/metadata/{name}.json`
    pub fn package_metadata(&self, name: &str) -> PathBuf {
        self.packages_dir()
            .join(name)
            .join("metadata")
            .join(format!("{}.json", name))
    }

    pub fn output_readme(&self) -> PathBuf {
        self.output_dir.join(README_FILE)
    }

    pub fn output_manifest(&self) -> PathBuf {
        self.output_dir.join(SOURCE_MANIFEST_FILE)
    }

    /// `output/{name}`
    pub fn output_package(&self, name: &str) -> PathBuf {
        self.output_dir.join(name)
    }

    /// `output/{name}/artifacts`
    pub fn output_artifacts(&self, name: &str) -> PathBuf {
        self.output_package(name).join("artifacts")
    }

    /// `output/{name}/metadata.json`
    pub fn output_metadata(&self, name: &str) -> PathBuf {
        self.output_package(name).join("metadata.json")
    }

    /// Whether `path` lies inside (or is) the output directory.
    ///
    /// Both paths are resolved first, so `repo/..` or a symlinked output
    /// directory compare by where they actually point. A path that cannot be
    /// resolved counts as inside.
    pub fn is_inside_output(&self, path: &Path) -> bool {
        match (resolve(path), resolve(&self.output_dir)) {
            (Some(path), Some(output)) => path.starts_with(output),
            _ => true,
        }
    }
}

/// Resolve `path` without requiring it to exist.
///
/// The longest existing prefix is canonicalized; the remaining components
/// are applied lexically.
fn resolve(path: &Path) -> Option<PathBuf> {
    let absolute = std::path::absolute(path).ok()?;
    let components: Vec<Component<'_>> = absolute.components().collect();

    for split in (1..=components.len()).rev() {
        let prefix: PathBuf = components[..split].iter().collect();
        let Ok(mut resolved) = prefix.canonicalize() else {
            continue;
        };

        for component in &components[split..] {
            match component {
                Component::ParentDir => {
                    resolved.pop();
                }
                Component::CurDir => {}
                other => resolved.push(other),
            }
        }
        return Some(resolved);
    }

    None
}

impl Default for PackLayout {
    fn default() -> Self {
        Self::new(".")
    }
}
