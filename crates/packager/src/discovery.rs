//! Package discovery under the packages root.

use lugia_pack_common::{Error, Result};
use std::path::Path;
use tracing::{debug, warn};

/// A package found under the packages root.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct PackageEntry {
    pub name: String,
}

impl PackageEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// List the immediate subdirectories of `packages_dir`, minus `shared`.
///
/// Plain files are skipped. Names are returned sorted so that runs are
/// reproducible regardless of directory enumeration order.
pub fn discover_packages(packages_dir: &Path, shared: &str) -> Result<Vec<PackageEntry>> {
    let entries = std::fs::read_dir(packages_dir).map_err(|e| Error::fs(packages_dir, e))?;

    let mut packages = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::fs(packages_dir, e))?;
        let path = entry.path();

        if !path.is_dir() {
            debug!("Skipping non-directory entry {:?}", path);
            continue;
        }

        let name = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(raw) => {
                warn!("Skipping package with non UTF-8 name {:?}", raw);
                continue;
            }
        };

        if name == shared {
            debug!("Skipping shared package {}", name);
            continue;
        }

        packages.push(PackageEntry::new(name));
    }

    packages.sort();
    Ok(packages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_excludes_shared_and_files() {
        let dir = tempdir().unwrap();
        for name in ["vault", "common", "clearingHouse", "accountBalance"] {
            fs::create_dir_all(dir.path().join(name).join("artifacts/lib/deep")).unwrap();
        }
        fs::write(dir.path().join(".DS_Store"), b"").unwrap();

        let names: Vec<String> = discover_packages(dir.path(), "common")
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();

        assert_eq!(names, vec!["accountBalance", "clearingHouse", "vault"]);
    }

    #[test]
    fn test_shared_match_is_exact() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("common")).unwrap();
        fs::create_dir(dir.path().join("commonLib")).unwrap();

        let packages = discover_packages(dir.path(), "common").unwrap();
        assert_eq!(packages, vec![PackageEntry::new("commonLib")]);
    }

    #[test]
    fn test_empty_root() {
        let dir = tempdir().unwrap();
        assert!(discover_packages(dir.path(), "common").unwrap().is_empty());
    }

    #[test]
    fn test_unreadable_root() {
        let dir = tempdir().unwrap();
        let err = discover_packages(&dir.path().join("packages"), "common").unwrap_err();
        assert!(matches!(err, Error::FileSystem { .. }));
    }
}
