//! Summary of a packaging run.

use serde::Serialize;
use std::path::PathBuf;

/// What was written for one package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageReport {
    pub name: String,
    pub files_copied: usize,
    pub files_pruned: usize,
}

/// An npm-style tarball of the output tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArchiveInfo {
    pub path: PathBuf,
    pub size_bytes: u64,
    pub sha256: String,
}

/// Result of a successful run.
#[derive(Debug, Clone, Serialize)]
pub struct PackReport {
    pub version: String,
    pub output_dir: PathBuf,
    /// Packages in processing order.
    pub packages: Vec<PackageReport>,
    pub archive: Option<ArchiveInfo>,
}

impl PackReport {
    pub fn package_names(&self) -> Vec<&str> {
        self.packages.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn files_copied(&self) -> usize {
        self.packages.iter().map(|p| p.files_copied).sum()
    }

    pub fn files_pruned(&self) -> usize {
        self.packages.iter().map(|p| p.files_pruned).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals() {
        let report = PackReport {
            version: "2022.2.14-1644796800000".to_string(),
            output_dir: PathBuf::from("output"),
            packages: vec![
                PackageReport {
                    name: "clearingHouse".to_string(),
                    files_copied: 4,
                    files_pruned: 2,
                },
                PackageReport {
                    name: "vault".to_string(),
                    files_copied: 3,
                    files_pruned: 1,
                },
            ],
            archive: None,
        };

        assert_eq!(report.package_names(), vec!["clearingHouse", "vault"]);
        assert_eq!(report.files_copied(), 7);
        assert_eq!(report.files_pruned(), 3);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["packages"][1]["name"], "vault");
        assert!(json["archive"].is_null());
    }
}
