//! Filesystem operations used by the packager.

use lugia_pack_common::{Error, Result};
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

fn walk_error(root: &Path, e: walkdir::Error) -> Error {
    let path = e.path().unwrap_or(root).to_path_buf();
    Error::fs(path, io::Error::from(e))
}

/// Remove `dir` and everything under it if present, then recreate it empty.
pub fn reset_dir(dir: &Path) -> Result<()> {
    match fs::remove_dir_all(dir) {
        Ok(()) => debug!("Removed {:?}", dir),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(Error::fs(dir, e)),
    }
    fs::create_dir_all(dir).map_err(|e| Error::fs(dir, e))
}

/// Copy a single file, overwriting `dst`.
pub fn copy_file(src: &Path, dst: &Path) -> Result<()> {
    let meta = fs::metadata(src).map_err(|e| Error::input(src, e))?;
    if !meta.is_file() {
        return Err(Error::MissingInput(src.to_path_buf()));
    }

    fs::copy(src, dst).map_err(|e| Error::fs(dst, e))?;
    debug!("Copied {:?} -> {:?}", src, dst);
    Ok(())
}

/// Recursively copy the directory `src` to `dst`, preserving structure.
///
/// Existing files in `dst` are overwritten. Symlinks are followed. Returns
/// the number of files copied.
pub fn copy_tree(src: &Path, dst: &Path) -> Result<usize> {
    let meta = fs::metadata(src).map_err(|e| Error::input(src, e))?;
    if !meta.is_dir() {
        return Err(Error::MissingInput(src.to_path_buf()));
    }

    let mut copied = 0;
    for entry in WalkDir::new(src).follow_links(true) {
        let entry = entry.map_err(|e| walk_error(src, e))?;
        let Ok(relative) = entry.path().strip_prefix(src) else {
            continue;
        };
        let target = dst.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(|e| Error::fs(&target, e))?;
        } else {
            fs::copy(entry.path(), &target).map_err(|e| Error::fs(&target, e))?;
            debug!("Copied {:?}", target);
            copied += 1;
        }
    }

    Ok(copied)
}

/// Delete every regular file under `dir` whose name ends with `suffix`.
///
/// Returns the number of files deleted.
pub fn prune_suffix(dir: &Path, suffix: &str) -> Result<usize> {
    let mut pruned = 0;
    for entry in WalkDir::new(dir) {
        let entry = entry.map_err(|e| walk_error(dir, e))?;
        if !entry.file_type().is_file() {
            continue;
        }
        if !entry.file_name().to_string_lossy().ends_with(suffix) {
            continue;
        }

        fs::remove_file(entry.path()).map_err(|e| Error::fs(entry.path(), e))?;
        debug!("Pruned {:?}", entry.path());
        pruned += 1;
    }

    Ok(pruned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_reset_dir_clears_stale_content() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("output");
        fs::create_dir_all(out.join("stale/nested")).unwrap();
        fs::write(out.join("stale/nested/old.json"), b"{}").unwrap();

        reset_dir(&out).unwrap();

        assert!(out.is_dir());
        assert_eq!(fs::read_dir(&out).unwrap().count(), 0);
    }

    #[test]
    fn test_reset_dir_creates_missing() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("a/b/output");
        reset_dir(&out).unwrap();
        assert!(out.is_dir());
    }

    #[test]
    fn test_copy_tree_preserves_structure() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("src");
        fs::create_dir_all(src.join("contracts/vault")).unwrap();
        fs::write(src.join("top.json"), b"1").unwrap();
        fs::write(src.join("contracts/vault/Vault.json"), b"2").unwrap();

        let dst = dir.path().join("dst");
        let copied = copy_tree(&src, &dst).unwrap();

        assert_eq!(copied, 2);
        assert_eq!(fs::read(dst.join("top.json")).unwrap(), b"1");
        assert_eq!(fs::read(dst.join("contracts/vault/Vault.json")).unwrap(), b"2");
    }

    #[test]
    fn test_copy_tree_overwrites() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("src");
        let dst = dir.path().join("dst");
        fs::create_dir_all(&src).unwrap();
        fs::create_dir_all(&dst).unwrap();
        fs::write(src.join("A.json"), b"new").unwrap();
        fs::write(dst.join("A.json"), b"old").unwrap();

        copy_tree(&src, &dst).unwrap();
        assert_eq!(fs::read(dst.join("A.json")).unwrap(), b"new");
    }

    #[test]
    fn test_copy_tree_missing_source() {
        let dir = tempdir().unwrap();
        let err = copy_tree(&dir.path().join("nope"), &dir.path().join("dst")).unwrap_err();
        assert!(err.is_missing_input());
    }

    #[test]
    fn test_copy_file_missing_source() {
        let dir = tempdir().unwrap();
        let err = copy_file(&dir.path().join("README.md"), &dir.path().join("out.md")).unwrap_err();
        assert!(err.is_missing_input());
    }

    #[test]
    fn test_copy_file_rejects_directory() {
        let dir = tempdir().unwrap();
        let err = copy_file(dir.path(), &dir.path().join("out.md")).unwrap_err();
        assert!(err.is_missing_input());
    }

    #[test]
    fn test_prune_suffix() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("lib/deep/er")).unwrap();
        fs::write(dir.path().join("debug.dbg.json"), b"").unwrap();
        fs::write(dir.path().join("lib/deep/er/Vault.dbg.json"), b"").unwrap();
        fs::write(dir.path().join("lib/deep/er/Vault.json"), b"").unwrap();
        fs::write(dir.path().join("lib/dbg.json.bak"), b"").unwrap();
        fs::create_dir_all(dir.path().join("lib/dir.dbg.json")).unwrap();

        let pruned = prune_suffix(dir.path(), ".dbg.json").unwrap();

        assert_eq!(pruned, 2);
        assert!(!dir.path().join("debug.dbg.json").exists());
        assert!(!dir.path().join("lib/deep/er/Vault.dbg.json").exists());
        assert!(dir.path().join("lib/deep/er/Vault.json").exists());
        assert!(dir.path().join("lib/dbg.json.bak").exists());
        assert!(dir.path().join("lib/dir.dbg.json").is_dir());
    }
}
