//! npm-style tarball of the output tree.

use crate::report::ArchiveInfo;
use flate2::write::GzEncoder;
use flate2::Compression;
use lugia_pack_common::{hash, Error, Result};
use std::fs::File;
use std::path::Path;
use tar::Builder;
use tracing::info;

/// Directory every archive entry is nested under, as `npm pack` does.
pub const ARCHIVE_PREFIX: &str = "package";

/// Write `dir` to a gzip-compressed tarball at `path`.
pub fn write_archive(dir: &Path, path: &Path) -> Result<ArchiveInfo> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| Error::fs(parent, e))?;
    }

    let file = File::create(path).map_err(|e| Error::fs(path, e))?;
    let encoder = GzEncoder::new(file, Compression::default());
    let mut archive = Builder::new(encoder);

    archive
        .append_dir_all(ARCHIVE_PREFIX, dir)
        .map_err(|e| Error::fs(dir, e))?;
    archive
        .into_inner()
        .and_then(|encoder| encoder.finish())
        .map_err(|e| Error::fs(path, e))?;

    let size_bytes = std::fs::metadata(path)
        .map_err(|e| Error::fs(path, e))?
        .len();
    let sha256 = hash::sha256_file(path)?;
    info!("Archive written to {:?} ({} bytes)", path, size_bytes);

    Ok(ArchiveInfo {
        path: path.to_path_buf(),
        size_bytes,
        sha256,
    })
}
