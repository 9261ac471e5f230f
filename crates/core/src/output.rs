//! Document persistence
//!
//! Output is pretty JSON with two-space indentation and literal (unescaped)
//! non-ASCII text. Map order follows insertion order, so rendering the same
//! document always yields the same bytes.

use crate::error::{Result, VersemapError};
use crate::model::Document;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::info;

pub fn serialize(document: &Document) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(document)?)
}

pub fn deserialize(bytes: &[u8]) -> Result<Document> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Write `document` to `path`, creating parent directories.
///
/// The bytes go to a temporary file next to the destination, which replaces
/// the destination only once fully written. On any failure the temporary
/// file is removed and the destination is left as it was.
pub fn write_document(document: &Document, path: &Path) -> Result<()> {
    let bytes = serialize(document)?;

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent).map_err(|e| VersemapError::write_failure(parent, e))?;

    let mut file =
        NamedTempFile::new_in(parent).map_err(|e| VersemapError::write_failure(path, e))?;
    file.write_all(&bytes)
        .and_then(|_| file.as_file().sync_all())
        .map_err(|e| VersemapError::write_failure(path, e))?;
    file.persist(path)
        .map_err(|e| VersemapError::write_failure(path, e.error))?;

    info!("Wrote {}", path.display());
    Ok(())
}

pub fn read_document(path: &Path) -> Result<Document> {
    let bytes = std::fs::read(path)?;
    deserialize(&bytes)
}
