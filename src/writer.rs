//! Output writing.

use std::path::Path;

use tracing::debug;

use crate::error::{LibraryError, LibraryResult};

/// Write the document to `path`, creating the parent directory if needed.
///
/// Any existing file is overwritten. The write is not atomic.
pub fn write_document(path: &Path, html: &str) -> LibraryResult<()> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| LibraryError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    std::fs::write(path, html).map_err(|source| LibraryError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), bytes = html.len(), "Wrote library page");
    Ok(())
}
