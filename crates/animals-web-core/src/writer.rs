//! Writing the finished document.

use std::path::Path;

use crate::error::{AnimalsWebError, Result};

/// Write `document` to `path`, replacing any existing file.
///
/// The write is not atomic: if it fails part way, the previous contents of
/// `path` are in an unspecified state.
pub fn write_document(path: &Path, document: &str) -> Result<()> {
    std::fs::write(path, document).map_err(|e| AnimalsWebError::WriteFailed {
        path: path.to_path_buf(),
        source: e,
    })?;
    tracing::debug!(path = %path.display(), bytes = document.len(), "wrote document");
    Ok(())
}
