//! Reading the animals data file and the page template.
//!
//! Both readers distinguish a missing file ([`AnimalsWebError::NotFound`]) from
//! one that exists but cannot be read. The data loader returns the parsed JSON
//! value as-is; checking that it is a list of records is left to the
//! [`assembler`](crate::assembler).

use std::io::ErrorKind;
use std::path::Path;

use serde_json::Value;

use crate::error::{AnimalsWebError, Result};

/// Load and parse the JSON data file at `path`.
///
/// The file is parsed from raw bytes, so content that is not valid UTF-8 is
/// reported as [`AnimalsWebError::MalformedInput`] like any other bad JSON.
pub fn load(path: &Path) -> Result<Value> {
    let contents = std::fs::read(path).map_err(|e| read_error(path, e))?;
    let value = serde_json::from_slice(&contents).map_err(|e| AnimalsWebError::MalformedInput {
        path: path.to_path_buf(),
        source: e,
    })?;
    tracing::debug!(path = %path.display(), "loaded animals data");
    Ok(value)
}

/// Load the page template at `path` as opaque text.
pub fn load_template(path: &Path) -> Result<String> {
    let template = read_text(path)?;
    tracing::debug!(path = %path.display(), bytes = template.len(), "loaded page template");
    Ok(template)
}

fn read_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| read_error(path, e))
}

fn read_error(path: &Path, e: std::io::Error) -> AnimalsWebError {
    match e.kind() {
        ErrorKind::NotFound => AnimalsWebError::NotFound {
            path: path.to_path_buf(),
        },
        _ => AnimalsWebError::ReadFailed {
            path: path.to_path_buf(),
            source: e,
        },
    }
}
