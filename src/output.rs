//! Reading sources and writing destinations in one pass.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{ConvertError, Result};

/// Read a whole source file into memory.
pub fn read_source(path: &Path) -> Result<String> {
    let text = fs::read_to_string(path).map_err(|source| ConvertError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = text.len(), "read source");
    Ok(text)
}

/// Write `contents` to `path` in a single call, replacing any prior content.
///
/// Missing parent directories are created first.
pub fn write_output(path: &Path, contents: &str) -> Result<()> {
    let write_err = |source| ConvertError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(path, contents).map_err(write_err)?;
    debug!(path = %path.display(), bytes = contents.len(), "wrote output");
    Ok(())
}
