//! Reading and writing plain text files
//!
//! Input is decoded as UTF-8 with invalid sequences replaced by U+FFFD,
//! so a stray Latin-1 byte never stops a decode. Output is always UTF-8.

use crate::error::ResourceAccessError;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Read a whole file as text, replacing invalid UTF-8.
pub fn read_text(path: &Path) -> Result<String, ResourceAccessError> {
    let bytes = std::fs::read(path).map_err(|e| ResourceAccessError::from_io(path, e))?;
    let text = String::from_utf8_lossy(&bytes).into_owned();
    debug!("Read {} ({} chars)", path.display(), text.chars().count());
    Ok(text)
}

/// Read all of stdin as text, replacing invalid UTF-8.
pub fn read_stdin() -> Result<String, ResourceAccessError> {
    let mut bytes = Vec::new();
    std::io::stdin()
        .lock()
        .read_to_end(&mut bytes)
        .map_err(|e| ResourceAccessError::from_io("<stdin>", e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Write `text` to `path` as UTF-8, creating missing parent directories.
pub fn write_text(path: &Path, text: &str) -> Result<(), ResourceAccessError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| ResourceAccessError::from_io(parent, e))?;
    }
    std::fs::write(path, text).map_err(|e| ResourceAccessError::from_io(path, e))?;
    debug!("Wrote {} ({} bytes)", path.display(), text.len());
    Ok(())
}
