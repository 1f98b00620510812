//! Vocabulary file and corpus log persistence
//!
//! The vocabulary file is a pretty-printed JSON object mapping each word to
//! its ID. It is always rewritten wholesale through a temporary file in the
//! same directory that is renamed over the destination, so readers never
//! observe a half-written file.
//!
//! The corpus log is plain text that only ever grows by appending lines.

use crate::error::{Result, TokenizerError};
use indexmap::IndexMap;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Write a word -> ID mapping to `path`, replacing any previous file
///
/// # Errors
/// Returns [`TokenizerError::Io`] if the destination directory is not
/// writable or the rename fails.
pub fn save_vocabulary(mapping: &IndexMap<String, u32>, path: &Path) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| TokenizerError::io(dir, e))?;
    serde_json::to_writer_pretty(&mut tmp, mapping)
        .map_err(std::io::Error::from)
        .and_then(|_| tmp.as_file().sync_all())
        .map_err(|e| TokenizerError::io(tmp.path(), e))?;
    if let Some(permissions) = target_permissions(path) {
        tmp.as_file()
            .set_permissions(permissions)
            .map_err(|e| TokenizerError::io(tmp.path(), e))?;
    }
    tmp.persist(path)
        .map_err(|e| TokenizerError::io(path, e.error))?;

    tracing::debug!(words = mapping.len(), path = %path.display(), "vocabulary written");
    Ok(())
}

/// Permissions the rewritten file should carry: those of the file being
/// replaced, or a world-readable default for a new file
fn target_permissions(path: &Path) -> Option<fs::Permissions> {
    match fs::metadata(path) {
        Ok(meta) => Some(meta.permissions()),
        Err(_) => default_permissions(),
    }
}

#[cfg(unix)]
fn default_permissions() -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<fs::Permissions> {
    None
}

/// Read a word -> ID mapping previously written by [`save_vocabulary`]
///
/// # Errors
/// - [`TokenizerError::Io`] if the file is missing or unreadable
/// - [`TokenizerError::Parse`] if the content is not a JSON object of
///   non-negative integer IDs
pub fn load_vocabulary(path: &Path) -> Result<IndexMap<String, u32>> {
    let content = fs::read_to_string(path).map_err(|e| TokenizerError::io(path, e))?;
    let mapping: IndexMap<String, u32> =
        serde_json::from_str(&content).map_err(|source| TokenizerError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    tracing::debug!(words = mapping.len(), path = %path.display(), "vocabulary read");
    Ok(mapping)
}

/// Append a line break followed by the space-joined `words` to the corpus log
///
/// Creates the file if it does not exist yet. Appending nothing is a no-op.
pub fn append_corpus<S: AsRef<str>>(words: &[S], path: &Path) -> Result<()> {
    if words.is_empty() {
        return Ok(());
    }
    let line = words.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(" ");

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| TokenizerError::io(path, e))?;
    write!(file, "\n{line}").map_err(|e| TokenizerError::io(path, e))?;

    tracing::debug!(words = words.len(), path = %path.display(), "corpus appended");
    Ok(())
}

/// Read the whole corpus file, dropping a leading byte order mark
pub fn read_corpus(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path).map_err(|e| TokenizerError::io(path, e))?;
    match content.strip_prefix('\u{feff}') {
        Some(rest) => Ok(rest.to_string()),
        None => Ok(content),
    }
}
