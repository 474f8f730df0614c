//! JSON serialization of the snapshot
//!
//! The document is rendered fully in memory before anything touches the
//! sink. File output goes through a sibling temporary file that is renamed
//! over the target, so a failed run never leaves a truncated document.

use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::error::Result;
use crate::export::records::ExportedData;

/// Render the snapshot as JSON text
pub fn to_json(snapshot: &ExportedData, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(snapshot)?
    } else {
        serde_json::to_string(snapshot)?
    };
    Ok(json)
}

/// Write the snapshot to any sink, returning the number of bytes written
pub fn write_json<W: Write>(snapshot: &ExportedData, mut sink: W, pretty: bool) -> Result<usize> {
    let json = to_json(snapshot, pretty)?;
    sink.write_all(json.as_bytes())?;
    sink.flush()?;
    Ok(json.len())
}

/// Write the snapshot to `path`, replacing any previous content
pub fn write_snapshot(snapshot: &ExportedData, path: &Path, pretty: bool) -> Result<usize> {
    let json = to_json(snapshot, pretty)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let staging = staging_path(path);
    if let Err(e) = fs::write(&staging, json.as_bytes()).and_then(|_| fs::rename(&staging, path)) {
        let _ = fs::remove_file(&staging);
        return Err(e.into());
    }

    debug!(path = %path.display(), bytes = json.len(), "Wrote snapshot");
    Ok(json.len())
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("snapshot"));
    name.push(".tmp");
    path.with_file_name(name)
}
