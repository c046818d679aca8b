//! File I/O for session persistence
//!
//! The session is stored in `~/.config/z4term/session.json`, owner-readable
//! only. It is consumed on read: whatever the outcome of parsing, the file is
//! gone once a restore has been attempted.

use super::{SessionDocument, SessionError};
use anyhow::{Context, Result};
use std::io::ErrorKind;
use std::path::Path;
use z4term_config::{create_private_dir, write_private};

/// Save a session document to a specific file, replacing any previous one
pub fn save_session_to(doc: &SessionDocument, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        create_private_dir(parent)
            .with_context(|| format!("Failed to create config directory {:?}", parent))?;
    }

    let contents =
        serde_json::to_string_pretty(doc).context("Failed to serialize session document")?;

    write_private(path, contents.as_bytes())
        .with_context(|| format!("Failed to write session to {:?}", path))?;

    log::info!("Saved session ({} tabs) to {:?}", doc.tabs.len(), path);
    Ok(())
}

/// Read and delete the session file.
///
/// Returns `Ok(None)` when there is no session file or it is empty. The file
/// is removed before parsing, so a corrupt document is reported once and
/// never seen again.
pub fn take_session_from(path: &Path) -> Result<Option<SessionDocument>, SessionError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    if let Err(e) = std::fs::remove_file(path) {
        log::warn!("Failed to remove session file {:?}: {}", path, e);
    }

    if contents.trim().is_empty() {
        return Ok(None);
    }

    let doc = SessionDocument::from_json(&contents)?;
    log::info!("Loaded session ({} tabs) from {:?}", doc.tabs.len(), path);
    Ok(Some(doc))
}

/// Load a session document without consuming the file
pub fn load_session_from(path: &Path) -> Result<Option<SessionDocument>> {
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read session from {:?}", path))?;

    if contents.trim().is_empty() {
        return Ok(None);
    }

    let doc = SessionDocument::from_json(&contents)
        .with_context(|| format!("Failed to parse session from {:?}", path))?;
    Ok(Some(doc))
}
