//! Workspace file handling.
//!
//! The CLI persists the whole [`MemStore`] as one JSON document. Every
//! invocation loads the file, applies a single command, and writes the
//! store back. The load/save pair is the only I/O the tool performs.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use tidy_store::MemStore;

/// Load a store from disk. A missing file is an empty workspace, not an
/// error, so the first command can bootstrap it.
pub fn load_store(path: &Path) -> Result<MemStore> {
    if !path.exists() {
        debug!(path = %path.display(), "no store file, starting empty");
        return Ok(MemStore::new());
    }
    let text = fs::read_to_string(path)
        .with_context(|| format!("read store file {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("parse store file {}", path.display()))
}

/// Write the store back to disk as pretty-printed JSON.
pub fn save_store(path: &Path, store: &MemStore) -> Result<()> {
    let json = serde_json::to_string_pretty(store).context("serialize store")?;
    fs::write(path, json).with_context(|| format!("write store file {}", path.display()))?;
    debug!(path = %path.display(), "store saved");
    Ok(())
}
