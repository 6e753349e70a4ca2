//! Session persistence.
//!
//! The session file holds the same JSON document that `export` writes, so any
//! exported file can be used as a session and vice versa.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use mana_ledger::{ImportDocument, Session};

pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the session, or starts a default one when the file is absent.
    pub fn load(&self) -> Result<Session> {
        let mut session = Session::default();
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no session file, starting fresh");
            return Ok(session);
        }
        let text = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read session file: {}", self.path.display()))?;
        let document = ImportDocument::from_json(&text)
            .with_context(|| format!("Failed to parse session file: {}", self.path.display()))?;
        session.import(document);
        Ok(session)
    }

    /// Writes the session through a temporary file in the same directory.
    pub fn save(&self, session: &Session) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        let json = session.export()?.to_json()?;
        let temp = self.path.with_extension("json.tmp");
        std::fs::write(&temp, json)
            .with_context(|| format!("Failed to write session file: {}", temp.display()))?;
        std::fs::rename(&temp, &self.path)
            .with_context(|| format!("Failed to replace session file: {}", self.path.display()))?;
        tracing::debug!(path = %self.path.display(), "session saved");
        Ok(())
    }
}
