// ABOUTME: Workspace session persistence.
// ABOUTME: Saves the active layout tree and preset ordinal to disk as JSON.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::LayoutNode;

/// The state that survives a restart: the active tree plus the catalog
/// ordinal it was derived from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceSession {
    pub version: u32,
    pub preset: usize,
    pub root: LayoutNode,
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Failed to read or write session file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse session file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unsupported session version {0}")]
    Version(u32),
}

impl WorkspaceSession {
    pub const CURRENT_VERSION: u32 = 1;

    pub fn new(preset: usize, root: LayoutNode) -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            preset,
            root,
        }
    }

    /// Get the default session file path (~/.local/state/tileworks/session.json)
    pub fn default_path() -> Option<PathBuf> {
        dirs::state_dir()
            .or_else(dirs::data_local_dir)
            .map(|p| p.join("tileworks").join("session.json"))
    }

    /// Save session data to disk
    pub fn save(&self, path: &std::path::Path) -> Result<(), SessionError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load session data from disk
    pub fn load(path: &std::path::Path) -> Result<Self, SessionError> {
        let json = std::fs::read_to_string(path)?;
        let session: Self = serde_json::from_str(&json)?;
        if session.version != Self::CURRENT_VERSION {
            return Err(SessionError::Version(session.version));
        }
        Ok(session)
    }
}
