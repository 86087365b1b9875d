//! Session display storage.
//!
//! The auth flows live entirely in external services; all this client
//! keeps is what they hand back for display — tokens and a display name,
//! opaque strings that are shown or forwarded but never parsed.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub(crate) const SESSION_FILE: &str = "session.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct Session {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Stored under the original client storage key name.
    #[serde(rename = "userName", default)]
    pub display_name: Option<String>,
}

/// Reads the stored session. Missing or unreadable files read as
/// signed-out rather than failing.
pub(crate) fn load(state_dir: &Path) -> Option<Session> {
    let raw = fs::read_to_string(state_dir.join(SESSION_FILE)).ok()?;
    match serde_json::from_str(&raw) {
        Ok(session) => Some(session),
        Err(err) => {
            tracing::warn!(error = %err, "stored session is unreadable, treating as signed out");
            None
        }
    }
}

/// Forgets the stored session. Already-absent files are fine.
pub(crate) fn clear(state_dir: &Path) -> io::Result<()> {
    match fs::remove_file(state_dir.join(SESSION_FILE)) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(err),
    }
}
