//! File-backed session persistence.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Store-side record lifetime in seconds, applied on read.
pub const SESSION_TTL_SECS: u64 = 157_680_000;

/// Error type for session store operations.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session store I/O: {0}")]
    Io(#[from] std::io::Error),
    #[error("session record decode: {0}")]
    Decode(#[from] serde_json::Error),
}

/// One persisted session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    pub id: String,
    /// Unix timestamp (seconds) of creation; drives expiry.
    pub created_at: u64,
    /// Opaque per-session data owned by the handlers.
    #[serde(default)]
    pub data: serde_json::Map<String, serde_json::Value>,
}

impl SessionRecord {
    pub fn new(id: String) -> Self {
        Self {
            id,
            created_at: unix_now(),
            data: serde_json::Map::new(),
        }
    }

    fn is_expired(&self, now: u64) -> bool {
        now.saturating_sub(self.created_at) >= SESSION_TTL_SECS
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Session store keeping one JSON file per session under a root directory.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    root: PathBuf,
}

impl FileSessionStore {
    /// Open the store, creating the root directory if needed.
    pub async fn open(root: impl Into<PathBuf>) -> Result<Self, SessionError> {
        let root = root.into();
        tokio::fs::create_dir_all(&root).await?;
        Ok(Self { root })
    }

    fn path_for(&self, id: &str) -> PathBuf {
        self.root.join(format!("{id}.json"))
    }

    // Session ids are generated as UUIDs; anything else came off the wire
    // and must not reach the filesystem.
    fn is_valid_id(id: &str) -> bool {
        !id.is_empty()
            && id
                .bytes()
                .all(|b| b.is_ascii_hexdigit() || b == b'-')
    }

    /// Load a session by id.
    ///
    /// Unknown ids, ids that were never ours, and expired records all read
    /// as `None`. An expired record's file is removed on the way out.
    pub async fn load(&self, id: &str) -> Result<Option<SessionRecord>, SessionError> {
        if !Self::is_valid_id(id) {
            return Ok(None);
        }
        let path = self.path_for(id);
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let record: SessionRecord = serde_json::from_slice(&bytes)?;
        if record.is_expired(unix_now()) {
            tracing::debug!(session_id = id, "Session expired, removing record");
            self.destroy(id).await?;
            return Ok(None);
        }
        Ok(Some(record))
    }

    /// Persist a session record, replacing any previous file.
    pub async fn save(&self, record: &SessionRecord) -> Result<(), SessionError> {
        let bytes = serde_json::to_vec(record)?;
        tokio::fs::write(self.path_for(&record.id), bytes).await?;
        Ok(())
    }

    /// Remove a session file. Missing files are not an error.
    pub async fn destroy(&self, id: &str) -> Result<(), SessionError> {
        if !Self::is_valid_id(id) {
            return Ok(());
        }
        match tokio::fs::remove_file(self.path_for(id)).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
