use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use feed_core::Session;
use feed_logging::{feed_info, feed_warn};

use crate::{AtomicFileWriter, EngineError};

/// Key of the single slot holding the logged-in viewer.
pub const SESSION_KEY: &str = "tiktok_user";

/// One key/value slot holding the serialized session.
pub trait SessionStore: Send + Sync {
    /// Reads the slot. A missing or unreadable slot yields `None`.
    fn load(&self) -> Option<Session>;

    fn save(&self, session: &Session) -> Result<(), EngineError>;

    /// Empties the slot. Clearing an empty slot succeeds.
    fn clear(&self) -> Result<(), EngineError>;
}

fn decode(raw: &str) -> Option<Session> {
    match serde_json::from_str(raw) {
        Ok(session) => Some(session),
        Err(err) => {
            feed_warn!("Ignoring corrupt session slot {}: {}", SESSION_KEY, err);
            None
        }
    }
}

/// Keeps the serialized slot in memory. Useful for tests and ephemeral runs.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    slot: Mutex<Option<String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with raw slot contents, as if left behind by an earlier run.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            slot: Mutex::new(Some(raw.into())),
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Option<Session> {
        self.lock().as_deref().and_then(decode)
    }

    fn save(&self, session: &Session) -> Result<(), EngineError> {
        let raw = serde_json::to_string(session)?;
        *self.lock() = Some(raw);
        Ok(())
    }

    fn clear(&self) -> Result<(), EngineError> {
        *self.lock() = None;
        Ok(())
    }
}

/// Stores the slot as `{dir}/tiktok_user.json`.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    writer: AtomicFileWriter,
}

impl FileSessionStore {
    pub fn new(dir: PathBuf) -> Self {
        Self {
            writer: AtomicFileWriter::new(dir),
        }
    }

    pub fn path(&self) -> PathBuf {
        self.writer.dir().join(Self::filename())
    }

    fn filename() -> String {
        format!("{SESSION_KEY}.json")
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Option<Session> {
        let path = self.path();
        let raw = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return None,
            Err(err) => {
                feed_warn!("Failed to read session slot {:?}: {}", path, err);
                return None;
            }
        };
        let session = decode(&raw)?;
        feed_info!("Loaded session for {} from {:?}", session.username, path);
        Some(session)
    }

    fn save(&self, session: &Session) -> Result<(), EngineError> {
        let raw = serde_json::to_string_pretty(session)?;
        self.writer.write(&Self::filename(), &raw)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), EngineError> {
        self.writer.remove(&Self::filename())?;
        Ok(())
    }
}
