//! Feed engine: content source, simulated backend, session slot and effect execution.
mod catalog;
mod confirm;
mod engine;
mod network;
mod persist;
mod session_store;
mod source;
mod types;

pub use catalog::{generate_videos, initial_videos};
pub use confirm::{MutationConfirmer, SimulatedConfirmer};
pub use engine::EffectExecutor;
pub use network::{FaultPolicy, SimulatedNetwork, SimulationSettings};
pub use persist::{ensure_dir, AtomicFileWriter, PersistError};
pub use session_store::{FileSessionStore, MemorySessionStore, SessionStore, SESSION_KEY};
pub use source::{ContentSource, MockContentSource};
pub use types::EngineError;
