//! Drawing and revealing tarot readings.
//!
//! The draw engine deals cards from an [`arcana_core::Catalog`] into a
//! spread. The reveal state machine then sequences their disclosure on
//! timers. Persistence goes through an injected key-value store, so neither
//! of those depends on where readings end up.

/// Draw and reveal configuration.
pub mod config;
/// The draw engine.
pub mod draw;
/// Error types for draws.
pub mod error;
/// Markdown and text renderings.
pub mod export;
/// Reading records.
pub mod reading;
/// The reveal state machine and its timer layers.
pub mod reveal;
/// Key-value persistence, saved readings, and the user profile.
pub mod store;

/// Re-export configuration types.
pub use config::{DrawConfig, RevealConfig};
/// Re-export the draw engine.
pub use draw::{DrawEngine, REVERSED_PROBABILITY, draw, draw_spread};
/// Re-export error types.
pub use error::{ReadingError, ReadingResult};
/// Re-export reading types.
pub use reading::{DrawRequest, Querent, Reading, ReadingCard, ReadingId, ReadingSummary};
/// Re-export reveal types.
pub use reveal::{RevealController, RevealPhase, RevealSession, RevealSnapshot};
/// Re-export store types.
pub use store::{
    FileStore, KeyValueStore, MemoryStore, ReadingArchive, StoreError, StoreExt, StoreResult,
    UserProfile,
};
