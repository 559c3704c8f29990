//! Static reading data for Arcana: the card catalog, spread topologies, and
//! interpretation lookup.
//!
//! Nothing in this crate is random or mutable. The draw engine and reveal
//! sequencing live in `arcana-reading`.

/// Card records and classification tags.
pub mod card;
/// The indexed 78-card catalog and filters.
pub mod catalog;
/// Error types used throughout the crate.
pub mod error;
/// Interpretation lookup for a card in a position.
pub mod interpret;
/// Spread definitions, positions, and layouts.
pub mod spread;

/// Re-export card types.
pub use card::{Card, Category, Element, Suit};
/// Re-export catalog types.
pub use catalog::{CardFilter, Catalog, DECK_SIZE};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export interpretation types.
pub use interpret::{Interpreter, StandardInterpreter};
/// Re-export spread types.
pub use spread::{Placement, Position, SpreadDefinition, SpreadKind};
