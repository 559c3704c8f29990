//! Error types for the card catalog and spread registry.

use thiserror::Error;

/// Result type for catalog and spread operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while building or querying static reading data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The spread identifier is not one of the known topologies.
    #[error("invalid spread: \"{0}\" (expected three-card, celtic-cross, or tree-of-life)")]
    InvalidSpread(String),

    /// Two cards in a catalog share the same identifier.
    #[error("duplicate card id: {0}")]
    DuplicateCard(String),

    /// A spread's position list and layout table disagree.
    #[error("spread {spread} has a mismatched layout: {reason}")]
    LayoutMismatch {
        /// The spread identifier.
        spread: String,
        /// What did not line up.
        reason: String,
    },

    /// Unrecognised category, suit, or element name.
    #[error("unknown {kind}: {value}")]
    UnknownTag {
        /// What kind of tag was being parsed.
        kind: &'static str,
        /// The rejected input.
        value: String,
    },
}
