//! Readings: the product of a draw.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use arcana_core::{Card, Position, SpreadKind};

/// Unique identifier of a reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReadingId(pub Uuid);

impl ReadingId {
    /// A fresh id from the operating system's entropy.
    ///
    /// Ids never come from the draw RNG: a seeded draw repeats its cards,
    /// not its identity.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Whether the full id starts with `prefix` (case-insensitive).
    pub fn matches_prefix(&self, prefix: &str) -> bool {
        let prefix = prefix.trim().to_lowercase();
        !prefix.is_empty() && self.0.to_string().starts_with(&prefix)
    }
}

impl Default for ReadingId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ReadingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// Snapshot of who the reading was for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Querent {
    /// Name given by the user.
    pub name: String,
    /// Optional birthdate.
    pub birthdate: Option<NaiveDate>,
}

/// What the user asked for when drawing.
#[derive(Debug, Clone, Default)]
pub struct DrawRequest {
    /// Free-text question; not validated.
    pub question: Option<String>,
    /// Who the reading is for.
    pub querent: Option<Querent>,
}

impl DrawRequest {
    /// A request with no question and no querent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a question. Blank questions are dropped.
    pub fn with_question(mut self, question: &str) -> Self {
        let trimmed = question.trim();
        self.question = (!trimmed.is_empty()).then(|| trimmed.to_string());
        self
    }

    /// Attach a querent snapshot.
    pub fn with_querent(mut self, querent: Querent) -> Self {
        self.querent = Some(querent);
        self
    }
}

/// One card dealt into one position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingCard {
    /// The card drawn.
    pub card: Card,
    /// The position it landed in.
    pub position: Position,
    /// Whether the card came up reversed.
    pub reversed: bool,
    /// Interpretation text, computed at draw time.
    pub interpretation: String,
}

impl ReadingCard {
    /// Card name with an orientation marker.
    pub fn label(&self) -> String {
        if self.reversed {
            format!("{} (reversed)", self.card.name)
        } else {
            self.card.name.clone()
        }
    }
}

/// A completed draw.
///
/// Disclosure state is not part of a reading; see [`crate::reveal`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reading {
    /// Unique id.
    pub id: ReadingId,
    /// When the draw happened.
    pub created_at: DateTime<Utc>,
    /// Which spread was used.
    pub spread: SpreadKind,
    /// The question asked, if any.
    pub question: Option<String>,
    /// Cards in the spread's position order.
    pub cards: Vec<ReadingCard>,
    /// Who the reading was for, if known.
    pub querent: Option<Querent>,
}

/// Counts over a reading's cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadingSummary {
    /// Number of cards.
    pub total: usize,
    /// Number of reversed cards.
    pub reversed: usize,
    /// Number of major arcana.
    pub majors: usize,
}

impl Reading {
    /// Number of cards dealt.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether no cards were dealt.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The card in a given position.
    pub fn card_at(&self, position_id: &str) -> Option<&ReadingCard> {
        self.cards.iter().find(|c| c.position.id == position_id)
    }

    /// Tally reversed and major cards.
    pub fn summary(&self) -> ReadingSummary {
        ReadingSummary {
            total: self.cards.len(),
            reversed: self.cards.iter().filter(|c| c.reversed).count(),
            majors: self.cards.iter().filter(|c| c.card.is_major()).count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_display_is_short() {
        let id = ReadingId(Uuid::parse_str("a3f2b1c8-1234-4678-9abc-def012345678").unwrap());
        assert_eq!(id.to_string(), "a3f2b1c8");
        assert!(id.matches_prefix("A3F2"));
        assert!(id.matches_prefix("a3f2b1c8-1234"));
        assert!(!id.matches_prefix("b"));
        assert!(!id.matches_prefix(""));
    }

    #[test]
    fn fresh_ids_are_v4_and_distinct() {
        let a = ReadingId::new();
        let b = ReadingId::new();
        assert_eq!(a.0.get_version_num(), 4);
        assert_ne!(a, b);
    }

    #[test]
    fn blank_question_dropped() {
        assert_eq!(DrawRequest::new().with_question("   ").question, None);
        assert_eq!(
            DrawRequest::new().with_question(" Will it rain? ").question,
            Some("Will it rain?".to_string())
        );
    }
}
