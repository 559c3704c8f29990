//! Spread topologies: the named positions cards are dealt into.
//!
//! Three spreads are built in. Each definition pairs an ordered position
//! list with a layout table giving every position a place on a 2D grid.

use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Identifier of one of the built-in spreads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpreadKind {
    /// Past, present, future.
    ThreeCard,
    /// The ten-position cross and staff.
    CelticCross,
    /// The ten sephiroth of the Tree of Life.
    TreeOfLife,
}

impl SpreadKind {
    /// All spreads in menu order.
    pub const ALL: [Self; 3] = [Self::ThreeCard, Self::CelticCross, Self::TreeOfLife];

    /// The identifier used by callers to select this spread.
    pub fn id(self) -> &'static str {
        match self {
            Self::ThreeCard => "three-card",
            Self::CelticCross => "celtic-cross",
            Self::TreeOfLife => "tree-of-life",
        }
    }

    /// Resolve an identifier. Unknown identifiers are an error rather than
    /// a fallback, so a draw never lands in the wrong topology.
    pub fn parse(id: &str) -> CoreResult<Self> {
        match id.trim() {
            "three-card" => Ok(Self::ThreeCard),
            "celtic-cross" => Ok(Self::CelticCross),
            "tree-of-life" => Ok(Self::TreeOfLife),
            other => Err(CoreError::InvalidSpread(other.to_string())),
        }
    }

    /// The immutable definition for this spread.
    pub fn definition(self) -> &'static SpreadDefinition {
        match self {
            Self::ThreeCard => &THREE_CARD,
            Self::CelticCross => &CELTIC_CROSS,
            Self::TreeOfLife => &TREE_OF_LIFE,
        }
    }
}

impl fmt::Display for SpreadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// A named slot within a spread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// Identifier, unique within its spread.
    pub id: String,
    /// Name shown to the user.
    pub name: String,
    /// What a card in this slot speaks to.
    pub meaning: String,
    /// Alternate esoteric reading of the slot.
    pub esoteric: String,
}

/// Where a position sits when the spread is laid out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// The position this placement belongs to.
    pub position_id: String,
    /// Horizontal grid coordinate.
    pub x: f32,
    /// Vertical grid coordinate, growing downwards.
    pub y: f32,
    /// Clockwise rotation hint in degrees.
    pub rotation: u16,
}

/// An immutable spread topology.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpreadDefinition {
    /// Which spread this is.
    pub kind: SpreadKind,
    /// Name shown to the user.
    pub name: String,
    /// What the spread is for.
    pub description: String,
    /// Positions in dealing order.
    pub positions: Vec<Position>,
    /// Placement for every position.
    pub layout: Vec<Placement>,
}

impl SpreadDefinition {
    /// Shorthand for `SpreadKind::parse(id)?.definition()`.
    pub fn get(id: &str) -> CoreResult<&'static SpreadDefinition> {
        Ok(SpreadKind::parse(id)?.definition())
    }

    /// The spread identifier.
    pub fn id(&self) -> &'static str {
        self.kind.id()
    }

    /// Number of positions.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the spread has no positions.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Look up a position by id.
    pub fn position(&self, id: &str) -> Option<&Position> {
        self.positions.iter().find(|p| p.id == id)
    }

    /// Look up the placement of a position.
    pub fn placement(&self, position_id: &str) -> Option<&Placement> {
        self.layout.iter().find(|p| p.position_id == position_id)
    }

    /// Check that positions and layout describe the same slots.
    pub fn validate(&self) -> CoreResult<()> {
        let mismatch = |reason: String| CoreError::LayoutMismatch {
            spread: self.id().to_string(),
            reason,
        };

        if self.positions.len() != self.layout.len() {
            return Err(mismatch(format!(
                "{} positions but {} placements",
                self.positions.len(),
                self.layout.len()
            )));
        }

        let mut ids = HashSet::new();
        for position in &self.positions {
            if !ids.insert(position.id.as_str()) {
                return Err(mismatch(format!("duplicate position {}", position.id)));
            }
        }

        let mut placed = HashSet::new();
        for placement in &self.layout {
            if !ids.contains(placement.position_id.as_str()) {
                return Err(mismatch(format!(
                    "placement for unknown position {}",
                    placement.position_id
                )));
            }
            if !placed.insert(placement.position_id.as_str()) {
                return Err(mismatch(format!(
                    "position {} placed twice",
                    placement.position_id
                )));
            }
        }

        Ok(())
    }
}

/// (id, name, meaning, esoteric, x, y, rotation)
type Slot = (&'static str, &'static str, &'static str, &'static str, f32, f32, u16);

fn build(kind: SpreadKind, name: &str, description: &str, slots: &[Slot]) -> SpreadDefinition {
    let positions = slots
        .iter()
        .map(|&(id, name, meaning, esoteric, ..)| Position {
            id: id.to_string(),
            name: name.to_string(),
            meaning: meaning.to_string(),
            esoteric: esoteric.to_string(),
        })
        .collect();
    let layout = slots
        .iter()
        .map(|&(id, _, _, _, x, y, rotation)| Placement {
            position_id: id.to_string(),
            x,
            y,
            rotation,
        })
        .collect();
    SpreadDefinition {
        kind,
        name: name.to_string(),
        description: description.to_string(),
        positions,
        layout,
    }
}

static THREE_CARD: LazyLock<SpreadDefinition> = LazyLock::new(|| {
    build(
        SpreadKind::ThreeCard,
        "Three Card",
        "A quick line of past, present, and future.",
        &[
            (
                "past",
                "Past",
                "Influences and events that led to the present situation.",
                "The seed sown in memory that the soul still carries.",
                0.0,
                0.0,
                0,
            ),
            (
                "present",
                "Present",
                "The heart of the matter as it stands now.",
                "The point where spirit meets circumstance.",
                1.0,
                0.0,
                0,
            ),
            (
                "future",
                "Future",
                "Where things are heading if nothing changes.",
                "The shape already forming in the unseen.",
                2.0,
                0.0,
                0,
            ),
        ],
    )
});

static CELTIC_CROSS: LazyLock<SpreadDefinition> = LazyLock::new(|| {
    build(
        SpreadKind::CelticCross,
        "Celtic Cross",
        "A ten-card cross and staff for a full view of one question.",
        &[
            (
                "present",
                "Present",
                "The situation at the centre of the question.",
                "The querent's current station on the path.",
                0.0,
                0.0,
                0,
            ),
            (
                "challenge",
                "Challenge",
                "What crosses the situation, for good or ill.",
                "The force that tests and refines.",
                0.0,
                0.0,
                90,
            ),
            (
                "foundation",
                "Foundation",
                "The root beneath the matter, often unseen.",
                "The subconscious ground from which events grow.",
                0.0,
                1.0,
                0,
            ),
            (
                "recent-past",
                "Recent Past",
                "What is passing out of the situation.",
                "The tide already going out.",
                -1.0,
                0.0,
                0,
            ),
            (
                "crown",
                "Crown",
                "The best that can be reached; the conscious aim.",
                "The ideal held above the work.",
                0.0,
                -1.0,
                0,
            ),
            (
                "near-future",
                "Near Future",
                "What is about to enter the situation.",
                "The tide coming in.",
                1.0,
                0.0,
                0,
            ),
            (
                "self",
                "Self",
                "The querent's attitude and part in events.",
                "The mask and the face beneath it.",
                2.5,
                1.5,
                0,
            ),
            (
                "environment",
                "Environment",
                "Surrounding people and circumstances.",
                "The mirror the world holds up.",
                2.5,
                0.5,
                0,
            ),
            (
                "hopes-and-fears",
                "Hopes and Fears",
                "What is longed for and what is dreaded, often the same thing.",
                "The desire that binds and the fear that guards it.",
                2.5,
                -0.5,
                0,
            ),
            (
                "outcome",
                "Outcome",
                "Where the present course resolves.",
                "The fruit of the whole pattern.",
                2.5,
                -1.5,
                0,
            ),
        ],
    )
});

static TREE_OF_LIFE: LazyLock<SpreadDefinition> = LazyLock::new(|| {
    build(
        SpreadKind::TreeOfLife,
        "Tree of Life",
        "Ten cards laid on the sephiroth, from crown to kingdom.",
        &[
            (
                "kether",
                "Kether",
                "The highest purpose behind the question.",
                "The Crown: pure being before form.",
                0.0,
                0.0,
                0,
            ),
            (
                "chokmah",
                "Chokmah",
                "The creative impulse and raw drive.",
                "Wisdom: the first outpouring of force.",
                1.0,
                0.5,
                0,
            ),
            (
                "binah",
                "Binah",
                "Understanding, limits, and what gives shape.",
                "Understanding: the great sea that gives form.",
                -1.0,
                0.5,
                0,
            ),
            (
                "chesed",
                "Chesed",
                "Generosity, growth, and what supports you.",
                "Mercy: the ordering of abundance.",
                1.0,
                1.5,
                0,
            ),
            (
                "geburah",
                "Geburah",
                "Conflict, discipline, and what must be cut away.",
                "Severity: the sword that clears the way.",
                -1.0,
                1.5,
                0,
            ),
            (
                "tiphareth",
                "Tiphareth",
                "The heart of the matter and the true self.",
                "Beauty: the harmony at the centre of the tree.",
                0.0,
                2.0,
                0,
            ),
            (
                "netzach",
                "Netzach",
                "Desire, feeling, and relationships.",
                "Victory: the endurance of love and art.",
                1.0,
                3.0,
                0,
            ),
            (
                "hod",
                "Hod",
                "Thought, communication, and planning.",
                "Splendour: the house of the intellect.",
                -1.0,
                3.0,
                0,
            ),
            (
                "yesod",
                "Yesod",
                "The unconscious, dreams, and hidden habits.",
                "Foundation: the moonlit store of images.",
                0.0,
                3.5,
                0,
            ),
            (
                "malkuth",
                "Malkuth",
                "The practical outcome in the material world.",
                "Kingdom: spirit made manifest in matter.",
                0.0,
                4.5,
                0,
            ),
        ],
    )
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_ids() {
        for kind in SpreadKind::ALL {
            assert_eq!(SpreadKind::parse(kind.id()).unwrap(), kind);
        }
    }

    #[test]
    fn parse_unknown_id() {
        let err = SpreadKind::parse("horseshoe").unwrap_err();
        assert_eq!(err, CoreError::InvalidSpread("horseshoe".into()));
    }

    #[test]
    fn position_counts() {
        assert_eq!(SpreadKind::ThreeCard.definition().len(), 3);
        assert_eq!(SpreadKind::CelticCross.definition().len(), 10);
        assert_eq!(SpreadKind::TreeOfLife.definition().len(), 10);
    }

    #[test]
    fn three_card_order() {
        let ids: Vec<_> = SpreadKind::ThreeCard
            .definition()
            .positions
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, ["past", "present", "future"]);
    }

    #[test]
    fn builtins_validate() {
        for kind in SpreadKind::ALL {
            kind.definition().validate().unwrap();
        }
    }

    #[test]
    fn challenge_is_rotated() {
        let cross = SpreadKind::CelticCross.definition();
        assert_eq!(cross.placement("challenge").unwrap().rotation, 90);
        assert_eq!(cross.placement("present").unwrap().rotation, 0);
    }

    #[test]
    fn validate_catches_missing_placement() {
        let mut broken = SpreadKind::ThreeCard.definition().clone();
        broken.layout.pop();
        assert!(matches!(
            broken.validate(),
            Err(CoreError::LayoutMismatch { .. })
        ));
    }

    #[test]
    fn validate_catches_foreign_placement() {
        let mut broken = SpreadKind::ThreeCard.definition().clone();
        broken.layout[2].position_id = "elsewhere".into();
        let err = broken.validate().unwrap_err();
        assert!(err.to_string().contains("unknown position elsewhere"));
    }

    #[test]
    fn serde_kind_is_kebab_case() {
        let json = serde_json::to_string(&SpreadKind::TreeOfLife).unwrap();
        assert_eq!(json, "\"tree-of-life\"");
    }
}
