//! Card records and their classification tags.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Which part of the deck a card belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// The 22 trumps, numbered 0 through 21.
    Major,
    /// Ace through Ten of each suit.
    Minor,
    /// Page, Knight, Queen, and King of each suit.
    Court,
}

impl Category {
    /// All categories in deck order.
    pub const ALL: [Self; 3] = [Self::Major, Self::Minor, Self::Court];

    /// Parse a category name (case-insensitive).
    pub fn parse(s: &str) -> CoreResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "major" | "major arcana" => Ok(Self::Major),
            "minor" | "minor arcana" | "pip" => Ok(Self::Minor),
            "court" => Ok(Self::Court),
            _ => Err(CoreError::UnknownTag {
                kind: "category",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Major => write!(f, "Major Arcana"),
            Self::Minor => write!(f, "Minor Arcana"),
            Self::Court => write!(f, "Court"),
        }
    }
}

/// One of the four suits of the minor and court cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Suit {
    /// Fire; creativity and drive.
    Wands,
    /// Water; emotion and relationships.
    Cups,
    /// Air; thought and conflict.
    Swords,
    /// Earth; work and material resources.
    Pentacles,
}

impl Suit {
    /// All suits in deck order.
    pub const ALL: [Self; 4] = [Self::Wands, Self::Cups, Self::Swords, Self::Pentacles];

    /// The element traditionally attributed to this suit.
    pub fn element(self) -> Element {
        match self {
            Self::Wands => Element::Fire,
            Self::Cups => Element::Water,
            Self::Swords => Element::Air,
            Self::Pentacles => Element::Earth,
        }
    }

    /// Lowercase identifier used in card ids.
    pub fn slug(self) -> &'static str {
        match self {
            Self::Wands => "wands",
            Self::Cups => "cups",
            Self::Swords => "swords",
            Self::Pentacles => "pentacles",
        }
    }

    /// Parse a suit name (case-insensitive, accepts common aliases).
    pub fn parse(s: &str) -> CoreResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "wands" | "wand" | "rods" | "batons" => Ok(Self::Wands),
            "cups" | "cup" | "chalices" => Ok(Self::Cups),
            "swords" | "sword" => Ok(Self::Swords),
            "pentacles" | "pentacle" | "coins" | "disks" => Ok(Self::Pentacles),
            _ => Err(CoreError::UnknownTag {
                kind: "suit",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wands => write!(f, "Wands"),
            Self::Cups => write!(f, "Cups"),
            Self::Swords => write!(f, "Swords"),
            Self::Pentacles => write!(f, "Pentacles"),
        }
    }
}

/// Classical element tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Element {
    /// Fire.
    Fire,
    /// Water.
    Water,
    /// Air.
    Air,
    /// Earth.
    Earth,
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fire => write!(f, "Fire"),
            Self::Water => write!(f, "Water"),
            Self::Air => write!(f, "Air"),
            Self::Earth => write!(f, "Earth"),
        }
    }
}

/// An immutable card record.
///
/// Cards are built once when the catalog is constructed and are only ever
/// shared by reference or cloned into readings afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Unique kebab-case identifier, e.g. `the-fool` or `ace-of-cups`.
    pub id: String,
    /// Name shown to the user.
    pub name: String,
    /// Traditional numbered title, e.g. `XIII Death`.
    pub canonical_name: String,
    /// Trump number for majors, 1-10 for pips, 11-14 for courts.
    pub number: Option<u8>,
    /// Suit, absent for major arcana.
    pub suit: Option<Suit>,
    /// Elemental attribution, if any.
    pub element: Option<Element>,
    /// Deck partition.
    pub category: Category,
    /// Short descriptive text.
    pub description: String,
    /// Ordered keyword tags.
    pub keywords: Vec<String>,
}

impl Card {
    /// Whether this card is one of the 22 trumps.
    pub fn is_major(&self) -> bool {
        self.category == Category::Major
    }

    /// Case-insensitive match against id, names, and keywords.
    pub fn matches_text(&self, needle: &str) -> bool {
        let needle = needle.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.id.contains(&needle)
            || self.name.to_lowercase().contains(&needle)
            || self.canonical_name.to_lowercase().contains(&needle)
            || self
                .keywords
                .iter()
                .any(|k| k.to_lowercase().contains(&needle))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Card {
        Card {
            id: "the-star".into(),
            name: "The Star".into(),
            canonical_name: "XVII The Star".into(),
            number: Some(17),
            suit: None,
            element: None,
            category: Category::Major,
            description: "Water poured onto land and pool alike.".into(),
            keywords: vec!["hope".into(), "renewal".into()],
        }
    }

    #[test]
    fn suit_elements() {
        assert_eq!(Suit::Wands.element(), Element::Fire);
        assert_eq!(Suit::Cups.element(), Element::Water);
        assert_eq!(Suit::Swords.element(), Element::Air);
        assert_eq!(Suit::Pentacles.element(), Element::Earth);
    }

    #[test]
    fn parse_suit_aliases() {
        assert_eq!(Suit::parse("Coins").unwrap(), Suit::Pentacles);
        assert_eq!(Suit::parse(" rods ").unwrap(), Suit::Wands);
        assert!(Suit::parse("hearts").is_err());
    }

    #[test]
    fn parse_category() {
        assert_eq!(Category::parse("MAJOR").unwrap(), Category::Major);
        assert_eq!(Category::parse("court").unwrap(), Category::Court);
        let err = Category::parse("joker").unwrap_err();
        assert_eq!(err.to_string(), "unknown category: joker");
    }

    #[test]
    fn text_matching() {
        let card = sample();
        assert!(card.matches_text("star"));
        assert!(card.matches_text("RENEW"));
        assert!(card.matches_text("xvii"));
        assert!(card.matches_text(""));
        assert!(!card.matches_text("sword"));
    }

    #[test]
    fn serde_uses_snake_case_tags() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.contains("\"category\":\"major\""));
        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample());
    }
}
