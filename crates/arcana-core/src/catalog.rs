//! The 78-card catalog.
//!
//! The standard deck is assembled from three static tables: the major
//! arcana, the pip ranks, and the court ranks. Pip and court cards are
//! composed from their rank and suit entries so every suit gets the same
//! structure.

use std::collections::HashMap;

use crate::card::{Card, Category, Element, Suit};
use crate::error::{CoreError, CoreResult};

/// Number of cards in a complete deck.
pub const DECK_SIZE: usize = 78;

/// A major arcana entry: id, name, element, keywords, description.
struct MajorEntry {
    id: &'static str,
    name: &'static str,
    element: Option<Element>,
    keywords: &'static [&'static str],
    description: &'static str,
}

const MAJOR_ARCANA: &[MajorEntry] = &[
    MajorEntry {
        id: "the-fool",
        name: "The Fool",
        element: Some(Element::Air),
        keywords: &["beginnings", "spontaneity", "faith"],
        description: "A traveller steps toward the cliff edge, trusting the road to appear.",
    },
    MajorEntry {
        id: "the-magician",
        name: "The Magician",
        element: None,
        keywords: &["will", "skill", "manifestation"],
        description: "All four tools lie on the table; intention becomes action.",
    },
    MajorEntry {
        id: "the-high-priestess",
        name: "The High Priestess",
        element: None,
        keywords: &["intuition", "mystery", "inner knowing"],
        description: "She sits between the pillars, guarding what is not yet spoken.",
    },
    MajorEntry {
        id: "the-empress",
        name: "The Empress",
        element: None,
        keywords: &["abundance", "nurture", "fertility"],
        description: "A ripening field around a figure at ease with growth.",
    },
    MajorEntry {
        id: "the-emperor",
        name: "The Emperor",
        element: None,
        keywords: &["authority", "structure", "stability"],
        description: "A stone throne, a steady hand, and the rule of order.",
    },
    MajorEntry {
        id: "the-hierophant",
        name: "The Hierophant",
        element: None,
        keywords: &["tradition", "teaching", "belief"],
        description: "Keys of doctrine handed down through tradition.",
    },
    MajorEntry {
        id: "the-lovers",
        name: "The Lovers",
        element: None,
        keywords: &["union", "choice", "values"],
        description: "Two figures beneath an angel, bound by a choice of the heart.",
    },
    MajorEntry {
        id: "the-chariot",
        name: "The Chariot",
        element: None,
        keywords: &["drive", "victory", "control"],
        description: "Opposing forces harnessed and driven forward by will.",
    },
    MajorEntry {
        id: "strength",
        name: "Strength",
        element: None,
        keywords: &["courage", "patience", "compassion"],
        description: "A gentle hand closes the lion's jaw without force.",
    },
    MajorEntry {
        id: "the-hermit",
        name: "The Hermit",
        element: None,
        keywords: &["introspection", "solitude", "guidance"],
        description: "A lantern held high on a lonely summit.",
    },
    MajorEntry {
        id: "wheel-of-fortune",
        name: "Wheel of Fortune",
        element: None,
        keywords: &["cycles", "fate", "turning point"],
        description: "The wheel turns; what rises will fall and rise again.",
    },
    MajorEntry {
        id: "justice",
        name: "Justice",
        element: None,
        keywords: &["fairness", "truth", "consequence"],
        description: "Scales and sword weigh every act against its outcome.",
    },
    MajorEntry {
        id: "the-hanged-man",
        name: "The Hanged Man",
        element: Some(Element::Water),
        keywords: &["surrender", "pause", "new perspective"],
        description: "Suspended by choice, the world is seen upside down.",
    },
    MajorEntry {
        id: "death",
        name: "Death",
        element: None,
        keywords: &["endings", "transformation", "release"],
        description: "A rider passes; the old season gives way to the new.",
    },
    MajorEntry {
        id: "temperance",
        name: "Temperance",
        element: None,
        keywords: &["balance", "moderation", "blending"],
        description: "Water poured between cups without a drop lost.",
    },
    MajorEntry {
        id: "the-devil",
        name: "The Devil",
        element: None,
        keywords: &["attachment", "temptation", "shadow"],
        description: "Loose chains that are worn rather than imposed.",
    },
    MajorEntry {
        id: "the-tower",
        name: "The Tower",
        element: None,
        keywords: &["upheaval", "revelation", "collapse"],
        description: "Lightning strikes the crown of a tower built on false ground.",
    },
    MajorEntry {
        id: "the-star",
        name: "The Star",
        element: None,
        keywords: &["hope", "renewal", "serenity"],
        description: "Water poured onto land and pool under a clear night sky.",
    },
    MajorEntry {
        id: "the-moon",
        name: "The Moon",
        element: None,
        keywords: &["illusion", "dreams", "uncertainty"],
        description: "A path winds between two towers under shifting light.",
    },
    MajorEntry {
        id: "the-sun",
        name: "The Sun",
        element: None,
        keywords: &["joy", "vitality", "clarity"],
        description: "A child rides beneath a blazing sun, nothing hidden.",
    },
    MajorEntry {
        id: "judgement",
        name: "Judgement",
        element: Some(Element::Fire),
        keywords: &["awakening", "reckoning", "calling"],
        description: "A trumpet sounds and the sleepers rise to answer.",
    },
    MajorEntry {
        id: "the-world",
        name: "The World",
        element: None,
        keywords: &["completion", "integration", "fulfilment"],
        description: "A dancer within the wreath; the cycle is whole.",
    },
];

/// Pip ranks: word, keywords, and the phrase that opens the description.
const PIP_RANKS: &[(&str, [&str; 2], &str)] = &[
    ("Ace", ["potential", "seed"], "The raw seed of"),
    ("Two", ["duality", "choice"], "A balance struck within"),
    ("Three", ["growth", "collaboration"], "The first growth of"),
    ("Four", ["stability", "rest"], "The consolidation of"),
    ("Five", ["conflict", "loss"], "A disruption in"),
    ("Six", ["harmony", "exchange"], "The restored flow of"),
    ("Seven", ["assessment", "persistence"], "A test of"),
    ("Eight", ["movement", "mastery"], "Swift movement in"),
    ("Nine", ["culmination", "resilience"], "The near-fulfilment of"),
    ("Ten", ["completion", "burden"], "The full weight of"),
];

/// Court ranks: word, keywords, and the phrase that opens the description.
const COURT_RANKS: &[(&str, [&str; 2], &str)] = &[
    ("Page", ["curiosity", "messages"], "A student of"),
    ("Knight", ["action", "pursuit"], "A restless pursuer of"),
    ("Queen", ["receptivity", "maturity"], "An inward master of"),
    ("King", ["command", "responsibility"], "An outward master of"),
];

/// What each suit governs, used to complete minor and court descriptions.
fn suit_domain(suit: Suit) -> (&'static str, &'static str) {
    match suit {
        Suit::Wands => ("energy", "creativity, ambition, and drive"),
        Suit::Cups => ("feeling", "emotion, relationships, and intuition"),
        Suit::Swords => ("intellect", "thought, conflict, and truth"),
        Suit::Pentacles => ("resources", "work, the body, and material security"),
    }
}

const ROMAN: [&str; 22] = [
    "0", "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X", "XI", "XII", "XIII", "XIV",
    "XV", "XVI", "XVII", "XVIII", "XIX", "XX", "XXI",
];

fn suited_card(
    category: Category,
    suit: Suit,
    number: u8,
    (rank, rank_keywords, opening): (&str, [&str; 2], &str),
) -> Card {
    let (suit_keyword, domain) = suit_domain(suit);
    let name = format!("{rank} of {suit}");
    let mut keywords: Vec<String> = rank_keywords.iter().map(|k| k.to_string()).collect();
    keywords.push(suit_keyword.to_string());
    Card {
        id: format!("{}-of-{}", rank.to_lowercase(), suit.slug()),
        canonical_name: name.clone(),
        name,
        number: Some(number),
        suit: Some(suit),
        element: Some(suit.element()),
        category,
        description: format!("{opening} {domain}."),
        keywords,
    }
}

/// An indexed, immutable collection of cards.
#[derive(Debug, Clone)]
pub struct Catalog {
    cards: Vec<Card>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build the standard 78-card deck in traditional order: majors, then
    /// each suit's pips followed by its courts.
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for (number, entry) in MAJOR_ARCANA.iter().enumerate() {
            cards.push(Card {
                id: entry.id.to_string(),
                name: entry.name.to_string(),
                canonical_name: format!("{} {}", ROMAN[number], entry.name),
                number: Some(number as u8),
                suit: None,
                element: entry.element,
                category: Category::Major,
                description: entry.description.to_string(),
                keywords: entry.keywords.iter().map(|k| k.to_string()).collect(),
            });
        }

        for suit in Suit::ALL {
            for (i, rank) in PIP_RANKS.iter().enumerate() {
                cards.push(suited_card(Category::Minor, suit, i as u8 + 1, *rank));
            }
            for (i, rank) in COURT_RANKS.iter().enumerate() {
                cards.push(suited_card(Category::Court, suit, i as u8 + 11, *rank));
            }
        }

        let index = cards
            .iter()
            .enumerate()
            .map(|(i, c)| (c.id.clone(), i))
            .collect();
        Self { cards, index }
    }

    /// Build a catalog from arbitrary cards, rejecting duplicate ids.
    pub fn from_cards(cards: Vec<Card>) -> CoreResult<Self> {
        let mut index = HashMap::with_capacity(cards.len());
        for (i, card) in cards.iter().enumerate() {
            if index.insert(card.id.clone(), i).is_some() {
                return Err(CoreError::DuplicateCard(card.id.clone()));
            }
        }
        Ok(Self { cards, index })
    }

    /// Look up a card by id.
    pub fn get(&self, id: &str) -> Option<&Card> {
        self.index.get(id).map(|&i| &self.cards[i])
    }

    /// Card at a position in catalog order.
    pub fn at(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// All cards in catalog order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Iterate over cards in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Number of cards.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the catalog holds no cards.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards in the given category.
    pub fn by_category(&self, category: Category) -> Vec<&Card> {
        self.filter(&CardFilter::new().category(category))
    }

    /// Cards of the given suit (minor and court).
    pub fn by_suit(&self, suit: Suit) -> Vec<&Card> {
        self.filter(&CardFilter::new().suit(suit))
    }

    /// Cards whose names or keywords contain `text`.
    pub fn search(&self, text: &str) -> Vec<&Card> {
        self.filter(&CardFilter::new().text(text))
    }

    /// Apply a composed filter.
    pub fn filter(&self, filter: &CardFilter) -> Vec<&Card> {
        self.cards.iter().filter(|c| filter.matches(c)).collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

/// Criteria for narrowing the catalog. Unset fields match everything.
#[derive(Debug, Clone, Default)]
pub struct CardFilter {
    category: Option<Category>,
    suit: Option<Suit>,
    text: Option<String>,
}

impl CardFilter {
    /// A filter that matches every card.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to a category.
    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Restrict to a suit.
    pub fn suit(mut self, suit: Suit) -> Self {
        self.suit = Some(suit);
        self
    }

    /// Restrict to cards matching free text.
    pub fn text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }

    /// Whether `card` passes every set criterion.
    pub fn matches(&self, card: &Card) -> bool {
        self.category.is_none_or(|c| card.category == c)
            && self.suit.is_none_or(|s| card.suit == Some(s))
            && self.text.as_deref().is_none_or(|t| card.matches_text(t))
    }
}
