//! Interpretation lookup: text for a card in a position.

use crate::card::{Card, Category};
use crate::spread::Position;

/// Produces the reading text for a card landing in a position.
///
/// Implementations must be pure: the same pair always yields the same text.
pub trait Interpreter {
    /// Interpret `card` as it falls in `position`.
    fn interpret(&self, card: &Card, position: &Position) -> String;
}

/// Composes the position's meaning with the card's keywords and framing.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardInterpreter;

impl Interpreter for StandardInterpreter {
    fn interpret(&self, card: &Card, position: &Position) -> String {
        let keywords = match card.keywords.as_slice() {
            [] => String::from("its own nature"),
            [only] => only.clone(),
            [init @ .., last] => format!("{} and {last}", init.join(", ")),
        };

        let framing = match (card.category, card.element) {
            (Category::Major, _) => "a major turning of fate",
            (Category::Court, _) => "a person or a way of acting",
            (Category::Minor, Some(_)) => "the everyday course of things",
            (Category::Minor, None) => "circumstance",
        };

        let mut text = format!(
            "{} in {}: {} This card brings {keywords}, pointing to {framing}.",
            card.name, position.name, position.meaning
        );
        if let Some(element) = card.element {
            text.push_str(&format!(" Its element is {element}."));
        }
        text
    }
}

impl<F> Interpreter for F
where
    F: Fn(&Card, &Position) -> String,
{
    fn interpret(&self, card: &Card, position: &Position) -> String {
        self(card, position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::spread::SpreadKind;

    #[test]
    fn standard_text_mentions_card_and_position() {
        let catalog = Catalog::standard();
        let card = catalog.get("the-tower").unwrap();
        let position = SpreadKind::ThreeCard.definition().position("future").unwrap();
        let text = StandardInterpreter.interpret(card, position);
        assert!(text.starts_with("The Tower in Future:"));
        assert!(text.contains("upheaval, revelation and collapse"));
        assert!(text.contains("major turning of fate"));
        assert!(!text.contains("element"));
    }

    #[test]
    fn suited_cards_mention_element() {
        let catalog = Catalog::standard();
        let card = catalog.get("five-of-swords").unwrap();
        let position = SpreadKind::CelticCross.definition().position("challenge").unwrap();
        let text = StandardInterpreter.interpret(card, position);
        assert!(text.contains("Its element is Air."));
    }

    #[test]
    fn deterministic() {
        let catalog = Catalog::standard();
        let card = catalog.get("king-of-pentacles").unwrap();
        let position = SpreadKind::TreeOfLife.definition().position("malkuth").unwrap();
        assert_eq!(
            StandardInterpreter.interpret(card, position),
            StandardInterpreter.interpret(card, position)
        );
    }

    #[test]
    fn closures_are_interpreters() {
        let catalog = Catalog::standard();
        let card = catalog.get("the-sun").unwrap();
        let position = SpreadKind::ThreeCard.definition().position("past").unwrap();
        let short = |c: &Card, p: &Position| format!("{}/{}", c.id, p.id);
        assert_eq!(short.interpret(card, position), "the-sun/past");
    }
}
