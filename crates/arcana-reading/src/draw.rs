//! The draw engine.
//!
//! A draw shuffles the whole catalog with Fisher–Yates, deals the first N
//! cards into the spread's positions in order, and flips an independent
//! coin per card for orientation.

use chrono::Utc;
use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use arcana_core::{Catalog, Interpreter, SpreadDefinition, SpreadKind, StandardInterpreter};

use crate::config::DrawConfig;
use crate::error::{ReadingError, ReadingResult};
use crate::reading::{DrawRequest, Reading, ReadingCard, ReadingId};

/// Probability that a drawn card comes up reversed.
///
/// A fixed product choice favouring upright cards; not derived from anything.
pub const REVERSED_PROBABILITY: f64 = 0.25;

/// Draw a reading for the spread named `spread_id`.
pub fn draw<R: Rng + ?Sized>(
    spread_id: &str,
    catalog: &Catalog,
    request: &DrawRequest,
    interpreter: &dyn Interpreter,
    rng: &mut R,
) -> ReadingResult<Reading> {
    let spread = SpreadDefinition::get(spread_id)?;
    draw_spread(spread, catalog, request, interpreter, rng)
}

/// Draw a reading for an already-resolved spread.
///
/// The definition must be one of the built-ins; a modified copy is rejected
/// so the position set always matches a known topology.
///
/// # Panics
///
/// Panics if the catalog holds fewer cards than the spread has positions.
/// The standard deck always has enough.
pub fn draw_spread<R: Rng + ?Sized>(
    spread: &SpreadDefinition,
    catalog: &Catalog,
    request: &DrawRequest,
    interpreter: &dyn Interpreter,
    rng: &mut R,
) -> ReadingResult<Reading> {
    if spread != spread.kind.definition() {
        return Err(ReadingError::InvalidSpread(spread.id().to_string()));
    }
    assert!(
        catalog.len() >= spread.len(),
        "catalog has {} cards but {} needs {}",
        catalog.len(),
        spread.id(),
        spread.len()
    );

    let deck = catalog.cards();
    let mut order: Vec<usize> = (0..deck.len()).collect();
    order.shuffle(rng);

    let cards = spread
        .positions
        .iter()
        .zip(order)
        .map(|(position, index)| {
            let card = &deck[index];
            let reversed = rng.random_bool(REVERSED_PROBABILITY);
            ReadingCard {
                interpretation: interpreter.interpret(card, position),
                card: card.clone(),
                position: position.clone(),
                reversed,
            }
        })
        .collect::<Vec<_>>();

    let reading = Reading {
        id: ReadingId::new(),
        created_at: Utc::now(),
        spread: spread.kind,
        question: request.question.clone(),
        cards,
        querent: request.querent.clone(),
    };

    debug!(
        "drew {} for {}: {}",
        reading.id,
        spread.id(),
        reading
            .cards
            .iter()
            .map(|c| c.label())
            .collect::<Vec<_>>()
            .join(", ")
    );

    Ok(reading)
}

/// A catalog, interpreter, and RNG bundled for repeated draws.
pub struct DrawEngine {
    catalog: Catalog,
    interpreter: Box<dyn Interpreter>,
    rng: StdRng,
}

impl std::fmt::Debug for DrawEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DrawEngine")
            .field("cards", &self.catalog.len())
            .finish()
    }
}

impl DrawEngine {
    /// An engine over the standard deck with the standard interpreter.
    pub fn new(config: DrawConfig) -> Self {
        Self::with_parts(Catalog::standard(), Box::new(StandardInterpreter), config)
    }

    /// An engine over a custom catalog and interpreter.
    pub fn with_parts(
        catalog: Catalog,
        interpreter: Box<dyn Interpreter>,
        config: DrawConfig,
    ) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            catalog,
            interpreter,
            rng,
        }
    }

    /// The catalog draws are taken from.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Draw a reading for the spread named `spread_id`.
    pub fn draw(&mut self, spread_id: &str, request: &DrawRequest) -> ReadingResult<Reading> {
        draw(
            spread_id,
            &self.catalog,
            request,
            self.interpreter.as_ref(),
            &mut self.rng,
        )
    }

    /// Draw a reading for a known spread kind.
    pub fn draw_kind(&mut self, kind: SpreadKind, request: &DrawRequest) -> ReadingResult<Reading> {
        draw_spread(
            kind.definition(),
            &self.catalog,
            request,
            self.interpreter.as_ref(),
            &mut self.rng,
        )
    }
}
