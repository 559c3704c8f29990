//! The reveal state machine.
//!
//! `RevealMachine::apply` is the single transition function. It never
//! schedules anything itself; it reports what the timer layer should do
//! next through [`Outcome`]. Timer events carry the generation they were
//! scheduled under, and any event from an older generation is dropped, so
//! a superseded timer chain can never touch a newer session.

use std::fmt;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

/// Disclosure phase of a reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevealPhase {
    /// Nothing is being revealed.
    Idle,
    /// The deck is being shuffled.
    Shuffling,
    /// Cards are being dealt face down.
    Drawing,
    /// Cards are being turned one at a time.
    Revealing,
    /// Every card is face up.
    Complete,
}

impl fmt::Display for RevealPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Shuffling => write!(f, "shuffling"),
            Self::Drawing => write!(f, "drawing"),
            Self::Revealing => write!(f, "revealing"),
            Self::Complete => write!(f, "complete"),
        }
    }
}

/// The timers the machine can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Ends the shuffle phase.
    ShuffleElapsed,
    /// Ends the draw phase.
    PreRevealElapsed,
    /// Turns the next card.
    RevealTick,
}

/// Inputs to the transition function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealEvent {
    /// Begin revealing a fresh reading, superseding any current session.
    Start {
        /// Number of cards in the reading.
        card_count: usize,
    },
    /// Open a saved reading with every card already face up.
    Restore {
        /// Number of cards in the reading.
        card_count: usize,
    },
    /// A scheduled timer fired.
    Timer {
        /// Which timer.
        kind: TimerKind,
        /// Generation it was scheduled under.
        generation: u64,
    },
    /// Force one card face up.
    RevealCard(usize),
    /// Force every card face up and finish.
    RevealAll,
    /// Discard the session.
    Reset,
}

/// What the timer layer should do after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The event did not apply; leave everything as it is.
    Ignored,
    /// State changed; keep any pending timer.
    Updated,
    /// Replace any pending timer with one of this kind.
    Schedule(TimerKind),
    /// Drop any pending timer.
    Cancel,
    /// The reveal just finished; drop any pending timer and notify.
    Complete,
}

/// Per-reading disclosure state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RevealSession {
    revealed: Vec<bool>,
    cursor: usize,
}

impl RevealSession {
    /// A session with every card face down.
    pub fn hidden(card_count: usize) -> Self {
        Self {
            revealed: vec![false; card_count],
            cursor: 0,
        }
    }

    /// A session with every card face up.
    pub fn revealed_all(card_count: usize) -> Self {
        Self {
            revealed: vec![true; card_count],
            cursor: card_count,
        }
    }

    /// Face-up flag per card.
    pub fn revealed(&self) -> &[bool] {
        &self.revealed
    }

    /// Index of the next card the timer will turn.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of cards.
    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    /// Whether the session covers no cards.
    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }

    /// Whether card `index` is face up. Out-of-range indices are face down.
    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    /// Number of face-up cards.
    pub fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|r| **r).count()
    }

    /// Whether every card is face up.
    pub fn all_revealed(&self) -> bool {
        self.revealed.iter().all(|r| *r)
    }
}

/// The reveal state machine.
#[derive(Debug, Clone)]
pub struct RevealMachine {
    phase: RevealPhase,
    session: Option<RevealSession>,
    generation: u64,
    auto_reveal: bool,
}

impl RevealMachine {
    /// An idle machine.
    pub fn new(auto_reveal: bool) -> Self {
        Self {
            phase: RevealPhase::Idle,
            session: None,
            generation: 0,
            auto_reveal,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    /// Current session, absent while idle.
    pub fn session(&self) -> Option<&RevealSession> {
        self.session.as_ref()
    }

    /// Generation that live timers must carry.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether the draw phase advances on its own.
    pub fn auto_reveal(&self) -> bool {
        self.auto_reveal
    }

    /// Apply one event.
    pub fn apply(&mut self, event: RevealEvent) -> Outcome {
        match event {
            RevealEvent::Start { card_count } => {
                self.generation += 1;
                self.session = Some(RevealSession::hidden(card_count));
                self.enter(RevealPhase::Shuffling);
                Outcome::Schedule(TimerKind::ShuffleElapsed)
            }
            RevealEvent::Restore { card_count } => {
                self.generation += 1;
                self.session = Some(RevealSession::revealed_all(card_count));
                self.enter(RevealPhase::Complete);
                Outcome::Cancel
            }
            RevealEvent::Timer { kind, generation } => {
                if generation != self.generation {
                    trace!(
                        "dropping stale {kind:?} from generation {generation} (now {})",
                        self.generation
                    );
                    return Outcome::Ignored;
                }
                self.on_timer(kind)
            }
            RevealEvent::RevealCard(index) => match self.session.as_mut() {
                Some(session) if index < session.revealed.len() => {
                    session.revealed[index] = true;
                    Outcome::Updated
                }
                _ => Outcome::Ignored,
            },
            RevealEvent::RevealAll => {
                let Some(session) = self.session.as_mut() else {
                    return Outcome::Ignored;
                };
                session.revealed.fill(true);
                session.cursor = session.revealed.len();
                if self.phase == RevealPhase::Complete {
                    return Outcome::Updated;
                }
                self.generation += 1;
                self.enter(RevealPhase::Complete);
                Outcome::Complete
            }
            RevealEvent::Reset => {
                self.generation += 1;
                self.session = None;
                self.enter(RevealPhase::Idle);
                Outcome::Cancel
            }
        }
    }

    fn on_timer(&mut self, kind: TimerKind) -> Outcome {
        match (self.phase, kind) {
            (RevealPhase::Shuffling, TimerKind::ShuffleElapsed) => {
                self.enter(RevealPhase::Drawing);
                if self.auto_reveal {
                    Outcome::Schedule(TimerKind::PreRevealElapsed)
                } else {
                    Outcome::Cancel
                }
            }
            (RevealPhase::Drawing, TimerKind::PreRevealElapsed) => {
                if self.session.as_ref().is_none_or(RevealSession::is_empty) {
                    self.enter(RevealPhase::Complete);
                    return Outcome::Complete;
                }
                self.enter(RevealPhase::Revealing);
                Outcome::Schedule(TimerKind::RevealTick)
            }
            (RevealPhase::Revealing, TimerKind::RevealTick) => self.reveal_next(),
            (phase, kind) => {
                trace!("{kind:?} does not apply in {phase}");
                Outcome::Ignored
            }
        }
    }

    fn reveal_next(&mut self) -> Outcome {
        let Some(session) = self.session.as_mut() else {
            return Outcome::Ignored;
        };
        if let Some(flag) = session.revealed.get_mut(session.cursor) {
            *flag = true;
        }
        session.cursor += 1;
        if session.cursor >= session.revealed.len() {
            self.enter(RevealPhase::Complete);
            Outcome::Complete
        } else {
            Outcome::Schedule(TimerKind::RevealTick)
        }
    }

    fn enter(&mut self, phase: RevealPhase) {
        if self.phase != phase {
            debug!("reveal {} -> {phase}", self.phase);
        }
        self.phase = phase;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fire(machine: &mut RevealMachine, kind: TimerKind) -> Outcome {
        let generation = machine.generation();
        machine.apply(RevealEvent::Timer { kind, generation })
    }

    #[test]
    fn starts_idle() {
        let m = RevealMachine::new(true);
        assert_eq!(m.phase(), RevealPhase::Idle);
        assert!(m.session().is_none());
    }

    #[test]
    fn full_sequence() {
        let mut m = RevealMachine::new(true);
        assert_eq!(
            m.apply(RevealEvent::Start { card_count: 2 }),
            Outcome::Schedule(TimerKind::ShuffleElapsed)
        );
        assert_eq!(m.phase(), RevealPhase::Shuffling);
        assert_eq!(m.session().unwrap().revealed(), [false, false]);

        assert_eq!(
            fire(&mut m, TimerKind::ShuffleElapsed),
            Outcome::Schedule(TimerKind::PreRevealElapsed)
        );
        assert_eq!(m.phase(), RevealPhase::Drawing);

        assert_eq!(
            fire(&mut m, TimerKind::PreRevealElapsed),
            Outcome::Schedule(TimerKind::RevealTick)
        );
        assert_eq!(m.phase(), RevealPhase::Revealing);
        assert_eq!(m.session().unwrap().cursor(), 0);

        assert_eq!(
            fire(&mut m, TimerKind::RevealTick),
            Outcome::Schedule(TimerKind::RevealTick)
        );
        assert_eq!(m.session().unwrap().revealed(), [true, false]);
        assert_eq!(m.session().unwrap().cursor(), 1);

        assert_eq!(fire(&mut m, TimerKind::RevealTick), Outcome::Complete);
        assert_eq!(m.phase(), RevealPhase::Complete);
        assert!(m.session().unwrap().all_revealed());
    }

    #[test]
    fn parks_in_drawing_without_auto_reveal() {
        let mut m = RevealMachine::new(false);
        m.apply(RevealEvent::Start { card_count: 3 });
        assert_eq!(fire(&mut m, TimerKind::ShuffleElapsed), Outcome::Cancel);
        assert_eq!(m.phase(), RevealPhase::Drawing);

        assert_eq!(m.apply(RevealEvent::RevealAll), Outcome::Complete);
        assert_eq!(m.phase(), RevealPhase::Complete);
        assert!(m.session().unwrap().all_revealed());
    }

    #[test]
    fn stale_timer_is_ignored() {
        let mut m = RevealMachine::new(true);
        m.apply(RevealEvent::Start { card_count: 3 });
        let old = m.generation();
        m.apply(RevealEvent::RevealAll);
        let outcome = m.apply(RevealEvent::Timer {
            kind: TimerKind::ShuffleElapsed,
            generation: old,
        });
        assert_eq!(outcome, Outcome::Ignored);
        assert_eq!(m.phase(), RevealPhase::Complete);
    }

    #[test]
    fn superseding_start_invalidates_old_timers() {
        let mut m = RevealMachine::new(true);
        m.apply(RevealEvent::Start { card_count: 3 });
        let first = m.generation();
        m.apply(RevealEvent::Start { card_count: 10 });
        assert_eq!(
            m.apply(RevealEvent::Timer {
                kind: TimerKind::ShuffleElapsed,
                generation: first,
            }),
            Outcome::Ignored
        );
        assert_eq!(m.phase(), RevealPhase::Shuffling);
        assert_eq!(m.session().unwrap().len(), 10);
    }

    #[test]
    fn wrong_timer_for_phase_is_ignored() {
        let mut m = RevealMachine::new(true);
        m.apply(RevealEvent::Start { card_count: 3 });
        assert_eq!(fire(&mut m, TimerKind::RevealTick), Outcome::Ignored);
        assert_eq!(m.phase(), RevealPhase::Shuffling);
    }

    #[test]
    fn reveal_card_keeps_phase_and_cursor() {
        let mut m = RevealMachine::new(true);
        m.apply(RevealEvent::Start { card_count: 3 });
        assert_eq!(m.apply(RevealEvent::RevealCard(2)), Outcome::Updated);
        let s = m.session().unwrap();
        assert_eq!(s.revealed(), [false, false, true]);
        assert_eq!(s.cursor(), 0);
        assert_eq!(m.phase(), RevealPhase::Shuffling);
    }

    #[test]
    fn reveal_card_out_of_range_is_noop() {
        let mut m = RevealMachine::new(true);
        assert_eq!(m.apply(RevealEvent::RevealCard(0)), Outcome::Ignored);
        m.apply(RevealEvent::Start { card_count: 3 });
        assert_eq!(m.apply(RevealEvent::RevealCard(3)), Outcome::Ignored);
        assert_eq!(m.session().unwrap().revealed_count(), 0);
    }

    #[test]
    fn reveal_all_when_idle_is_noop() {
        let mut m = RevealMachine::new(true);
        assert_eq!(m.apply(RevealEvent::RevealAll), Outcome::Ignored);
        assert_eq!(m.phase(), RevealPhase::Idle);
    }

    #[test]
    fn reset_is_idempotent() {
        for setup in 0..3 {
            let mut m = RevealMachine::new(true);
            if setup >= 1 {
                m.apply(RevealEvent::Start { card_count: 3 });
            }
            if setup >= 2 {
                m.apply(RevealEvent::RevealAll);
            }
            m.apply(RevealEvent::Reset);
            assert_eq!(m.phase(), RevealPhase::Idle);
            assert!(m.session().is_none());
            m.apply(RevealEvent::Reset);
            assert_eq!(m.phase(), RevealPhase::Idle);
            assert!(m.session().is_none());
        }
    }

    #[test]
    fn restore_is_complete_without_timers() {
        let mut m = RevealMachine::new(true);
        assert_eq!(m.apply(RevealEvent::Restore { card_count: 10 }), Outcome::Cancel);
        assert_eq!(m.phase(), RevealPhase::Complete);
        assert!(m.session().unwrap().all_revealed());
        assert_eq!(m.session().unwrap().cursor(), 10);
    }

    #[test]
    fn empty_reading_completes_after_draw() {
        let mut m = RevealMachine::new(true);
        m.apply(RevealEvent::Start { card_count: 0 });
        fire(&mut m, TimerKind::ShuffleElapsed);
        assert_eq!(fire(&mut m, TimerKind::PreRevealElapsed), Outcome::Complete);
        assert_eq!(m.phase(), RevealPhase::Complete);
    }

    #[test]
    fn session_queries() {
        let s = RevealSession::hidden(2);
        assert!(!s.is_revealed(0));
        assert!(!s.is_revealed(5));
        assert!(!s.all_revealed());
        assert!(RevealSession::revealed_all(2).all_revealed());
    }
}
