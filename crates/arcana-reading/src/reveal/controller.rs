//! Timer scheduling on top of the reveal machine.
//!
//! The controller keeps a virtual clock and at most one pending timer. Time
//! is pushed in from outside with [`RevealController::advance`], either by
//! tests or by the async driver, and due timers are turned into machine
//! events. Because there is only ever one pending slot, a new schedule
//! replaces the old one and two timer chains can never race.

use std::fmt;
use std::time::Duration;

use log::debug;

use crate::config::RevealConfig;
use crate::reading::Reading;

use super::machine::{Outcome, RevealEvent, RevealMachine, RevealPhase, RevealSession, TimerKind};

/// Point-in-time view of the reveal, handed to observers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealSnapshot {
    /// Phase at the time of the snapshot.
    pub phase: RevealPhase,
    /// Next card the timer will turn.
    pub cursor: usize,
    /// Face-up flag per card.
    pub revealed: Vec<bool>,
}

#[derive(Debug, Clone, Copy)]
struct PendingTimer {
    due: Duration,
    kind: TimerKind,
    generation: u64,
}

type CompletionCallback = Box<dyn FnMut(&RevealSession)>;

/// Drives a [`RevealMachine`] from a virtual clock.
pub struct RevealController {
    machine: RevealMachine,
    config: RevealConfig,
    now: Duration,
    pending: Option<PendingTimer>,
    on_complete: Option<CompletionCallback>,
}

impl fmt::Debug for RevealController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RevealController")
            .field("phase", &self.machine.phase())
            .field("now", &self.now)
            .field("pending", &self.pending.map(|p| p.kind))
            .finish()
    }
}

impl RevealController {
    /// An idle controller with the given timings.
    pub fn new(config: RevealConfig) -> Self {
        Self {
            machine: RevealMachine::new(config.auto_reveal),
            config,
            now: Duration::ZERO,
            pending: None,
            on_complete: None,
        }
    }

    /// Register a callback run once each time a reveal finishes.
    pub fn with_completion<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&RevealSession) + 'static,
    {
        self.on_complete = Some(Box::new(callback));
        self
    }

    /// The timings in use.
    pub fn config(&self) -> &RevealConfig {
        &self.config
    }

    /// Current phase.
    pub fn phase(&self) -> RevealPhase {
        self.machine.phase()
    }

    /// Current session, absent while idle.
    pub fn session(&self) -> Option<&RevealSession> {
        self.machine.session()
    }

    /// Virtual time elapsed since the controller was created.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Kind of the pending timer, if any.
    pub fn pending_timer(&self) -> Option<TimerKind> {
        self.pending.map(|p| p.kind)
    }

    /// Wait until the pending timer is due.
    pub fn time_until_next(&self) -> Option<Duration> {
        self.pending.map(|p| p.due.saturating_sub(self.now))
    }

    /// Capture the current state.
    pub fn snapshot(&self) -> RevealSnapshot {
        match self.machine.session() {
            Some(session) => RevealSnapshot {
                phase: self.machine.phase(),
                cursor: session.cursor(),
                revealed: session.revealed().to_vec(),
            },
            None => RevealSnapshot {
                phase: self.machine.phase(),
                cursor: 0,
                revealed: Vec::new(),
            },
        }
    }

    /// Begin revealing `reading`, superseding any reveal in progress.
    pub fn start_revealing(&mut self, reading: &Reading) {
        debug!("start revealing {} ({} cards)", reading.id, reading.len());
        self.dispatch(RevealEvent::Start {
            card_count: reading.len(),
        });
    }

    /// Show a saved reading fully revealed, skipping the animation phases.
    pub fn restore(&mut self, reading: &Reading) {
        self.dispatch(RevealEvent::Restore {
            card_count: reading.len(),
        });
    }

    /// Force card `index` face up. Out-of-range indices are ignored.
    pub fn reveal_card(&mut self, index: usize) {
        self.dispatch(RevealEvent::RevealCard(index));
    }

    /// Turn every card and finish immediately, cancelling pending timers.
    pub fn reveal_all_cards(&mut self) {
        self.dispatch(RevealEvent::RevealAll);
    }

    /// Discard the session and return to idle.
    pub fn reset_reveal(&mut self) {
        self.dispatch(RevealEvent::Reset);
    }

    /// Let `elapsed` pass, firing every timer that falls due in order.
    /// Returns a snapshot after each fired timer that changed state.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<RevealSnapshot> {
        let target = self.now + elapsed;
        let mut changes = Vec::new();
        while let Some(pending) = self.pending.filter(|p| p.due <= target) {
            if let Some(snapshot) = self.fire(pending) {
                changes.push(snapshot);
            }
        }
        self.now = target;
        changes
    }

    /// Jump straight to the pending timer and fire it.
    pub fn advance_to_next(&mut self) -> Option<RevealSnapshot> {
        let pending = self.pending?;
        self.fire(pending)
    }

    fn fire(&mut self, pending: PendingTimer) -> Option<RevealSnapshot> {
        self.now = self.now.max(pending.due);
        self.pending = None;
        let outcome = self.dispatch(RevealEvent::Timer {
            kind: pending.kind,
            generation: pending.generation,
        });
        (outcome != Outcome::Ignored).then(|| self.snapshot())
    }

    fn dispatch(&mut self, event: RevealEvent) -> Outcome {
        let outcome = self.machine.apply(event);
        match outcome {
            Outcome::Ignored | Outcome::Updated => {}
            Outcome::Schedule(kind) => {
                self.pending = Some(PendingTimer {
                    due: self.now + self.config.delay_for(kind),
                    kind,
                    generation: self.machine.generation(),
                });
            }
            Outcome::Cancel => self.pending = None,
            Outcome::Complete => {
                self.pending = None;
                if let (Some(callback), Some(session)) =
                    (self.on_complete.as_mut(), self.machine.session())
                {
                    callback(session);
                }
            }
        }
        outcome
    }
}
