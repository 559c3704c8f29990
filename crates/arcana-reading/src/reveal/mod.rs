//! Timed, sequential disclosure of a drawn reading.
//!
//! Three layers, innermost first:
//!
//! - [`machine`]: the pure transition function over phases and flags.
//! - [`controller`]: a single pending timer on a virtual clock.
//! - [`driver`]: real-time playback on tokio.

pub mod controller;
pub mod driver;
pub mod machine;

pub use controller::{RevealController, RevealSnapshot};
pub use machine::{Outcome, RevealEvent, RevealMachine, RevealPhase, RevealSession, TimerKind};
