//! Real-time playback of a reveal on a tokio timer.
//!
//! The driver sleeps until the controller's next deadline and then feeds
//! the elapsed time back in. It borrows the controller exclusively for the
//! whole run, so nothing else can mutate the session meanwhile. Run it on a
//! current-thread runtime; it never spawns.

use std::future::Future;

use log::debug;

use super::controller::{RevealController, RevealSnapshot};
use super::machine::RevealPhase;

/// Play the reveal until no timer is pending, reporting each change.
///
/// Returns the phase the controller settled in: `Complete` normally, or
/// `Drawing` when auto reveal is off.
pub async fn play<F>(controller: &mut RevealController, mut observer: F) -> RevealPhase
where
    F: FnMut(&RevealSnapshot),
{
    while let Some(wait) = controller.time_until_next() {
        tokio::time::sleep(wait).await;
        for snapshot in controller.advance(wait) {
            observer(&snapshot);
        }
    }
    controller.phase()
}

/// Like [`play`], but tears the session down if `stop` resolves first.
///
/// On teardown the controller is reset, which cancels the pending timer,
/// and `Idle` is returned.
pub async fn play_until<F, S>(
    controller: &mut RevealController,
    observer: F,
    stop: S,
) -> RevealPhase
where
    F: FnMut(&RevealSnapshot),
    S: Future<Output = ()>,
{
    let stopped = tokio::select! {
        phase = play(controller, observer) => Some(phase),
        () = stop => None,
    };
    match stopped {
        Some(phase) => phase,
        None => {
            debug!("reveal torn down before completion");
            controller.reset_reveal();
            controller.phase()
        }
    }
}
