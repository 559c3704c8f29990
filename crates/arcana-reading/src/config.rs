//! Configuration for draws and reveal timing.

use std::time::Duration;

use crate::reveal::TimerKind;

/// Configuration for the draw engine.
#[derive(Debug, Clone, Default)]
pub struct DrawConfig {
    /// RNG seed for reproducible draws. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl DrawConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Timing knobs for the reveal sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealConfig {
    /// How long the shuffle phase lasts.
    pub shuffle_duration: Duration,
    /// Pause between the draw phase and the first reveal.
    pub pre_reveal_delay: Duration,
    /// Interval between successive card reveals.
    pub reveal_interval: Duration,
    /// Whether reveals start on their own after the draw phase.
    pub auto_reveal: bool,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            shuffle_duration: Duration::from_millis(2000),
            pre_reveal_delay: Duration::from_millis(2000),
            reveal_interval: Duration::from_millis(1200),
            auto_reveal: true,
        }
    }
}

impl RevealConfig {
    /// Set the shuffle duration.
    pub fn with_shuffle_duration(mut self, duration: Duration) -> Self {
        self.shuffle_duration = duration;
        self
    }

    /// Set the delay before the first reveal.
    pub fn with_pre_reveal_delay(mut self, delay: Duration) -> Self {
        self.pre_reveal_delay = delay;
        self
    }

    /// Set the interval between reveals.
    pub fn with_reveal_interval(mut self, interval: Duration) -> Self {
        self.reveal_interval = interval;
        self
    }

    /// Enable or disable automatic reveals.
    pub fn with_auto_reveal(mut self, auto_reveal: bool) -> Self {
        self.auto_reveal = auto_reveal;
        self
    }

    /// All delays zero, for instant playback.
    pub fn instant() -> Self {
        Self {
            shuffle_duration: Duration::ZERO,
            pre_reveal_delay: Duration::ZERO,
            reveal_interval: Duration::ZERO,
            auto_reveal: true,
        }
    }

    /// The wait before a timer of the given kind fires.
    pub fn delay_for(&self, kind: TimerKind) -> Duration {
        match kind {
            TimerKind::ShuffleElapsed => self.shuffle_duration,
            TimerKind::PreRevealElapsed => self.pre_reveal_delay,
            TimerKind::RevealTick => self.reveal_interval,
        }
    }

    /// Time from start to completion for `card_count` cards with auto reveal.
    pub fn total_duration(&self, card_count: usize) -> Duration {
        let ticks = u32::try_from(card_count).unwrap_or(u32::MAX);
        self.shuffle_duration
            .saturating_add(self.pre_reveal_delay)
            .saturating_add(self.reveal_interval.saturating_mul(ticks))
    }
}
