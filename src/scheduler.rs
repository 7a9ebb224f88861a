//! Playback scheduling.
//!
//! The engine never calls itself; while the board is playing, something has
//! to invoke `advance` on a cadence. `Playback` owns that cadence for a
//! single-threaded event loop: the loop asks for a poll timeout, sleeps in
//! its input poll for at most that long, then asks whether a tick is due.
//!
//! A tick that comes late fires exactly once and re-arms from the current
//! instant, so a slow render coalesces ticks instead of queueing a backlog;
//! there is never more than one advance in flight and the generation counter
//! stays strictly monotonic. Pausing gates the next tick immediately, and
//! the scheduler is a plain owned value that dies with its event loop, so no
//! timer can outlive the UI that started it.

use std::time::{Duration, Instant};

use crate::board::Speed;

/// Poll timeout while paused; keeps the input loop responsive without
/// spinning.
const IDLE_TIMEOUT: Duration = Duration::from_millis(250);

/// Tick cadence for the simulation loop.
#[derive(Debug)]
pub struct Playback {
    interval: Duration,
    last_tick: Instant,
}

impl Playback {
    pub fn new(speed: Speed) -> Playback {
        Playback {
            interval: Playback::interval_for(speed),
            last_tick: Instant::now(),
        }
    }

    /// The tick interval for a speed selection. This mapping is UI policy,
    /// not an engine contract; `Normal` advances ten generations a second.
    pub fn interval_for(speed: Speed) -> Duration {
        match speed {
            Speed::Half => Duration::from_millis(200),
            Speed::Normal => Duration::from_millis(100),
            Speed::Double => Duration::from_millis(50),
        }
    }

    /// Current tick interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Adopts a new cadence, re-armed from now.
    pub fn set_speed(&mut self, speed: Speed) {
        self.interval = Playback::interval_for(speed);
        self.last_tick = Instant::now();
    }

    /// How long the event loop may block waiting for input before the next
    /// tick could be due.
    pub fn poll_timeout(&self, playing: bool) -> Duration {
        if !playing {
            return IDLE_TIMEOUT;
        }
        self.interval
            .checked_sub(self.last_tick.elapsed())
            .unwrap_or(Duration::ZERO)
    }

    /// Whether a tick is due. Fires at most once per elapsed interval and
    /// re-arms on firing; returns false whenever playback is off.
    pub fn tick_due(&mut self, playing: bool) -> bool {
        if !playing {
            return false;
        }
        if self.last_tick.elapsed() >= self.interval {
            self.last_tick = Instant::now();
            true
        } else {
            false
        }
    }

    #[cfg(test)]
    fn backdate(&mut self, by: Duration) {
        self.last_tick -= by;
    }
}
