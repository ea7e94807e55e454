//! Play session - elapsed-time tracking for one puzzle attempt
//!
//! The authoritative completion time is computed once at win time from the
//! captured start instant. Pausing does not suspend a timer; resuming shifts
//! the recorded start forward by the paused duration, so elapsed time simply
//! stands still while paused.

use std::time::{Duration, Instant};

use crate::core::stars::stars_for_time;
use crate::types::CompletionStats;

#[derive(Debug, Clone)]
pub struct PlaySession {
    started_at: Instant,
    paused_at: Option<Instant>,
}

impl PlaySession {
    /// Begin timing a fresh attempt
    pub fn start() -> Self {
        Self {
            started_at: Instant::now(),
            paused_at: None,
        }
    }

    /// Restart timing (level restart); clears any pause
    pub fn restart(&mut self) {
        self.started_at = Instant::now();
        self.paused_at = None;
    }

    /// Freeze elapsed time; no-op if already paused
    pub fn pause(&mut self) {
        if self.paused_at.is_none() {
            self.paused_at = Some(Instant::now());
        }
    }

    /// Resume after a pause, shifting the start forward by the paused
    /// duration; no-op if not paused
    pub fn resume(&mut self) {
        if let Some(paused_at) = self.paused_at.take() {
            self.started_at += paused_at.elapsed();
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused_at.is_some()
    }

    /// Elapsed play time, excluding any in-progress pause
    pub fn elapsed(&self) -> Duration {
        match self.paused_at {
            Some(paused_at) => paused_at.duration_since(self.started_at),
            None => self.started_at.elapsed(),
        }
    }

    /// Elapsed play time in whole seconds
    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed().as_secs()
    }

    /// Close out the attempt: completion time and earned stars
    pub fn finish(&self) -> CompletionStats {
        let time = self.elapsed_secs();
        CompletionStats {
            time,
            stars: stars_for_time(time),
        }
    }
}
