//! Time-driven cosmetic animations.
//!
//! Nothing here owns a timer. The event loop calls `advance(now)` and each
//! animation catches up on the ticks that have elapsed since it started.

use std::time::{Duration, Instant};

use crate::constants::{BAR_FILL_MS, BAR_STAGGER_BASE_MS, BAR_STAGGER_STEP_MS, COUNT_ANIMATION_MS, COUNT_TICK_MS};

/// Linear count from `start` to `end` in fixed ticks.
///
/// The value snaps to `end` on the tick that would reach or pass it, so the
/// final value is exactly `end` and is never overshot.
#[derive(Debug, Clone)]
pub struct CountAnimation {
    current: f64,
    end: f64,
    increment: f64,
    tick: Duration,
    started: Instant,
    ticks_applied: u64,
    finished: bool,
}

impl CountAnimation {
    pub fn new(start: f64, end: f64, duration: Duration, tick: Duration, now: Instant) -> Self {
        let steps = duration.as_secs_f64() / tick.as_secs_f64();
        Self {
            current: start,
            end,
            increment: (end - start) / steps,
            tick,
            started: now,
            ticks_applied: 0,
            finished: false,
        }
    }

    /// Count from 0 to `end` with the standard duration and tick.
    pub fn from_zero(end: f64, now: Instant) -> Self {
        Self::new(
            0.0,
            end,
            Duration::from_millis(COUNT_ANIMATION_MS),
            Duration::from_millis(COUNT_TICK_MS),
            now,
        )
    }

    /// Apply one tick.
    pub fn step(&mut self) {
        if self.finished {
            return;
        }
        self.current += self.increment;
        let reached = (self.increment > 0.0 && self.current >= self.end)
            || (self.increment < 0.0 && self.current <= self.end);
        // A zero or non-finite increment would never reach `end`.
        if reached || self.increment == 0.0 || !self.increment.is_finite() {
            self.current = self.end;
            self.finished = true;
        }
    }

    /// Apply every tick due by `now`.
    pub fn advance(&mut self, now: Instant) {
        let tick_ms = self.tick.as_millis().max(1);
        let due = (now.saturating_duration_since(self.started).as_millis() / tick_ms) as u64;
        while self.ticks_applied < due && !self.finished {
            self.step();
            self.ticks_applied += 1;
        }
    }

    #[cfg(test)]
    pub fn value(&self) -> f64 {
        self.current
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Two-decimal display text.
    pub fn display(&self) -> String {
        format!("{:.2}", self.current)
    }
}

/// Bar that grows from 0 to `target` percent after a delay.
#[derive(Debug, Clone)]
pub struct BarFill {
    target: f64,
    delay: Duration,
    duration: Duration,
    started: Instant,
}

impl BarFill {
    pub fn new(target: f64, delay: Duration, duration: Duration, now: Instant) -> Self {
        Self {
            target: target.clamp(0.0, 100.0),
            delay,
            duration,
            started: now,
        }
    }

    /// Bar for emotion row `index`: starts `50ms + index * 100ms` after `now`.
    pub fn staggered(target: f64, index: usize, now: Instant) -> Self {
        let delay = Duration::from_millis(BAR_STAGGER_BASE_MS + index as u64 * BAR_STAGGER_STEP_MS);
        Self::new(target, delay, Duration::from_millis(BAR_FILL_MS), now)
    }

    #[cfg(test)]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Current width as a percentage of the full bar.
    pub fn width_percent(&self, now: Instant) -> f64 {
        let elapsed = now.saturating_duration_since(self.started);
        let Some(running) = elapsed.checked_sub(self.delay) else {
            return 0.0;
        };
        if self.duration.is_zero() {
            return self.target;
        }
        let progress = (running.as_secs_f64() / self.duration.as_secs_f64()).min(1.0);
        self.target * progress
    }

    pub fn is_settled(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.delay + self.duration
    }
}
