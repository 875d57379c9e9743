// src/ui/anim.rs
//! Frame countdowns and clock-driven phases shared by the field components.
//!
//! Nothing here schedules work: every value is derived from stored
//! timestamps/counters and the current clock on demand.
use crate::utils::math::{clamp01, ieee_remainder};

/// Frame-stepped countdown. `age()` runs 0 -> 1 over the countdown's life.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Countdown {
    remaining: i32,
    max: i32,
}

impl Countdown {
    pub const fn new(max: i32) -> Self {
        Self { remaining: 0, max: if max > 0 { max } else { 0 } }
    }

    #[inline(always)]
    pub fn reset(&mut self) {
        self.remaining = self.max;
    }

    #[inline(always)]
    pub fn clear(&mut self) {
        self.remaining = 0;
    }

    /// One frame elapses.
    #[inline(always)]
    pub fn tick(&mut self) {
        if self.remaining > 0 {
            self.remaining -= 1;
        }
    }

    #[inline(always)]
    pub const fn is_active(&self) -> bool {
        self.remaining > 0
    }

    #[inline(always)]
    pub const fn remaining(&self) -> i32 {
        self.remaining
    }

    #[inline(always)]
    pub const fn max(&self) -> i32 {
        self.max
    }

    /// Normalized lifetime: 0 right after `reset`, 1 once expired.
    #[inline(always)]
    pub fn age(&self) -> f64 {
        if self.max <= 0 {
            return 1.0;
        }
        1.0 - self.remaining as f64 / self.max as f64
    }
}

/// `start` at `elapsed = 0`, rising linearly to 1 at `elapsed = span`, clamped.
#[inline(always)]
pub fn charge_ramp(start: f32, elapsed: f32, span: f32) -> f32 {
    if span <= 0.0 {
        return 1.0;
    }
    let t = clamp01(elapsed / span);
    (start + (1.0 - start) * t).clamp(start.min(1.0), 1.0)
}

/// Position inside a looping period, in `[0, 1)`.
#[inline(always)]
pub fn loop_phase(elapsed: f64, period: f64) -> f64 {
    if period.is_nan() || period <= 0.0 {
        return 0.0;
    }
    let mut phase = ieee_remainder(elapsed, period) / period;
    if phase < 0.0 {
        phase += 1.0;
    }
    if phase >= 1.0 { 0.0 } else { phase }
}

/// Which of `frames` cells to show at `phase`.
#[inline(always)]
pub fn frame_at(phase: f64, frames: usize) -> Option<usize> {
    if frames == 0 {
        return None;
    }
    Some(((phase * frames as f64) as usize).min(frames - 1))
}
