use log::debug;

use crate::config::Config;
use crate::core::gfx::RenderList;
use crate::game::timeline;
use crate::ui::anim;
use crate::ui::sprite::{DrawOp, Sprite};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum DancerMode {
    #[default]
    Idle,
    Highlighted,
    Positive,
    Negative,
}

impl DancerMode {
    #[inline(always)]
    pub const fn index(self) -> usize {
        match self {
            Self::Idle => 0,
            Self::Highlighted => 1,
            Self::Positive => 2,
            Self::Negative => 3,
        }
    }
}

/// What the scorer reported for this frame.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DancerSignals {
    pub miss: bool,
    pub hit: bool,
    pub combo: u32,
    pub highlight: bool,
}

/// Character beside the field. Dances to the beat and changes mood with the
/// player's performance.
#[derive(Debug, Clone)]
pub struct DancerDrawer {
    time: i64,
    period: f64,
    mode: DancerMode,
    frame: Option<usize>,
    transition_times: [i64; 4],
    // Shared by every mood: a combo milestone does not cancel a pending
    // return from Negative.
    miss_end: i64,
    combo_step: u32,
    combo_window: u32,
    miss_cycles: f64,
    frames: [Vec<Sprite>; 4],
}

impl DancerDrawer {
    pub fn new(config: &Config, frames: [Vec<Sprite>; 4]) -> Self {
        let mut d = Self {
            time: 0,
            period: 0.0,
            mode: DancerMode::Idle,
            frame: None,
            transition_times: [0; 4],
            miss_end: 0,
            combo_step: config.dancer_combo_step,
            combo_window: config.dancer_combo_window,
            miss_cycles: config.dancer_miss_cycles,
            frames,
        };
        d.frame = anim::frame_at(0.0, d.frames[d.mode.index()].len());
        d
    }

    fn is_milestone(&self, combo: u32) -> bool {
        self.combo_step > 0 && combo >= self.combo_step && combo % self.combo_step < self.combo_window
    }

    pub fn update(&mut self, now: i64, bpm: f64, signals: &DancerSignals) {
        self.time = now;
        let base = 4.0 * timeline::beat_ms(bpm);

        let next = if signals.miss {
            self.miss_end = now + (base * self.miss_cycles) as i64;
            Some(DancerMode::Negative)
        } else if self.is_milestone(signals.combo) {
            Some(DancerMode::Positive)
        } else if signals.hit || now >= self.miss_end {
            Some(if signals.highlight { DancerMode::Highlighted } else { DancerMode::Idle })
        } else {
            None
        };

        if let Some(mode) = next.filter(|&m| m != self.mode) {
            debug!("dancer {:?} -> {:?} at {}ms", self.mode, mode, now);
            self.mode = mode;
            self.transition_times[mode.index()] = now;
        }

        self.period = if self.mode == DancerMode::Positive { base * 2.0 } else { base };
        let elapsed = (now - self.transition_times[self.mode.index()]) as f64;
        let phase = anim::loop_phase(elapsed, self.period);
        self.frame = anim::frame_at(phase, self.frames[self.mode.index()].len());
    }

    #[inline(always)]
    pub fn mode(&self) -> DancerMode {
        self.mode
    }

    #[inline(always)]
    pub fn frame(&self) -> Option<usize> {
        self.frame
    }

    #[inline(always)]
    pub fn period(&self) -> f64 {
        self.period
    }

    pub fn draw(&self, out: &mut RenderList) {
        let Some(frame) = self.frame else {
            return;
        };
        if let Some(sprite) = self.frames[self.mode.index()].get(frame) {
            sprite.draw(out, &DrawOp::default());
        }
    }
}
