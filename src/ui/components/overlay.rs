use log::trace;

use crate::game::timeline;

/// Two-frame blink locked to the beat: overlay 0 on even beats, 1 on odd.
#[derive(Debug, Clone, Default)]
pub struct OverlayBlinker {
    index: usize,
    last_flip: i64,
    period: i64,
}

impl OverlayBlinker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, now: i64, bpm: f64) {
        self.period = timeline::beat_ms(bpm) as i64;
        if now - self.last_flip >= self.period {
            self.index = (self.index + 1) % 2;
            self.last_flip = now;
            trace!("overlay -> {} at {}ms (period {}ms)", self.index, now, self.period);
        }
    }

    #[inline(always)]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline(always)]
    pub fn period(&self) -> i64 {
        self.period
    }
}
