//! Where a timed event sits on the lane at a given clock time.
//!
//! Every renderer goes through [`position`]; nothing else converts time to
//! screen space.

/// `speed * (time - now)`. With positive speed, upcoming events sit at
/// positive positions and move toward zero (the hit line) as `now` advances.
#[inline(always)]
pub fn position(time: i64, now: i64, speed: f32) -> f32 {
    speed * (time - now) as f32
}

/// Inclusive `[min, max]` window of drawable positions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibleRange {
    pub min: f32,
    pub max: f32,
}

impl VisibleRange {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    #[inline(always)]
    pub fn contains(&self, pos: f32) -> bool {
        pos >= self.min && pos <= self.max
    }
}

const SCALED_BPM_MIN: f64 = 75.0;
const SCALED_BPM_MAX: f64 = 300.0;
const FALLBACK_BPM: f64 = 120.0;

/// Folds a chart tempo into `[75, 300]` by octaves so animation periods stay
/// readable for very slow or very fast songs.
pub fn scaled_bpm(bpm: f64) -> f64 {
    let mut bpm = bpm.abs();
    if !bpm.is_finite() || bpm == 0.0 {
        return FALLBACK_BPM;
    }
    while bpm > SCALED_BPM_MAX {
        bpm /= 2.0;
    }
    while bpm < SCALED_BPM_MIN {
        bpm *= 2.0;
    }
    bpm
}

/// Milliseconds per (scaled) beat.
#[inline(always)]
pub fn beat_ms(bpm: f64) -> f64 {
    60000.0 / scaled_bpm(bpm)
}
