use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::Config;
use crate::core::gfx::RenderList;
use crate::game::judgment::{JudgeKind, Judgment};
use crate::ui::anim::Countdown;
use crate::ui::sprite::{DrawOp, Sprite};

// Misses keep tilting after this share of their lifetime.
const TILT_DELAY: f64 = 0.25;
const TILT_GROWTH: f64 = 0.6;

/// The last judgment, shown above the hit line for a number of frames.
/// Fresh judgments pop in; misses are drawn tilted and keep tilting.
#[derive(Debug, Clone)]
pub struct JudgmentDrawer {
    countdown: Countdown,
    judgment: Judgment,
    big: bool,
    start_radian: f64,
    radian: f64,
    angle_range: f64,
    pop_window: f64,
    last_time: Option<i64>,
    // Judgment already shown for `last_time`; a repeat of it is not re-rolled.
    applied: Option<(Judgment, bool)>,
    rng: StdRng,
    sprites: [[Sprite; 3]; 2],
}

impl JudgmentDrawer {
    pub fn new(config: &Config, sprites: [[Sprite; 3]; 2]) -> Self {
        Self::with_rng(config, sprites, StdRng::from_rng(&mut rand::rng()))
    }

    pub fn with_rng(config: &Config, sprites: [[Sprite; 3]; 2], rng: StdRng) -> Self {
        Self {
            countdown: Countdown::new(config.judgment_max_countdown),
            judgment: Judgment::NONE,
            big: false,
            start_radian: 0.0,
            radian: 0.0,
            angle_range: config.miss_angle_range.abs(),
            pop_window: config.judgment_pop_window,
            last_time: None,
            applied: None,
            rng,
            sprites,
        }
    }

    /// One frame. `incoming` is whatever the scorer judged this frame;
    /// `Judgment::NONE` leaves the current display running. A repeated
    /// clock time does not age the display, but a new judgment still lands.
    pub fn update(&mut self, now: i64, incoming: Judgment, big: bool) {
        if self.last_time != Some(now) {
            self.last_time = Some(now);
            self.applied = None;
            self.step();
        }

        if incoming.is_valid() && self.applied != Some((incoming, big)) {
            debug!("judgment {} (big: {}) at {}ms", incoming.kind.label(), big, now);
            self.applied = Some((incoming, big));
            self.countdown.reset();
            self.judgment = incoming;
            self.big = big;
            if incoming.is_miss() {
                self.start_radian = self.rng.random_range(-self.angle_range..=self.angle_range);
                self.radian = self.start_radian;
            }
        }
    }

    fn step(&mut self) {
        if !self.countdown.is_active() {
            self.judgment = Judgment::NONE;
            self.big = false;
            self.start_radian = 0.0;
            self.radian = 0.0;
        } else {
            self.countdown.tick();
            if self.judgment.is_miss() {
                let age = self.countdown.age();
                let rate = if age < TILT_DELAY {
                    1.0
                } else {
                    1.0 + TILT_GROWTH * (age - TILT_DELAY) / (1.0 - TILT_DELAY)
                };
                self.radian = self.start_radian * rate;
            }
        }
    }

    #[inline(always)]
    pub fn judgment(&self) -> Judgment {
        self.judgment
    }

    #[inline(always)]
    pub fn radian(&self) -> f64 {
        self.radian
    }

    #[inline(always)]
    pub fn age(&self) -> f64 {
        self.countdown.age()
    }

    pub fn draw(&self, out: &mut RenderList) {
        if !self.countdown.is_active() || !self.judgment.is_valid() {
            return;
        }
        let size = if self.big { 1 } else { 0 };
        let sprite = &self.sprites[size][self.judgment.kind.index()];

        let age = self.countdown.age();
        let mut op = DrawOp::default();
        if age < self.pop_window {
            op = op.zoom((1.0 + (self.pop_window - age)) as f32);
        }
        if self.judgment.is(JudgeKind::Miss) {
            op = op.rotation_z(self.radian as f32);
        }
        sprite.draw(out, &op);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::judgment::{COOL, GOOD, MISS};
    use crate::ui::skin::Skin;

    fn drawer(seed: u64) -> JudgmentDrawer {
        let config = Config { judgment_max_countdown: 20, ..Config::default() };
        JudgmentDrawer::with_rng(
            &config,
            Skin::standard(1280.0, 720.0).judgments,
            StdRng::seed_from_u64(seed),
        )
    }

    #[test]
    fn miss_angle_stays_in_range() {
        let range = Config::default().miss_angle_range;
        for seed in 0..50 {
            let mut d = drawer(seed);
            d.update(0, MISS, false);
            assert!(d.radian().abs() <= range, "seed {seed}: {}", d.radian());
            assert_eq!(d.radian(), d.start_radian);
        }
    }

    #[test]
    fn miss_tilt_grows_after_a_quarter() {
        let mut d = drawer(7);
        d.update(0, MISS, false);
        let start = d.start_radian;
        for frame in 1..=5 {
            d.update(frame, Judgment::NONE, false);
        }
        // age 0.25: still the start angle
        assert_eq!(d.radian(), start);
        for frame in 6..=20 {
            d.update(frame, Judgment::NONE, false);
        }
        assert!((d.radian() - start * 1.6).abs() < 1e-12);
    }

    #[test]
    fn following_hit_clears_rotation_on_expiry() {
        let mut d = drawer(3);
        d.update(0, MISS, true);
        d.update(1, COOL, false);
        assert!(d.judgment().is(JudgeKind::Cool));
        // The cool does not rotate, but the stale angle lingers until expiry.
        for frame in 2..=21 {
            d.update(frame, Judgment::NONE, false);
        }
        assert!(d.judgment().is(JudgeKind::Cool));
        d.update(22, Judgment::NONE, false);
        assert!(!d.judgment().is_valid());
        assert_eq!(d.radian(), 0.0);
        assert!(!d.big);

        let mut out = RenderList::default();
        d.draw(&mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn cool_is_drawn_upright() {
        let mut d = drawer(1);
        d.update(0, MISS, false);
        d.update(1, GOOD, false);
        let mut out = RenderList::default();
        d.draw(&mut out);
        assert_eq!(out.len(), 1);
        assert_eq!(out.objects[0].texture_id(), "drum/judgment/good.png");
        assert_eq!(out.objects[0].rotation(), 0.0);
    }

    #[test]
    fn fresh_judgment_pops() {
        let mut d = drawer(1);
        d.update(0, COOL, true);
        let base = Skin::standard(1280.0, 720.0).judgments[1][0].w();
        let mut out = RenderList::default();
        d.draw(&mut out);
        assert_eq!(out.objects[0].texture_id(), "drum/judgment/big-cool.png");
        assert!((out.objects[0].extent()[0] - base * 1.15).abs() < 1e-3);

        for frame in 1..=4 {
            d.update(frame, Judgment::NONE, false);
        }
        let mut out = RenderList::default();
        d.draw(&mut out);
        assert!((out.objects[0].extent()[0] - base).abs() < 1e-3);
    }

    #[test]
    fn miss_rotates_about_its_center() {
        let mut d = drawer(11);
        d.update(0, MISS, false);
        for frame in 1..=4 {
            d.update(frame, Judgment::NONE, false);
        }
        let sprite = &Skin::standard(1280.0, 720.0).judgments[0][2];
        let mut out = RenderList::default();
        d.draw(&mut out);
        let obj = &out.objects[0];
        let c = sprite.center();
        assert!((obj.center()[0] - c.x).abs() < 1e-3);
        assert!((obj.center()[1] - c.y).abs() < 1e-3);
        assert!((obj.rotation() - d.radian() as f32).abs() < 1e-5);
    }

    #[test]
    fn repeated_frame_is_ignored() {
        let mut d = drawer(5);
        d.update(0, MISS, false);
        d.update(1, Judgment::NONE, false);
        let (age, radian) = (d.age(), d.radian());
        d.update(1, Judgment::NONE, false);
        d.update(1, Judgment::NONE, false);
        assert_eq!((d.age(), d.radian()), (age, radian));

        d.update(2, MISS, true);
        let start = d.radian();
        d.update(2, MISS, true);
        assert_eq!(d.radian(), start);
        assert_eq!(d.age(), 0.0);
    }

    #[test]
    fn judgment_on_a_repeated_time_still_lands() {
        let mut d = drawer(9);
        d.update(100, Judgment::NONE, false);
        d.update(100, MISS, false);
        assert!(d.judgment().is_miss());
        assert_eq!(d.age(), 0.0);

        d.update(116, Judgment::NONE, false);
        d.update(116, COOL, true);
        assert!(d.judgment().is(JudgeKind::Cool));
        assert!(d.big);
        let mut out = RenderList::default();
        d.draw(&mut out);
        assert_eq!(out.objects[0].texture_id(), "drum/judgment/big-cool.png");
    }
}
