use crate::config::Config;
use crate::core::gfx::RenderList;
use crate::game::note::Note;
use crate::ui::anim;
use crate::ui::sprite::{DrawOp, Sprite};
use crate::utils::math::clamp01;

/// The shake currently being drummed: a border that charges up when the
/// shake starts and a fill that grows with the ticks landed so far.
#[derive(Debug, Clone)]
pub struct ShakeDrawer {
    time: i64,
    staged: Option<Note>,
    border_start: f32,
    border_ramp_ms: f32,
    border: Sprite,
    fill: Sprite,
}

impl ShakeDrawer {
    pub fn new(config: &Config, border: Sprite, fill: Sprite) -> Self {
        Self {
            time: 0,
            staged: None,
            border_start: config.shake_border_start,
            border_ramp_ms: config.shake_border_ramp_ms,
            border,
            fill,
        }
    }

    pub fn update(&mut self, now: i64, staged: Option<&Note>) {
        self.time = now;
        self.staged = staged.copied();
    }

    /// The staged shake, if it has already started.
    fn active(&self) -> Option<&Note> {
        self.staged.as_ref().filter(|n| n.time <= self.time)
    }

    pub fn border_scale(&self) -> Option<f32> {
        let n = self.active()?;
        Some(anim::charge_ramp(
            self.border_start,
            (self.time - n.time) as f32,
            self.border_ramp_ms,
        ))
    }

    pub fn fill_scale(&self) -> Option<f32> {
        let n = self.active()?;
        if n.tick == 0 {
            return Some(0.0);
        }
        Some(clamp01(n.hit_tick as f32 / n.tick as f32))
    }

    pub fn draw(&self, out: &mut RenderList) {
        let (Some(border), Some(fill)) = (self.border_scale(), self.fill_scale()) else {
            return;
        };
        let op = DrawOp::default();
        self.border.scaled(border).draw(out, &op);
        self.fill.scaled(fill).draw(out, &op);
    }
}
