use crate::config::Config;
use crate::core::gfx::{Filter, RenderList};
use crate::game::note::{Dot, DotMark, Note};
use crate::game::timeline::VisibleRange;
use crate::ui::sprite::{DrawOp, Sprite};

/// Horizontal stretch that makes a body sprite span `head..tail`.
#[inline(always)]
pub fn body_scale(head: f32, tail: f32, body_width: f32) -> f32 {
    if body_width <= 0.0 {
        return 0.0;
    }
    ((tail - head) / body_width).max(0.0)
}

#[derive(Debug, Clone)]
pub struct RollSprites {
    pub heads: [Sprite; 2],
    pub bodies: [Sprite; 2],
    pub tails: [Sprite; 2],
    pub dot: Sprite,
}

/// Roll bodies with their caps, then the tick dots on top.
#[derive(Debug, Clone)]
pub struct RollDrawer {
    time: i64,
    range: VisibleRange,
    color: [f32; 4],
    dot_colors: [[f32; 4]; 3],
    dot_miss_zoom: f32,
    sprites: RollSprites,
}

impl RollDrawer {
    pub fn new(config: &Config, sprites: RollSprites) -> Self {
        Self {
            time: 0,
            range: config.visible_range(),
            color: config.roll_color,
            dot_colors: [config.dot_ready_color, config.dot_hit_color, config.dot_miss_color],
            dot_miss_zoom: config.dot_miss_zoom,
            sprites,
        }
    }

    pub fn update(&mut self, now: i64) {
        self.time = now;
    }

    pub fn draw(&self, out: &mut RenderList, rolls: &[Note], dots: &[Dot]) {
        let op = DrawOp::default().diffuse(self.color);
        for roll in rolls.iter().rev() {
            let head = roll.position(self.time);
            if head > self.range.max {
                continue;
            }
            let tail = roll.tail_position(self.time);
            if tail < self.range.min {
                continue;
            }
            let size = roll.size.index();

            let body = &self.sprites.bodies[size];
            body.scaled_xy(body_scale(head, tail, body.w()), 1.0, Filter::Nearest)
                .moved(head, 0.0)
                .draw(out, &op);
            self.sprites.heads[size].moved(head, 0.0).draw(out, &op);
            self.sprites.tails[size].moved(tail, 0.0).draw(out, &op);
        }

        for dot in dots.iter().rev() {
            let pos = dot.position(self.time);
            if !self.range.contains(pos) {
                continue;
            }
            let op = match dot.marked {
                DotMark::Ready => DrawOp::default().diffuse(self.dot_colors[0]),
                DotMark::Hit => DrawOp::default().diffuse(self.dot_colors[1]),
                DotMark::Miss => DrawOp::default().diffuse(self.dot_colors[2]).zoom(self.dot_miss_zoom),
            };
            self.sprites.dot.moved(pos, 0.0).draw(out, &op);
        }
    }
}
