use crate::core::gfx::RenderList;
use crate::game::note::Bar;
use crate::game::timeline::VisibleRange;
use crate::ui::sprite::{DrawOp, Sprite};

/// Measure lines scrolling with the notes.
#[derive(Debug, Clone)]
pub struct BarDrawer {
    time: i64,
    range: VisibleRange,
    sprite: Sprite,
}

impl BarDrawer {
    pub fn new(range: VisibleRange, sprite: Sprite) -> Self {
        Self { time: 0, range, sprite }
    }

    pub fn update(&mut self, now: i64) {
        self.time = now;
    }

    pub fn draw(&self, out: &mut RenderList, bars: &[Bar]) {
        let op = DrawOp::default();
        for b in bars.iter().rev() {
            let pos = b.position(self.time);
            if self.range.contains(pos) {
                self.sprite.moved(pos, 0.0).draw(out, &op);
            }
        }
    }
}
