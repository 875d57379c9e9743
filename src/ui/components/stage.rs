use crate::config::Config;
use crate::core::gfx::RenderList;
use crate::ui::sprite::{DrawOp, Sprite};

/// The dimmed lane plus the hit-line hint, which glows while the chart is in
/// a highlighted section.
#[derive(Debug, Clone)]
pub struct StageDrawer {
    highlight: bool,
    darkness: f32,
    field: Sprite,
    hints: [Sprite; 2],
}

impl StageDrawer {
    pub fn new(config: &Config, field: Sprite, hints: [Sprite; 2]) -> Self {
        Self { highlight: false, darkness: config.field_darkness, field, hints }
    }

    pub fn update(&mut self, highlight: bool) {
        self.highlight = highlight;
    }

    pub fn draw(&self, out: &mut RenderList) {
        self.field.draw(out, &DrawOp::default().alpha(self.darkness));
        let hint = if self.highlight { &self.hints[1] } else { &self.hints[0] };
        hint.draw(out, &DrawOp::default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::skin::Skin;

    fn drawer() -> StageDrawer {
        let skin = Skin::standard(1280.0, 720.0);
        StageDrawer::new(&Config::default(), skin.field, skin.hints)
    }

    #[test]
    fn field_uses_darkness_as_alpha() {
        let d = drawer();
        let mut out = RenderList::default();
        d.draw(&mut out);
        assert_eq!(out.len(), 2);
        assert_eq!(out.objects[0].tint()[3], 0.7);
        assert_eq!(out.objects[1].texture_id(), "drum/hint.png");
    }

    #[test]
    fn highlight_swaps_the_hint() {
        let mut d = drawer();
        d.update(true);
        let mut out = RenderList::default();
        d.draw(&mut out);
        assert_eq!(out.objects[1].texture_id(), "drum/hint-glow.png");
        d.update(false);
        let mut out = RenderList::default();
        d.draw(&mut out);
        assert_eq!(out.objects[1].texture_id(), "drum/hint.png");
    }
}
