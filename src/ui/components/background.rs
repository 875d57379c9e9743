use crate::config::Config;
use crate::core::gfx::{ObjectType, RenderList, RenderObject};
use crate::core::space::{self, Fit};
use crate::ui::sprite::{DrawOp, Sprite};

/// Song background shrunk into the surface and dimmed.
#[derive(Debug, Clone)]
pub struct BackgroundDrawer {
    sprite: Option<Sprite>,
    fit: Fit,
    brightness: f32,
}

impl BackgroundDrawer {
    pub fn new(config: &Config, sprite: Option<Sprite>, surface: [f32; 2]) -> Self {
        let src = sprite.as_ref().map_or([0.0, 0.0], |s| [s.w(), s.h()]);
        Self {
            sprite,
            fit: space::fit_to_screen(src, surface),
            brightness: config.bg_brightness,
        }
    }

    /// Surface changed size.
    pub fn resize(&mut self, surface: [f32; 2]) {
        let src = self.sprite.as_ref().map_or([0.0, 0.0], |s| [s.w(), s.h()]);
        self.fit = space::fit_to_screen(src, surface);
    }

    #[inline(always)]
    pub fn fit(&self) -> Fit {
        self.fit
    }

    pub fn draw(&self, out: &mut RenderList) {
        let Some(sprite) = &self.sprite else {
            return;
        };
        if self.brightness <= 0.0 {
            return;
        }
        let b = self.brightness;
        let op = DrawOp::default().diffuse([b, b, b, 1.0]);

        out.push(RenderObject {
            object_type: ObjectType::Sprite {
                texture_id: sprite.texture_id,
                tint: op.tint,
                filter: sprite.filter,
            },
            transform: self.fit.transform() * sprite.transform(&op),
            blend: op.blend,
        });
    }
}
