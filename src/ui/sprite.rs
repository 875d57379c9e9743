use cgmath::{Matrix4, Rad, Vector2, Vector3};

use crate::core::gfx::{BlendMode, Filter, ObjectType, RenderList, RenderObject};
use crate::ui::color;

/// A skin image placed on the field.
///
/// `pos` is the anchor point in screen space and `align` says where that
/// anchor sits inside the quad (`[0.5, 0.5]` = centre, `[0.0, 0.5]` = left
/// edge). Scrolling components never mutate a skin sprite; they draw a
/// `moved` copy.
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    pub texture_id: &'static str,
    pub size: Vector2<f32>,
    pub pos: Vector2<f32>,
    pub align: [f32; 2],
    pub scale: Vector2<f32>,
    pub filter: Filter,
}

/// Per-draw options, applied on top of the sprite's own placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawOp {
    pub tint: [f32; 4],
    /// Extra uniform zoom about the sprite's centre.
    pub zoom: f32,
    /// Radians, about the sprite's centre.
    pub rotation: f32,
    pub blend: BlendMode,
}

impl Default for DrawOp {
    fn default() -> Self {
        Self {
            tint: color::WHITE,
            zoom: 1.0,
            rotation: 0.0,
            blend: BlendMode::Alpha,
        }
    }
}

impl DrawOp {
    #[inline(always)]
    pub fn diffuse(mut self, tint: [f32; 4]) -> Self {
        self.tint = tint;
        self
    }

    /// Multiplies the current alpha.
    #[inline(always)]
    pub fn alpha(mut self, a: f32) -> Self {
        self.tint[3] *= a;
        self
    }

    #[inline(always)]
    pub fn zoom(mut self, zoom: f32) -> Self {
        self.zoom = zoom;
        self
    }

    #[inline(always)]
    pub fn rotation_z(mut self, radians: f32) -> Self {
        self.rotation = radians;
        self
    }
}

impl Sprite {
    pub fn new(texture_id: &'static str, w: f32, h: f32) -> Self {
        Self {
            texture_id,
            size: Vector2::new(w, h),
            pos: Vector2::new(0.0, 0.0),
            align: [0.5, 0.5],
            scale: Vector2::new(1.0, 1.0),
            filter: Filter::Linear,
        }
    }

    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.pos = Vector2::new(x, y);
        self
    }

    pub fn aligned(mut self, ax: f32, ay: f32) -> Self {
        self.align = [ax, ay];
        self
    }

    /// Copy shifted by `(dx, dy)`.
    #[inline(always)]
    pub fn moved(&self, dx: f32, dy: f32) -> Self {
        let mut s = self.clone();
        s.pos += Vector2::new(dx, dy);
        s
    }

    #[inline(always)]
    pub fn scaled(&self, scale: f32) -> Self {
        self.scaled_xy(scale, scale, self.filter)
    }

    #[inline(always)]
    pub fn scaled_xy(&self, sx: f32, sy: f32, filter: Filter) -> Self {
        let mut s = self.clone();
        s.scale = Vector2::new(sx, sy);
        s.filter = filter;
        s
    }

    /// Drawn width (native width times current x scale).
    #[inline(always)]
    pub fn w(&self) -> f32 {
        self.size.x * self.scale.x
    }

    #[inline(always)]
    pub fn h(&self) -> f32 {
        self.size.y * self.scale.y
    }

    #[inline(always)]
    pub fn center(&self) -> Vector2<f32> {
        Vector2::new(
            self.pos.x + (0.5 - self.align[0]) * self.w(),
            self.pos.y + (0.5 - self.align[1]) * self.h(),
        )
    }

    pub fn transform(&self, op: &DrawOp) -> Matrix4<f32> {
        let c = self.center();
        let placed = Matrix4::from_translation(Vector3::new(c.x, c.y, 0.0))
            * Matrix4::from_nonuniform_scale(self.w() * op.zoom, self.h() * op.zoom, 1.0);
        if op.rotation == 0.0 {
            return placed;
        }
        rotation_about(c, op.rotation) * placed
    }

    pub fn draw(&self, out: &mut RenderList, op: &DrawOp) {
        out.push(RenderObject {
            object_type: ObjectType::Sprite {
                texture_id: self.texture_id,
                tint: op.tint,
                filter: self.filter,
            },
            transform: self.transform(op),
            blend: op.blend,
        });
    }
}

/// Translate `pivot` to the origin, rotate, translate back.
#[inline(always)]
pub fn rotation_about(pivot: Vector2<f32>, radians: f32) -> Matrix4<f32> {
    Matrix4::from_translation(Vector3::new(pivot.x, pivot.y, 0.0))
        * Matrix4::from_angle_z(Rad(radians))
        * Matrix4::from_translation(Vector3::new(-pivot.x, -pivot.y, 0.0))
}
