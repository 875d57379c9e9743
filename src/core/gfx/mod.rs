use cgmath::Matrix4;

// --- Public Data Contract ---
// The platform layer owns textures and the surface; it consumes a RenderList
// in order, drawing each object as a unit quad centred on the origin and
// mapped through `transform`.
#[derive(Clone, Debug)]
pub struct RenderList {
    pub clear_color: [f32; 4],
    pub objects: Vec<RenderObject>,
}

#[derive(Clone, Debug)]
pub struct RenderObject {
    pub object_type: ObjectType,
    pub transform: Matrix4<f32>,
    pub blend: BlendMode,
}

#[derive(Clone, Debug)]
pub enum ObjectType {
    Sprite {
        texture_id: &'static str,
        tint: [f32; 4],
        filter: Filter,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlendMode {
    Alpha,
    Add,
}

/// Sampler used when the quad is scaled away from its native size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    Linear,
    Nearest,
}

impl RenderList {
    pub fn new(clear_color: [f32; 4]) -> Self {
        Self { clear_color, objects: Vec::new() }
    }

    pub fn with_capacity(clear_color: [f32; 4], capacity: usize) -> Self {
        Self { clear_color, objects: Vec::with_capacity(capacity) }
    }

    #[inline(always)]
    pub fn push(&mut self, object: RenderObject) {
        self.objects.push(object);
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Objects that actually contribute pixels (alpha above zero).
    pub fn visible_count(&self) -> usize {
        self.objects.iter().filter(|o| o.tint()[3] > 0.0).count()
    }
}

impl Default for RenderList {
    fn default() -> Self {
        Self::new([0.0, 0.0, 0.0, 1.0])
    }
}

impl RenderObject {
    #[inline(always)]
    pub fn texture_id(&self) -> &'static str {
        match self.object_type {
            ObjectType::Sprite { texture_id, .. } => texture_id,
        }
    }

    #[inline(always)]
    pub fn tint(&self) -> [f32; 4] {
        match self.object_type {
            ObjectType::Sprite { tint, .. } => tint,
        }
    }

    #[inline(always)]
    pub fn filter(&self) -> Filter {
        match self.object_type {
            ObjectType::Sprite { filter, .. } => filter,
        }
    }

    /// Screen-space centre of the quad.
    #[inline(always)]
    pub fn center(&self) -> [f32; 2] {
        [self.transform.w.x, self.transform.w.y]
    }

    /// Length of the transformed quad's local x and y axes.
    #[inline(always)]
    pub fn extent(&self) -> [f32; 2] {
        let x = self.transform.x;
        let y = self.transform.y;
        [x.x.hypot(x.y), y.x.hypot(y.y)]
    }

    /// Rotation about the quad's own centre, in radians.
    #[inline(always)]
    pub fn rotation(&self) -> f32 {
        self.transform.x.y.atan2(self.transform.x.x)
    }
}
