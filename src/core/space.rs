use cgmath::{Matrix4, Vector3};

// -----------------------------------------------------------------------------
// Fit-to-screen (shrink-only, centred)
// -----------------------------------------------------------------------------

/// Uniform scale plus centring offset that places a fixed-size image inside a
/// surface without ever upscaling it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fit {
    pub ratio: f32,
    pub size: [f32; 2],
    pub offset: [f32; 2],
}

impl Fit {
    /// Maps the source image's top-left pixel space onto the surface.
    #[inline(always)]
    pub fn transform(&self) -> Matrix4<f32> {
        Matrix4::from_translation(Vector3::new(self.offset[0], self.offset[1], 0.0))
            * Matrix4::from_scale(self.ratio)
    }
}

/// `ratio = min(1, dw/sw, dh/sh)`; at least one axis ends up flush with the
/// surface when the image is larger, neither exceeds it.
pub fn fit_to_screen(src: [f32; 2], dst: [f32; 2]) -> Fit {
    let [sw, sh] = src;
    let [dw, dh] = dst;

    let mut ratio = 1.0_f32;
    if sw > 0.0 && sh > 0.0 {
        let rx = dw / sw;
        let ry = dh / sh;
        if rx < 1.0 || ry < 1.0 {
            ratio = rx.min(ry).max(0.0);
        }
    }

    let size = [sw * ratio, sh * ratio];
    Fit {
        ratio,
        size,
        offset: [(dw - size[0]) * 0.5, (dh - size[1]) * 0.5],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_source_in_narrow_surface_is_flush_horizontally() {
        let fit = fit_to_screen([1920.0, 1080.0], [960.0, 1080.0]);
        assert_eq!(fit.ratio, 0.5);
        assert_eq!(fit.size, [960.0, 540.0]);
        assert_eq!(fit.offset, [0.0, 270.0]);
    }

    #[test]
    fn larger_surface_never_upscales() {
        let fit = fit_to_screen([800.0, 600.0], [1920.0, 1080.0]);
        assert_eq!(fit.ratio, 1.0);
        assert_eq!(fit.size, [800.0, 600.0]);
        assert_eq!(fit.offset, [560.0, 240.0]);
    }

    #[test]
    fn scaled_image_stays_inside_surface() {
        for &(dw, dh) in &[(1280.0, 720.0), (720.0, 1280.0), (1000.0, 1000.0), (333.0, 91.0)] {
            let fit = fit_to_screen([1920.0, 1080.0], [dw, dh]);
            assert!(fit.ratio <= 1.0);
            assert!(fit.size[0] <= dw + 1e-3 && fit.size[1] <= dh + 1e-3);
            assert!(fit.offset[0] >= -1e-3 && fit.offset[1] >= -1e-3);
            // centred on both axes
            assert!((fit.offset[0] * 2.0 + fit.size[0] - dw).abs() < 1e-3);
            assert!((fit.offset[1] * 2.0 + fit.size[1] - dh).abs() < 1e-3);
        }
    }

    #[test]
    fn transform_maps_corners_into_place() {
        let fit = fit_to_screen([1920.0, 1080.0], [960.0, 1080.0]);
        let m = fit.transform();
        let far = m * cgmath::Vector4::new(1920.0, 1080.0, 0.0, 1.0);
        assert_eq!((far.x, far.y), (960.0, 810.0));
        let near = m * cgmath::Vector4::new(0.0, 0.0, 0.0, 1.0);
        assert_eq!((near.x, near.y), (0.0, 270.0));
    }

    #[test]
    fn empty_source_is_centred_without_scaling() {
        let fit = fit_to_screen([0.0, 0.0], [100.0, 50.0]);
        assert_eq!(fit.ratio, 1.0);
        assert_eq!(fit.offset, [50.0, 25.0]);
    }
}
