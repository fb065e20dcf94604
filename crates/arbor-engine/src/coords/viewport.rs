/// Drawable surface size reported by the frame driver on resize.
///
/// Only the ratio matters to the scene: the camera maps view space to a
/// square of height 2 and stretches it horizontally by `aspect_ratio`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// A square 1×1 surface (aspect ratio 1).
    #[inline]
    pub const fn unit() -> Self {
        Self::new(1.0, 1.0)
    }

    /// Positive finite sides whose ratio is a normal float.
    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0
            && self.height > 0.0
            && self.width.is_finite()
            && self.height.is_finite()
            && self.aspect_ratio().is_normal()
    }

    /// Width divided by height. Meaningless unless [`is_valid`](Self::is_valid).
    #[inline]
    pub fn aspect_ratio(self) -> f32 {
        self.width / self.height
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::unit()
    }
}
