use super::Vec2;

/// Min/max texture coordinates mapped onto a quad.
///
/// `min` lands on the quad's top-left vertex and `max` on the bottom-right.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct UvRect {
    pub min: Vec2,
    pub max: Vec2,
}

impl UvRect {
    /// The whole texture.
    pub const FULL: UvRect = UvRect {
        min: Vec2::new(0.0, 0.0),
        max: Vec2::new(1.0, 1.0),
    };

    #[inline]
    pub const fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }
}

impl Default for UvRect {
    #[inline]
    fn default() -> Self {
        Self::FULL
    }
}

/// Four corners of a possibly-transformed rectangle, clockwise from top-left.
///
/// Unlike an axis-aligned rect this survives rotation and zero extents, which
/// is why outline drawing takes it together with explicit edge vectors.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct RectPoints {
    pub top_left: Vec2,
    pub top_right: Vec2,
    pub bottom_right: Vec2,
    pub bottom_left: Vec2,
}

impl RectPoints {
    #[inline]
    pub const fn new(top_left: Vec2, top_right: Vec2, bottom_right: Vec2, bottom_left: Vec2) -> Self {
        Self { top_left, top_right, bottom_right, bottom_left }
    }

    /// Corners of an axis-aligned rect at `origin` with `size`.
    #[inline]
    pub fn axis_aligned(origin: Vec2, size: Vec2) -> Self {
        let max = origin + size;
        Self {
            top_left: origin,
            top_right: Vec2::new(max.x, origin.y),
            bottom_right: max,
            bottom_left: Vec2::new(origin.x, max.y),
        }
    }

    /// Corners in clockwise order (top-left, top-right, bottom-right, bottom-left).
    #[inline]
    pub fn corners(self) -> [Vec2; 4] {
        [self.top_left, self.top_right, self.bottom_right, self.bottom_left]
    }
}
