use super::Vec2;

/// Horizontal alignment, shared by text and image drawing.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum HAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Vertical alignment, shared by text and image drawing.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum VAlign {
    #[default]
    Top,
    Center,
    Bottom,
}

/// Returns the top-left corner of a rect of `size` anchored at `anchor`
/// under the given alignment.
#[inline]
pub fn align(anchor: Vec2, size: Vec2, h: HAlign, v: VAlign) -> Vec2 {
    let x = match h {
        HAlign::Left => anchor.x,
        HAlign::Center => anchor.x - size.x * 0.5,
        HAlign::Right => anchor.x - size.x,
    };
    let y = match v {
        VAlign::Top => anchor.y,
        VAlign::Center => anchor.y - size.y * 0.5,
        VAlign::Bottom => anchor.y - size.y,
    };
    Vec2::new(x, y)
}
