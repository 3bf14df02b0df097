use super::Vec2;

/// How a floating pixel coordinate snaps to an integer-aligned position
/// for pixel-perfect rendering.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum Rounding {
    None,
    #[default]
    Nearest,
    Down,
    Up,
}

/// Rounds both axes of `p` under `rounding`.
///
/// `Nearest` is `floor(v + 0.5)`: values exactly at `.5` round toward
/// +infinity, never to even. Applied after alignment and rotation, right
/// before a primitive is handed to the renderer, so transforms operate on
/// continuous coordinates and only final screen positions snap.
#[inline]
pub fn round_point(p: Vec2, rounding: Rounding) -> Vec2 {
    match rounding {
        Rounding::None => p,
        Rounding::Nearest => Vec2::new((p.x + 0.5).floor(), (p.y + 0.5).floor()),
        Rounding::Down => Vec2::new(p.x.floor(), p.y.floor()),
        Rounding::Up => Vec2::new(p.x.ceil(), p.y.ceil()),
    }
}
