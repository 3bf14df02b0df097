use bytemuck::{Pod, Zeroable};

use crate::coords::Vec2;
use crate::paint::Rgba;

/// Position / color / texture-coordinate vertex.
///
/// Quad primitives are exactly four vertices in clockwise order (top-left,
/// top-right, bottom-right, bottom-left); line primitives are exactly two.
/// The layout is `repr(C)` so backends can upload vertex slices directly.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    /// Position in screen pixels.
    pub position: Vec2,
    /// Straight-alpha color.
    pub color: Rgba,
    /// Normalized texture coordinate.
    pub uv: Vec2,
}

impl Vertex {
    #[inline]
    pub const fn new(position: Vec2, color: Rgba, uv: Vec2) -> Self {
        Self { position, color, uv }
    }
}
