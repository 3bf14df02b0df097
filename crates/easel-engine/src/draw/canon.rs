//! Canonicalization helpers: high-level draw requests become vertex
//! primitives here.

use crate::coords::{round_point, Rounding, UvRect, Vec2};
use crate::paint::Rgba;
use crate::scene::Vertex;

/// Builds the unrotated clockwise quad for an image at `position` with
/// `size`, mapping `uv.min` to the top-left corner and `uv.max` to the
/// bottom-right.
pub fn image_quad(position: Vec2, size: Vec2, uv: UvRect, color: Rgba) -> [Vertex; 4] {
    let max = position + size;
    [
        Vertex::new(position, color, uv.min),
        Vertex::new(Vec2::new(max.x, position.y), color, Vec2::new(uv.max.x, uv.min.y)),
        Vertex::new(max, color, uv.max),
        Vertex::new(Vec2::new(position.x, max.y), color, Vec2::new(uv.min.x, uv.max.y)),
    ]
}

/// Rotates every vertex about `pivot` by `degrees`, counter-clockwise as
/// seen on screen. A zero angle leaves the vertices untouched.
pub fn rotate_verts(verts: &mut [Vertex], pivot: Vec2, degrees: f32) {
    if degrees == 0.0 {
        return;
    }
    let radians = degrees.to_radians();
    for v in verts {
        v.position = v.position.rotated_about(pivot, radians);
    }
}

/// Applies the rounding policy to every vertex position independently.
///
/// Runs after rotation, immediately before submission.
pub fn round_verts(verts: &mut [Vertex], rounding: Rounding) {
    for v in verts {
        v.position = round_point(v.position, rounding);
    }
}
