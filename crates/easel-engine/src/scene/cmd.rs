use crate::scene::shapes::line::LineCmd;
use crate::scene::shapes::quad::QuadCmd;
use crate::scene::shapes::text::TextCmd;

/// Renderer-agnostic canonical primitive.
///
/// Extending the surface:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here
/// - canonicalize into it from the draw surface
/// - handle the variant in the renderer backend
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Quad(QuadCmd),
    Line(LineCmd),
    Text(TextCmd),
}
