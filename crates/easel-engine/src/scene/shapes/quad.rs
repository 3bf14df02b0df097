use crate::paint::RenderState;
use crate::scene::{DrawCmd, ImageRef, Vertex};

/// Textured-quad payload.
///
/// `image = None` draws an untextured quad filled by the vertex colors.
#[derive(Debug, Clone, PartialEq)]
pub struct QuadCmd {
    pub image: Option<ImageRef>,
    /// Clockwise: top-left, top-right, bottom-right, bottom-left.
    pub verts: [Vertex; 4],
    /// Clamp texture addressing instead of wrapping.
    pub clamp: bool,
    pub state: RenderState,
}

impl QuadCmd {
    #[inline]
    pub fn new(image: Option<ImageRef>, verts: [Vertex; 4], clamp: bool, state: RenderState) -> Self {
        Self { image, verts, clamp, state }
    }
}

impl From<QuadCmd> for DrawCmd {
    #[inline]
    fn from(cmd: QuadCmd) -> Self {
        DrawCmd::Quad(cmd)
    }
}
