use crate::paint::RenderState;
use crate::scene::{DrawCmd, ImageRef, Vertex};

/// Line-segment payload.
///
/// `image` makes the line textured, so it can be dotted or dashed;
/// `None` draws it solid from the vertex colors.
#[derive(Debug, Clone, PartialEq)]
pub struct LineCmd {
    pub image: Option<ImageRef>,
    /// Start and end point.
    pub verts: [Vertex; 2],
    pub state: RenderState,
}

impl LineCmd {
    #[inline]
    pub fn new(image: Option<ImageRef>, verts: [Vertex; 2], state: RenderState) -> Self {
        Self { image, verts, state }
    }
}

impl From<LineCmd> for DrawCmd {
    #[inline]
    fn from(cmd: LineCmd) -> Self {
        DrawCmd::Line(cmd)
    }
}
