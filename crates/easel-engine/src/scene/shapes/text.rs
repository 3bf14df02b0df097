use crate::coords::Vec2;
use crate::paint::{RenderState, Rgba};
use crate::scene::DrawCmd;
use crate::text::FontId;

/// Single-line text-run payload.
///
/// The surface has already split lines, aligned the block, and resolved the
/// font name; the backend only shapes and rasterizes this run.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    pub font: FontId,
    /// Font effect index, forwarded untouched.
    pub effect: u32,
    pub point_size: f32,
    pub color: Rgba,
    /// Top-left of the run in pixels, before rotation.
    pub origin: Vec2,
    /// Rotation in degrees counter-clockwise about `pivot`.
    pub rotation_deg: f32,
    pub pivot: Vec2,
    pub state: RenderState,
}

impl From<TextCmd> for DrawCmd {
    #[inline]
    fn from(cmd: TextCmd) -> Self {
        DrawCmd::Text(cmd)
    }
}
