use crate::coords::{HAlign, Rounding, VAlign, Vec2};
use crate::paint::{RenderState, Rgba};

/// Per-call image drawing options.
///
/// Defaults: white tint, nearest pixel rounding, wrap addressing,
/// source-alpha blending with depth test off.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ImageOptions {
    /// Tint applied to every vertex. Its alpha is further scaled by the
    /// per-call opacity.
    pub color: Rgba,
    pub rounding: Rounding,
    /// Clamp texture addressing instead of wrapping.
    pub clamp: bool,
    pub state: RenderState,
}

impl Default for ImageOptions {
    fn default() -> Self {
        Self {
            color: Rgba::white(),
            rounding: Rounding::Nearest,
            clamp: false,
            state: RenderState::default(),
        }
    }
}

/// Per-call text drawing options — mostly ones that do not change from call
/// to call.
#[derive(Debug, Clone, PartialEq)]
pub struct TextOptions {
    /// Name of a font registered with the font provider.
    pub font: String,
    /// Font effect index, forwarded to the backend untouched.
    pub effect: u32,
    pub color: Rgba,
    pub halign: HAlign,
    pub valign: VAlign,
    /// Shadow offset in pixels. The shadow pass only runs when the shadow
    /// color's alpha is non-zero.
    pub drop_shadow_offset: Vec2,
    pub drop_shadow_color: Rgba,
    /// Rotation in degrees counter-clockwise about the anchor position.
    pub rotation_deg: f32,
    pub depth_test: bool,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            font: "default".to_string(),
            effect: 0,
            color: Rgba::white(),
            halign: HAlign::Left,
            valign: VAlign::Top,
            drop_shadow_offset: Vec2::zero(),
            drop_shadow_color: Rgba::transparent(),
            rotation_deg: 0.0,
            depth_test: false,
        }
    }
}
