use crate::coords::{HAlign, RectPoints, Rounding, UvRect, VAlign, Vec2};
use crate::paint::{RenderState, Rgba};
use crate::scene::{ImageRef, Vertex};
use crate::text::TextError;

use super::options::{ImageOptions, TextOptions};

/// Abstract 2D drawing target.
///
/// Positions and sizes are pixels in the target's viewport. Draw calls
/// either submit immediately or, in defer mode, queue under the current
/// sort key until [`render_deferred_primitives`](Self::render_deferred_primitives)
/// flushes them in order.
pub trait DrawSurface {
    /// Draws a textured quad with its top-left corner at `position`.
    ///
    /// A non-zero `rotation_deg` rotates the quad counter-clockwise about
    /// `pivot`, or about the top-left corner when `pivot` is `None`.
    /// `uv` defaults to the full texture; omitted `options` use
    /// [`ImageOptions::default`]. The tint alpha is scaled by `opacity`.
    #[allow(clippy::too_many_arguments)]
    fn draw_image(
        &mut self,
        image: ImageRef,
        position: Vec2,
        size: Vec2,
        opacity: f32,
        rotation_deg: f32,
        pivot: Option<Vec2>,
        uv: Option<UvRect>,
        options: Option<&ImageOptions>,
    );

    /// Draws a textured quad with `position` interpreted as the point named
    /// by the alignment. Rotation still pivots on `position` itself, not on
    /// the aligned corner.
    #[allow(clippy::too_many_arguments)]
    fn draw_image_aligned(
        &mut self,
        image: ImageRef,
        position: Vec2,
        size: Vec2,
        halign: HAlign,
        valign: VAlign,
        opacity: f32,
        rotation_deg: f32,
        uv: Option<UvRect>,
        options: Option<&ImageOptions>,
    );

    /// Draws a quad with explicit vertices, clockwise from top-left.
    ///
    /// This is the canonical sink every image draw funnels into; no
    /// alignment or rotation is applied, only pixel rounding.
    fn draw_quad(
        &mut self,
        image: Option<ImageRef>,
        verts: [Vertex; 4],
        rounding: Rounding,
        clamp: bool,
        state: RenderState,
    );

    /// Draws a solid line between two points. Rounding applies per endpoint.
    fn draw_line(
        &mut self,
        start: Vec2,
        end: Vec2,
        color: Rgba,
        rounding: Rounding,
        state: RenderState,
    );

    /// Draws a textured line, e.g. for dotted or dashed styles.
    fn draw_line_textured(
        &mut self,
        image: ImageRef,
        verts: [Vertex; 2],
        rounding: Rounding,
        state: RenderState,
    );

    /// Draws a rectangular outline with a texture.
    ///
    /// `right` and `down` carry the rect's edge directions, which the corner
    /// points alone cannot when the width or height is zero. A `thickness`
    /// of zero uses the texture height. Each edge becomes a textured quad
    /// spanning half the thickness to either side, tinted by `color`.
    #[allow(clippy::too_many_arguments)]
    fn draw_rect_outline_textured(
        &mut self,
        image: ImageRef,
        points: RectPoints,
        right: Vec2,
        down: Vec2,
        color: Rgba,
        thickness: u32,
    );

    /// Draws a text string. `\n` starts a new line; the block is positioned
    /// by the alignment in `options` exactly as image alignment would.
    ///
    /// Fails with [`TextError::TooLong`] — drawing nothing — when the string
    /// exceeds the fixed-width buffer limit.
    fn draw_text(
        &mut self,
        text: &str,
        position: Vec2,
        point_size: f32,
        opacity: f32,
        options: Option<&TextOptions>,
    ) -> Result<(), TextError>;

    /// Width and height the given text would occupy if drawn.
    ///
    /// Shares the metrics path with [`draw_text`](Self::draw_text), so the
    /// result matches the drawn block exactly.
    fn text_size(
        &self,
        text: &str,
        point_size: f32,
        options: Option<&TextOptions>,
    ) -> Result<Vec2, TextError>;

    /// Viewport width in pixels.
    fn viewport_width(&self) -> f32;

    /// Viewport height in pixels.
    fn viewport_height(&self) -> f32;

    /// DPI scale factor of the viewport.
    fn viewport_dpi_scaling_factor(&self) -> f32;

    /// Defaults used when a call passes no image options.
    fn default_image_options(&self) -> &ImageOptions;

    /// Defaults used when a call passes no text options.
    fn default_text_options(&self) -> &TextOptions;

    /// Switches between immediate submission and deferred queueing.
    fn set_defer_primitives(&mut self, defer: bool);

    /// Whether future primitives will be deferred.
    fn defer_primitives(&self) -> bool;

    /// Flushes deferred primitives in ascending sort-key order, stable
    /// within equal keys. A no-op while defer mode is off, since nothing
    /// queues in that mode.
    fn render_deferred_primitives(&mut self);

    /// Sets the sort key tagged onto subsequent deferred calls. Primitives
    /// already queued keep the key they were recorded under.
    fn set_sort_key(&mut self, key: i64);
}
