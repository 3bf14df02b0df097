use log::debug;

use crate::coords::{align, HAlign, RectPoints, Rounding, UvRect, VAlign, Vec2, Viewport};
use crate::paint::{source_alpha_blend, RenderState, Rgba};
use crate::scene::shapes::{LineCmd, QuadCmd, TextCmd};
use crate::scene::{DeferredQueue, DrawCmd, ImageRef, Vertex};
use crate::text::{check_length, layout, FontMetrics, TextError};

use super::backend::RendererBackend;
use super::canon;
use super::options::{ImageOptions, TextOptions};
use super::surface::DrawSurface;

/// Concrete draw surface backed by a renderer and a font provider.
///
/// Owns the defer-mode flag, the current sort key, and the deferred queue.
/// Every draw call canonicalizes into [`DrawCmd`]s which are submitted to
/// the backend immediately, or queued for an ordered flush while defer mode
/// is on.
pub struct Draw2d<B, F> {
    backend: B,
    fonts: F,
    viewport: Viewport,
    dpi_scale: f32,

    default_image_options: ImageOptions,
    default_text_options: TextOptions,

    defer: bool,
    sort_key: i64,
    queue: DeferredQueue,
}

impl<B: RendererBackend, F: FontMetrics> Draw2d<B, F> {
    pub fn new(backend: B, fonts: F, viewport: Viewport, dpi_scale: f32) -> Self {
        if !viewport.is_valid() {
            debug!("draw surface created with degenerate viewport {viewport:?}");
        }
        Self {
            backend,
            fonts,
            viewport,
            dpi_scale,
            default_image_options: ImageOptions::default(),
            default_text_options: TextOptions::default(),
            defer: false,
            sort_key: 0,
            queue: DeferredQueue::new(),
        }
    }

    /// Updates the viewport and DPI scale, e.g. after a window resize.
    pub fn set_viewport(&mut self, viewport: Viewport, dpi_scale: f32) {
        self.viewport = viewport;
        self.dpi_scale = dpi_scale;
    }

    #[inline]
    pub fn fonts(&self) -> &F {
        &self.fonts
    }

    #[inline]
    pub fn fonts_mut(&mut self) -> &mut F {
        &mut self.fonts
    }

    #[inline]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    #[inline]
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    fn submit(&mut self, cmd: DrawCmd) {
        if self.defer {
            self.queue.push(self.sort_key, cmd);
        } else {
            self.backend.submit(&cmd);
        }
    }

    fn submit_line(&mut self, image: Option<ImageRef>, mut verts: [Vertex; 2], rounding: Rounding, state: RenderState) {
        canon::round_verts(&mut verts, rounding);
        self.submit(LineCmd::new(image, verts, state).into());
    }

    /// Emits one [`TextCmd`] per non-empty line, spacing lines vertically
    /// from `top_left`. Empty lines still advance the cursor.
    fn emit_runs(&mut self, text: &str, top_left: Vec2, spacing: f32, proto: &TextCmd) {
        for (i, line) in layout::split_lines(text).enumerate() {
            if line.is_empty() {
                continue;
            }
            let mut cmd = proto.clone();
            cmd.text = line.to_string();
            cmd.origin = Vec2::new(top_left.x, top_left.y + i as f32 * spacing);
            self.submit(cmd.into());
        }
    }
}

impl<B: RendererBackend, F: FontMetrics> DrawSurface for Draw2d<B, F> {
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
    ) {
        let opts = options.copied().unwrap_or(self.default_image_options);
        let tint = opts.color.with_alpha(opts.color.a * opacity);

        let mut verts = canon::image_quad(position, size, uv.unwrap_or(UvRect::FULL), tint);
        canon::rotate_verts(&mut verts, pivot.unwrap_or(position), rotation_deg);
        self.draw_quad(Some(image), verts, opts.rounding, opts.clamp, opts.state);
    }

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
    ) {
        // Rotation pivots on the anchor point, not on the aligned corner.
        let top_left = align(position, size, halign, valign);
        self.draw_image(image, top_left, size, opacity, rotation_deg, Some(position), uv, options);
    }

    fn draw_quad(
        &mut self,
        image: Option<ImageRef>,
        mut verts: [Vertex; 4],
        rounding: Rounding,
        clamp: bool,
        state: RenderState,
    ) {
        canon::round_verts(&mut verts, rounding);
        self.submit(QuadCmd::new(image, verts, clamp, state).into());
    }

    fn draw_line(&mut self, start: Vec2, end: Vec2, color: Rgba, rounding: Rounding, state: RenderState) {
        let verts = [
            Vertex::new(start, color, Vec2::new(0.0, 0.0)),
            Vertex::new(end, color, Vec2::new(1.0, 1.0)),
        ];
        self.submit_line(None, verts, rounding, state);
    }

    fn draw_line_textured(&mut self, image: ImageRef, verts: [Vertex; 2], rounding: Rounding, state: RenderState) {
        self.submit_line(Some(image), verts, rounding, state);
    }

    fn draw_rect_outline_textured(
        &mut self,
        image: ImageRef,
        points: RectPoints,
        right: Vec2,
        down: Vec2,
        color: Rgba,
        thickness: u32,
    ) {
        let thickness = if thickness == 0 { image.size().y } else { thickness as f32 };
        if thickness <= 0.0 {
            return;
        }
        let half = thickness * 0.5;

        // Perimeter clockwise; each edge's cross vector is the edge direction
        // turned 90° clockwise on screen, so winding stays consistent. The
        // caller-supplied vectors keep the direction defined even when the
        // rect has zero width or height.
        let edges = [
            (points.top_left, points.top_right, down * half),
            (points.top_right, points.bottom_right, right * -half),
            (points.bottom_right, points.bottom_left, down * -half),
            (points.bottom_left, points.top_left, right * half),
        ];

        for (start, end, cross) in edges {
            // U runs along the edge, V across it.
            let verts = [
                Vertex::new(start - cross, color, Vec2::new(0.0, 0.0)),
                Vertex::new(end - cross, color, Vec2::new(1.0, 0.0)),
                Vertex::new(end + cross, color, Vec2::new(1.0, 1.0)),
                Vertex::new(start + cross, color, Vec2::new(0.0, 1.0)),
            ];
            self.draw_quad(Some(image), verts, Rounding::None, false, RenderState::default());
        }
    }

    fn draw_text(
        &mut self,
        text: &str,
        position: Vec2,
        point_size: f32,
        opacity: f32,
        options: Option<&TextOptions>,
    ) -> Result<(), TextError> {
        check_length(text)?;

        let opts = options.unwrap_or(&self.default_text_options);
        let Some(font) = self.fonts.resolve(&opts.font) else {
            debug!("draw_text: unknown font {:?}, skipping", opts.font);
            return Ok(());
        };
        let effect = opts.effect;
        let color = opts.color.with_alpha(opts.color.a * opacity);
        let halign = opts.halign;
        let valign = opts.valign;
        let shadow_offset = opts.drop_shadow_offset;
        let shadow_color = opts.drop_shadow_color.with_alpha(opts.drop_shadow_color.a * opacity);
        let rotation_deg = opts.rotation_deg;
        let state = RenderState {
            blend: source_alpha_blend(),
            depth_test: opts.depth_test,
        };

        let block = layout::block_size(&self.fonts, font, effect, point_size, text);
        let top_left = align(position, block, halign, valign);
        let spacing = self.fonts.line_spacing(font, point_size);

        let proto = TextCmd {
            text: String::new(),
            font,
            effect,
            point_size,
            color,
            origin: Vec2::zero(),
            rotation_deg,
            pivot: position,
            state,
        };

        // Shadow pass first, so the main glyphs draw on top of it. A zero
        // shadow alpha disables the pass entirely.
        if shadow_color.a > 0.0 {
            let shadow_proto = TextCmd { color: shadow_color, ..proto.clone() };
            self.emit_runs(text, top_left + shadow_offset, spacing, &shadow_proto);
        }
        self.emit_runs(text, top_left, spacing, &proto);

        Ok(())
    }

    fn text_size(&self, text: &str, point_size: f32, options: Option<&TextOptions>) -> Result<Vec2, TextError> {
        check_length(text)?;

        let opts = options.unwrap_or(&self.default_text_options);
        let Some(font) = self.fonts.resolve(&opts.font) else {
            return Ok(Vec2::zero());
        };
        Ok(layout::block_size(&self.fonts, font, opts.effect, point_size, text))
    }

    fn viewport_width(&self) -> f32 {
        self.viewport.width
    }

    fn viewport_height(&self) -> f32 {
        self.viewport.height
    }

    fn viewport_dpi_scaling_factor(&self) -> f32 {
        self.dpi_scale
    }

    fn default_image_options(&self) -> &ImageOptions {
        &self.default_image_options
    }

    fn default_text_options(&self) -> &TextOptions {
        &self.default_text_options
    }

    fn set_defer_primitives(&mut self, defer: bool) {
        self.defer = defer;
    }

    fn defer_primitives(&self) -> bool {
        self.defer
    }

    fn render_deferred_primitives(&mut self) {
        // Nothing queues while defer mode is off, so this is naturally a
        // no-op in that mode.
        if self.queue.is_empty() {
            return;
        }

        let Draw2d { backend, queue, .. } = self;
        for item in queue.iter_in_paint_order() {
            backend.submit(&item.cmd);
        }
        queue.clear();
    }

    fn set_sort_key(&mut self, key: i64) {
        self.sort_key = key;
    }
}
