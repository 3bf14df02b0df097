use easel_engine::coords::{HAlign, RectPoints, Rounding, UvRect, VAlign, Vec2};
use easel_engine::draw::{DrawSurface, ImageOptions, TextOptions};
use easel_engine::paint::{RenderState, Rgba};
use easel_engine::scene::{ImageRef, Vertex};
use easel_engine::text::TextError;
use easel_engine::wgpu;

/// Scoped drawing session over a [`DrawSurface`].
///
/// Construction snapshots the surface's defer mode, switches it to the
/// requested mode, and copies the surface's default options into local
/// state. Dropping the scope restores the prior defer mode on every exit
/// path. The setters mutate only the local copies, so repeated draw calls
/// need not re-specify options and the surface defaults stay untouched.
///
/// A detached scope — built with [`DrawScope::detached`] or by passing
/// `None` — turns every draw into a safe no-op and every query into a
/// zero/default value.
pub struct DrawScope<'a> {
    surface: Option<&'a mut dyn DrawSurface>,
    prev_defer: bool,
    image_options: ImageOptions,
    text_options: TextOptions,
}

impl<'a> DrawScope<'a> {
    /// Opens a scope over `surface`, deferring primitives while it lives if
    /// `defer` is set. `None` yields a detached scope.
    pub fn new(surface: Option<&'a mut dyn DrawSurface>, defer: bool) -> Self {
        let Some(surface) = surface else {
            return Self::detached();
        };

        let prev_defer = surface.defer_primitives();
        surface.set_defer_primitives(defer);
        let image_options = *surface.default_image_options();
        let text_options = surface.default_text_options().clone();

        Self {
            surface: Some(surface),
            prev_defer,
            image_options,
            text_options,
        }
    }

    /// A scope with no surface: draws are no-ops, queries return defaults.
    pub fn detached() -> Self {
        Self {
            surface: None,
            prev_defer: false,
            image_options: ImageOptions::default(),
            text_options: TextOptions::default(),
        }
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Draws a textured quad with the scope's image options.
    ///
    /// See [`DrawSurface::draw_image`] for parameter semantics.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_image(
        &mut self,
        image: ImageRef,
        position: Vec2,
        size: Vec2,
        opacity: f32,
        rotation_deg: f32,
        pivot: Option<Vec2>,
        uv: Option<UvRect>,
    ) {
        if let Some(surface) = self.surface.as_deref_mut() {
            surface.draw_image(
                image,
                position,
                size,
                opacity,
                rotation_deg,
                pivot,
                uv,
                Some(&self.image_options),
            );
        }
    }

    /// Draws an aligned textured quad with the scope's image options.
    ///
    /// See [`DrawSurface::draw_image_aligned`] for parameter semantics.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_image_aligned(
        &mut self,
        image: ImageRef,
        position: Vec2,
        size: Vec2,
        halign: HAlign,
        valign: VAlign,
        opacity: f32,
        rotation_deg: f32,
        uv: Option<UvRect>,
    ) {
        if let Some(surface) = self.surface.as_deref_mut() {
            surface.draw_image_aligned(
                image,
                position,
                size,
                halign,
                valign,
                opacity,
                rotation_deg,
                uv,
                Some(&self.image_options),
            );
        }
    }

    /// Draws a quad with explicit vertices.
    pub fn draw_quad(
        &mut self,
        image: Option<ImageRef>,
        verts: [Vertex; 4],
        rounding: Rounding,
        clamp: bool,
        state: RenderState,
    ) {
        if let Some(surface) = self.surface.as_deref_mut() {
            surface.draw_quad(image, verts, rounding, clamp, state);
        }
    }

    /// Draws a solid line.
    pub fn draw_line(&mut self, start: Vec2, end: Vec2, color: Rgba, rounding: Rounding, state: RenderState) {
        if let Some(surface) = self.surface.as_deref_mut() {
            surface.draw_line(start, end, color, rounding, state);
        }
    }

    /// Draws a textured line.
    pub fn draw_line_textured(&mut self, image: ImageRef, verts: [Vertex; 2], rounding: Rounding, state: RenderState) {
        if let Some(surface) = self.surface.as_deref_mut() {
            surface.draw_line_textured(image, verts, rounding, state);
        }
    }

    /// Draws a rectangular outline with a texture.
    pub fn draw_rect_outline_textured(
        &mut self,
        image: ImageRef,
        points: RectPoints,
        right: Vec2,
        down: Vec2,
        color: Rgba,
        thickness: u32,
    ) {
        if let Some(surface) = self.surface.as_deref_mut() {
            surface.draw_rect_outline_textured(image, points, right, down, color, thickness);
        }
    }

    /// Draws a text string with the scope's text options.
    pub fn draw_text(&mut self, text: &str, position: Vec2, point_size: f32, opacity: f32) -> Result<(), TextError> {
        match self.surface.as_deref_mut() {
            Some(surface) => surface.draw_text(text, position, point_size, opacity, Some(&self.text_options)),
            None => Ok(()),
        }
    }

    // ── queries ───────────────────────────────────────────────────────────

    /// Size the given text would occupy under the scope's text options.
    /// Zero for a detached scope.
    pub fn text_size(&self, text: &str, point_size: f32) -> Result<Vec2, TextError> {
        match self.surface.as_deref() {
            Some(surface) => surface.text_size(text, point_size, Some(&self.text_options)),
            None => Ok(Vec2::zero()),
        }
    }

    /// Viewport width in pixels; zero for a detached scope.
    pub fn viewport_width(&self) -> f32 {
        self.surface.as_deref().map_or(0.0, |s| s.viewport_width())
    }

    /// Viewport height in pixels; zero for a detached scope.
    pub fn viewport_height(&self) -> f32 {
        self.surface.as_deref().map_or(0.0, |s| s.viewport_height())
    }

    /// DPI scale factor; zero for a detached scope.
    pub fn viewport_dpi_scaling_factor(&self) -> f32 {
        self.surface.as_deref().map_or(0.0, |s| s.viewport_dpi_scaling_factor())
    }

    // ── mode control ──────────────────────────────────────────────────────

    /// Sets the sort key for subsequent deferred draws.
    pub fn set_sort_key(&mut self, key: i64) {
        if let Some(surface) = self.surface.as_deref_mut() {
            surface.set_sort_key(key);
        }
    }

    /// Flushes deferred primitives on the underlying surface.
    pub fn render_deferred_primitives(&mut self) {
        if let Some(surface) = self.surface.as_deref_mut() {
            surface.render_deferred_primitives();
        }
    }

    // ── image options ─────────────────────────────────────────────────────

    /// Sets the blend state used for image drawing.
    pub fn set_image_blend_state(&mut self, blend: wgpu::BlendState) {
        self.image_options.state.blend = blend;
    }

    /// Sets the tint used for image drawing.
    pub fn set_image_color(&mut self, color: Rgba) {
        self.image_options.color = color;
    }

    /// Sets whether image corners snap to exact pixel boundaries.
    pub fn set_image_pixel_rounding(&mut self, rounding: Rounding) {
        self.image_options.rounding = rounding;
    }

    /// Sets whether images draw with depth testing.
    pub fn set_image_depth_test(&mut self, enabled: bool) {
        self.image_options.state.depth_test = enabled;
    }

    /// Sets image texture clamping.
    pub fn set_image_clamp(&mut self, clamp: bool) {
        self.image_options.clamp = clamp;
    }

    // ── text options ──────────────────────────────────────────────────────

    /// Sets the text font by registered name.
    pub fn set_text_font(&mut self, font: impl Into<String>) {
        self.text_options.font = font.into();
    }

    /// Sets the font effect index.
    pub fn set_text_effect_index(&mut self, effect: u32) {
        self.text_options.effect = effect;
    }

    /// Sets the text color.
    pub fn set_text_color(&mut self, color: Rgba) {
        self.text_options.color = color;
    }

    /// Sets how the text block is positioned relative to the draw position.
    pub fn set_text_alignment(&mut self, halign: HAlign, valign: VAlign) {
        self.text_options.halign = halign;
        self.text_options.valign = valign;
    }

    /// Sets a drop shadow for text drawing. A zero alpha disables it.
    pub fn set_text_drop_shadow(&mut self, offset: Vec2, color: Rgba) {
        self.text_options.drop_shadow_offset = offset;
        self.text_options.drop_shadow_color = color;
    }

    /// Sets a rotation for the text about its (alignment-adjusted) position.
    pub fn set_text_rotation(&mut self, degrees: f32) {
        self.text_options.rotation_deg = degrees;
    }

    /// Sets whether text draws with depth testing.
    pub fn set_text_depth_test(&mut self, enabled: bool) {
        self.text_options.depth_test = enabled;
    }
}

impl Drop for DrawScope<'_> {
    fn drop(&mut self) {
        if let Some(surface) = self.surface.as_deref_mut() {
            surface.set_defer_primitives(self.prev_defer);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── recording mock surface ────────────────────────────────────────────

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Image { color: Rgba, rounding: Rounding, clamp: bool },
        Quad,
        Line,
        Outline { thickness: u32 },
        Text { font: String, halign: HAlign, shadow_alpha: f32 },
        Flush,
        SortKey(i64),
    }

    struct MockSurface {
        defer: bool,
        defer_history: Vec<bool>,
        image_defaults: ImageOptions,
        text_defaults: TextOptions,
        calls: Vec<Call>,
    }

    impl MockSurface {
        fn new() -> Self {
            Self {
                defer: false,
                defer_history: Vec::new(),
                image_defaults: ImageOptions::default(),
                text_defaults: TextOptions::default(),
                calls: Vec::new(),
            }
        }
    }

    impl DrawSurface for MockSurface {
        fn draw_image(
            &mut self,
            _image: ImageRef,
            _position: Vec2,
            _size: Vec2,
            _opacity: f32,
            _rotation_deg: f32,
            _pivot: Option<Vec2>,
            _uv: Option<UvRect>,
            options: Option<&ImageOptions>,
        ) {
            let opts = options.copied().unwrap_or(self.image_defaults);
            self.calls.push(Call::Image {
                color: opts.color,
                rounding: opts.rounding,
                clamp: opts.clamp,
            });
        }

        fn draw_image_aligned(
            &mut self,
            image: ImageRef,
            position: Vec2,
            size: Vec2,
            _halign: HAlign,
            _valign: VAlign,
            opacity: f32,
            rotation_deg: f32,
            uv: Option<UvRect>,
            options: Option<&ImageOptions>,
        ) {
            self.draw_image(image, position, size, opacity, rotation_deg, None, uv, options);
        }

        fn draw_quad(
            &mut self,
            _image: Option<ImageRef>,
            _verts: [Vertex; 4],
            _rounding: Rounding,
            _clamp: bool,
            _state: RenderState,
        ) {
            self.calls.push(Call::Quad);
        }

        fn draw_line(&mut self, _start: Vec2, _end: Vec2, _color: Rgba, _rounding: Rounding, _state: RenderState) {
            self.calls.push(Call::Line);
        }

        fn draw_line_textured(
            &mut self,
            _image: ImageRef,
            _verts: [Vertex; 2],
            _rounding: Rounding,
            _state: RenderState,
        ) {
            self.calls.push(Call::Line);
        }

        fn draw_rect_outline_textured(
            &mut self,
            _image: ImageRef,
            _points: RectPoints,
            _right: Vec2,
            _down: Vec2,
            _color: Rgba,
            thickness: u32,
        ) {
            self.calls.push(Call::Outline { thickness });
        }

        fn draw_text(
            &mut self,
            _text: &str,
            _position: Vec2,
            _point_size: f32,
            _opacity: f32,
            options: Option<&TextOptions>,
        ) -> Result<(), TextError> {
            let opts = options.cloned().unwrap_or_else(|| self.text_defaults.clone());
            self.calls.push(Call::Text {
                font: opts.font,
                halign: opts.halign,
                shadow_alpha: opts.drop_shadow_color.a,
            });
            Ok(())
        }

        fn text_size(&self, _text: &str, _point_size: f32, _options: Option<&TextOptions>) -> Result<Vec2, TextError> {
            Ok(Vec2::new(42.0, 7.0))
        }

        fn viewport_width(&self) -> f32 {
            800.0
        }

        fn viewport_height(&self) -> f32 {
            600.0
        }

        fn viewport_dpi_scaling_factor(&self) -> f32 {
            1.5
        }

        fn default_image_options(&self) -> &ImageOptions {
            &self.image_defaults
        }

        fn default_text_options(&self) -> &TextOptions {
            &self.text_defaults
        }

        fn set_defer_primitives(&mut self, defer: bool) {
            self.defer = defer;
            self.defer_history.push(defer);
        }

        fn defer_primitives(&self) -> bool {
            self.defer
        }

        fn render_deferred_primitives(&mut self) {
            self.calls.push(Call::Flush);
        }

        fn set_sort_key(&mut self, key: i64) {
            self.calls.push(Call::SortKey(key));
        }
    }

    // ── defer-mode restore ────────────────────────────────────────────────

    #[test]
    fn scope_restores_prior_defer_mode_on_drop() {
        let mut surface = MockSurface::new();

        {
            let mut scope = DrawScope::new(Some(&mut surface), true);
            scope.draw_line(Vec2::zero(), Vec2::new(1.0, 0.0), Rgba::white(), Rounding::Nearest, RenderState::default());
        }
        assert!(!surface.defer);

        surface.defer = true;
        {
            let _scope = DrawScope::new(Some(&mut surface), false);
        }
        assert!(surface.defer);
    }

    #[test]
    fn scope_sets_requested_mode_while_alive() {
        let mut surface = MockSurface::new();
        {
            let _scope = DrawScope::new(Some(&mut surface), true);
        }
        // Switched on at construction, back off at drop.
        assert_eq!(surface.defer_history, vec![true, false]);
    }

    #[test]
    fn restore_happens_on_early_return_paths() {
        fn draw_until(surface: &mut MockSurface, stop_early: bool) -> Option<()> {
            let mut scope = DrawScope::new(Some(surface), true);
            scope.draw_line(Vec2::zero(), Vec2::new(1.0, 0.0), Rgba::white(), Rounding::Nearest, RenderState::default());
            if stop_early {
                return None;
            }
            scope.draw_line(Vec2::zero(), Vec2::new(2.0, 0.0), Rgba::white(), Rounding::Nearest, RenderState::default());
            Some(())
        }

        let mut surface = MockSurface::new();
        assert!(draw_until(&mut surface, true).is_none());
        assert!(!surface.defer);
        assert_eq!(surface.calls.len(), 1);
    }

    // ── local option state ────────────────────────────────────────────────

    #[test]
    fn image_setters_mutate_only_the_local_copy() {
        let mut surface = MockSurface::new();
        {
            let mut scope = DrawScope::new(Some(&mut surface), false);
            scope.set_image_color(Rgba::new(1.0, 0.0, 0.0, 1.0));
            scope.set_image_pixel_rounding(Rounding::Down);
            scope.set_image_clamp(true);
            scope.draw_image(
                ImageRef::new(1, Vec2::new(8.0, 8.0)),
                Vec2::zero(),
                Vec2::new(8.0, 8.0),
                1.0,
                0.0,
                None,
                None,
            );
        }

        assert_eq!(
            surface.calls,
            vec![Call::Image {
                color: Rgba::new(1.0, 0.0, 0.0, 1.0),
                rounding: Rounding::Down,
                clamp: true,
            }]
        );
        // The surface's stored defaults must be untouched.
        assert_eq!(surface.image_defaults, ImageOptions::default());
    }

    #[test]
    fn text_setters_travel_with_every_draw() {
        let mut surface = MockSurface::new();
        {
            let mut scope = DrawScope::new(Some(&mut surface), false);
            scope.set_text_font("hud");
            scope.set_text_alignment(HAlign::Center, VAlign::Center);
            scope.set_text_drop_shadow(Vec2::new(1.0, 1.0), Rgba::new(0.0, 0.0, 0.0, 0.75));
            scope.draw_text("score", Vec2::zero(), 12.0, 1.0).unwrap();
            scope.draw_text("lives", Vec2::zero(), 12.0, 1.0).unwrap();
        }

        let expected = Call::Text {
            font: "hud".to_string(),
            halign: HAlign::Center,
            shadow_alpha: 0.75,
        };
        assert_eq!(surface.calls, vec![expected.clone(), expected]);
        assert_eq!(surface.text_defaults, TextOptions::default());
    }

    #[test]
    fn scope_starts_from_the_surface_defaults() {
        let mut surface = MockSurface::new();
        surface.image_defaults.clamp = true;
        surface.text_defaults.font = "console".to_string();

        let mut scope = DrawScope::new(Some(&mut surface), false);
        scope.draw_image(
            ImageRef::new(1, Vec2::new(4.0, 4.0)),
            Vec2::zero(),
            Vec2::new(4.0, 4.0),
            1.0,
            0.0,
            None,
            None,
        );
        scope.draw_text("hello", Vec2::zero(), 10.0, 1.0).unwrap();
        drop(scope);

        match &surface.calls[0] {
            Call::Image { clamp, .. } => assert!(*clamp),
            other => panic!("expected image call, got {other:?}"),
        }
        match &surface.calls[1] {
            Call::Text { font, .. } => assert_eq!(font, "console"),
            other => panic!("expected text call, got {other:?}"),
        }
    }

    // ── detached scopes ───────────────────────────────────────────────────

    #[test]
    fn detached_scope_noops_every_operation() {
        let mut scope = DrawScope::detached();

        scope.draw_image(
            ImageRef::new(1, Vec2::new(4.0, 4.0)),
            Vec2::zero(),
            Vec2::new(4.0, 4.0),
            1.0,
            0.0,
            None,
            None,
        );
        scope.draw_line(Vec2::zero(), Vec2::new(1.0, 1.0), Rgba::white(), Rounding::Nearest, RenderState::default());
        scope.draw_rect_outline_textured(
            ImageRef::new(1, Vec2::new(4.0, 4.0)),
            RectPoints::axis_aligned(Vec2::zero(), Vec2::new(2.0, 2.0)),
            Vec2::new(1.0, 0.0),
            Vec2::new(0.0, 1.0),
            Rgba::white(),
            0,
        );
        assert!(scope.draw_text("hi", Vec2::zero(), 10.0, 1.0).is_ok());
        scope.set_sort_key(3);
        scope.render_deferred_primitives();

        assert_eq!(scope.text_size("hi", 10.0).unwrap(), Vec2::zero());
        assert_eq!(scope.viewport_width(), 0.0);
        assert_eq!(scope.viewport_height(), 0.0);
        assert_eq!(scope.viewport_dpi_scaling_factor(), 0.0);
    }

    #[test]
    fn none_surface_is_the_same_as_detached() {
        let mut scope = DrawScope::new(None, true);
        assert!(scope.draw_text("hi", Vec2::zero(), 10.0, 1.0).is_ok());
        assert_eq!(scope.viewport_width(), 0.0);
    }

    // ── forwarding ────────────────────────────────────────────────────────

    #[test]
    fn queries_and_mode_control_forward_to_the_surface() {
        let mut surface = MockSurface::new();
        {
            let mut scope = DrawScope::new(Some(&mut surface), true);
            assert_eq!(scope.viewport_width(), 800.0);
            assert_eq!(scope.viewport_height(), 600.0);
            assert_eq!(scope.viewport_dpi_scaling_factor(), 1.5);
            assert_eq!(scope.text_size("abc", 10.0).unwrap(), Vec2::new(42.0, 7.0));

            scope.set_sort_key(9);
            scope.render_deferred_primitives();
        }
        assert_eq!(surface.calls, vec![Call::SortKey(9), Call::Flush]);
    }
}
