use std::collections::HashMap;
use std::fmt;

/// Error returned by [`FontSystem::register_font`].
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// Opaque handle to a registered font.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FontId(pub(crate) usize);

/// Glyph-metric queries the draw surface needs from a font provider.
///
/// Drawing and measurement both go through this trait, which is what keeps
/// a measured text size identical to the block the surface emits.
pub trait FontMetrics {
    /// Resolves a font name (e.g. `"default"`) to a handle.
    fn resolve(&self, name: &str) -> Option<FontId>;

    /// Width of a single line (no newlines) at `point_size`.
    fn line_width(&self, font: FontId, effect: u32, point_size: f32, line: &str) -> f32;

    /// Vertical advance between consecutive lines at `point_size`.
    fn line_spacing(&self, font: FontId, point_size: f32) -> f32;
}

/// Owns the fonts available to a draw surface, keyed by name.
///
/// Fonts are immutable after registration. Metrics come from fontdue; the
/// surface only ever asks for line widths and spacing, rasterization happens
/// in the renderer backend.
pub struct FontSystem {
    fonts: Vec<fontdue::Font>,
    names: HashMap<String, FontId>,
}

impl FontSystem {
    pub fn new() -> Self {
        Self {
            fonts: Vec::new(),
            names: HashMap::new(),
        }
    }

    /// Parses a TrueType or OpenType font and registers it under `name`.
    ///
    /// Re-registering a name points it at the new font; existing handles
    /// keep referring to the old one.
    pub fn register_font(&mut self, name: &str, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        let id = FontId(self.fonts.len());
        self.fonts.push(font);
        self.names.insert(name.to_string(), id);
        Ok(id)
    }

    fn get(&self, id: FontId) -> Option<&fontdue::Font> {
        self.fonts.get(id.0)
    }
}

impl Default for FontSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FontMetrics for FontSystem {
    fn resolve(&self, name: &str) -> Option<FontId> {
        self.names.get(name).copied()
    }

    // Effects (outlines etc.) are a rasterization concern and do not change
    // fontdue's advances, so the index is ignored here.
    fn line_width(&self, font: FontId, _effect: u32, point_size: f32, line: &str) -> f32 {
        let Some(font) = self.get(font) else {
            return 0.0;
        };
        line.chars()
            .map(|c| font.metrics(c, point_size).advance_width)
            .sum()
    }

    fn line_spacing(&self, font: FontId, point_size: f32) -> f32 {
        let Some(font) = self.get(font) else {
            return point_size;
        };
        font.horizontal_line_metrics(point_size)
            .map(|m| m.new_line_size)
            .unwrap_or(point_size)
    }
}
