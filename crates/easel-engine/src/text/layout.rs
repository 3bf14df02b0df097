//! Pure text-layout helpers.
//!
//! Both `draw_text` and `text_size` are built on these, which is what makes
//! measurement and rendering agree exactly.

use crate::coords::Vec2;

use super::font_system::{FontId, FontMetrics};

/// Splits on `\n`. A trailing newline yields a final empty line, which
/// still occupies vertical space.
#[inline]
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
}

/// Bounding size of a whole text block: widest line by line count times
/// line spacing.
pub fn block_size<F: FontMetrics + ?Sized>(
    fonts: &F,
    font: FontId,
    effect: u32,
    point_size: f32,
    text: &str,
) -> Vec2 {
    let spacing = fonts.line_spacing(font, point_size);

    let mut width = 0.0f32;
    let mut lines = 0u32;
    for line in split_lines(text) {
        width = width.max(fonts.line_width(font, effect, point_size, line));
        lines += 1;
    }

    Vec2::new(width, lines as f32 * spacing)
}
