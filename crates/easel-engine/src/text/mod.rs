//! Text metrics and layout.
//!
//! Shaping and rasterization live behind the renderer backend; this module
//! owns the measurement seam ([`FontMetrics`]) and the pure layout helpers
//! shared by drawing and measurement, so a measured size always matches the
//! block that gets drawn.

use std::fmt;

mod font_system;
pub mod layout;

pub use font_system::{FontId, FontLoadError, FontMetrics, FontSystem};

/// Maximum accepted text length in bytes, including the terminator slot
/// fixed-width font buffers reserve. The longest accepted string is one
/// byte shorter.
pub const MAX_TEXT_STRING_LENGTH: usize = 1024;

/// Error returned by text operations.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum TextError {
    /// The input exceeds [`MAX_TEXT_STRING_LENGTH`]. The call draws nothing;
    /// over-long text is rejected, never truncated.
    TooLong { len: usize, max: usize },
}

impl fmt::Display for TextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextError::TooLong { len, max } => {
                write!(f, "text of {len} bytes exceeds the {max}-byte limit")
            }
        }
    }
}

impl std::error::Error for TextError {}

/// Rejects text that does not fit a fixed-width font buffer.
pub fn check_length(text: &str) -> Result<(), TextError> {
    let max = MAX_TEXT_STRING_LENGTH - 1;
    if text.len() > max {
        return Err(TextError::TooLong { len: text.len(), max });
    }
    Ok(())
}
