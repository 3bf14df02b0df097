//! Coordinate and geometry types shared by the draw surface and helpers.
//!
//! Canonical space:
//! - Screen pixels within the current viewport
//! - Origin top-left, +X right, +Y down
//! - Positive rotation is counter-clockwise as seen on screen

mod align;
mod rect;
mod rounding;
mod vec2;
mod viewport;

pub use align::{align, HAlign, VAlign};
pub use rect::{RectPoints, UvRect};
pub use rounding::{round_point, Rounding};
pub use vec2::Vec2;
pub use viewport::Viewport;
