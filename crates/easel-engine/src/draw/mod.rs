//! Draw-call composition: options, canonicalization, the surface contract,
//! and the renderer-backend seam.
//!
//! Responsibilities:
//! - merge per-call options with the surface defaults
//! - normalize high-level requests (alignment, rotation about a pivot,
//!   pixel rounding) into canonical primitives
//! - route primitives to the backend immediately, or through the deferred
//!   queue in sort-key order

mod backend;
pub mod canon;
mod draw2d;
mod options;
mod surface;

pub use backend::RendererBackend;
pub use draw2d::Draw2d;
pub use options::{ImageOptions, TextOptions};
pub use surface::DrawSurface;
