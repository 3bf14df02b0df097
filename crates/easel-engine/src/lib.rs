//! Screen-space 2D drawing façade.
//!
//! Positions and sizes are pixels in the current viewport. High-level draw
//! requests — aligned or rotated images, outlines, lines, text — are
//! normalized into canonical vertex primitives and either handed to a
//! renderer backend immediately or deferred and flushed in sort-key order.
//!
//! The crate owns draw-call composition only: texture loading, glyph
//! rasterization, and GPU submission live behind the [`scene::ImageRef`]
//! handle, the [`text::FontMetrics`] seam, and the
//! [`draw::RendererBackend`] trait.

pub mod coords;
pub mod draw;
pub mod logging;
pub mod paint;
pub mod scene;
pub mod text;

// Backends speak wgpu state descriptors; re-exported so downstream crates
// can name them without pinning their own copy of the dependency.
pub use wgpu;
