//! Color and render-state types shared between the draw surface and
//! renderer backends.
//!
//! Scope:
//! - straight-alpha float color for vertices and tints
//! - per-primitive blend + depth state

mod color;
mod state;

pub use color::Rgba;
pub use state::{source_alpha_blend, RenderState};
