//! Canonical primitives and the deferred draw queue.
//!
//! Responsibilities:
//! - store renderer-agnostic canonical primitives
//! - provide deterministic flush ordering (sort key + insertion order)
//! - keep per-shape payloads isolated per shape file under `scene::shapes`

mod cmd;
mod image;
mod key;
mod queue;
mod vertex;

pub mod shapes;

pub use cmd::DrawCmd;
pub use image::ImageRef;
pub use key::SortKey;
pub use queue::{DeferredItem, DeferredQueue};
pub use vertex::Vertex;
