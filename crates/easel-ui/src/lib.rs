//! Scoped drawing sessions over an `easel-engine` draw surface.
//!
//! [`DrawScope`] bundles transient option state and a defer-mode override
//! for one block of drawing calls, restoring the surface's prior mode when
//! it goes out of scope.

mod scope;

pub use scope::DrawScope;
