use crate::scene::DrawCmd;

/// GPU-submission seam.
///
/// The surface hands fully canonicalized primitives — positions rounded,
/// colors resolved, render state attached — to this one method; everything
/// renderer-specific lives behind it. Tests implement it with a recording
/// backend that just captures commands.
pub trait RendererBackend {
    fn submit(&mut self, cmd: &DrawCmd);
}
