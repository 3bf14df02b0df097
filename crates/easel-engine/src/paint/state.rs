/// Builds the source-alpha blend the surface defaults to
/// (`src = SrcAlpha`, `dst = OneMinusSrcAlpha`).
pub fn source_alpha_blend() -> wgpu::BlendState {
    wgpu::BlendState {
        color: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::SrcAlpha,
            dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
            operation: wgpu::BlendOperation::Add,
        },
        alpha: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::One,
            dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
            operation: wgpu::BlendOperation::Add,
        },
    }
}

/// Blend + depth state attached to a canonical primitive.
///
/// Composed per draw call; the surface never mutates a global render state.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderState {
    pub blend: wgpu::BlendState,
    pub depth_test: bool,
}

impl Default for RenderState {
    #[inline]
    fn default() -> Self {
        Self {
            blend: source_alpha_blend(),
            depth_test: false,
        }
    }
}
