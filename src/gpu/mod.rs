//! GPU plumbing: device/surface ownership, shader composition, and
//! texture helpers.

/// Growable GPU buffers for per-frame instance data.
pub mod dynamic_buffer;
/// Core wgpu resources (device, queue, surface, configuration).
pub mod render_context;
/// naga_oil composer with the shared `camera`/`lighting` WGSL modules.
pub mod shader_composer;
/// Depth target and procedural checkerboard texture creation.
pub mod texture;

pub use render_context::{RenderContext, RenderContextError};
pub use shader_composer::{ShaderComposeError, ShaderComposer};
