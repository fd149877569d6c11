//! Per-object renderers and the GPU state they share.
//!
//! Each renderer owns one pipeline plus the buffers and bind groups its
//! object needs. The camera (group 0) and lighting (group 1) bind groups
//! are set once per pass by the engine; renderers bind anything beyond
//! that themselves.

/// Ground-plane renderer (textured quad).
pub mod floor;
/// Lighting uniform and its GPU resources.
pub mod lighting;
/// Shared pipeline state helpers.
pub mod pipeline_util;
/// Instanced tank renderer.
pub mod tank;

pub use floor::FloorRenderer;
pub use lighting::{Lighting, LightingUniform};
pub use tank::TankRenderer;
