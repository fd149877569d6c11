use wgpu::util::DeviceExt;

use crate::gpu::render_context::RenderContext;
use crate::options::LightingOptions;

/// Lighting configuration shared across all shaders.
/// NOTE: Must match the WGSL `LightingUniform` layout exactly (64 bytes).
///
/// WGSL layout (auto-padded):
///   light1_dir: vec3<f32>     (offset 0,  align 16)
///   _pad1: f32                (offset 12)
///   light2_dir: vec3<f32>     (offset 16, align 16)
///   _pad2: f32                (offset 28)
///   light1_intensity: f32     (offset 32)
///   light2_intensity: f32     (offset 36)
///   ambient: f32              (offset 40)
///   specular_intensity: f32   (offset 44)
///   shininess: f32            (offset 48)
///   _pad3..5: f32             (offset 52)
///   Total: 64 bytes
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightingUniform {
    /// Key light direction (toward the light source).
    pub light1_dir: [f32; 3],
    /// Padding for GPU alignment.
    pub _pad1: f32,
    /// Fill light direction (toward the light source).
    pub light2_dir: [f32; 3],
    /// Padding for GPU alignment.
    pub _pad2: f32,
    /// Key light intensity.
    pub light1_intensity: f32,
    /// Fill light intensity.
    pub light2_intensity: f32,
    /// Ambient term.
    pub ambient: f32,
    /// Specular intensity (key light only).
    pub specular_intensity: f32,
    /// Specular shininess exponent.
    pub shininess: f32,
    /// Padding for GPU alignment.
    pub _pad3: [f32; 3],
}

impl LightingUniform {
    /// Build the uniform from option values.
    #[must_use]
    pub fn from_options(options: &LightingOptions) -> Self {
        Self {
            light1_dir: options.light1_dir,
            _pad1: 0.0,
            light2_dir: options.light2_dir,
            _pad2: 0.0,
            light1_intensity: options.light1_intensity,
            light2_intensity: options.light2_intensity,
            ambient: options.ambient,
            specular_intensity: options.specular_intensity,
            shininess: options.shininess,
            _pad3: [0.0; 3],
        }
    }
}

/// The lighting uniform plus its GPU resources, bound at group 1 by
/// every scene pipeline.
pub struct Lighting {
    /// CPU mirror of the GPU uniform.
    pub uniform: LightingUniform,
    /// Uniform buffer the bind group points at.
    pub buffer: wgpu::Buffer,
    /// Bind group layout (shared by every scene pipeline).
    pub layout: wgpu::BindGroupLayout,
    /// Bind group for group 1.
    pub bind_group: wgpu::BindGroup,
}

impl Lighting {
    /// Create the lighting resources from option values.
    #[must_use]
    pub fn new(context: &RenderContext, options: &LightingOptions) -> Self {
        let uniform = LightingUniform::from_options(options);

        let buffer = context.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Lighting Buffer"),
                contents: bytemuck::cast_slice(&[uniform]),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            },
        );

        let layout = context.device.create_bind_group_layout(
            &wgpu::BindGroupLayoutDescriptor {
                label: Some("Lighting Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            },
        );

        let bind_group =
            context
                .device
                .create_bind_group(&wgpu::BindGroupDescriptor {
                    layout: &layout,
                    entries: &[wgpu::BindGroupEntry {
                        binding: 0,
                        resource: buffer.as_entire_binding(),
                    }],
                    label: Some("Lighting Bind Group"),
                });

        Self {
            uniform,
            buffer,
            layout,
            bind_group,
        }
    }

    /// Refresh the uniform from options and write it to the GPU.
    pub fn apply_options(
        &mut self,
        queue: &wgpu::Queue,
        options: &LightingOptions,
    ) {
        self.uniform = LightingUniform::from_options(options);
        queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(&[
            self.uniform,
        ]));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_is_64_bytes() {
        assert_eq!(size_of::<LightingUniform>(), 64);
    }

    #[test]
    fn uniform_mirrors_options() {
        let options = LightingOptions::default();
        let uniform = LightingUniform::from_options(&options);
        assert_eq!(uniform.light1_dir, options.light1_dir);
        assert_eq!(uniform.ambient, options.ambient);
        assert_eq!(uniform.shininess, options.shininess);
    }
}
