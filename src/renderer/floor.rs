use wgpu::util::DeviceExt;

use crate::gpu::render_context::RenderContext;
use crate::gpu::shader_composer::{ShaderComposeError, ShaderComposer};
use crate::gpu::texture::CheckerboardTexture;
use crate::options::SceneOptions;
use crate::renderer::pipeline_util;
use crate::scene::floor::Floor;
use crate::scene::mesh::MeshVertex;

/// Renders the ground plane: six vertices and a repeating checkerboard.
pub struct FloorRenderer {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    texture_bind_group: wgpu::BindGroup,
}

impl FloorRenderer {
    /// Build the floor pipeline, vertex buffer, and texture resources.
    ///
    /// # Errors
    ///
    /// Returns [`ShaderComposeError`] if the floor shader fails to
    /// compose.
    pub fn new(
        context: &RenderContext,
        composer: &mut ShaderComposer,
        camera_layout: &wgpu::BindGroupLayout,
        lighting_layout: &wgpu::BindGroupLayout,
        floor: &Floor,
        scene_options: &SceneOptions,
    ) -> Result<Self, ShaderComposeError> {
        let vertex_buffer = context.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Floor Vertices"),
                contents: bytemuck::cast_slice(&floor.vertices()),
                usage: wgpu::BufferUsages::VERTEX
                    | wgpu::BufferUsages::COPY_DST,
            },
        );

        let checkerboard = CheckerboardTexture::new(
            &context.device,
            &context.queue,
            scene_options.checker_squares,
            scene_options.checker_square_px,
        );

        let sampler =
            context.device.create_sampler(&wgpu::SamplerDescriptor {
                label: Some("Floor Sampler"),
                address_mode_u: wgpu::AddressMode::Repeat,
                address_mode_v: wgpu::AddressMode::Repeat,
                address_mode_w: wgpu::AddressMode::Repeat,
                mag_filter: wgpu::FilterMode::Linear,
                min_filter: wgpu::FilterMode::Linear,
                mipmap_filter: wgpu::FilterMode::Nearest,
                ..Default::default()
            });

        let texture_layout = context.device.create_bind_group_layout(
            &wgpu::BindGroupLayoutDescriptor {
                label: Some("Floor Texture Layout"),
                entries: &[
                    wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Texture {
                            sample_type: wgpu::TextureSampleType::Float {
                                filterable: true,
                            },
                            view_dimension: wgpu::TextureViewDimension::D2,
                            multisampled: false,
                        },
                        count: None,
                    },
                    wgpu::BindGroupLayoutEntry {
                        binding: 1,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Sampler(
                            wgpu::SamplerBindingType::Filtering,
                        ),
                        count: None,
                    },
                ],
            },
        );

        let texture_bind_group =
            context
                .device
                .create_bind_group(&wgpu::BindGroupDescriptor {
                    label: Some("Floor Texture Bind Group"),
                    layout: &texture_layout,
                    entries: &[
                        wgpu::BindGroupEntry {
                            binding: 0,
                            resource: wgpu::BindingResource::TextureView(
                                &checkerboard.view,
                            ),
                        },
                        wgpu::BindGroupEntry {
                            binding: 1,
                            resource: wgpu::BindingResource::Sampler(
                                &sampler,
                            ),
                        },
                    ],
                });

        // The floor quad reproduces the original clockwise-from-above
        // layout; render it double-sided rather than re-winding.
        let pipeline = pipeline_util::create_scene_pipeline(
            context,
            "Floor Pipeline",
            include_str!("../../assets/shaders/floor.wgsl"),
            "floor.wgsl",
            None,
            &[camera_layout, lighting_layout, &texture_layout],
            &[MeshVertex::layout()],
            composer,
        )?;

        Ok(Self {
            pipeline,
            vertex_buffer,
            texture_bind_group,
        })
    }

    /// Re-upload the vertex buffer after a floor size/tiling change.
    pub fn set_floor(&self, queue: &wgpu::Queue, floor: &Floor) {
        queue.write_buffer(
            &self.vertex_buffer,
            0,
            bytemuck::cast_slice(&floor.vertices()),
        );
    }

    /// Record the floor draw. Camera/lighting bind groups must already
    /// be set.
    pub fn draw<'a>(&'a self, render_pass: &mut wgpu::RenderPass<'a>) {
        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(2, &self.texture_bind_group, &[]);
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.draw(0..6, 0..1);
    }
}
