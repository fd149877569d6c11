use wgpu::util::DeviceExt;

use crate::gpu::dynamic_buffer::DynamicBuffer;
use crate::gpu::render_context::RenderContext;
use crate::gpu::shader_composer::{ShaderComposeError, ShaderComposer};
use crate::renderer::pipeline_util;
use crate::scene::mesh::{Mesh, MeshVertex};
use crate::scene::tank::Tank;

/// Body color for the orbiting tank.
const ORBITER_BODY: [f32; 4] = [0.45, 0.47, 0.30, 1.0];
/// Body color for parked tanks.
const PARKED_BODY: [f32; 4] = [0.36, 0.38, 0.42, 1.0];

/// Per-instance data: column-major model matrix plus body color.
/// Must match the `InstanceInput` locations in `tank.wgsl`.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TankInstance {
    /// Model-to-world matrix columns.
    pub model: [[f32; 4]; 4],
    /// Body color (RGBA).
    pub color: [f32; 4],
}

impl TankInstance {
    const ATTRS: [wgpu::VertexAttribute; 5] = wgpu::vertex_attr_array![
        3 => Float32x4,
        4 => Float32x4,
        5 => Float32x4,
        6 => Float32x4,
        7 => Float32x4,
    ];

    /// Instance buffer layout (one entry per tank).
    #[must_use]
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }

    /// Build an instance from a tank's current state.
    #[must_use]
    pub fn from_tank(tank: &Tank) -> Self {
        Self {
            model: tank.world_matrix().to_cols_array_2d(),
            color: if tank.orbit.is_some() {
                ORBITER_BODY
            } else {
                PARKED_BODY
            },
        }
    }
}

/// Instanced renderer for the shared tank mesh.
pub struct TankRenderer {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    instances: DynamicBuffer,
    instance_count: u32,
}

impl TankRenderer {
    /// Build the tank pipeline and upload the shared mesh.
    ///
    /// # Errors
    ///
    /// Returns [`ShaderComposeError`] if the tank shader fails to
    /// compose.
    pub fn new(
        context: &RenderContext,
        composer: &mut ShaderComposer,
        camera_layout: &wgpu::BindGroupLayout,
        lighting_layout: &wgpu::BindGroupLayout,
    ) -> Result<Self, ShaderComposeError> {
        let mesh = Mesh::tank();

        let vertex_buffer = context.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Tank Vertices"),
                contents: bytemuck::cast_slice(&mesh.vertices),
                usage: wgpu::BufferUsages::VERTEX,
            },
        );
        let index_buffer = context.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Tank Indices"),
                contents: bytemuck::cast_slice(&mesh.indices),
                usage: wgpu::BufferUsages::INDEX,
            },
        );

        let instances = DynamicBuffer::new(
            &context.device,
            "Tank Instances",
            size_of::<TankInstance>() * 4,
            wgpu::BufferUsages::VERTEX,
        );

        let pipeline = pipeline_util::create_scene_pipeline(
            context,
            "Tank Pipeline",
            include_str!("../../assets/shaders/tank.wgsl"),
            "tank.wgsl",
            Some(wgpu::Face::Back),
            &[camera_layout, lighting_layout],
            &[MeshVertex::layout(), TankInstance::layout()],
            composer,
        )?;

        Ok(Self {
            pipeline,
            vertex_buffer,
            index_buffer,
            index_count: mesh.indices.len() as u32,
            instances,
            instance_count: 0,
        })
    }

    /// Rewrite the instance buffer from the current tank states.
    pub fn write_instances(
        &mut self,
        context: &RenderContext,
        tanks: &[Tank],
    ) {
        let data: Vec<TankInstance> =
            tanks.iter().map(TankInstance::from_tank).collect();
        let _ = self.instances.write(
            &context.device,
            &context.queue,
            &data,
        );
        self.instance_count = data.len() as u32;
    }

    /// Record the instanced tank draw. Camera/lighting bind groups must
    /// already be set.
    pub fn draw<'a>(&'a self, render_pass: &mut wgpu::RenderPass<'a>) {
        if self.instance_count == 0 {
            return;
        }
        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass
            .set_vertex_buffer(1, self.instances.buffer().slice(..));
        render_pass.set_index_buffer(
            self.index_buffer.slice(..),
            wgpu::IndexFormat::Uint32,
        );
        render_pass.draw_indexed(
            0..self.index_count,
            0,
            0..self.instance_count,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::tank::Orbit;
    use glam::Vec3;

    #[test]
    fn instance_carries_the_world_matrix() {
        let tank = Tank::static_at(Vec3::new(3.0, -2.0, 0.0));
        let instance = TankInstance::from_tank(&tank);
        // Translation lands in the fourth column.
        assert_eq!(instance.model[3], [3.0, -2.0, 0.0, 1.0]);
        assert_eq!(instance.color, PARKED_BODY);
    }

    #[test]
    fn orbiters_get_their_own_color() {
        let tank = Tank::orbiting(Orbit {
            radius: 8.0,
            height: 3.0,
            speed: 1.0,
        });
        assert_eq!(TankInstance::from_tank(&tank).color, ORBITER_BODY);
    }

    #[test]
    fn instance_stride_matches_attribute_span() {
        // 4 matrix columns + 1 color, all vec4.
        assert_eq!(size_of::<TankInstance>(), 80);
    }
}
