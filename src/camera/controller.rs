use glam::Vec3;
use wgpu::util::DeviceExt;

use crate::camera::core::{Camera, CameraUniform};
use crate::camera::rig::{CameraMode, CameraMovement, CameraRotation};
use crate::gpu::render_context::RenderContext;

/// Default eye position: pulled back and above the floor, matching the
/// default scene layout.
const DEFAULT_POSITION: Vec3 = Vec3::new(15.0, 10.0, 10.0);

/// Camera controller bundling the pose, the active motion rig, and the
/// GPU resources the scene pipelines bind at group 0.
pub struct CameraController {
    /// The camera pose and projection parameters.
    pub camera: Camera,
    /// GPU uniform mirror of the camera state.
    pub uniform: CameraUniform,
    /// Uniform buffer the bind group points at.
    pub buffer: wgpu::Buffer,
    /// Bind group layout (shared by every scene pipeline).
    pub layout: wgpu::BindGroupLayout,
    /// Bind group for group 0.
    pub bind_group: wgpu::BindGroup,
    /// Movement speed in world units per second.
    pub move_speed: f32,

    mode: CameraMode,
    initial: (Vec3, Vec3, Vec3),
}

impl CameraController {
    /// Create a controller with the default pose, looking at the origin.
    #[must_use]
    pub fn new(context: &RenderContext) -> Self {
        let position = DEFAULT_POSITION;
        let look = (-position).normalize();
        let up = Vec3::Z;

        let camera = Camera {
            position,
            look,
            up,
            aspect: context.config.width as f32 / context.config.height as f32,
            fovy: 45.0,
            znear: 1.0,
            zfar: 200.0,
        };

        let mut uniform = CameraUniform::new();
        uniform.update_view_proj(&camera);

        let buffer = context.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Camera Buffer"),
                contents: bytemuck::cast_slice(&[uniform]),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            },
        );

        let layout = context.device.create_bind_group_layout(
            &wgpu::BindGroupLayoutDescriptor {
                label: Some("Camera Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX
                        | wgpu::ShaderStages::FRAGMENT,
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
                    label: Some("Camera Bind Group"),
                });

        Self {
            camera,
            uniform,
            buffer,
            layout,
            bind_group,
            move_speed: 10.0,
            mode: CameraMode::default(),
            initial: (position, look, up),
        }
    }

    /// The active camera mode.
    #[must_use]
    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    /// Switch to the given mode. The pose is retained across switches.
    pub fn set_mode(&mut self, mode: CameraMode) {
        self.mode = mode;
    }

    /// Switch to the next mode in the cycle order.
    pub fn cycle_mode(&mut self) {
        self.mode = self.mode.cycled();
    }

    /// Rotate the camera through the active rig. `angle` is in radians.
    pub fn rotate(&mut self, rotation: CameraRotation, angle: f32) {
        self.mode.rig().rotate(&mut self.camera, rotation, angle);
    }

    /// Move the camera through the active rig. `seconds` scales by the
    /// configured movement speed, so holding a key for one second covers
    /// `move_speed` world units.
    pub fn translate(&mut self, movement: CameraMovement, seconds: f32) {
        let amount = self.move_speed * seconds;
        self.mode.rig().translate(&mut self.camera, movement, amount);
    }

    /// Place the camera at an absolute position.
    pub fn set_position(&mut self, position: Vec3) {
        self.camera.position = position;
    }

    /// Set the orientation from look/up directions (normalized here).
    pub fn set_orientation(&mut self, look: Vec3, up: Vec3) {
        self.camera.look = look.normalize();
        self.camera.up = up.normalize();
    }

    /// Restore the initial pose. The mode is left alone.
    pub fn reset(&mut self) {
        let (position, look, up) = self.initial;
        self.camera.position = position;
        self.camera.look = look;
        self.camera.up = up;
    }

    /// Update the aspect ratio for a resized viewport.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.camera.aspect = width as f32 / height as f32;
        }
    }

    /// Refresh the uniform from the camera and write it to the GPU.
    pub fn update_gpu(&mut self, queue: &wgpu::Queue) {
        self.uniform.update_view_proj(&self.camera);
        queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(&[
            self.uniform,
        ]));
    }
}
