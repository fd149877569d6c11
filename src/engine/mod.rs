//! The scene engine: GPU setup, command dispatch, and the per-frame
//! update/render loop.

pub mod command;
mod input;
mod options;

pub use command::SceneCommand;

use crate::camera::controller::CameraController;
use crate::error::TankyardError;
use crate::gpu::render_context::RenderContext;
use crate::gpu::shader_composer::ShaderComposer;
use crate::gpu::texture::DepthTexture;
use crate::input::processor::{MAX_SENSITIVITY, MIN_SENSITIVITY};
use crate::input::InputProcessor;
use crate::options::Options;
use crate::renderer::floor::FloorRenderer;
use crate::renderer::lighting::Lighting;
use crate::renderer::tank::TankRenderer;
use crate::scene::Scene;
use crate::util::frame_timing::FrameTiming;

/// Clear color: cornflower blue (sRGB 100, 149, 237) expressed in
/// linear terms for the sRGB surface.
const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.127_44,
    g: 0.300_54,
    b: 0.846_87,
    a: 1.0,
};

/// Owns the GPU context, the scene, and every renderer, and dispatches
/// all interactive commands.
pub struct SceneEngine {
    pub(crate) context: RenderContext,
    pub(crate) depth: DepthTexture,
    pub(crate) camera_controller: CameraController,
    pub(crate) lighting: Lighting,
    pub(crate) scene: Scene,
    pub(crate) floor_renderer: FloorRenderer,
    pub(crate) tank_renderer: TankRenderer,
    pub(crate) input: InputProcessor,
    pub(crate) frame_timing: FrameTiming,
    pub(crate) options: Options,
}

impl SceneEngine {
    /// Create an engine rendering to the given window surface.
    ///
    /// # Errors
    ///
    /// Returns [`TankyardError`] if GPU initialization or shader
    /// composition fails.
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        size: (u32, u32),
        options: Options,
    ) -> Result<Self, TankyardError> {
        let context = RenderContext::new(window, size).await?;
        let mut composer = ShaderComposer::new()?;

        let depth =
            DepthTexture::new(&context.device, size.0, size.1);
        let camera_controller = CameraController::new(&context);
        let lighting = Lighting::new(&context, &options.lighting);
        let scene = Scene::from_options(&options.scene);

        let floor_renderer = FloorRenderer::new(
            &context,
            &mut composer,
            &camera_controller.layout,
            &lighting.layout,
            &scene.floor,
            &options.scene,
        )?;
        let tank_renderer = TankRenderer::new(
            &context,
            &mut composer,
            &camera_controller.layout,
            &lighting.layout,
        )?;

        let input = InputProcessor::new(size.0, size.1);

        let mut engine = Self {
            context,
            depth,
            camera_controller,
            lighting,
            scene,
            floor_renderer,
            tank_renderer,
            input,
            frame_timing: FrameTiming::new(),
            options,
        };
        engine.apply_options();
        Ok(engine)
    }

    /// Execute one command. The single dispatch point for keyboard,
    /// mouse, and programmatic callers.
    pub fn execute(&mut self, command: SceneCommand) {
        match command {
            SceneCommand::RotateCamera { rotation, angle } => {
                self.camera_controller.rotate(rotation, angle);
            }
            SceneCommand::MoveCamera { movement, amount } => {
                self.camera_controller.translate(movement, amount);
            }
            SceneCommand::SetCameraMode { mode } => {
                self.camera_controller.set_mode(mode);
                self.options.camera.mode = mode;
            }
            SceneCommand::CycleCameraMode => {
                self.camera_controller.cycle_mode();
                self.options.camera.mode = self.camera_controller.mode();
                log::info!(
                    "camera mode: {:?}",
                    self.camera_controller.mode()
                );
            }
            SceneCommand::ResetCamera => self.camera_controller.reset(),
            SceneCommand::ToggleMouseInvert => {
                let inverted = !self.options.controls.invert_mouse;
                self.options.controls.invert_mouse = inverted;
                self.input.set_invert_mouse(inverted);
                log::info!("mouse invert: {inverted}");
            }
            SceneCommand::AdjustSensitivity { delta } => {
                let adjusted = i16::from(self.options.controls.sensitivity)
                    + i16::from(delta);
                let clamped = adjusted.clamp(
                    i16::from(MIN_SENSITIVITY),
                    i16::from(MAX_SENSITIVITY),
                ) as u8;
                self.options.controls.sensitivity = clamped;
                self.input.set_sensitivity(clamped);
            }
            SceneCommand::ToggleOrbit => {
                self.scene.orbit_paused = !self.scene.orbit_paused;
                log::info!(
                    "orbit {}",
                    if self.scene.orbit_paused {
                        "paused"
                    } else {
                        "running"
                    }
                );
            }
        }
    }

    /// Per-frame update: drain held movement, advance the scene, and
    /// refresh GPU state. `dt` is the frame duration in seconds.
    pub fn update(&mut self, dt: f32) {
        for cmd in self.input.movement_commands(dt) {
            self.execute(cmd);
        }

        self.scene.update(dt);
        self.tank_renderer
            .write_instances(&self.context, &self.scene.tanks);
        self.camera_controller.update_gpu(&self.context.queue);
    }

    /// Render one frame: clear, draw the floor, draw the tanks.
    ///
    /// # Errors
    ///
    /// Returns [`wgpu::SurfaceError`] when the swapchain needs
    /// recreation (the host resizes and retries).
    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let frame = self.context.get_next_frame()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self.context.create_encoder();
        {
            let mut render_pass =
                encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("Scene Pass"),
                    color_attachments: &[Some(
                        wgpu::RenderPassColorAttachment {
                            view: &view,
                            resolve_target: None,
                            ops: wgpu::Operations {
                                load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                                store: wgpu::StoreOp::Store,
                            },
                            depth_slice: None,
                        },
                    )],
                    depth_stencil_attachment: Some(
                        wgpu::RenderPassDepthStencilAttachment {
                            view: &self.depth.view,
                            depth_ops: Some(wgpu::Operations {
                                load: wgpu::LoadOp::Clear(1.0),
                                store: wgpu::StoreOp::Store,
                            }),
                            stencil_ops: None,
                        },
                    ),
                    timestamp_writes: None,
                    occlusion_query_set: None,
                });

            render_pass.set_bind_group(
                0,
                &self.camera_controller.bind_group,
                &[],
            );
            render_pass.set_bind_group(1, &self.lighting.bind_group, &[]);

            self.floor_renderer.draw(&mut render_pass);
            self.tank_renderer.draw(&mut render_pass);
        }

        self.context.submit(encoder);
        frame.present();
        self.frame_timing.end_frame();
        Ok(())
    }

    /// Resize the surface, depth buffer, camera aspect, and input
    /// center.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context.resize(width, height);
        self.depth =
            DepthTexture::new(&self.context.device, width, height);
        self.camera_controller.resize(width, height);
        self.input.set_center(width, height);
    }

    /// Smoothed frames per second.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.frame_timing.fps()
    }

    /// One-line status summary for the diagnostics sink.
    #[must_use]
    pub fn status_line(&self) -> String {
        let pos = self.camera_controller.camera.position;
        format!(
            "{:.0} fps | {:?} | pos ({:.1}, {:.1}, {:.1}) | sens {}",
            self.fps(),
            self.camera_controller.mode(),
            pos.x,
            pos.y,
            pos.z,
            self.input.sensitivity(),
        )
    }

    /// The viewport center the host recenters the cursor to.
    #[must_use]
    pub fn cursor_center(&self) -> (f32, f32) {
        let center = self.input.center();
        (center.x, center.y)
    }
}
