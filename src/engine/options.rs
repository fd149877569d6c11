//! Options methods for `SceneEngine`.

use super::SceneEngine;
use crate::options::Options;
use crate::scene::Scene;

impl SceneEngine {
    /// Read-only access to the current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Replace options and apply all changes to subsystems.
    pub fn set_options(&mut self, new: Options) {
        self.options = new;
        self.options.keybindings.rebuild_reverse_map();
        self.apply_options();
    }

    /// Push current option values to all subsystems (camera, controls,
    /// lighting, scene).
    pub fn apply_options(&mut self) {
        self.apply_camera();
        self.apply_controls();
        self.apply_lighting();
        self.apply_scene();
    }

    /// Push camera options to the controller.
    fn apply_camera(&mut self) {
        let co = &self.options.camera;
        self.camera_controller.camera.fovy = co.fovy;
        self.camera_controller.camera.znear = co.znear;
        self.camera_controller.camera.zfar = co.zfar;
        self.camera_controller.move_speed = co.move_speed;
        self.camera_controller.set_mode(co.mode);
    }

    /// Push control options to the input processor.
    fn apply_controls(&mut self) {
        let controls = &self.options.controls;
        self.input.set_sensitivity(controls.sensitivity);
        self.input.set_invert_mouse(controls.invert_mouse);
        // Write back the clamped value so saved presets stay in range.
        self.options.controls.sensitivity = self.input.sensitivity();
    }

    /// Push lighting options to the GPU uniform.
    fn apply_lighting(&mut self) {
        self.lighting
            .apply_options(&self.context.queue, &self.options.lighting);
    }

    /// Rebuild the scene from layout options. Orbit phase restarts;
    /// the pause flag survives.
    fn apply_scene(&mut self) {
        let paused = self.scene.orbit_paused;
        self.scene = Scene::from_options(&self.options.scene);
        self.scene.orbit_paused = paused;
        self.floor_renderer
            .set_floor(&self.context.queue, &self.scene.floor);
    }
}
