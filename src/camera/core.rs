use glam::{Mat4, Vec3};

/// Perspective camera defined by a position, two unit direction vectors,
/// and projection parameters.
///
/// Unlike a target-point camera, `look` is a *direction*: the look-at
/// target is synthesized as `position + look`, so translating the camera
/// never changes where it faces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub position: Vec3,
    /// Unit direction the camera is facing.
    pub look: Vec3,
    /// Unit up direction.
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Camera {
    /// The view matrix for the current pose.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.look, self.up)
    }

    /// The projection matrix.
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        // perspective_rh already uses [0,1] depth range (wgpu/Vulkan
        // convention)
        Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    /// The combined view-projection matrix.
    #[must_use]
    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer holding the view-projection matrix and camera
/// metadata. Must match the WGSL `CameraUniform` layout (96 bytes).
pub struct CameraUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Viewport aspect ratio.
    pub aspect: f32,
    /// Camera forward direction.
    pub forward: [f32; 3],
    /// Vertical field of view in degrees.
    pub fovy: f32,
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a new camera uniform with identity view-projection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            aspect: 1.6,
            forward: [0.0, 1.0, 0.0],
            fovy: 45.0,
        }
    }

    /// Update uniform fields from the given camera's current state.
    pub fn update_view_proj(&mut self, camera: &Camera) {
        self.view_proj = camera.view_projection().to_cols_array_2d();
        self.position = camera.position.to_array();
        self.aspect = camera.aspect;
        self.forward = camera.look.normalize_or_zero().to_array();
        self.fovy = camera.fovy;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_camera() -> Camera {
        Camera {
            position: Vec3::new(15.0, 10.0, 10.0),
            look: Vec3::new(-15.0, -10.0, -10.0).normalize(),
            up: Vec3::Z,
            aspect: 1.5,
            fovy: 45.0,
            znear: 1.0,
            zfar: 200.0,
        }
    }

    #[test]
    fn view_matrix_targets_position_plus_look() {
        let cam = test_camera();
        let expected = Mat4::look_at_rh(
            cam.position,
            cam.position + cam.look,
            cam.up,
        );
        assert_eq!(cam.view_matrix(), expected);
    }

    #[test]
    fn view_matrix_maps_eye_to_origin() {
        let cam = test_camera();
        let eye = cam.view_matrix().transform_point3(cam.position);
        assert!(eye.length() < 1e-4);
    }

    #[test]
    fn point_ahead_projects_to_clip_center() {
        let cam = test_camera();
        // A point straight ahead of the eye lands on the -Z view axis and
        // projects to the clip-space center with positive depth.
        let ahead = cam.position + cam.look * 50.0;
        let clip = cam.view_projection().project_point3(ahead);
        assert!(clip.x.abs() < 1e-4);
        assert!(clip.y.abs() < 1e-4);
        assert!(clip.z > 0.0 && clip.z < 1.0);
    }

    #[test]
    fn uniform_reflects_camera_state() {
        let cam = test_camera();
        let mut uniform = CameraUniform::new();
        uniform.update_view_proj(&cam);

        assert_eq!(uniform.position, cam.position.to_array());
        assert_eq!(uniform.aspect, cam.aspect);
        assert_eq!(uniform.fovy, cam.fovy);
        assert_eq!(
            uniform.view_proj,
            cam.view_projection().to_cols_array_2d()
        );
    }

    #[test]
    fn uniform_is_96_bytes() {
        assert_eq!(size_of::<CameraUniform>(), 96);
    }
}
