//! Motion rigs: how rotation and movement requests mutate the camera pose.
//!
//! A [`Rig`] turns the six primitive mutations (thrust, two strafes, yaw,
//! pitch, roll) into pose changes. [`FlightRig`] is body-relative free
//! flight; [`AbsoluteRig`] moves and turns about fixed world axes. The
//! provided `rotate`/`translate` methods own the request-enum dispatch and
//! its sign conventions, so every rig shares them.

use glam::{Mat3, Vec3};
use serde::{Deserialize, Serialize};

use super::core::Camera;

/// A discrete camera rotation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraRotation {
    /// Turn left around the up axis.
    YawLeft,
    /// Turn right around the up axis.
    YawRight,
    /// Tip the view upward.
    PitchUp,
    /// Tip the view downward.
    PitchDown,
    /// Bank clockwise around the look axis.
    RollClockwise,
    /// Bank counter-clockwise around the look axis.
    RollCounterClockwise,
}

/// A discrete camera movement request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraMovement {
    /// Slide toward the left-hand side.
    StrafeLeft,
    /// Slide toward the right-hand side.
    StrafeRight,
    /// Slide upward.
    StrafeUp,
    /// Slide downward.
    StrafeDown,
    /// Move forward.
    ThrustForward,
    /// Move backward.
    ThrustBackward,
}

/// Which rig interprets rotation and movement requests.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum CameraMode {
    /// Body-relative free flight: all axes follow the current pose.
    #[default]
    Flight,
    /// World-axis motion: fixed axes regardless of where the camera faces.
    Absolute,
}

impl CameraMode {
    /// The rig implementing this mode.
    #[must_use]
    pub fn rig(self) -> &'static dyn Rig {
        match self {
            Self::Flight => &FlightRig,
            Self::Absolute => &AbsoluteRig,
        }
    }

    /// The next mode in the cycle order.
    #[must_use]
    pub fn cycled(self) -> Self {
        match self {
            Self::Flight => Self::Absolute,
            Self::Absolute => Self::Flight,
        }
    }
}

/// Primitive pose mutations plus the shared request dispatch.
pub trait Rig {
    /// Move along the rig's forward axis.
    fn thrust(&self, camera: &mut Camera, amount: f32);
    /// Move along the rig's left axis (positive = left).
    fn strafe_horizontal(&self, camera: &mut Camera, amount: f32);
    /// Move along the rig's up axis (positive = up).
    fn strafe_vertical(&self, camera: &mut Camera, amount: f32);
    /// Turn around the rig's up axis.
    fn yaw(&self, camera: &mut Camera, angle: f32);
    /// Turn around the rig's left axis.
    fn pitch(&self, camera: &mut Camera, angle: f32);
    /// Bank around the rig's forward axis.
    fn roll(&self, camera: &mut Camera, angle: f32);

    /// Rotate the camera. `angle` is in radians; the request variant
    /// carries the sign.
    fn rotate(
        &self,
        camera: &mut Camera,
        rotation: CameraRotation,
        angle: f32,
    ) {
        match rotation {
            CameraRotation::YawLeft => self.yaw(camera, -angle),
            CameraRotation::YawRight => self.yaw(camera, angle),
            CameraRotation::PitchUp => self.pitch(camera, -angle),
            CameraRotation::PitchDown => self.pitch(camera, angle),
            CameraRotation::RollClockwise => self.roll(camera, angle),
            CameraRotation::RollCounterClockwise => self.roll(camera, -angle),
        }
    }

    /// Move the camera in the given direction by `amount` world units.
    fn translate(
        &self,
        camera: &mut Camera,
        movement: CameraMovement,
        amount: f32,
    ) {
        match movement {
            CameraMovement::StrafeLeft => {
                self.strafe_horizontal(camera, amount);
            }
            CameraMovement::StrafeRight => {
                self.strafe_horizontal(camera, -amount);
            }
            CameraMovement::StrafeUp => self.strafe_vertical(camera, amount),
            CameraMovement::StrafeDown => {
                self.strafe_vertical(camera, -amount);
            }
            CameraMovement::ThrustForward => self.thrust(camera, amount),
            CameraMovement::ThrustBackward => self.thrust(camera, -amount),
        }
    }
}

/// Body-relative free flight.
///
/// The left axis is derived as `up × look`, so strafing and pitching stay
/// consistent with whatever orientation the camera has rolled into.
pub struct FlightRig;

impl FlightRig {
    fn left(camera: &Camera) -> Vec3 {
        camera.up.cross(camera.look).normalize()
    }
}

impl Rig for FlightRig {
    fn thrust(&self, camera: &mut Camera, amount: f32) {
        camera.look = camera.look.normalize();
        camera.position += camera.look * amount;
    }

    fn strafe_horizontal(&self, camera: &mut Camera, amount: f32) {
        camera.position += Self::left(camera) * amount;
    }

    fn strafe_vertical(&self, camera: &mut Camera, amount: f32) {
        camera.up = camera.up.normalize();
        camera.position += camera.up * amount;
    }

    fn yaw(&self, camera: &mut Camera, angle: f32) {
        camera.look = camera.look.normalize();
        camera.look = Mat3::from_axis_angle(camera.up, angle) * camera.look;
    }

    fn pitch(&self, camera: &mut Camera, angle: f32) {
        camera.look = camera.look.normalize();
        let left = Self::left(camera);

        // Rotate look and up together so they stay orthogonal.
        let rotation = Mat3::from_axis_angle(left, angle);
        camera.look = rotation * camera.look;
        camera.up = rotation * camera.up;
    }

    fn roll(&self, camera: &mut Camera, angle: f32) {
        camera.up = camera.up.normalize();
        camera.up = Mat3::from_axis_angle(camera.look, angle) * camera.up;
    }
}

/// World-axis motion in the scene's Z-up frame.
///
/// Translation and rotation use fixed axes: left is world `-X`, forward
/// is world `+Y`, up is world `+Z`. Useful for inspecting the scene
/// without the disorientation free flight can accumulate.
pub struct AbsoluteRig;

impl Rig for AbsoluteRig {
    fn thrust(&self, camera: &mut Camera, amount: f32) {
        camera.position += Vec3::Y * amount;
    }

    fn strafe_horizontal(&self, camera: &mut Camera, amount: f32) {
        camera.position += Vec3::NEG_X * amount;
    }

    fn strafe_vertical(&self, camera: &mut Camera, amount: f32) {
        camera.position += Vec3::Z * amount;
    }

    fn yaw(&self, camera: &mut Camera, angle: f32) {
        camera.look = Mat3::from_axis_angle(Vec3::Z, angle) * camera.look;
    }

    fn pitch(&self, camera: &mut Camera, angle: f32) {
        let rotation = Mat3::from_axis_angle(Vec3::NEG_X, angle);
        camera.look = rotation * camera.look;
        camera.up = rotation * camera.up;
    }

    fn roll(&self, camera: &mut Camera, angle: f32) {
        camera.up = Mat3::from_axis_angle(Vec3::Y, angle) * camera.up;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn camera() -> Camera {
        Camera {
            position: Vec3::new(15.0, 10.0, 10.0),
            look: Vec3::NEG_Y,
            up: Vec3::Z,
            aspect: 1.5,
            fovy: 45.0,
            znear: 1.0,
            zfar: 200.0,
        }
    }

    fn assert_close(a: Vec3, b: Vec3) {
        assert!(
            (a - b).length() < EPS,
            "expected {b:?}, got {a:?} (delta {})",
            (a - b).length()
        );
    }

    #[test]
    fn flight_thrust_moves_along_look() {
        let mut cam = camera();
        FlightRig.thrust(&mut cam, 3.0);
        assert_close(cam.position, Vec3::new(15.0, 7.0, 10.0));
    }

    #[test]
    fn flight_strafe_moves_along_cross_product() {
        let mut cam = camera();
        let left = cam.up.cross(cam.look).normalize();
        FlightRig.strafe_horizontal(&mut cam, 2.0);
        assert_close(cam.position, Vec3::new(15.0, 10.0, 10.0) + left * 2.0);
    }

    #[test]
    fn flight_yaw_preserves_up() {
        let mut cam = camera();
        FlightRig.yaw(&mut cam, 0.5);
        assert_close(cam.up, Vec3::Z);
        assert!((cam.look.length() - 1.0).abs() < EPS);
    }

    #[test]
    fn flight_yaw_rotates_look_by_angle() {
        let mut cam = camera();
        let before = cam.look;
        FlightRig.yaw(&mut cam, 0.5);
        let cos = before.dot(cam.look);
        assert!((cos - 0.5f32.cos()).abs() < EPS);
    }

    #[test]
    fn flight_pitch_corotates_look_and_up() {
        let mut cam = camera();
        FlightRig.pitch(&mut cam, 0.7);
        // Orthogonality and unit length survive the rotation.
        assert!(cam.look.dot(cam.up).abs() < EPS);
        assert!((cam.look.length() - 1.0).abs() < EPS);
        assert!((cam.up.length() - 1.0).abs() < EPS);
        // Look actually moved.
        assert!(cam.look.dot(Vec3::NEG_Y) < 1.0 - EPS);
    }

    #[test]
    fn flight_roll_preserves_look() {
        let mut cam = camera();
        FlightRig.roll(&mut cam, 0.4);
        assert_close(cam.look, Vec3::NEG_Y);
        assert!((cam.up.length() - 1.0).abs() < EPS);
    }

    #[test]
    fn composite_rotations_stay_orthonormal() {
        let mut cam = camera();
        for _ in 0..100 {
            FlightRig.yaw(&mut cam, 0.13);
            FlightRig.pitch(&mut cam, -0.07);
            FlightRig.roll(&mut cam, 0.05);
        }
        assert!((cam.look.length() - 1.0).abs() < 1e-3);
        assert!((cam.up.length() - 1.0).abs() < 1e-3);
        assert!(cam.look.dot(cam.up).abs() < 1e-3);
    }

    #[test]
    fn rotate_dispatch_signs() {
        let mut left_cam = camera();
        let mut manual = camera();
        FlightRig.rotate(&mut left_cam, CameraRotation::YawLeft, 0.3);
        FlightRig.yaw(&mut manual, -0.3);
        assert_close(left_cam.look, manual.look);

        let mut up_cam = camera();
        let mut manual = camera();
        FlightRig.rotate(&mut up_cam, CameraRotation::PitchUp, 0.3);
        FlightRig.pitch(&mut manual, -0.3);
        assert_close(up_cam.look, manual.look);

        let mut cw_cam = camera();
        let mut manual = camera();
        FlightRig.rotate(&mut cw_cam, CameraRotation::RollClockwise, 0.3);
        FlightRig.roll(&mut manual, 0.3);
        assert_close(cw_cam.up, manual.up);
    }

    #[test]
    fn translate_dispatch_signs() {
        let mut right_cam = camera();
        let mut manual = camera();
        FlightRig.translate(&mut right_cam, CameraMovement::StrafeRight, 2.0);
        FlightRig.strafe_horizontal(&mut manual, -2.0);
        assert_close(right_cam.position, manual.position);

        let mut back_cam = camera();
        let mut manual = camera();
        FlightRig.translate(
            &mut back_cam,
            CameraMovement::ThrustBackward,
            2.0,
        );
        FlightRig.thrust(&mut manual, -2.0);
        assert_close(back_cam.position, manual.position);
    }

    #[test]
    fn absolute_translation_uses_world_axes() {
        let mut cam = camera();
        // Face somewhere arbitrary; absolute motion must not care.
        FlightRig.yaw(&mut cam, 1.2);
        let start = cam.position;

        AbsoluteRig.thrust(&mut cam, 1.0);
        assert_close(cam.position, start + Vec3::Y);

        AbsoluteRig.strafe_horizontal(&mut cam, 1.0);
        assert_close(cam.position, start + Vec3::Y - Vec3::X);

        AbsoluteRig.strafe_vertical(&mut cam, 1.0);
        assert_close(cam.position, start + Vec3::Y - Vec3::X + Vec3::Z);
    }

    #[test]
    fn absolute_yaw_turns_about_world_z() {
        let mut cam = camera();
        cam.look = Vec3::Y;
        AbsoluteRig.yaw(&mut cam, std::f32::consts::FRAC_PI_2);
        assert_close(cam.look, Vec3::NEG_X);
        // Up stays on the world axis.
        assert_close(cam.up, Vec3::Z);
    }

    #[test]
    fn mode_cycle_round_trips() {
        assert_eq!(CameraMode::Flight.cycled(), CameraMode::Absolute);
        assert_eq!(CameraMode::Absolute.cycled(), CameraMode::Flight);
    }
}
