use serde::{Deserialize, Serialize};

use crate::camera::rig::CameraMode;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Camera projection and movement parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    /// Movement speed in world units per second.
    pub move_speed: f32,
    /// Camera mode at startup.
    pub mode: CameraMode,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 45.0,
            znear: 1.0,
            zfar: 200.0,
            move_speed: 10.0,
            mode: CameraMode::Flight,
        }
    }
}
