//! Camera system: pose math, motion rigs, and the GPU-facing controller.
//!
//! The camera is a position plus two unit direction vectors (`look`,
//! `up`). Rigs mutate that pose in response to enum-dispatched rotation
//! and movement requests; the controller owns the pose, the active rig
//! mode, and the uniform buffer the shaders read.

/// Camera controller bundling pose, mode, and GPU resources.
pub mod controller;
/// Core camera struct and GPU uniform types.
pub mod core;
/// Motion rigs and the rotation/movement request enums.
pub mod rig;

pub use controller::CameraController;
pub use core::{Camera, CameraUniform};
pub use rig::{CameraMode, CameraMovement, CameraRotation};
