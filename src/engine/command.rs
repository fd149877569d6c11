//! The engine's complete interactive vocabulary.
//!
//! Every user-facing operation, whether triggered by a key press,
//! mouse movement, or programmatic call, is represented as a
//! `SceneCommand`.
//! Consumers construct commands and pass them to
//! [`SceneEngine::execute`](super::SceneEngine::execute).

use crate::camera::rig::{CameraMode, CameraMovement, CameraRotation};

/// A discrete or parameterized operation the engine can perform.
///
/// This is the single, centralized description of what the engine can do
/// interactively. The engine never cares *how* a command was triggered;
/// keyboard, mouse, and API all look identical:
///
/// ```ignore
/// engine.execute(SceneCommand::CycleCameraMode);
/// engine.execute(SceneCommand::MoveCamera {
///     movement: CameraMovement::ThrustForward,
///     amount: dt,
/// });
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SceneCommand {
    // ── Camera ──────────────────────────────────────────────────────
    /// Rotate the camera through the active rig.
    RotateCamera {
        /// Which way to turn.
        rotation: CameraRotation,
        /// Rotation amount in radians.
        angle: f32,
    },

    /// Move the camera through the active rig.
    MoveCamera {
        /// Which way to move.
        movement: CameraMovement,
        /// Duration in seconds; the controller scales by its movement
        /// speed.
        amount: f32,
    },

    /// Select a specific camera mode.
    SetCameraMode {
        /// The mode to activate.
        mode: CameraMode,
    },

    /// Switch to the next camera mode in the cycle order.
    CycleCameraMode,

    /// Restore the initial camera pose.
    ResetCamera,

    // ── Controls ────────────────────────────────────────────────────
    /// Flip the mouse-look direction.
    ToggleMouseInvert,

    /// Nudge the mouse-look sensitivity (clamped to 1..=10).
    AdjustSensitivity {
        /// Signed step, usually ±1 from the scroll wheel.
        delta: i8,
    },

    // ── Scene ───────────────────────────────────────────────────────
    /// Pause / resume tank orbit animation.
    ToggleOrbit,
}
