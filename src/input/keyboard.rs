use serde::{Deserialize, Serialize};

/// Engine-level actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// thrust_forward = "ArrowUp"
/// cycle_camera_mode = "KeyC"
/// ```
///
/// Movement actions are *held*: they act every frame from key-down to
/// key-up. The rest are discrete and fire once on key-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Slide left (held).
    StrafeLeft,
    /// Slide right (held).
    StrafeRight,
    /// Slide up (held).
    StrafeUp,
    /// Slide down (held).
    StrafeDown,
    /// Move forward (held).
    ThrustForward,
    /// Move backward (held).
    ThrustBackward,
    /// Switch to the next camera mode.
    CycleCameraMode,
    /// Restore the initial camera pose.
    ResetCamera,
    /// Pause / resume tank orbit animation.
    ToggleOrbit,
    /// Flip the mouse-look direction.
    ToggleMouseInvert,
}

impl KeyAction {
    /// Whether this action is held (movement) rather than discrete.
    #[must_use]
    pub fn is_movement(self) -> bool {
        matches!(
            self,
            Self::StrafeLeft
                | Self::StrafeRight
                | Self::StrafeUp
                | Self::StrafeDown
                | Self::ThrustForward
                | Self::ThrustBackward
        )
    }
}
