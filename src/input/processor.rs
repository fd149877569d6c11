//! Converts raw platform events into engine commands.
//!
//! The `InputProcessor` owns all transient input state (cursor position,
//! right-button tracking, the held-movement set) and the tuning knobs the
//! mouse-look scheme needs (sensitivity, inversion). It is the only thing
//! that sits between raw window events and the engine's
//! [`execute`](crate::SceneEngine::execute) method.
//!
//! # Mouse look
//!
//! Look is center-relative: each cursor sample is compared against the
//! viewport center, a cursor right of center yields yaw and one below
//! center yields pitch, and the host recenters the OS cursor after
//! dispatch so the camera does not keep turning. Holding the right button
//! converts horizontal offsets into roll. Every step turns by
//! `sensitivity / 200` radians; the scroll wheel tunes `sensitivity`
//! between 1 and 10.

use std::collections::HashSet;

use glam::Vec2;

use super::event::{InputEvent, MouseButton};
use super::keyboard::KeyAction;
use crate::camera::rig::{CameraMovement, CameraRotation};
use crate::engine::command::SceneCommand;

/// Lowest selectable mouse sensitivity.
pub const MIN_SENSITIVITY: u8 = 1;
/// Highest selectable mouse sensitivity.
pub const MAX_SENSITIVITY: u8 = 10;

/// Converts raw window events into [`SceneCommand`]s.
pub struct InputProcessor {
    /// Viewport center in physical pixels.
    center: Vec2,
    /// Whether the right mouse button is held (roll mode).
    right_pressed: bool,
    /// Movement actions currently held down.
    held: HashSet<KeyAction>,
    /// Mouse-look sensitivity, clamped to 1..=10.
    sensitivity: u8,
    /// Whether mouse-look directions are flipped.
    invert_mouse: bool,
}

impl InputProcessor {
    /// Create a processor for a viewport of the given size.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            center: Vec2::new(width as f32 / 2.0, height as f32 / 2.0),
            right_pressed: false,
            held: HashSet::new(),
            sensitivity: 5,
            invert_mouse: true,
        }
    }

    /// Update the viewport center after a resize.
    pub fn set_center(&mut self, width: u32, height: u32) {
        self.center = Vec2::new(width as f32 / 2.0, height as f32 / 2.0);
    }

    /// The viewport center the host should recenter the cursor to.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        self.center
    }

    /// Current mouse-look sensitivity (1..=10).
    #[must_use]
    pub fn sensitivity(&self) -> u8 {
        self.sensitivity
    }

    /// Set the sensitivity, clamping to the valid range.
    pub fn set_sensitivity(&mut self, sensitivity: u8) {
        self.sensitivity =
            sensitivity.clamp(MIN_SENSITIVITY, MAX_SENSITIVITY);
    }

    /// Whether mouse-look directions are flipped.
    #[must_use]
    pub fn invert_mouse(&self) -> bool {
        self.invert_mouse
    }

    /// Set mouse-look inversion.
    pub fn set_invert_mouse(&mut self, invert: bool) {
        self.invert_mouse = invert;
    }

    /// The rotation step for one mouse-look sample, in radians.
    #[must_use]
    pub fn look_step(&self) -> f32 {
        f32::from(self.sensitivity) / 200.0
    }

    /// Process a raw input event and return the resulting commands
    /// (zero, one, or two).
    pub fn handle_event(&mut self, event: InputEvent) -> Vec<SceneCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => {
                self.handle_cursor_moved(x, y)
            }
            InputEvent::MouseButton { button, pressed } => {
                self.handle_mouse_button(button, pressed)
            }
            InputEvent::Scroll { delta } => {
                if delta > 0.0 {
                    vec![SceneCommand::AdjustSensitivity { delta: 1 }]
                } else if delta < 0.0 {
                    vec![SceneCommand::AdjustSensitivity { delta: -1 }]
                } else {
                    Vec::new()
                }
            }
        }
    }

    /// Record a movement key transition (press or release).
    pub fn set_movement_held(&mut self, action: KeyAction, pressed: bool) {
        if !action.is_movement() {
            return;
        }
        if pressed {
            let _ = self.held.insert(action);
        } else {
            let _ = self.held.remove(&action);
        }
    }

    /// Drain the held movement set into per-frame movement commands.
    /// `dt` is the frame duration in seconds.
    #[must_use]
    pub fn movement_commands(&self, dt: f32) -> Vec<SceneCommand> {
        self.held
            .iter()
            .filter_map(|action| movement_for(*action))
            .map(|movement| SceneCommand::MoveCamera {
                movement,
                amount: dt,
            })
            .collect()
    }

    /// Cursor moved: compare against the center, produce look commands.
    fn handle_cursor_moved(&self, x: f32, y: f32) -> Vec<SceneCommand> {
        let angle = self.look_step();
        let mut commands = Vec::new();

        if self.right_pressed {
            // Roll mode: horizontal offset banks the camera.
            if let Some(rotation) = self.roll_for_offset(x) {
                commands.push(SceneCommand::RotateCamera { rotation, angle });
            }
            return commands;
        }

        if let Some(rotation) = self.yaw_for_offset(x) {
            commands.push(SceneCommand::RotateCamera { rotation, angle });
        }
        if let Some(rotation) = self.pitch_for_offset(y) {
            commands.push(SceneCommand::RotateCamera { rotation, angle });
        }
        commands
    }

    fn yaw_for_offset(&self, x: f32) -> Option<CameraRotation> {
        if x > self.center.x {
            Some(if self.invert_mouse {
                CameraRotation::YawLeft
            } else {
                CameraRotation::YawRight
            })
        } else if x < self.center.x {
            Some(if self.invert_mouse {
                CameraRotation::YawRight
            } else {
                CameraRotation::YawLeft
            })
        } else {
            None
        }
    }

    fn pitch_for_offset(&self, y: f32) -> Option<CameraRotation> {
        if y > self.center.y {
            Some(if self.invert_mouse {
                CameraRotation::PitchDown
            } else {
                CameraRotation::PitchUp
            })
        } else if y < self.center.y {
            Some(if self.invert_mouse {
                CameraRotation::PitchUp
            } else {
                CameraRotation::PitchDown
            })
        } else {
            None
        }
    }

    fn roll_for_offset(&self, x: f32) -> Option<CameraRotation> {
        if x > self.center.x {
            Some(if self.invert_mouse {
                CameraRotation::RollCounterClockwise
            } else {
                CameraRotation::RollClockwise
            })
        } else if x < self.center.x {
            Some(if self.invert_mouse {
                CameraRotation::RollClockwise
            } else {
                CameraRotation::RollCounterClockwise
            })
        } else {
            None
        }
    }

    /// Mouse button press/release: track roll mode, toggle inversion.
    fn handle_mouse_button(
        &mut self,
        button: MouseButton,
        pressed: bool,
    ) -> Vec<SceneCommand> {
        match button {
            MouseButton::Right => {
                self.right_pressed = pressed;
                Vec::new()
            }
            MouseButton::Middle if pressed => {
                vec![SceneCommand::ToggleMouseInvert]
            }
            _ => Vec::new(),
        }
    }
}

/// Map a held movement action to its camera movement.
fn movement_for(action: KeyAction) -> Option<CameraMovement> {
    match action {
        KeyAction::StrafeLeft => Some(CameraMovement::StrafeLeft),
        KeyAction::StrafeRight => Some(CameraMovement::StrafeRight),
        KeyAction::StrafeUp => Some(CameraMovement::StrafeUp),
        KeyAction::StrafeDown => Some(CameraMovement::StrafeDown),
        KeyAction::ThrustForward => Some(CameraMovement::ThrustForward),
        KeyAction::ThrustBackward => Some(CameraMovement::ThrustBackward),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn processor() -> InputProcessor {
        InputProcessor::new(800, 600)
    }

    #[test]
    fn cursor_right_of_center_yaws_left_when_inverted() {
        let mut p = processor();
        let cmds = p.handle_event(InputEvent::CursorMoved { x: 500.0, y: 300.0 });
        assert_eq!(
            cmds,
            vec![SceneCommand::RotateCamera {
                rotation: CameraRotation::YawLeft,
                angle: 5.0 / 200.0,
            }]
        );
    }

    #[test]
    fn cursor_right_of_center_yaws_right_when_not_inverted() {
        let mut p = processor();
        p.set_invert_mouse(false);
        let cmds = p.handle_event(InputEvent::CursorMoved { x: 500.0, y: 300.0 });
        assert_eq!(
            cmds,
            vec![SceneCommand::RotateCamera {
                rotation: CameraRotation::YawRight,
                angle: 5.0 / 200.0,
            }]
        );
    }

    #[test]
    fn diagonal_offset_yields_yaw_and_pitch() {
        let mut p = processor();
        let cmds = p.handle_event(InputEvent::CursorMoved { x: 300.0, y: 400.0 });
        assert_eq!(cmds.len(), 2);
        assert_eq!(
            cmds[0],
            SceneCommand::RotateCamera {
                rotation: CameraRotation::YawRight,
                angle: 5.0 / 200.0,
            }
        );
        assert_eq!(
            cmds[1],
            SceneCommand::RotateCamera {
                rotation: CameraRotation::PitchDown,
                angle: 5.0 / 200.0,
            }
        );
    }

    #[test]
    fn cursor_at_center_is_quiet() {
        let mut p = processor();
        let cmds = p.handle_event(InputEvent::CursorMoved { x: 400.0, y: 300.0 });
        assert!(cmds.is_empty());
    }

    #[test]
    fn right_button_switches_to_roll() {
        let mut p = processor();
        let none = p.handle_event(InputEvent::MouseButton {
            button: MouseButton::Right,
            pressed: true,
        });
        assert!(none.is_empty());

        let cmds = p.handle_event(InputEvent::CursorMoved { x: 500.0, y: 400.0 });
        assert_eq!(
            cmds,
            vec![SceneCommand::RotateCamera {
                rotation: CameraRotation::RollCounterClockwise,
                angle: 5.0 / 200.0,
            }]
        );

        // Release returns to yaw/pitch.
        let _ = p.handle_event(InputEvent::MouseButton {
            button: MouseButton::Right,
            pressed: false,
        });
        let cmds = p.handle_event(InputEvent::CursorMoved { x: 500.0, y: 300.0 });
        assert_eq!(
            cmds,
            vec![SceneCommand::RotateCamera {
                rotation: CameraRotation::YawLeft,
                angle: 5.0 / 200.0,
            }]
        );
    }

    #[test]
    fn middle_click_toggles_inversion() {
        let mut p = processor();
        let cmds = p.handle_event(InputEvent::MouseButton {
            button: MouseButton::Middle,
            pressed: true,
        });
        assert_eq!(cmds, vec![SceneCommand::ToggleMouseInvert]);

        // Release produces nothing.
        let cmds = p.handle_event(InputEvent::MouseButton {
            button: MouseButton::Middle,
            pressed: false,
        });
        assert!(cmds.is_empty());
    }

    #[test]
    fn scroll_adjusts_sensitivity() {
        let mut p = processor();
        assert_eq!(
            p.handle_event(InputEvent::Scroll { delta: 1.0 }),
            vec![SceneCommand::AdjustSensitivity { delta: 1 }]
        );
        assert_eq!(
            p.handle_event(InputEvent::Scroll { delta: -0.5 }),
            vec![SceneCommand::AdjustSensitivity { delta: -1 }]
        );
        assert!(p.handle_event(InputEvent::Scroll { delta: 0.0 }).is_empty());
    }

    #[test]
    fn sensitivity_clamps_to_range() {
        let mut p = processor();
        p.set_sensitivity(0);
        assert_eq!(p.sensitivity(), MIN_SENSITIVITY);
        p.set_sensitivity(42);
        assert_eq!(p.sensitivity(), MAX_SENSITIVITY);
        p.set_sensitivity(7);
        assert_eq!(p.look_step(), 7.0 / 200.0);
    }

    #[test]
    fn held_movement_drains_every_frame() {
        let mut p = processor();
        p.set_movement_held(KeyAction::ThrustForward, true);
        p.set_movement_held(KeyAction::StrafeUp, true);

        let cmds = p.movement_commands(0.016);
        assert_eq!(cmds.len(), 2);
        assert!(cmds.contains(&SceneCommand::MoveCamera {
            movement: CameraMovement::ThrustForward,
            amount: 0.016,
        }));
        assert!(cmds.contains(&SceneCommand::MoveCamera {
            movement: CameraMovement::StrafeUp,
            amount: 0.016,
        }));

        p.set_movement_held(KeyAction::ThrustForward, false);
        let cmds = p.movement_commands(0.016);
        assert_eq!(cmds.len(), 1);
    }

    #[test]
    fn discrete_actions_never_enter_the_held_set() {
        let mut p = processor();
        p.set_movement_held(KeyAction::CycleCameraMode, true);
        assert!(p.movement_commands(0.016).is_empty());
    }

    #[test]
    fn resize_moves_the_center() {
        let mut p = processor();
        p.set_center(1000, 400);
        // The old center is now left of the new one: no yaw to the right
        // of it means the same x is interpreted differently.
        let cmds = p.handle_event(InputEvent::CursorMoved { x: 450.0, y: 200.0 });
        assert_eq!(
            cmds[0],
            SceneCommand::RotateCamera {
                rotation: CameraRotation::YawRight,
                angle: 5.0 / 200.0,
            }
        );
    }
}
