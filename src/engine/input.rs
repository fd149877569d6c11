//! Input methods for `SceneEngine`.

use super::command::SceneCommand;
use super::SceneEngine;
use crate::input::{InputEvent, KeyAction};

impl SceneEngine {
    /// Process a platform-agnostic input event.
    ///
    /// This is the primary mouse input entry point. Hosts forward raw
    /// window events as [`InputEvent`] variants; the engine internally
    /// dispatches the resulting commands.
    ///
    /// # Example
    ///
    /// ```ignore
    /// engine.handle_input(InputEvent::CursorMoved { x, y });
    /// engine.handle_input(InputEvent::Scroll { delta: 1.0 });
    /// ```
    pub fn handle_input(&mut self, event: InputEvent) {
        let commands = self.input.handle_event(event);
        for cmd in commands {
            self.execute(cmd);
        }
    }

    /// Process a keyboard transition for a physical key string
    /// (`winit::keyboard::KeyCode` debug format, e.g. `"ArrowUp"`).
    ///
    /// Movement actions are tracked press-to-release and drained by
    /// [`update`](Self::update); discrete actions execute on press.
    pub fn handle_key(&mut self, key: &str, pressed: bool) {
        let Some(action) = self.options.keybindings.lookup(key) else {
            return;
        };

        if action.is_movement() {
            self.input.set_movement_held(action, pressed);
            return;
        }
        if !pressed {
            return;
        }
        if let Some(cmd) = discrete_command(action) {
            self.execute(cmd);
        }
    }
}

/// The command a discrete (non-movement) key action triggers.
fn discrete_command(action: KeyAction) -> Option<SceneCommand> {
    match action {
        KeyAction::CycleCameraMode => Some(SceneCommand::CycleCameraMode),
        KeyAction::ResetCamera => Some(SceneCommand::ResetCamera),
        KeyAction::ToggleOrbit => Some(SceneCommand::ToggleOrbit),
        KeyAction::ToggleMouseInvert => {
            Some(SceneCommand::ToggleMouseInvert)
        }
        _ => None,
    }
}
