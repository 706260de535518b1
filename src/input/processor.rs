//! Converts raw platform events into navigation commands.
//!
//! The `InputProcessor` owns all transient input state (drag tracking,
//! cursor position) and the key-binding map. It is the only thing that sits
//! between raw window events and the engine's
//! [`execute`](crate::engine::NavEngine::execute) method.

use super::event::{InputEvent, MouseButton};
use super::mouse::DragState;
use crate::engine::NavCommand;
use crate::options::{KeybindingOptions, Options};

/// Converts raw window events into [`NavCommand`]s.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// if let Some(cmd) = input_processor.handle_event(event) {
///     engine.execute(cmd);
/// }
///
/// if let Some(cmd) = input_processor.handle_key_press("KeyW") {
///     engine.execute(cmd);
/// }
/// ```
pub struct InputProcessor {
    /// Primary-button drag tracking.
    drag: DragState,
    /// Key string → action mapping.
    key_bindings: KeybindingOptions,
    /// Degrees per pan key press.
    pan_step: f32,
    /// Degrees of yaw per pixel of horizontal drag.
    drag_sensitivity: f32,
}

impl InputProcessor {
    /// Create a new processor with default bindings and sensitivities.
    #[must_use]
    pub fn new() -> Self {
        Self::from_options(&Options::default())
    }

    /// Create a processor configured from `options`.
    #[must_use]
    pub fn from_options(options: &Options) -> Self {
        Self {
            drag: DragState::new(),
            key_bindings: options.keybindings.clone(),
            pan_step: options.camera.pan_step,
            drag_sensitivity: options.camera.drag_sensitivity,
        }
    }

    /// Apply new options, keeping any drag in progress.
    pub fn set_options(&mut self, options: &Options) {
        self.key_bindings = options.keybindings.clone();
        self.pan_step = options.camera.pan_step;
        self.drag_sensitivity = options.camera.drag_sensitivity;
    }

    /// Current cursor position in physical pixels.
    #[must_use]
    pub fn mouse_pos(&self) -> (f32, f32) {
        self.drag.mouse_pos
    }

    /// Whether the primary mouse button is pressed.
    #[must_use]
    pub fn mouse_pressed(&self) -> bool {
        self.drag.pressed()
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeybindingOptions {
        &self.key_bindings
    }

    /// Look up a key press and return the corresponding command, if bound.
    #[must_use]
    pub fn handle_key_press(&self, key: &str) -> Option<NavCommand> {
        self.key_bindings
            .lookup(key)
            .map(|action| action.to_command(self.pan_step))
    }

    /// Process a pointer event and return zero or one commands.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<NavCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => self.handle_cursor_moved(x, y),
            InputEvent::MouseButton { button, pressed } => {
                self.handle_mouse_button(button, pressed);
                None
            }
        }
    }

    /// Cursor moved while dragging: horizontal motion pans the camera.
    fn handle_cursor_moved(&mut self, x: f32, y: f32) -> Option<NavCommand> {
        let dx = self.drag.sample(x, y)?;
        let degrees = dx.abs() * self.drag_sensitivity;
        if dx > 0.0 {
            Some(NavCommand::PanRight { degrees })
        } else if dx < 0.0 {
            Some(NavCommand::PanLeft { degrees })
        } else {
            None
        }
    }

    fn handle_mouse_button(&mut self, button: MouseButton, pressed: bool) {
        if button != MouseButton::Left {
            return;
        }
        if pressed {
            self.drag.press();
        } else {
            self.drag.release();
        }
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(input: &mut InputProcessor, button: MouseButton, pressed: bool) {
        let _ = input.handle_event(InputEvent::MouseButton { button, pressed });
    }

    fn move_to(input: &mut InputProcessor, x: f32) -> Option<NavCommand> {
        input.handle_event(InputEvent::CursorMoved { x, y: 0.0 })
    }

    #[test]
    fn default_keys_map_to_moves() {
        let input = InputProcessor::new();
        assert_eq!(input.handle_key_press("KeyW"), Some(NavCommand::Forward));
        assert_eq!(input.handle_key_press("KeyS"), Some(NavCommand::Back));
        assert_eq!(
            input.handle_key_press("KeyA"),
            Some(NavCommand::StrafeLeft)
        );
        assert_eq!(
            input.handle_key_press("KeyD"),
            Some(NavCommand::StrafeRight)
        );
        assert_eq!(
            input.handle_key_press("KeyQ"),
            Some(NavCommand::PanLeft { degrees: 2.0 })
        );
        assert_eq!(
            input.handle_key_press("KeyE"),
            Some(NavCommand::PanRight { degrees: 2.0 })
        );
        assert_eq!(input.handle_key_press("KeyG"), Some(NavCommand::PlaceBlock));
        assert_eq!(input.handle_key_press("Space"), None);
    }

    #[test]
    fn pan_step_comes_from_options() {
        let mut opts = Options::default();
        opts.camera.pan_step = 7.5;
        let input = InputProcessor::from_options(&opts);
        assert_eq!(
            input.handle_key_press("KeyQ"),
            Some(NavCommand::PanLeft { degrees: 7.5 })
        );
    }

    #[test]
    fn hover_without_press_does_nothing() {
        let mut input = InputProcessor::new();
        assert_eq!(move_to(&mut input, 10.0), None);
        assert_eq!(move_to(&mut input, 30.0), None);
        assert_eq!(input.mouse_pos(), (30.0, 0.0));
    }

    #[test]
    fn drag_right_pans_right_scaled_by_sensitivity() {
        let mut input = InputProcessor::new();
        press(&mut input, MouseButton::Left, true);
        assert!(input.mouse_pressed());
        assert_eq!(move_to(&mut input, 100.0), None);
        assert_eq!(
            move_to(&mut input, 110.0),
            Some(NavCommand::PanRight { degrees: 5.0 })
        );
        assert_eq!(
            move_to(&mut input, 104.0),
            Some(NavCommand::PanLeft { degrees: 3.0 })
        );
    }

    #[test]
    fn vertical_drag_is_ignored() {
        let mut input = InputProcessor::new();
        press(&mut input, MouseButton::Left, true);
        let _ = move_to(&mut input, 50.0);
        let cmd =
            input.handle_event(InputEvent::CursorMoved { x: 50.0, y: 80.0 });
        assert_eq!(cmd, None);
    }

    #[test]
    fn release_ends_drag() {
        let mut input = InputProcessor::new();
        press(&mut input, MouseButton::Left, true);
        let _ = move_to(&mut input, 0.0);
        press(&mut input, MouseButton::Left, false);
        assert_eq!(move_to(&mut input, 40.0), None);
    }

    #[test]
    fn right_button_does_not_drag() {
        let mut input = InputProcessor::new();
        press(&mut input, MouseButton::Right, true);
        let _ = move_to(&mut input, 0.0);
        assert_eq!(move_to(&mut input, 40.0), None);
    }
}
