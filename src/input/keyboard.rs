use serde::{Deserialize, Serialize};

use crate::engine::NavCommand;

/// Navigation actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings]
/// move_forward = "KeyW"
/// pan_left = "KeyQ"
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Step along the look direction.
    MoveForward,
    /// Step away from the look-at target.
    MoveBack,
    /// Strafe left.
    StrafeLeft,
    /// Strafe right.
    StrafeRight,
    /// Yaw left by the configured pan step.
    PanLeft,
    /// Yaw right by the configured pan step.
    PanRight,
    /// Place a block in the cell ahead of the camera.
    PlaceBlock,
    /// Clear the cell ahead of the camera.
    RemoveBlock,
    /// Return the camera to its starting frame.
    ResetCamera,
}

impl KeyAction {
    /// Convert to a [`NavCommand`]; pan actions carry `pan_step` degrees.
    #[must_use]
    pub fn to_command(self, pan_step: f32) -> NavCommand {
        match self {
            Self::MoveForward => NavCommand::Forward,
            Self::MoveBack => NavCommand::Back,
            Self::StrafeLeft => NavCommand::StrafeLeft,
            Self::StrafeRight => NavCommand::StrafeRight,
            Self::PanLeft => NavCommand::PanLeft { degrees: pan_step },
            Self::PanRight => NavCommand::PanRight { degrees: pan_step },
            Self::PlaceBlock => NavCommand::PlaceBlock,
            Self::RemoveBlock => NavCommand::RemoveBlock,
            Self::ResetCamera => NavCommand::ResetCamera,
        }
    }
}
