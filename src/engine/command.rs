//! The engine's complete interactive vocabulary.
//!
//! Every navigation step, whether triggered by a key press, a mouse drag,
//! or a programmatic call, is represented as a `NavCommand`. Consumers
//! construct commands and pass them to
//! [`NavEngine::execute`](super::NavEngine::execute).

/// A discrete navigation or world-edit operation.
///
/// The engine never cares *how* a command was triggered:
///
/// ```
/// use navcam::engine::{NavCommand, NavEngine};
///
/// let mut engine = NavEngine::default();
/// let _ = engine.execute(NavCommand::Forward);
/// let _ = engine.execute(NavCommand::PanLeft { degrees: 2.0 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavCommand {
    // ── Camera ──────────────────────────────────────────────────────
    /// Step one unit along the look direction.
    Forward,
    /// Step one unit away from the look-at target.
    Back,
    /// Strafe one unit left.
    StrafeLeft,
    /// Strafe one unit right.
    StrafeRight,
    /// Yaw the look direction left.
    PanLeft {
        /// Rotation in degrees.
        degrees: f32,
    },
    /// Yaw the look direction right.
    PanRight {
        /// Rotation in degrees.
        degrees: f32,
    },
    /// Return the camera to its starting frame.
    ResetCamera,

    // ── World ───────────────────────────────────────────────────────
    /// Place a block in the cell ahead of the camera.
    PlaceBlock,
    /// Clear the cell ahead of the camera.
    RemoveBlock,
}
