//! Camera system for first-person navigation.
//!
//! Provides the eye/at/up camera with move, strafe and pan commands, a
//! perspective projection builder, and a lock-free frame channel for hosts
//! that split input and rendering across threads.

/// Core camera struct and its nine-float frame snapshot.
pub mod core;
/// Perspective projection and view-projection matrix builder.
pub mod projection;
pub mod shared;

pub use self::core::{Camera, CameraFrame, DEFAULT_PAN_DEGREES};
pub use projection::Projection;
pub use shared::{frame_channel, FrameReader, FramePublisher};
