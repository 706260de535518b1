use glam::{Mat4, Vec3};

use crate::math::Vector3;

/// Yaw applied by a single [`Camera::pan_left`] / [`Camera::pan_right`].
pub const DEFAULT_PAN_DEGREES: f32 = 2.0;

/// First-person camera frame: an eye position, a look-at target, and an up
/// direction.
///
/// Every navigation call is a deterministic transition from the current
/// triple to a new one. Nothing is validated: a degenerate frame (`eye ==
/// at`, or `up` parallel to the look direction) turns translations into
/// no-ops instead of failing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vector3,
    /// Look-at target position.
    pub at: Vector3,
    /// Up direction vector.
    pub up: Vector3,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// Nine-float snapshot of a camera, handed to the view-matrix builder or
/// across threads.
pub struct CameraFrame {
    /// Eye position.
    pub eye: [f32; 3],
    /// Look-at target.
    pub at: [f32; 3],
    /// Up direction.
    pub up: [f32; 3],
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Self::DEFAULT_EYE, Self::DEFAULT_AT, Self::DEFAULT_UP)
    }
}

impl Camera {
    /// Starting eye position.
    pub const DEFAULT_EYE: Vector3 = Vector3::new(0.0, 0.0, 3.0);
    /// Starting look-at target, far down -Z.
    pub const DEFAULT_AT: Vector3 = Vector3::new(0.0, 0.0, -100.0);
    /// Starting up direction.
    pub const DEFAULT_UP: Vector3 = Vector3::Y;

    /// Create a camera from an explicit frame.
    #[must_use]
    pub const fn new(eye: Vector3, at: Vector3, up: Vector3) -> Self {
        Self { eye, at, up }
    }

    /// Restore the starting frame.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Step one unit along the look direction.
    pub fn forward(&mut self) {
        let f = (self.at - self.eye).normalize();
        self.translate(f);
    }

    /// Step one unit away from the look-at target.
    pub fn back(&mut self) {
        let f = (self.eye - self.at).normalize();
        self.translate(f);
    }

    /// Strafe one unit using `cross(eye - at, up)`.
    ///
    /// The strafe vector is built from the reversed look direction here and
    /// from the forward one in [`right`](Self::right); the two sides are not
    /// obtained by negating a shared vector.
    pub fn left(&mut self) {
        let f = (self.eye - self.at).normalize();
        let s = f.cross(self.up).normalize();
        self.translate(s);
    }

    /// Strafe one unit using `cross(at - eye, up)`.
    pub fn right(&mut self) {
        let f = (self.at - self.eye).normalize();
        let s = f.cross(self.up).normalize();
        self.translate(s);
    }

    /// Yaw the look direction by [`DEFAULT_PAN_DEGREES`].
    pub fn pan_left(&mut self) {
        self.pan_left_by(DEFAULT_PAN_DEGREES);
    }

    /// Yaw the look direction by `-`[`DEFAULT_PAN_DEGREES`].
    pub fn pan_right(&mut self) {
        self.pan_right_by(DEFAULT_PAN_DEGREES);
    }

    /// Yaw the look direction about +Y by `degrees`, keeping `eye` fixed.
    pub fn pan_left_by(&mut self, degrees: f32) {
        self.yaw(degrees.to_radians());
    }

    /// Yaw the look direction about +Y by `-degrees`, keeping `eye` fixed.
    pub fn pan_right_by(&mut self, degrees: f32) {
        self.yaw(-degrees.to_radians());
    }

    /// Unit look direction, or `None` when `eye == at`.
    #[must_use]
    pub fn look_direction(&self) -> Option<Vector3> {
        let f = (self.at - self.eye).normalize();
        (f != Vector3::ZERO).then_some(f)
    }

    /// Distance between the eye and the look-at target.
    #[must_use]
    pub fn distance(&self) -> f32 {
        (self.at - self.eye).length()
    }

    /// Snapshot of the current frame.
    #[must_use]
    pub fn frame(&self) -> CameraFrame {
        CameraFrame {
            eye: self.eye.to_array(),
            at: self.at.to_array(),
            up: self.up.to_array(),
        }
    }

    /// Right-handed look-at view matrix.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        self.frame().view_matrix()
    }

    fn translate(&mut self, delta: Vector3) {
        if delta == Vector3::ZERO {
            log::debug!(
                "degenerate camera frame (eye {}, at {}); move skipped",
                self.eye,
                self.at
            );
            return;
        }
        self.eye = self.eye + delta;
        self.at = self.at + delta;
    }

    fn yaw(&mut self, radians: f32) {
        let direction = self.at - self.eye;
        self.at = self.eye + direction.rotate_y(radians);
    }
}

impl From<CameraFrame> for Camera {
    fn from(frame: CameraFrame) -> Self {
        Self::new(frame.eye.into(), frame.at.into(), frame.up.into())
    }
}

impl CameraFrame {
    /// Right-handed look-at view matrix for this frame.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(
            Vec3::from_array(self.eye),
            Vec3::from_array(self.at),
            Vec3::from_array(self.up),
        )
    }
}
