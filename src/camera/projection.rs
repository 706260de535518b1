use glam::Mat4;

use super::core::CameraFrame;
use crate::options::CameraOptions;

/// Perspective projection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self::from_options(&CameraOptions::default(), 1.0)
    }
}

impl Projection {
    /// Build from camera options and an initial aspect ratio.
    #[must_use]
    pub fn from_options(options: &CameraOptions, aspect: f32) -> Self {
        Self {
            fovy: options.fovy,
            aspect,
            znear: options.znear,
            zfar: options.zfar,
        }
    }

    /// Update the aspect ratio for a new viewport size. A zero-height
    /// viewport (minimized window) leaves the aspect unchanged.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if height == 0 {
            return;
        }
        self.aspect = width as f32 / height as f32;
    }

    /// Projection matrix alone.
    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        // perspective_rh already uses [0,1] depth range (wgpu/Vulkan
        // convention)
        Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    /// Combined view-projection matrix for a camera frame.
    #[must_use]
    pub fn view_projection(&self, frame: &CameraFrame) -> Mat4 {
        self.matrix() * frame.view_matrix()
    }
}
