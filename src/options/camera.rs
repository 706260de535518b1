use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::DEFAULT_PAN_DEGREES;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection and control parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Yaw per pan key press, in degrees.
    #[schemars(title = "Pan Step", range(min = 0.5, max = 15.0), extend("step" = 0.5))]
    pub pan_step: f32,
    /// Degrees of yaw per pixel of horizontal mouse drag.
    #[schemars(title = "Drag Sensitivity", range(min = 0.05, max = 2.0), extend("step" = 0.05))]
    pub drag_sensitivity: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 50.0,
            znear: 1.0,
            zfar: 100.0,
            pan_step: DEFAULT_PAN_DEGREES,
            drag_sensitivity: 0.5,
        }
    }
}
