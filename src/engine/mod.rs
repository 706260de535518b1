//! Navigation engine: the explicit owner of the camera, the block map, and
//! the input processor.
//!
//! There is no global camera. A host creates one [`NavEngine`] per
//! viewport, routes raw input through [`NavEngine::handle_input`] /
//! [`NavEngine::handle_key_press`], and reads the frame back each time it
//! draws.

/// Navigation command vocabulary.
pub mod command;

use glam::Mat4;

pub use self::command::NavCommand;
use crate::camera::{Camera, CameraFrame, Projection};
use crate::input::{InputEvent, InputProcessor};
use crate::options::Options;
use crate::world::BlockMap;

/// Owns one viewport's navigation state.
pub struct NavEngine {
    camera: Camera,
    projection: Projection,
    block_map: BlockMap,
    input: InputProcessor,
    options: Options,
}

impl Default for NavEngine {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

impl NavEngine {
    /// Create an engine with the default camera frame and a block map built
    /// from `options`.
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self {
            camera: Camera::default(),
            projection: Projection::from_options(&options.camera, 1.0),
            block_map: BlockMap::from_options(&options.world),
            input: InputProcessor::from_options(&options),
            options,
        }
    }

    /// Current camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Mutable camera access for hosts that script the frame directly.
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// Current block map.
    #[must_use]
    pub fn block_map(&self) -> &BlockMap {
        &self.block_map
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Replace the options. Projection and input pick up the new values
    /// immediately; the block map is rebuilt only if the world section
    /// changed.
    pub fn set_options(&mut self, options: Options) {
        let aspect = self.projection.aspect;
        self.projection = Projection::from_options(&options.camera, aspect);
        self.input.set_options(&options);
        if options.world != self.options.world {
            self.block_map = BlockMap::from_options(&options.world);
        }
        self.options = options;
    }

    /// Update the projection for a new viewport size.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.projection.set_viewport(width, height);
    }

    /// Current projection.
    #[must_use]
    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    /// Nine-float snapshot of the camera.
    #[must_use]
    pub fn frame(&self) -> CameraFrame {
        self.camera.frame()
    }

    /// Combined view-projection matrix for the current frame.
    #[must_use]
    pub fn view_projection(&self) -> Mat4 {
        self.projection.view_projection(&self.camera.frame())
    }

    /// Route a pointer event through the input processor and execute the
    /// resulting command. Returns `true` if anything changed.
    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        self.input
            .handle_event(event)
            .is_some_and(|cmd| self.execute(cmd))
    }

    /// Route a physical key string (e.g. `"KeyW"`) through the key
    /// bindings and execute the bound command. Returns `true` if anything
    /// changed.
    pub fn handle_key_press(&mut self, key: &str) -> bool {
        self.input
            .handle_key_press(key)
            .is_some_and(|cmd| self.execute(cmd))
    }

    /// Apply one command. Returns `true` if the camera frame or the block
    /// map changed.
    pub fn execute(&mut self, cmd: NavCommand) -> bool {
        let camera_before = self.camera;
        let mut map_changed = false;

        match cmd {
            NavCommand::Forward => self.camera.forward(),
            NavCommand::Back => self.camera.back(),
            NavCommand::StrafeLeft => self.camera.left(),
            NavCommand::StrafeRight => self.camera.right(),
            NavCommand::PanLeft { degrees } => self.camera.pan_left_by(degrees),
            NavCommand::PanRight { degrees } => {
                self.camera.pan_right_by(degrees);
            }
            NavCommand::ResetCamera => self.camera.reset(),
            NavCommand::PlaceBlock => {
                map_changed = self.edit_block(1);
            }
            NavCommand::RemoveBlock => {
                map_changed = self.edit_block(0);
            }
        }

        let camera_changed = self.camera != camera_before;
        if camera_changed {
            log::debug!("Eye: {}, At: {}", self.camera.eye, self.camera.at);
        }
        camera_changed || map_changed
    }

    fn edit_block(&mut self, height: u8) -> bool {
        let (x, z) = self.block_map.target_cell(&self.camera);
        if self.block_map.get(x, z) == Some(height) {
            return false;
        }
        let _ = self.block_map.set(x, z, height);
        log::debug!("block ({x}, {z}) set to {height}");
        true
    }
}
