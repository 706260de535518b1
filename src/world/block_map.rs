use crate::camera::Camera;
use crate::math::Vector3;
use crate::options::WorldOptions;

/// Largest accepted side length. Larger requests are clamped to it.
pub const MAX_MAP_SIZE: usize = 256;

/// Vertical offset of every block's world placement.
const BLOCK_FLOOR_Y: f32 = -0.75;

/// Walled maze stamped into the corner of a fresh map.
const MAZE: [[u8; 8]; 8] = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 1, 1, 1, 1, 1, 1, 0],
    [0, 1, 0, 0, 0, 0, 1, 0],
    [0, 1, 0, 1, 1, 0, 1, 0],
    [0, 1, 0, 1, 1, 0, 1, 0],
    [0, 1, 0, 0, 0, 0, 1, 0],
    [0, 1, 1, 1, 1, 1, 1, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

/// Square grid of block heights the camera walks over.
///
/// Cell `(x, z)` holds a height; zero means empty. The render layer places
/// cell `(x, z)` at world `(x - size/2, -0.75, z - size/2)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockMap {
    size: usize,
    cells: Vec<u8>,
}

/// An occupied cell and where it sits in the world.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Block {
    /// Grid column.
    pub x: usize,
    /// Grid row.
    pub z: usize,
    /// Stack height.
    pub height: u8,
    /// World-space translation of the block's base.
    pub position: Vector3,
}

impl Default for BlockMap {
    fn default() -> Self {
        Self::from_options(&WorldOptions::default())
    }
}

impl BlockMap {
    /// Create an empty `size × size` map. The size is clamped to
    /// `1..=MAX_MAP_SIZE`.
    #[must_use]
    pub fn new(size: usize) -> Self {
        let size = size.clamp(1, MAX_MAP_SIZE);
        Self {
            size,
            cells: vec![0; size * size],
        }
    }

    /// Create a map sized and seeded from world options.
    #[must_use]
    pub fn from_options(options: &WorldOptions) -> Self {
        if options.map_size > MAX_MAP_SIZE {
            log::warn!(
                "map_size {} exceeds {MAX_MAP_SIZE}, clamping",
                options.map_size
            );
        }
        let mut map = Self::new(options.map_size);
        if options.maze {
            map.stamp_maze();
        }
        map
    }

    /// Cells along each side.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Height at `(x, z)`, or `None` outside the grid.
    #[must_use]
    pub fn get(&self, x: usize, z: usize) -> Option<u8> {
        self.index(x, z).map(|i| self.cells[i])
    }

    /// Set the height at `(x, z)`. Returns `false` outside the grid.
    pub fn set(&mut self, x: usize, z: usize, height: u8) -> bool {
        match self.index(x, z) {
            Some(i) => {
                self.cells[i] = height;
                true
            }
            None => false,
        }
    }

    /// The cell one unit ahead of the camera, clamped to the grid.
    ///
    /// Uses the camera's eye directly as grid coordinates (no centering
    /// offset), so the camera must stand over the map's positive quadrant
    /// to target the block it sees.
    #[must_use]
    pub fn target_cell(&self, camera: &Camera) -> (usize, usize) {
        let f = (camera.at - camera.eye).normalize();
        let max = (self.size - 1) as f32;
        let x = (camera.eye.x + f.x).floor().clamp(0.0, max);
        let z = (camera.eye.z + f.z).floor().clamp(0.0, max);
        (x as usize, z as usize)
    }

    /// Place a one-high block in the cell ahead of the camera.
    pub fn place_in_front(&mut self, camera: &Camera) -> (usize, usize) {
        let (x, z) = self.target_cell(camera);
        let _ = self.set(x, z, 1);
        (x, z)
    }

    /// Clear the cell ahead of the camera.
    pub fn remove_in_front(&mut self, camera: &Camera) -> (usize, usize) {
        let (x, z) = self.target_cell(camera);
        let _ = self.set(x, z, 0);
        (x, z)
    }

    /// World-space translation of cell `(x, z)`.
    #[must_use]
    pub fn world_position(&self, x: usize, z: usize) -> Vector3 {
        let half = (self.size / 2) as f32;
        Vector3::new(x as f32 - half, BLOCK_FLOOR_Y, z as f32 - half)
    }

    /// Iterate occupied cells in row-major order.
    pub fn blocks(&self) -> impl Iterator<Item = Block> + '_ {
        self.cells.iter().enumerate().filter_map(move |(i, &height)| {
            (height > 0).then(|| {
                let (x, z) = (i / self.size, i % self.size);
                Block {
                    x,
                    z,
                    height,
                    position: self.world_position(x, z),
                }
            })
        })
    }

    /// Remove every block.
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    fn stamp_maze(&mut self) {
        for (x, row) in MAZE.iter().enumerate() {
            for (z, &height) in row.iter().enumerate() {
                let _ = self.set(x, z, height);
            }
        }
    }

    fn index(&self, x: usize, z: usize) -> Option<usize> {
        (x < self.size && z < self.size).then(|| x * self.size + z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera_at(eye: Vector3, look: Vector3) -> Camera {
        Camera::new(eye, eye + look * 10.0, Vector3::Y)
    }

    #[test]
    fn size_is_clamped_to_bounds() {
        assert_eq!(BlockMap::new(0).size(), 1);
        assert_eq!(BlockMap::new(usize::MAX).size(), MAX_MAP_SIZE);

        let opts = WorldOptions {
            map_size: usize::MAX,
            maze: true,
        };
        let mut map = BlockMap::from_options(&opts);
        let last = MAX_MAP_SIZE - 1;
        assert!(map.set(last, last, 2));
        assert_eq!(map.get(last, last), Some(2));
        assert_eq!(map.get(MAX_MAP_SIZE, 0), None);
    }

    #[test]
    fn default_map_has_maze_ring() {
        let map = BlockMap::default();
        assert_eq!(map.size(), 32);
        assert_eq!(map.get(1, 1), Some(1));
        assert_eq!(map.get(2, 2), Some(0));
        assert_eq!(map.get(3, 3), Some(1));
        assert_eq!(map.get(0, 0), Some(0));
        assert_eq!(map.get(31, 31), Some(0));
        assert_eq!(map.get(32, 0), None);
        // 20 ring cells + 4 center cells
        assert_eq!(map.blocks().count(), 24);
    }

    #[test]
    fn set_outside_grid_is_rejected() {
        let mut map = BlockMap::new(4);
        assert!(map.set(3, 3, 2));
        assert!(!map.set(4, 0, 1));
        assert_eq!(map.get(3, 3), Some(2));
    }

    #[test]
    fn target_cell_is_one_step_ahead() {
        let map = BlockMap::new(32);
        let cam = camera_at(Vector3::new(10.5, 0.0, 10.5), Vector3::X);
        assert_eq!(map.target_cell(&cam), (11, 10));
        let cam = camera_at(Vector3::new(10.5, 0.0, 10.5), -Vector3::Z);
        assert_eq!(map.target_cell(&cam), (10, 9));
    }

    #[test]
    fn target_cell_clamps_to_grid() {
        let map = BlockMap::new(32);
        // default camera stands at z=3 looking toward -z
        assert_eq!(map.target_cell(&Camera::default()), (0, 2));
        let cam = camera_at(Vector3::new(-5.0, 0.0, 50.0), Vector3::Z);
        assert_eq!(map.target_cell(&cam), (0, 31));
    }

    #[test]
    fn place_then_remove_restores_map() {
        let mut map = BlockMap::default();
        let before = map.clone();
        let cam = camera_at(Vector3::new(20.5, 0.0, 20.5), Vector3::X);
        assert_eq!(map.place_in_front(&cam), (21, 20));
        assert_eq!(map.get(21, 20), Some(1));
        assert_eq!(map.remove_in_front(&cam), (21, 20));
        assert_eq!(map, before);
    }

    #[test]
    fn blocks_report_world_positions() {
        let mut map = BlockMap::new(32);
        let _ = map.set(16, 20, 3);
        let blocks: Vec<Block> = map.blocks().collect();
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].height, 3);
        assert_eq!(blocks[0].position, Vector3::new(0.0, -0.75, 4.0));
    }

    #[test]
    fn options_control_size_and_seed() {
        let map = BlockMap::from_options(&WorldOptions {
            map_size: 10,
            maze: false,
        });
        assert_eq!(map.size(), 10);
        assert_eq!(map.blocks().count(), 0);
    }

    #[test]
    fn clear_empties_map() {
        let mut map = BlockMap::default();
        map.clear();
        assert_eq!(map.blocks().count(), 0);
    }
}
