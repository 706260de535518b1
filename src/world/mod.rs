//! The walkable block world: a square grid edited at the cell in front of
//! the camera.

mod block_map;

pub use block_map::{Block, BlockMap, MAX_MAP_SIZE};
