use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "World", inline)]
#[serde(default)]
/// Block map layout options.
pub struct WorldOptions {
    /// Cells along each side of the square block map. Values above 256 are
    /// clamped when the map is built.
    #[schemars(title = "Map Size", range(min = 8, max = 256))]
    pub map_size: usize,
    /// Seed the map with the walled maze in its corner.
    #[schemars(title = "Maze")]
    pub maze: bool,
}

impl Default for WorldOptions {
    fn default() -> Self {
        Self {
            map_size: 32,
            maze: true,
        }
    }
}
