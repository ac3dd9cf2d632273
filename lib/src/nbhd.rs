//! Counting living neighbors.

use crate::{cells::Coord, world::World};

/// Offsets of the eight cells in the
/// [Moore neighborhood](https://conwaylife.com/wiki/Moore_neighbourhood).
pub const NBHD: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

impl World {
    /// Number of living cells in the neighborhood of a cell.
    ///
    /// Neighbors outside of the world do not exist and are not counted.
    /// The world does not wrap around at the edges.
    ///
    /// The cell itself does not have to be inside the world.
    /// Neighbors whose coordinates would overflow `isize` are outside too.
    pub fn count_live_neighbors(&self, (x, y): Coord) -> u8 {
        NBHD.iter()
            .filter(|(dx, dy)| {
                x.checked_add(*dx)
                    .zip(y.checked_add(*dy))
                    .and_then(|coord| self.get_cell_state(coord))
                    .map_or(false, |state| state.is_alive())
            })
            .count() as u8
    }
}

/// Number of living cells in the neighborhood of a cell.
///
/// See [`World::count_live_neighbors`].
#[inline]
pub fn count_live_neighbors(world: &World, coord: Coord) -> u8 {
    world.count_live_neighbors(coord)
}
