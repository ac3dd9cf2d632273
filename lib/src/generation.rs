//! Stepping the world forward.

use crate::{rules::transition, world::World};
use log::trace;
use std::iter::FusedIterator;

impl World {
    /// The next generation of the world.
    ///
    /// Every cell is updated from the same snapshot: the new states are
    /// written to a new world, and `self` is left untouched.
    pub fn step(&self) -> World {
        let next = World::from_fn(self.size(), |coord| {
            // Coordinates from `from_fn` are always inside the world.
            let state = self.get_cell_state(coord).unwrap_or_default();
            transition(state, self.count_live_neighbors(coord))
        });
        trace!("stepped to {} living cells", next.cell_count());
        next
    }

    /// An endless iterator over the following generations.
    ///
    /// The first item is [`self.step()`](Self::step).
    pub fn generations(&self) -> Generations {
        Generations {
            world: self.clone(),
        }
    }
}

/// The next generation of the world.
///
/// See [`World::step`].
#[inline]
pub fn step(world: &World) -> World {
    world.step()
}

/// An endless iterator over successive generations of a world.
///
/// Created by [`World::generations`].
#[derive(Clone, Debug)]
pub struct Generations {
    /// The last generation yielded.
    world: World,
}

impl Iterator for Generations {
    type Item = World;

    fn next(&mut self) -> Option<World> {
        self.world = self.world.step();
        Some(self.world.clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl FusedIterator for Generations {}
