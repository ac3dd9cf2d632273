//! World configuration.

use crate::{
    cells::{Alive, Dead},
    error::Error,
    world::World,
};
use educe::Educe;
use log::debug;
use rand::{rngs::StdRng, thread_rng, SeedableRng};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How to fill the cells of a new world.
#[derive(Clone, Copy, Debug, Educe, PartialEq, Eq)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Fill {
    /// Every cell is dead.
    Dead,

    /// Every cell is alive.
    Alive,

    /// Random.
    ///
    /// [`sample_count`](Config#structfield.sample_count) positions are
    /// chosen independently and uniformly, and the cells there are alive.
    /// All other cells are dead.
    #[educe(Default)]
    Random,
}

/// World configuration.
///
/// The initial world will be generated from this configuration.
#[derive(Clone, Debug, Educe, PartialEq, Eq)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Side length of the world.
    #[educe(Default = 50)]
    pub size: isize,

    /// How to fill the cells.
    pub fill: Fill,

    /// Number of random positions to set alive, when the fill is
    /// [`Fill::Random`].
    ///
    /// The same position may be chosen more than once.
    #[educe(Default = 500)]
    pub sample_count: usize,

    /// Seed of the random number generator.
    ///
    /// `None` means that the world will be different every time.
    pub seed: Option<u64>,
}

impl Config {
    /// Sets up a new configuration with given size.
    pub fn new(size: isize) -> Self {
        Config {
            size,
            ..Config::default()
        }
    }

    /// Sets how to fill the cells.
    pub fn set_fill(mut self, fill: Fill) -> Self {
        self.fill = fill;
        self
    }

    /// Sets the number of random positions to set alive.
    pub fn set_sample_count(mut self, sample_count: usize) -> Self {
        self.sample_count = sample_count;
        self
    }

    /// Sets the seed of the random number generator.
    pub fn set_seed<T: Into<Option<u64>>>(mut self, seed: T) -> Self {
        self.seed = seed.into();
        self
    }

    /// Creates a new world from the configuration.
    ///
    /// Returns an error if the size is not positive.
    pub fn world(&self) -> Result<World, Error> {
        if self.size <= 0 {
            return Err(Error::NonPositiveError);
        }
        let size = self.size as usize;
        debug!("creating a {0}x{0} world: {1:?}", size, self.fill);
        match self.fill {
            Fill::Dead => World::new(size, Dead),
            Fill::Alive => World::new(size, Alive),
            Fill::Random => match self.seed {
                Some(seed) => {
                    World::random(size, self.sample_count, &mut StdRng::seed_from_u64(seed))
                }
                None => World::random(size, self.sample_count, &mut thread_rng()),
            },
        }
    }
}
