//! Cells in the cellular automaton.

use educe::Educe;
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};
use std::ops::Not;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Possible states of a cell.
///
/// The default state is [`Dead`].
#[derive(Clone, Copy, Debug, Educe, PartialEq, Eq, Hash)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum State {
    /// The Dead state.
    #[educe(Default)]
    Dead,
    /// The Alive state.
    Alive,
}

pub use State::{Alive, Dead};

impl State {
    /// Whether the state is [`Alive`].
    #[inline]
    pub fn is_alive(self) -> bool {
        self == Alive
    }
}

/// Flips the state.
impl Not for State {
    type Output = Self;

    #[inline]
    fn not(self) -> Self::Output {
        match self {
            Alive => Dead,
            Dead => Alive,
        }
    }
}

/// Randomly chooses between [`Alive`] and [`Dead`].
///
/// The probability of either state is `1/2`.
impl Distribution<State> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> State {
        if rng.gen() {
            Alive
        } else {
            Dead
        }
    }
}

/// The coordinates of a cell.
///
/// `(x-coordinate, y-coordinate)`, that is, `(column, row)`.
/// Both coordinates are 0-indexed.
///
/// Coordinates outside of the world are allowed in lookups,
/// and refer to cells that do not exist.
pub type Coord = (isize, isize);
