//! The rule of Conway's Game of Life.
//!
//! For the notation of rule strings, please see
//! [this article on LifeWiki](https://conwaylife.com/wiki/Rulestring).

use crate::cells::{Alive, Dead, State};

/// The rule string of Conway's Game of Life.
pub const RULE_STRING: &str = "B3/S23";

/// The state of a cell in the next generation, given its current state
/// and the number of living cells in its neighborhood.
///
/// * A living cell with fewer than two living neighbors dies.
/// * A living cell with two or three living neighbors survives.
/// * A living cell with more than three living neighbors dies.
/// * A dead cell with exactly three living neighbors becomes alive.
/// * Any other dead cell stays dead.
#[inline]
pub fn transition(state: State, alives: u8) -> State {
    match (state, alives) {
        (Alive, 2 | 3) => Alive,
        (Alive, _) => Dead,
        (Dead, 3) => Alive,
        (Dead, _) => Dead,
    }
}
