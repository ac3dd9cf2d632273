//! __Lifegrid__ computes successive generations of
//! [Conway's Game of Life](https://conwaylife.com/wiki/Conway%27s_Game_of_Life)
//! on a fixed-size square world.
//!
//! Cells outside of the world are treated as absent: they are never alive,
//! and the world does not wrap around at the edges.
//!
//! Every generation is a new [`World`]. [`World::step`] never modifies
//! the world it is called on.
//!
//! # Example
//!
//! ```rust
//! use lifegrid_lib::{Config, Fill, State};
//!
//! let mut world = Config::new(5).set_fill(Fill::Dead).world().unwrap();
//! for x in 1..4 {
//!     world.set_cell((x, 2), State::Alive).unwrap();
//! }
//!
//! let next = world.step();
//! assert_eq!(next.count_live_neighbors((2, 2)), 2);
//! assert_eq!(
//!     next.to_string(),
//!     ".....\n\
//!      ..o..\n\
//!      ..o..\n\
//!      ..o..\n\
//!      .....\n"
//! );
//! assert_eq!(next.step(), world);
//! ```

mod cells;
mod config;
mod error;
mod generation;
mod nbhd;
pub mod rules;
mod world;

pub use cells::{Coord, State};
pub use config::{Config, Fill};
pub use error::Error;
pub use generation::{step, Generations};
pub use nbhd::{count_live_neighbors, NBHD};
pub use world::World;
