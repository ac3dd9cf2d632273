//! The world.

use crate::{
    cells::{Alive, Coord, Dead, State},
    error::Error,
    rules::RULE_STRING,
};
use rand::Rng;
use std::{
    fmt::{self, Display, Formatter, Write},
    str::FromStr,
};

/// The world.
///
/// A square grid of cells with a fixed side length.
/// Rows are ordered from top to bottom, columns from left to right.
///
/// Cells outside of the world do not exist. They are never alive,
/// and looking them up is not an error.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct World {
    /// Side length.
    size: usize,

    /// All cells, row by row.
    ///
    /// The length is always `size * size`.
    cells: Box<[State]>,
}

impl World {
    /// Creates a new world where every cell has the given state.
    ///
    /// Returns an error if `size` is zero.
    pub fn new(size: usize, state: State) -> Result<Self, Error> {
        if size == 0 {
            return Err(Error::NonPositiveError);
        }
        Ok(World {
            size,
            cells: vec![state; size * size].into_boxed_slice(),
        })
    }

    /// Creates a new dead world, and sets `count` randomly chosen cells
    /// to [`Alive`].
    ///
    /// The positions are chosen independently, so the same cell may be
    /// chosen more than once, and the world may end up with fewer than
    /// `count` living cells.
    pub fn random<R: Rng + ?Sized>(size: usize, count: usize, rng: &mut R) -> Result<Self, Error> {
        let mut world = World::new(size, Dead)?;
        for _ in 0..count {
            let x = rng.gen_range(0..size);
            let y = rng.gen_range(0..size);
            world.cells[y * size + x] = Alive;
        }
        Ok(world)
    }

    /// Creates a new world from its rows.
    ///
    /// Returns an error if there are no rows,
    /// or if any row does not have exactly as many cells as there are rows.
    pub fn from_rows(rows: Vec<Vec<State>>) -> Result<Self, Error> {
        let size = rows.len();
        if size == 0 {
            return Err(Error::NonPositiveError);
        }
        let mut cells = Vec::with_capacity(size * size);
        for (row, states) in rows.into_iter().enumerate() {
            if states.len() != size {
                return Err(Error::NonSquareError {
                    row,
                    len: states.len(),
                    size,
                });
            }
            cells.extend(states);
        }
        Ok(World {
            size,
            cells: cells.into_boxed_slice(),
        })
    }

    /// Builds a world of the given size cell by cell.
    pub(crate) fn from_fn<F: FnMut(Coord) -> State>(size: usize, mut f: F) -> Self {
        let mut cells = Vec::with_capacity(size * size);
        for y in 0..size as isize {
            for x in 0..size as isize {
                cells.push(f((x, y)));
            }
        }
        World {
            size,
            cells: cells.into_boxed_slice(),
        }
    }

    /// Side length of the world.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Index of a cell in `cells`, or `None` if it is outside of the world.
    #[inline]
    fn index(&self, (x, y): Coord) -> Option<usize> {
        let size = self.size as isize;
        if (0..size).contains(&x) && (0..size).contains(&y) {
            Some((y * size + x) as usize)
        } else {
            None
        }
    }

    /// Gets the state of a cell.
    ///
    /// Returns `None` if there is no such cell.
    #[inline]
    pub fn get_cell_state(&self, coord: Coord) -> Option<State> {
        self.index(coord).map(|i| self.cells[i])
    }

    /// Sets the state of a cell.
    ///
    /// Returns an error if there is no such cell.
    pub fn set_cell(&mut self, coord: Coord, state: State) -> Result<(), Error> {
        let i = self.index(coord).ok_or(Error::SetCellError(coord))?;
        self.cells[i] = state;
        Ok(())
    }

    /// Iterates over the rows, from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[State]> + '_ {
        self.cells.chunks(self.size)
    }

    /// Number of living cells.
    pub fn cell_count(&self) -> usize {
        self.cells.iter().filter(|s| s.is_alive()).count()
    }

    /// Whether there are no living cells.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&s| s == Dead)
    }

    /// Displays the world in a mix of
    /// [Plaintext](https://conwaylife.com/wiki/Plaintext) and
    /// [RLE](https://conwaylife.com/wiki/Rle) format.
    ///
    /// * **Dead** cells are represented by `.`;
    /// * **Living** cells are represented by `o`;
    /// * Each line is ended with `$`;
    /// * The whole pattern is ended with `!`.
    pub fn rle(&self) -> String {
        let mut str = format!(
            "x = {}, y = {}, rule = {}\n",
            self.size, self.size, RULE_STRING
        );
        for (y, row) in self.rows().enumerate() {
            str.extend(row.iter().map(|&s| state_char(s)));
            str.push(if y == self.size - 1 { '!' } else { '$' });
            str.push('\n');
        }
        str
    }
}

fn state_char(state: State) -> char {
    match state {
        Dead => '.',
        Alive => 'o',
    }
}

/// Displays the world in [Plaintext](https://conwaylife.com/wiki/Plaintext)
/// format.
///
/// * **Dead** cells are represented by `.`;
/// * **Living** cells are represented by `o`.
impl Display for World {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for &state in row {
                f.write_char(state_char(state))?;
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}

/// Parses a world in [Plaintext](https://conwaylife.com/wiki/Plaintext)
/// format.
///
/// * `.` is a dead cell;
/// * `o`, `O` and `*` are living cells;
/// * Lines starting with `!` are comments;
/// * Blank lines at the end are ignored.
///
/// The pattern must be square.
impl FromStr for World {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines: Vec<&str> = s
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.starts_with('!'))
            .collect();
        while lines.last().map_or(false, |line| line.is_empty()) {
            lines.pop();
        }
        let rows = lines
            .into_iter()
            .enumerate()
            .map(|(y, line)| {
                line.chars()
                    .enumerate()
                    .map(|(x, ch)| match ch {
                        '.' => Ok(Dead),
                        'o' | 'O' | '*' => Ok(Alive),
                        _ => Err(Error::InvalidChar {
                            ch,
                            coord: (x as isize, y as isize),
                        }),
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        World::from_rows(rows)
    }
}
