use crate::{Cell, Error, Neighborhood, Result, Rule};
use log::trace;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::fmt;

/// An immutable snapshot of the automaton state.
///
/// [`step`](Grid::step) and the point edits return a brand-new `Grid` and
/// leave the receiver untouched, so a caller can keep as many prior
/// generations as it wants. Cells are stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// An all-dead grid with every age at 0.
    pub fn blank(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::dead(); width * height],
        }
    }

    /// A grid where each cell is independently alive with probability
    /// `density` percent (a uniform sample in `[0, 100)` is compared
    /// against it, so 0 is all-dead and 100 all-alive).
    ///
    /// `seed` - random seed (if `None`, a seed is drawn from entropy)
    pub fn random(width: usize, height: usize, seed: Option<u64>, density: f64) -> Self {
        let seed = seed.unwrap_or_else(|| {
            let drawn = rand::thread_rng().gen();
            trace!("drew seed {} from entropy", drawn);
            drawn
        });
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let cells = (0..width * height)
            .map(|_| {
                if rng.gen_range(0.0..100.0) < density {
                    Cell::alive()
                } else {
                    Cell::dead()
                }
            })
            .collect();
        Self {
            width,
            height,
            cells,
        }
    }

    /// A grid seeded from explicit rows of alive flags, all ages 0.
    ///
    /// Fails with [`Error::RaggedRows`] unless every row has the same
    /// width.
    pub fn from_rows(rows: &[&[bool]]) -> Result<Self> {
        let width = rows.first().map_or(0, |r| r.len());
        let mut cells = Vec::with_capacity(width * rows.len());
        for (row, states) in rows.iter().enumerate() {
            if states.len() != width {
                return Err(Error::RaggedRows {
                    row,
                    expected: width,
                    got: states.len(),
                });
            }
            cells.extend(states.iter().map(|&alive| {
                if alive {
                    Cell::alive()
                } else {
                    Cell::dead()
                }
            }));
        }
        Ok(Self {
            width,
            height: rows.len(),
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, row: usize, col: usize) -> Result<usize> {
        if row < self.height && col < self.width {
            Ok(col + row * self.width)
        } else {
            Err(Error::OutOfBounds {
                row,
                col,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// The cell at `(row, col)`. Strict indices, no wrapping.
    pub fn cell(&self, row: usize, col: usize) -> Result<Cell> {
        self.index(row, col).map(|i| self.cells[i])
    }

    pub fn is_alive(&self, row: usize, col: usize) -> Result<bool> {
        self.cell(row, col).map(Cell::is_alive)
    }

    /// How many consecutive generations the cell at `(row, col)` has kept
    /// its current state.
    pub fn age(&self, row: usize, col: usize) -> Result<u32> {
        self.cell(row, col).map(Cell::age)
    }

    /// Total number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Number of live cells around `(row, col)` under `neighborhood`.
    ///
    /// Neighbor coordinates wrap toroidally via true modulo, so row 0 sees
    /// the last row as its upper neighbor and a 1x1 grid neighbors itself
    /// on every offset.
    pub fn live_neighbors(&self, row: usize, col: usize, neighborhood: Neighborhood) -> u8 {
        if self.cells.is_empty() {
            return 0;
        }
        let (h, w) = (self.height as i64, self.width as i64);
        let mut count = 0;
        for &(dr, dc) in neighborhood.offsets() {
            let r = (row as i64 + dr as i64).rem_euclid(h) as usize;
            let c = (col as i64 + dc as i64).rem_euclid(w) as usize;
            count += self.cells[c + r * self.width].is_alive() as u8;
        }
        count
    }

    /// Compute the next generation under `rule`.
    ///
    /// Every cell is classified against its live-neighbor count and then
    /// transitioned with [`Cell::bear`] or [`Cell::kill`], so cells that
    /// keep their state age by one and cells that flip restart at age 0.
    pub fn step(&self, rule: &Rule) -> Grid {
        let neighborhood = rule.neighborhood();
        let mut cells = Vec::with_capacity(self.cells.len());
        for row in 0..self.height {
            for col in 0..self.width {
                let cell = self.cells[col + row * self.width];
                let neighbors = self.live_neighbors(row, col, neighborhood);
                cells.push(if rule.classify(cell.is_alive(), neighbors) {
                    cell.bear()
                } else {
                    cell.kill()
                });
            }
        }
        Grid {
            width: self.width,
            height: self.height,
            cells,
        }
    }

    /// A copy of the grid with `(row, col)` forced alive or dead.
    ///
    /// The edit goes through the same age bookkeeping as a normal
    /// transition: forcing a live cell alive keeps it aging.
    pub fn set_alive(&self, row: usize, col: usize, alive: bool) -> Result<Grid> {
        let i = self.index(row, col)?;
        let mut next = self.clone();
        next.cells[i] = if alive {
            next.cells[i].bear()
        } else {
            next.cells[i].kill()
        };
        Ok(next)
    }

    /// A copy of the grid with `(row, col)` flipped and its age reset.
    pub fn toggle(&self, row: usize, col: usize) -> Result<Grid> {
        let i = self.index(row, col)?;
        let mut next = self.clone();
        next.cells[i] = next.cells[i].invert();
        Ok(next)
    }
}

impl fmt::Display for Grid {
    /// Terminal dump: `#` for live cells inside a frame.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.width + 2 {
            f.write_str("_")?;
        }
        f.write_str("\n")?;
        for row in 0..self.height {
            f.write_str("|")?;
            for col in 0..self.width {
                let cell = self.cells[col + row * self.width];
                f.write_str(if cell.is_alive() { "#" } else { " " })?;
            }
            f.write_str("|\n")?;
        }
        for _ in 0..self.width + 2 {
            f.write_str("\u{203e}")?;
        }
        Ok(())
    }
}
