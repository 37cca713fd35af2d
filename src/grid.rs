//! Logical color state of the pad grid
//!
//! The grid is the single source of truth for what every cell shows. Device
//! writes go through [`crate::Surface`], which mirrors them here.

use crate::color::{ColorCode, GREEN, OFF, RED};

/// Distance between two rows in the device note numbering.
///
/// This is fixed by the protocol and does not depend on the grid width.
pub const ROW_STRIDE: usize = 16;

/// Copy of the whole grid taken before a transient animation
pub type GridSnapshot<const W: usize, const H: usize> = [[ColorCode; W]; H];

/// The 8x8 grid of the Launchpad Mini
pub type Grid8 = GridState<8, 8>;

/// Row-major matrix of color codes, indexed `[y][x]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridState<const W: usize, const H: usize> {
    cells: [[ColorCode; W]; H],
}

impl<const W: usize, const H: usize> GridState<W, H> {
    pub const WIDTH: usize = W;
    pub const HEIGHT: usize = H;

    /// Create a zero-filled grid
    pub const fn new() -> Self {
        Self {
            cells: [[OFF; W]; H],
        }
    }

    /// Check that a signed coordinate lies on the grid
    #[allow(clippy::cast_sign_loss)]
    pub const fn is_inside(x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < W && (y as usize) < H
    }

    /// Get the code of a cell, `None` when out of bounds
    pub fn get(&self, x: usize, y: usize) -> Option<ColorCode> {
        self.cells.get(y)?.get(x).copied()
    }

    /// Set a cell, returning `false` when the coordinate is off the grid
    pub fn set(&mut self, x: usize, y: usize, code: ColorCode) -> bool {
        match self.cells.get_mut(y).and_then(|row| row.get_mut(x)) {
            Some(cell) => {
                *cell = code;
                true
            }
            None => false,
        }
    }

    /// Set a cell addressed by signed coordinates, clipping off-grid points
    #[allow(clippy::cast_sign_loss)]
    pub fn set_clipped(&mut self, x: i32, y: i32, code: ColorCode) -> bool {
        Self::is_inside(x, y) && self.set(x as usize, y as usize, code)
    }

    /// Set every cell to `code`
    pub fn fill(&mut self, code: ColorCode) {
        for row in &mut self.cells {
            row.fill(code);
        }
    }

    pub const fn snapshot(&self) -> GridSnapshot<W, H> {
        self.cells
    }

    pub fn restore(&mut self, snapshot: &GridSnapshot<W, H>) {
        self.cells = *snapshot;
    }

    /// Toggle a cell between full green and full red
    ///
    /// Any color other than green turns green; green turns red.
    pub fn invert(&mut self, x: usize, y: usize) -> bool {
        let Some(current) = self.get(x, y) else {
            return false;
        };
        let next = if current == GREEN { RED } else { GREEN };
        self.set(x, y, next)
    }

    /// Apply a feed of points with one code, skipping off-grid points
    pub fn patch<I>(&mut self, points: I, code: ColorCode) -> usize
    where
        I: IntoIterator<Item = (i32, i32)>,
    {
        points
            .into_iter()
            .filter(|&(x, y)| self.set_clipped(x, y, code))
            .count()
    }

    /// Iterate over `(x, y, code)` in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, ColorCode)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .flat_map(|(y, row)| row.iter().enumerate().map(move |(x, &code)| (x, y, code)))
    }

    pub fn rows(&self) -> &[[ColorCode; W]; H] {
        &self.cells
    }
}

impl<const W: usize, const H: usize> Default for GridState<W, H> {
    fn default() -> Self {
        Self::new()
    }
}

/// Linear device index of a cell
pub const fn cell_index(x: usize, y: usize) -> usize {
    x + y * ROW_STRIDE
}

/// Cell addressed by a device index
///
/// Indexes past the last column of a row (the side buttons) fold onto it.
pub const fn cell_from_index<const W: usize>(index: usize) -> (usize, usize) {
    let column = index % ROW_STRIDE;
    let x = if column < W { column } else { W - 1 };
    (x, index / ROW_STRIDE)
}
