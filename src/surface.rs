//! Device sink adapter
//!
//! [`Surface`] couples the logical [`GridState`] with a [`CellSink`]. Every
//! write goes to the device and is mirrored into the grid, so the grid
//! always describes what the pads show after a [`Surface::resync`].

use crate::CellSink;
use crate::color::{Color, ColorCode, OFF, Palette, wrap_code};
use crate::error::Error;
use crate::grid::{GridState, ROW_STRIDE, cell_index};
use crate::logging::trace;

/// Highest row count addressable with 7-bit note numbers
pub const MAX_ROWS: usize = 8;

/// Surface of the 8x8 Launchpad Mini
pub type Surface8<S> = Surface<S, 8, 8>;

/// Logical grid plus the device it is mirrored to
pub struct Surface<S: CellSink, const W: usize, const H: usize> {
    grid: GridState<W, H>,
    palette: Palette,
    sink: S,
}

impl<S: CellSink, const W: usize, const H: usize> Surface<S, W, H> {
    /// Create a zero-filled surface without touching the device
    pub fn new(sink: S, palette: Palette) -> Self {
        const {
            assert!(
                W > 0 && H > 0 && W <= ROW_STRIDE && H <= MAX_ROWS,
                "grid does not fit the device note range"
            );
        }
        Self {
            grid: GridState::new(),
            palette,
            sink,
        }
    }

    /// Create a surface and push the blank grid to the device
    pub fn connect(sink: S, palette: Palette) -> Result<Self, Error<S::Error>> {
        let mut surface = Self::new(sink, palette);
        surface.resync()?;
        Ok(surface)
    }

    /// Write one cell to the device and mirror it into the grid
    ///
    /// [`Color::NoOp`] and off-grid cells are skipped without touching either side.
    pub fn write_cell(&mut self, x: usize, y: usize, color: Color) -> Result<(), Error<S::Error>> {
        let Some(code) = self.palette.resolve(color)? else {
            return Ok(());
        };
        self.write_code(x, y, code)
    }

    pub(crate) fn write_code(
        &mut self,
        x: usize,
        y: usize,
        code: ColorCode,
    ) -> Result<(), Error<S::Error>> {
        if x >= W || y >= H {
            return Ok(());
        }
        let code = wrap_code(code);
        self.send_raw(x, y, code)?;
        self.grid.set(x, y, code);
        Ok(())
    }

    /// Send a code to the device without recording it in the grid
    #[allow(clippy::cast_possible_truncation)]
    pub fn send_raw(&mut self, x: usize, y: usize, code: ColorCode) -> Result<(), Error<S::Error>> {
        if x >= W || y >= H {
            return Ok(());
        }
        // Checked in `new`: index < ROW_STRIDE * MAX_ROWS = 128
        let index = cell_index(x, y) as u8;
        self.sink
            .send_cell(index, wrap_code(code))
            .map_err(Error::Sink)
    }

    /// Push the whole grid to the device in row-major order
    pub fn resync(&mut self) -> Result<(), Error<S::Error>> {
        for y in 0..H {
            for x in 0..W {
                let code = self.grid.rows()[y][x];
                self.write_code(x, y, code)?;
            }
            trace!("resync row {}: {:?}", y, self.grid.rows()[y]);
        }
        Ok(())
    }

    /// Clear the grid and push it to the device
    pub fn reset(&mut self) -> Result<(), Error<S::Error>> {
        self.grid.fill(OFF);
        self.resync()
    }

    /// Fill the grid with one color and push it to the device
    pub fn flood(&mut self, color: Color) -> Result<(), Error<S::Error>> {
        let Some(code) = self.palette.resolve(color)? else {
            return Ok(());
        };
        self.grid.fill(code);
        self.resync()
    }

    pub fn grid(&self) -> &GridState<W, H> {
        &self.grid
    }

    /// Mutable access to the grid; changes reach the device on the next resync
    pub fn grid_mut(&mut self) -> &mut GridState<W, H> {
        &mut self.grid
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Release the device
    pub fn into_sink(self) -> S {
        self.sink
    }
}
