use core::convert::Infallible;

use crate::CellSink;
use crate::color::{Rgb, code_to_rgb};
use crate::grid::cell_from_index;

/// In-memory sink that keeps the approximate color of every pad
///
/// Useful for simulators and for checking what a device would show.
#[derive(Debug, Clone)]
pub struct PreviewSink<const W: usize, const H: usize> {
    pixels: [[Rgb; W]; H],
    writes: usize,
}

impl<const W: usize, const H: usize> PreviewSink<W, H> {
    pub const fn new() -> Self {
        Self {
            pixels: [[Rgb { r: 0, g: 0, b: 0 }; W]; H],
            writes: 0,
        }
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgb> {
        self.pixels.get(y)?.get(x).copied()
    }

    pub fn pixels(&self) -> &[[Rgb; W]; H] {
        &self.pixels
    }

    /// Number of cell writes received so far
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl<const W: usize, const H: usize> Default for PreviewSink<W, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const W: usize, const H: usize> CellSink for PreviewSink<W, H> {
    type Error = Infallible;

    fn send_cell(&mut self, index: u8, value: u8) -> Result<(), Self::Error> {
        self.writes += 1;
        let (x, y) = cell_from_index::<W>(usize::from(index));
        if let Some(pixel) = self.pixels.get_mut(y).and_then(|row| row.get_mut(x)) {
            *pixel = code_to_rgb(value);
        }
        Ok(())
    }
}
