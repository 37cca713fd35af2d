#![allow(dead_code)]

use myrtio_grid_composer::{CellSink, Palette, Surface8};

/// Error returned once the recording sink is closed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Closed;

impl core::fmt::Display for Closed {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("sink closed")
    }
}

/// Sink that records every `(index, value)` write
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub writes: Vec<(u8, u8)>,
    /// Fail every write once this many writes went through
    pub fail_after: Option<usize>,
}

impl RecordingSink {
    pub fn failing_after(writes: usize) -> Self {
        Self {
            writes: Vec::new(),
            fail_after: Some(writes),
        }
    }
}

impl CellSink for RecordingSink {
    type Error = Closed;

    fn send_cell(&mut self, index: u8, value: u8) -> Result<(), Closed> {
        if self.fail_after.is_some_and(|limit| self.writes.len() >= limit) {
            return Err(Closed);
        }
        self.writes.push((index, value));
        Ok(())
    }
}

pub fn surface() -> Surface8<RecordingSink> {
    Surface8::new(RecordingSink::default(), Palette::launchpad_mini())
}
