#![no_std]

pub mod animation;
pub mod channel;
pub mod color;
pub mod dispatcher;
pub mod error;
pub mod event;
pub mod grid;
pub(crate) mod logging;
pub mod pacer;
pub mod preview_sink;
pub mod sequence;
pub mod shapes;
pub mod surface;

pub use animation::{AnimationTimings, Animator, SplashOptions};
pub use channel::{EventChannel, EventReceiver, EventSender};
pub use color::{Color, ColorCode, Palette, Rgb};
pub use dispatcher::{Dispatcher, DispatcherConfig};
pub use error::{Error, UnknownColorError};
pub use event::Event;
pub use grid::{Grid8, GridSnapshot, GridState, cell_from_index, cell_index};
pub use pacer::{BlockingPacer, FramePacer, NoDelay};
pub use preview_sink::PreviewSink;
pub use sequence::AnimationSequence;
pub use shapes::Point;
pub use surface::{Surface, Surface8};
pub use embassy_time::Duration;

/// Abstract pad grid output
///
/// Implement this trait on top of the device transport (a MIDI output port,
/// a simulator, ...). The surface is generic over it.
pub trait CellSink {
    /// Transport error, passed through unmodified
    type Error;

    /// Light the cell at device index `index` with color code `value` (`0..128`)
    fn send_cell(&mut self, index: u8, value: u8) -> Result<(), Self::Error>;
}

impl<S: CellSink + ?Sized> CellSink for &mut S {
    type Error = S::Error;

    fn send_cell(&mut self, index: u8, value: u8) -> Result<(), Self::Error> {
        (**self).send_cell(index, value)
    }
}
