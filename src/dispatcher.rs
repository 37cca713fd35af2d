//! Input dispatching
//!
//! Turns controller events into color selection, pad toggles and the
//! clear animation.

use crate::CellSink;
use crate::animation::Animator;
use crate::channel::EventReceiver;
use crate::color::{Color, ColorCode, OFF, RED};
use crate::error::Error;
use crate::event::Event;
use crate::grid::cell_from_index;
use crate::logging::{debug, warning};
use crate::pacer::FramePacer;
use crate::surface::Surface;

/// Board button that clears the grid (the "mixer" button of the Launchpad Mini)
pub const DEFAULT_CLEAR_CONTROL: u8 = 111;

/// Pad color selected before any board button is pressed
pub const DEFAULT_SELECTED_COLOR: ColorCode = RED;

#[derive(Debug, Clone, Copy)]
pub struct DispatcherConfig {
    /// Control id that triggers [`Animator::flush`]
    pub clear_control: u8,
    /// Initial pad color
    pub default_color: ColorCode,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            clear_control: DEFAULT_CLEAR_CONTROL,
            default_color: DEFAULT_SELECTED_COLOR,
        }
    }
}

/// Consumes events one at a time and drives the surface
pub struct Dispatcher<P: FramePacer> {
    animator: Animator<P>,
    config: DispatcherConfig,
    selected: ColorCode,
}

impl<P: FramePacer> Dispatcher<P> {
    pub fn new(animator: Animator<P>) -> Self {
        Self::with_config(animator, DispatcherConfig::default())
    }

    pub fn with_config(animator: Animator<P>, config: DispatcherConfig) -> Self {
        Self {
            animator,
            selected: config.default_color,
            config,
        }
    }

    /// Color currently painted by pad presses
    pub fn selected_color(&self) -> ColorCode {
        self.selected
    }

    pub fn animator_mut(&mut self) -> &mut Animator<P> {
        &mut self.animator
    }

    /// Handle a single event; releases are ignored
    pub fn handle<S: CellSink, const W: usize, const H: usize>(
        &mut self,
        surface: &mut Surface<S, W, H>,
        event: Event,
    ) -> Result<(), Error<S::Error>> {
        debug!("event: {:?}", event);
        if !event.is_press() {
            return Ok(());
        }
        match event {
            Event::Control { control, .. } if control == self.config.clear_control => {
                self.animator.flush(surface)
            }
            Event::Control { control, .. } => {
                self.selected = surface.palette().top_row_color(usize::from(control))?;
                debug!("selected color {}", self.selected);
                Ok(())
            }
            Event::Note { note, .. } => self.press(surface, note),
        }
    }

    /// Flash the pressed pad, then toggle it between off and the selected color
    fn press<S: CellSink, const W: usize, const H: usize>(
        &mut self,
        surface: &mut Surface<S, W, H>,
        note: u8,
    ) -> Result<(), Error<S::Error>> {
        let (x, y) = cell_from_index::<W>(usize::from(note));
        let Some(current) = surface.grid().get(x, y) else {
            warning!("note {} is outside the grid", note);
            return Ok(());
        };
        // Bounded by the grid size, which fits the note range
        #[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
        let center = (x as i32, y as i32);
        self.animator.tap_splash(surface, center)?;

        let next = if current == self.selected {
            OFF
        } else {
            self.selected
        };
        surface.write_cell(x, y, Color::Code(next))
    }

    /// Handle events until the stream ends
    pub fn run<S, I, const W: usize, const H: usize>(
        &mut self,
        surface: &mut Surface<S, W, H>,
        events: I,
    ) -> Result<(), Error<S::Error>>
    where
        S: CellSink,
        I: IntoIterator<Item = Event>,
    {
        for event in events {
            self.handle(surface, event)?;
        }
        debug!("event stream ended");
        Ok(())
    }

    /// Handle every event queued on `receiver` without blocking
    ///
    /// Returns the number of events handled.
    pub fn process_pending<S: CellSink, const W: usize, const H: usize, const SIZE: usize>(
        &mut self,
        surface: &mut Surface<S, W, H>,
        receiver: &EventReceiver<'_, SIZE>,
    ) -> Result<usize, Error<S::Error>> {
        let mut handled = 0;
        for event in receiver.drain() {
            self.handle(surface, event)?;
            handled += 1;
        }
        Ok(handled)
    }
}
