//! Animation engine
//!
//! Splashes are transient: the grid is snapshotted before the first frame and
//! restored (and resynced) after the last one. Roll and flush are sweeps that
//! leave their result on the grid.

use embassy_time::Duration;

use crate::CellSink;
use crate::color::{Color, OFF, wrap_code};
use crate::error::Error;
use crate::logging::debug;
use crate::pacer::{DEFAULT_SPLASH_FRAME, DEFAULT_SWEEP_STEP, DEFAULT_TAP_FRAME, FramePacer};
use crate::sequence::AnimationSequence;
use crate::shapes::Point;
use crate::surface::Surface;

/// Default number of full-grid passes made by [`Animator::roll`]
pub const DEFAULT_ROLL_CYCLES: usize = 127;

/// Delays used by the animation engine
#[derive(Debug, Clone, Copy)]
pub struct AnimationTimings {
    /// Delay between splash frames
    pub splash_frame: Duration,
    /// Delay between frames of the flash under a pressed pad
    pub tap_frame: Duration,
    /// Delay after each cell of a roll or flush sweep
    pub sweep_step: Duration,
    /// Passes made by a roll
    pub roll_cycles: usize,
}

impl Default for AnimationTimings {
    fn default() -> Self {
        Self {
            splash_frame: DEFAULT_SPLASH_FRAME,
            tap_frame: DEFAULT_TAP_FRAME,
            sweep_step: DEFAULT_SWEEP_STEP,
            roll_cycles: DEFAULT_ROLL_CYCLES,
        }
    }
}

/// Parameters of a single splash
#[derive(Debug, Clone, Copy)]
pub struct SplashOptions {
    /// Delay after every frame
    pub delay: Duration,
    /// How many times the whole sequence travels outward
    pub repeats: usize,
}

impl Default for SplashOptions {
    fn default() -> Self {
        Self {
            delay: DEFAULT_SPLASH_FRAME,
            repeats: 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Ripple {
    Paint,
    Invert,
}

/// Plays timed animations on a [`Surface`]
pub struct Animator<P: FramePacer> {
    pacer: P,
    timings: AnimationTimings,
}

impl<P: FramePacer> Animator<P> {
    pub fn new(pacer: P) -> Self {
        Self::with_timings(pacer, AnimationTimings::default())
    }

    pub fn with_timings(pacer: P, timings: AnimationTimings) -> Self {
        Self { pacer, timings }
    }

    pub fn timings(&self) -> &AnimationTimings {
        &self.timings
    }

    pub fn pacer(&self) -> &P {
        &self.pacer
    }

    pub fn pacer_mut(&mut self) -> &mut P {
        &mut self.pacer
    }

    /// Ripple of colored square rings spreading from `center`
    ///
    /// Frame `n` draws rings `0..=n`, ring `i` in the color at position `i`
    /// of the sequence, then the sequence rotates right by one.
    pub fn splash_square<S: CellSink, const W: usize, const H: usize>(
        &mut self,
        surface: &mut Surface<S, W, H>,
        center: Point,
        options: SplashOptions,
        sequence: AnimationSequence,
    ) -> Result<(), Error<S::Error>> {
        self.splash(surface, center, options, sequence, Ripple::Paint)
    }

    /// Ripple of inverted square rings spreading from `center`
    ///
    /// Inversion is a two-state toggle, so only the sequence length matters.
    pub fn negative_splash_square<S: CellSink, const W: usize, const H: usize>(
        &mut self,
        surface: &mut Surface<S, W, H>,
        center: Point,
        options: SplashOptions,
        sequence: AnimationSequence,
    ) -> Result<(), Error<S::Error>> {
        self.splash(surface, center, options, sequence, Ripple::Invert)
    }

    /// Short inverted flash under a pressed pad
    pub fn tap_splash<S: CellSink, const W: usize, const H: usize>(
        &mut self,
        surface: &mut Surface<S, W, H>,
        center: Point,
    ) -> Result<(), Error<S::Error>> {
        let options = SplashOptions {
            delay: self.timings.tap_frame,
            repeats: 1,
        };
        self.negative_splash_square(surface, center, options, AnimationSequence::tap())
    }

    fn splash<S: CellSink, const W: usize, const H: usize>(
        &mut self,
        surface: &mut Surface<S, W, H>,
        center: Point,
        options: SplashOptions,
        mut sequence: AnimationSequence,
        ripple: Ripple,
    ) -> Result<(), Error<S::Error>> {
        if ripple == Ripple::Paint {
            sequence.validate(surface.palette())?;
        }
        let frames = sequence.len().saturating_mul(options.repeats);
        debug!("splash {:?} at {:?}: {} frames", ripple, center, frames);

        let snapshot = surface.grid().snapshot();
        let played = self.play_frames(surface, center, options.delay, &mut sequence, frames, ripple);
        surface.grid_mut().restore(&snapshot);
        played?;
        surface.resync()
    }

    fn play_frames<S: CellSink, const W: usize, const H: usize>(
        &mut self,
        surface: &mut Surface<S, W, H>,
        center: Point,
        delay: Duration,
        sequence: &mut AnimationSequence,
        frames: usize,
        ripple: Ripple,
    ) -> Result<(), Error<S::Error>> {
        for frame in 0..frames {
            for ring in 0..=frame {
                let radius = i32::try_from(ring).unwrap_or(i32::MAX);
                match ripple {
                    Ripple::Paint => surface.square(center, radius, sequence.get(ring))?,
                    Ripple::Invert => surface.negative_square(center, radius),
                }
            }
            surface.resync()?;
            self.pacer.wait(delay);
            sequence.rotate_right();
        }
        Ok(())
    }

    /// Cycle every cell through the codes, one step per pass
    ///
    /// Codes wrap from 127 back to 0.
    pub fn roll<S: CellSink, const W: usize, const H: usize>(
        &mut self,
        surface: &mut Surface<S, W, H>,
        cycles: usize,
    ) -> Result<(), Error<S::Error>> {
        debug!("roll: {} cycles", cycles);
        for _ in 0..cycles {
            for y in 0..H {
                for x in 0..W {
                    let code = surface.grid().rows()[y][x];
                    surface.write_code(x, y, wrap_code(code.wrapping_add(1)))?;
                    self.pacer.wait(self.timings.sweep_step);
                }
            }
        }
        Ok(())
    }

    /// [`Animator::roll`] with the configured number of cycles
    pub fn roll_default<S: CellSink, const W: usize, const H: usize>(
        &mut self,
        surface: &mut Surface<S, W, H>,
    ) -> Result<(), Error<S::Error>> {
        let cycles = self.timings.roll_cycles;
        self.roll(surface, cycles)
    }

    /// Flash every cell one code up, then clear the grid cell by cell
    ///
    /// The flash only reaches the device; the clear is stored.
    pub fn flush<S: CellSink, const W: usize, const H: usize>(
        &mut self,
        surface: &mut Surface<S, W, H>,
    ) -> Result<(), Error<S::Error>> {
        debug!("flush");
        for y in 0..H {
            for x in 0..W {
                let code = surface.grid().rows()[y][x];
                surface.send_raw(x, y, code.wrapping_add(1))?;
                self.pacer.wait(self.timings.sweep_step);
            }
        }
        for y in 0..H {
            for x in 0..W {
                surface.write_cell(x, y, Color::Code(OFF))?;
                self.pacer.wait(self.timings.sweep_step);
            }
        }
        Ok(())
    }
}
