//! Frame pacing
//!
//! Animations never sleep on their own; they hand every frame delay to a
//! [`FramePacer`]. Hardware builds block the thread, tests can count delays
//! or skip them.

use embassy_time::Duration;

/// Default delay between splash frames
pub const DEFAULT_SPLASH_FRAME: Duration = Duration::from_millis(10);

/// Default delay between frames of the flash under a pressed pad
pub const DEFAULT_TAP_FRAME: Duration = Duration::from_millis(30);

/// Default delay after each cell of a roll or flush sweep
pub const DEFAULT_SWEEP_STEP: Duration = Duration::from_millis(10);

/// Waits between animation frames
pub trait FramePacer {
    /// Block until `delay` has passed
    fn wait(&mut self, delay: Duration);
}

/// Pacer that blocks the current thread with `embassy_time::block_for`
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockingPacer;

impl FramePacer for BlockingPacer {
    fn wait(&mut self, delay: Duration) {
        if delay.as_ticks() > 0 {
            embassy_time::block_for(delay);
        }
    }
}

/// Pacer that returns immediately and only counts the requested time
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay {
    frames: usize,
    total: Duration,
}

impl NoDelay {
    pub const fn new() -> Self {
        Self {
            frames: 0,
            total: Duration::from_ticks(0),
        }
    }

    /// Number of waits requested
    pub const fn frames(&self) -> usize {
        self.frames
    }

    /// Sum of all requested delays
    pub const fn total(&self) -> Duration {
        self.total
    }
}

impl FramePacer for NoDelay {
    fn wait(&mut self, delay: Duration) {
        self.frames += 1;
        self.total += delay;
    }
}

impl<P: FramePacer + ?Sized> FramePacer for &mut P {
    fn wait(&mut self, delay: Duration) {
        (**self).wait(delay);
    }
}
