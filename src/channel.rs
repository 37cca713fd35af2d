//! Portable bounded event queue for `no_std` environments.
//!
//! Lets a MIDI callback or an interrupt hand [`Event`]s to the dispatcher
//! loop. Built on `critical-section` and `heapless::Deque`.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::event::Event;

/// Default number of queued events
pub const DEFAULT_CHANNEL_SIZE: usize = 16;

/// Error returned when trying to send to a full channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrySendError(pub Event);

/// Error returned when trying to receive from an empty channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TryReceiveError;

/// A bounded, interrupt-safe event queue.
pub struct EventChannel<const SIZE: usize = DEFAULT_CHANNEL_SIZE> {
    inner: Mutex<RefCell<Deque<Event, SIZE>>>,
}

impl<const SIZE: usize> EventChannel<SIZE> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    pub const fn sender(&self) -> EventSender<'_, SIZE> {
        EventSender { channel: self }
    }

    pub const fn receiver(&self) -> EventReceiver<'_, SIZE> {
        EventReceiver { channel: self }
    }

    /// Queue an event, handing it back if the channel is full.
    pub fn try_send(&self, event: Event) -> Result<(), TrySendError> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(event).map_err(TrySendError)
        })
    }

    /// Take the oldest queued event.
    pub fn try_receive(&self) -> Result<Event, TryReceiveError> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.pop_front().ok_or(TryReceiveError)
        })
    }

    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<const SIZE: usize> Default for EventChannel<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Producer handle of an [`EventChannel`]
#[derive(Clone, Copy)]
pub struct EventSender<'a, const SIZE: usize> {
    channel: &'a EventChannel<SIZE>,
}

impl<const SIZE: usize> EventSender<'_, SIZE> {
    pub fn try_send(&self, event: Event) -> Result<(), TrySendError> {
        self.channel.try_send(event)
    }
}

/// Consumer handle of an [`EventChannel`]
#[derive(Clone, Copy)]
pub struct EventReceiver<'a, const SIZE: usize> {
    channel: &'a EventChannel<SIZE>,
}

impl<'a, const SIZE: usize> EventReceiver<'a, SIZE> {
    pub fn try_receive(&self) -> Result<Event, TryReceiveError> {
        self.channel.try_receive()
    }

    /// Iterate over the events queued right now, oldest first
    pub fn drain(&self) -> Drain<'a, SIZE> {
        Drain {
            channel: self.channel,
        }
    }
}

/// Iterator returned by [`EventReceiver::drain`]
pub struct Drain<'a, const SIZE: usize> {
    channel: &'a EventChannel<SIZE>,
}

impl<const SIZE: usize> Iterator for Drain<'_, SIZE> {
    type Item = Event;

    fn next(&mut self) -> Option<Event> {
        self.channel.try_receive().ok()
    }
}
