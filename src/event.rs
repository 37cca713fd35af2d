/// Input event from the controller
///
/// A zero `value` or `velocity` is a release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Board-level button (top row)
    Control { control: u8, value: u8 },
    /// Pad press or release
    Note { note: u8, velocity: u8 },
}

impl Event {
    /// Whether this event is a press rather than a release
    pub const fn is_press(self) -> bool {
        match self {
            Self::Control { value, .. } => value != 0,
            Self::Note { velocity, .. } => velocity != 0,
        }
    }
}
