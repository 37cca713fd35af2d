use core::fmt;

use heapless::String;

/// Longest color name kept in an error message
pub const MAX_NAME_LEN: usize = 16;

/// A symbolic color name missing from the palette
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownColorError {
    name: String<MAX_NAME_LEN>,
}

impl UnknownColorError {
    /// Create an error for `name`, truncated to [`MAX_NAME_LEN`] bytes
    pub fn new(name: &str) -> Self {
        let mut stored = String::new();
        for ch in name.chars() {
            if stored.push(ch).is_err() {
                break;
            }
        }
        Self { name: stored }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for UnknownColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown color `{}`", self.name)
    }
}

impl core::error::Error for UnknownColorError {}

/// Error of a drawing or animation operation
///
/// `E` is the error type of the [`crate::CellSink`]; sink failures are passed
/// through unmodified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error<E> {
    UnknownColor(UnknownColorError),
    Sink(E),
}

impl<E> From<UnknownColorError> for Error<E> {
    fn from(err: UnknownColorError) -> Self {
        Self::UnknownColor(err)
    }
}

impl<E: fmt::Display> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownColor(err) => err.fmt(f),
            Self::Sink(err) => write!(f, "device sink failed: {err}"),
        }
    }
}

impl<E: fmt::Debug + fmt::Display> core::error::Error for Error<E> {}
