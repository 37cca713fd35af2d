use heapless::Vec;

use crate::color::{Color, Palette};
use crate::error::UnknownColorError;

/// Maximum number of steps in an [`AnimationSequence`]
pub const SEQUENCE_CAPACITY: usize = 32;

/// Ripple used by the splash: eight blanks, then a ramp from red to green
/// separated by transparent steps.
pub const SPLASH_SYMBOLS: &[&str] = &[
    "Z", "Z", "Z", "Z", "Z", "Z", "Z", "Z", "R", "N", "5L", "N", "4L", "N", "3L", "N", "2L", "N",
    "1L", "N", "G",
];

/// Short flash played under a pressed pad
pub const TAP_SYMBOLS: &[&str] = &["N", "N", "N", "R"];

/// Ordered colors that shift one step outward every frame
///
/// Build a fresh value for every animation; rotating mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationSequence {
    steps: Vec<Color, SEQUENCE_CAPACITY>,
}

impl AnimationSequence {
    /// Build from colors; returns `None` when empty or over capacity
    pub fn new(colors: &[Color]) -> Option<Self> {
        if colors.is_empty() {
            return None;
        }
        let steps = Vec::from_slice(colors).ok()?;
        Some(Self { steps })
    }

    /// Build from symbols, where `"N"` marks a transparent step
    pub fn from_symbols(symbols: &[&'static str]) -> Option<Self> {
        if symbols.is_empty() {
            return None;
        }
        let mut steps = Vec::new();
        for &symbol in symbols {
            steps.push(Color::parse_symbol(symbol)).ok()?;
        }
        Some(Self { steps })
    }

    /// The default 21-step splash ripple
    pub fn splash() -> Self {
        Self::from_builtin(SPLASH_SYMBOLS)
    }

    /// The 4-step flash played on a pad press
    pub fn tap() -> Self {
        Self::from_builtin(TAP_SYMBOLS)
    }

    fn from_builtin(symbols: &[&'static str]) -> Self {
        const {
            assert!(SPLASH_SYMBOLS.len() <= SEQUENCE_CAPACITY);
            assert!(TAP_SYMBOLS.len() <= SEQUENCE_CAPACITY);
        }
        let steps = symbols
            .iter()
            .take(SEQUENCE_CAPACITY)
            .map(|&symbol| Color::parse_symbol(symbol))
            .collect();
        Self { steps }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Step at `index`, wrapping around the end
    pub fn get(&self, index: usize) -> Color {
        self.steps[index % self.steps.len()]
    }

    /// Move the last step to the front
    pub fn rotate_right(&mut self) {
        if !self.steps.is_empty() {
            self.steps.rotate_right(1);
        }
    }

    pub fn as_slice(&self) -> &[Color] {
        &self.steps
    }

    /// Check that every named step exists in the palette
    pub fn validate(&self, palette: &Palette) -> Result<(), UnknownColorError> {
        self.steps
            .iter()
            .try_for_each(|&color| palette.resolve(color).map(|_| ()))
    }
}
