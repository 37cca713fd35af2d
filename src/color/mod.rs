mod palette;
mod preview;

pub use palette::{DEFAULT_PALETTE, DEFAULT_TOP_ROW, Palette, PaletteEntry};
pub use preview::{LEVEL_STEP, code_to_rgb};
use smart_leds::RGB8;

/// Numeric color code understood by the device (velocity of a note message)
pub type ColorCode = u8;

pub type Rgb = RGB8;

/// Number of distinct codes the device accepts; stored codes are always below it
pub const COLOR_RANGE: u8 = 128;

/// Unlit cell
pub const OFF: ColorCode = 0;
/// Full red, the "off" side of [`crate::GridState::invert`]
pub const RED: ColorCode = 3;
/// Full green, the "on" side of [`crate::GridState::invert`]
pub const GREEN: ColorCode = 48;

/// Symbol that leaves a cell untouched when used in a sequence
pub const NO_OP_SYMBOL: &str = "N";

/// A color as accepted by every drawing operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    /// Symbolic name, looked up in the [`Palette`]
    Named(&'static str),
    /// Raw device code
    Code(ColorCode),
    /// Leave the cell as it is
    NoOp,
}

impl Color {
    /// Parse a sequence symbol, mapping [`NO_OP_SYMBOL`] to [`Color::NoOp`]
    pub fn parse_symbol(symbol: &'static str) -> Self {
        if symbol.eq_ignore_ascii_case(NO_OP_SYMBOL) {
            Self::NoOp
        } else {
            Self::Named(symbol)
        }
    }

    pub const fn is_no_op(self) -> bool {
        matches!(self, Self::NoOp)
    }
}

impl From<ColorCode> for Color {
    fn from(code: ColorCode) -> Self {
        Self::Code(code)
    }
}

impl From<&'static str> for Color {
    fn from(symbol: &'static str) -> Self {
        Self::parse_symbol(symbol)
    }
}

/// Clamp an arbitrary code into the device range
#[inline]
pub const fn wrap_code(code: ColorCode) -> ColorCode {
    code % COLOR_RANGE
}
