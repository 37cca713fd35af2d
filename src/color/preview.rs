//! Device code decoding for on-screen previews
//!
//! A pad holds a red and a green LED, each with four brightness levels.
//! The code stores the red level in bits 0-1 and the green level in bits 4-5.

use super::{ColorCode, Rgb};

/// Channel value added per brightness level
pub const LEVEL_STEP: u8 = 85;

const LEVEL_MASK: u8 = 0b11;
const GREEN_SHIFT: u8 = 4;

/// Approximate RGB appearance of a device code
pub const fn code_to_rgb(code: ColorCode) -> Rgb {
    let red = code & LEVEL_MASK;
    let green = (code >> GREEN_SHIFT) & LEVEL_MASK;
    Rgb {
        r: red * LEVEL_STEP,
        g: green * LEVEL_STEP,
        b: 0,
    }
}
