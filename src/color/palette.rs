use super::{Color, ColorCode, wrap_code};
use crate::error::UnknownColorError;

/// Name to code mapping entry
pub type PaletteEntry = (&'static str, ColorCode);

/// Launchpad Mini palette: off, red and green in 25/50/100% levels plus the
/// mixed "L" shades between them.
pub const DEFAULT_PALETTE: &[PaletteEntry] = &[
    ("Z", 0),
    ("R25", 1),
    ("R50", 2),
    ("R100", 3),
    ("R", 3),
    ("G25", 16),
    ("G50", 32),
    ("G100", 48),
    ("G", 48),
    ("1L50", 49),
    ("1L", 49),
    ("2L25", 33),
    ("2L50", 50),
    ("2L", 50),
    ("3L25", 17),
    ("3L50", 34),
    ("3L100", 51),
    ("3L", 51),
    ("4L50", 18),
    ("4L100", 35),
    ("4L", 35),
    ("5L100", 19),
    ("5L", 19),
];

/// Colors selectable by the board-level buttons, red to green
pub const DEFAULT_TOP_ROW: &[&str] = &["R", "5L", "4L", "3L", "2L", "1L", "G"];

/// Immutable mapping from symbolic names to device codes
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    entries: &'static [PaletteEntry],
    top_row: &'static [&'static str],
}

impl Palette {
    /// Build a palette, checking that every top-row name resolves
    pub fn new(
        entries: &'static [PaletteEntry],
        top_row: &'static [&'static str],
    ) -> Result<Self, UnknownColorError> {
        let palette = Self { entries, top_row };
        if top_row.is_empty() {
            return Err(UnknownColorError::new(""));
        }
        for name in top_row {
            palette.resolve_code(name)?;
        }
        Ok(palette)
    }

    /// Palette of the Launchpad Mini
    pub const fn launchpad_mini() -> Self {
        Self {
            entries: DEFAULT_PALETTE,
            top_row: DEFAULT_TOP_ROW,
        }
    }

    /// Look up a symbolic name, ignoring ASCII case
    pub fn resolve_code(&self, name: &str) -> Result<ColorCode, UnknownColorError> {
        self.entries
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|&(_, code)| code)
            .ok_or_else(|| UnknownColorError::new(name))
    }

    /// Resolve any color to a device code
    ///
    /// Returns `None` for [`Color::NoOp`]; numeric codes are wrapped into the device range.
    pub fn resolve(&self, color: Color) -> Result<Option<ColorCode>, UnknownColorError> {
        match color {
            Color::NoOp => Ok(None),
            Color::Code(code) => Ok(Some(wrap_code(code))),
            Color::Named(name) => self.resolve_code(name).map(Some),
        }
    }

    /// Color of the board button at `index`, cycling through the top row
    pub fn top_row_color(&self, index: usize) -> Result<ColorCode, UnknownColorError> {
        let Some(name) = self.top_row.get(index % self.top_row.len().max(1)) else {
            return Err(UnknownColorError::new(""));
        };
        self.resolve_code(name)
    }

    pub fn top_row(&self) -> &'static [&'static str] {
        self.top_row
    }

    pub fn entries(&self) -> &'static [PaletteEntry] {
        self.entries
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::launchpad_mini()
    }
}
