use std::fmt;

use crate::error::{PaletteError, Result};

/// A 24-bit color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Pack into `0x00RRGGBB`.
    pub const fn packed(self) -> u32 {
        (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Unpack from `0x00RRGGBB`. The top byte is ignored.
    pub const fn from_packed(value: u32) -> Self {
        Self {
            r: (value >> 16) as u8,
            g: (value >> 8) as u8,
            b: value as u8,
        }
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Intensity levels of the 6x6x6 color cube.
pub const CUBE_STEPS: [u8; 6] = [0x00, 0x5f, 0x87, 0xaf, 0xd7, 0xff];

/// Standard xterm values for the 16 ANSI colors.
pub const BASIC16: [Rgb; 16] = [
    Rgb::new(0, 0, 0),
    Rgb::new(205, 0, 0),
    Rgb::new(0, 205, 0),
    Rgb::new(205, 205, 0),
    Rgb::new(0, 0, 238),
    Rgb::new(205, 0, 205),
    Rgb::new(0, 205, 205),
    Rgb::new(229, 229, 229),
    Rgb::new(127, 127, 127),
    Rgb::new(255, 0, 0),
    Rgb::new(0, 255, 0),
    Rgb::new(255, 255, 0),
    Rgb::new(92, 92, 255),
    Rgb::new(255, 0, 255),
    Rgb::new(0, 255, 255),
    Rgb::new(255, 255, 255),
];

/// First index of the color cube.
pub const CUBE_START: u8 = 16;
/// First index of the grayscale ramp.
pub const GRAY_START: u8 = 232;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Named(NamedColor),
    Indexed(u8),
    Rgb(Rgb),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl NamedColor {
    const ALL: [NamedColor; 16] = [
        Self::Black,
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Blue,
        Self::Magenta,
        Self::Cyan,
        Self::White,
        Self::BrightBlack,
        Self::BrightRed,
        Self::BrightGreen,
        Self::BrightYellow,
        Self::BrightBlue,
        Self::BrightMagenta,
        Self::BrightCyan,
        Self::BrightWhite,
    ];

    /// Convert named color to its standard xterm RGB value.
    pub fn to_rgb(self) -> Rgb {
        BASIC16[self.to_index() as usize]
    }

    /// Convert a named color to its xterm 256-color index (0-15).
    pub fn to_index(self) -> u8 {
        self as u8
    }

    /// The named color at `index`, if it is one of the first 16.
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }
}

/// Convert a 256-color xterm index to RGB.
///
/// Indices 0-15: standard/bright named colors
/// Indices 16-231: 6x6x6 color cube, red slowest and blue fastest
/// Indices 232-255: 24-step grayscale ramp from 8 to 238
pub const fn decode(index: u8) -> Rgb {
    match index {
        0..=15 => BASIC16[index as usize],
        16..=231 => {
            let v = (index - CUBE_START) as usize;
            Rgb {
                r: CUBE_STEPS[(v / 36) % 6],
                g: CUBE_STEPS[(v / 6) % 6],
                b: CUBE_STEPS[v % 6],
            }
        }
        232..=255 => {
            let level = 8 + (index - GRAY_START) * 10;
            Rgb::new(level, level, level)
        }
    }
}

/// Checked variant of [`decode`] for indices coming from untyped callers.
pub fn try_decode(index: i64) -> Result<Rgb> {
    u8::try_from(index)
        .map(decode)
        .map_err(|_| PaletteError::OutOfRange(index))
}

impl Color {
    /// Resolve to the RGB value this color shows as with the xterm defaults.
    pub fn to_rgb(&self) -> Rgb {
        match self {
            Self::Named(c) => c.to_rgb(),
            Self::Indexed(i) => decode(*i),
            Self::Rgb(rgb) => *rgb,
        }
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Self::Rgb(rgb)
    }
}

impl From<NamedColor> for Color {
    fn from(named: NamedColor) -> Self {
        Self::Named(named)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic16_verbatim() {
        for i in 0..16u8 {
            assert_eq!(decode(i), BASIC16[i as usize]);
        }
        assert_eq!(decode(10), Rgb::new(0, 255, 0));
        assert_eq!(decode(12), Rgb::new(92, 92, 255));
    }

    #[test]
    fn test_cube_components_and_digits() {
        for i in 16..=231u8 {
            let c = decode(i);
            let digit = |v: u8| CUBE_STEPS.iter().position(|&s| s == v).unwrap() as u8;
            let (r, g, b) = (digit(c.r), digit(c.g), digit(c.b));
            assert_eq!(16 + r * 36 + g * 6 + b, i, "index {}", i);
        }
    }

    #[test]
    fn test_grayscale_ramp() {
        let mut prev = None;
        for i in 232..=255u8 {
            let c = decode(i);
            assert_eq!(c.r, c.g);
            assert_eq!(c.g, c.b);
            assert_eq!(c.r, 8 + (i - 232) * 10);
            if let Some(p) = prev {
                assert!(c.r > p);
            }
            prev = Some(c.r);
        }
    }

    #[test]
    fn test_concrete_cases() {
        assert_eq!(decode(0), Rgb::new(0, 0, 0));
        assert_eq!(decode(15), Rgb::new(255, 255, 255));
        assert_eq!(decode(16), Rgb::new(0, 0, 0));
        assert_eq!(decode(231), Rgb::new(255, 255, 255));
        assert_eq!(decode(232), Rgb::new(8, 8, 8));
        assert_eq!(decode(255), Rgb::new(238, 238, 238));
        assert_eq!(decode(214), Rgb::new(255, 175, 0));
    }

    #[test]
    fn test_try_decode_range() {
        assert_eq!(try_decode(0), Ok(Rgb::new(0, 0, 0)));
        assert_eq!(try_decode(255), Ok(Rgb::new(238, 238, 238)));
        assert_eq!(try_decode(-1), Err(PaletteError::OutOfRange(-1)));
        assert_eq!(try_decode(256), Err(PaletteError::OutOfRange(256)));
    }

    #[test]
    fn test_packed() {
        let c = Rgb::new(0x12, 0x34, 0x56);
        assert_eq!(c.packed(), 0x123456);
        assert_eq!(Rgb::from_packed(0xff123456), c);
        assert_eq!(c.to_string(), "#123456");
    }

    #[test]
    fn test_named_colors() {
        assert_eq!(NamedColor::Black.to_index(), 0);
        assert_eq!(NamedColor::BrightWhite.to_index(), 15);
        assert_eq!(NamedColor::BrightBlue.to_rgb(), Rgb::new(92, 92, 255));
        assert_eq!(NamedColor::from_index(9), Some(NamedColor::BrightRed));
        assert_eq!(NamedColor::from_index(16), None);
        for i in 0..16u8 {
            let named = NamedColor::from_index(i).unwrap();
            assert_eq!(named.to_index(), i);
            assert_eq!(Color::Named(named).to_rgb(), decode(i));
        }
    }
}
