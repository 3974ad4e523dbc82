//! 6-hex-digit RGB colors.

use crate::{Error, Result};

/// An RGB color decoded from a `RRGGBB` hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    /// Decode a 6-hex-digit color string. A leading `#` is optional.
    ///
    /// Components are read by fixed-width substring: [0..2], [2..4], [4..6].
    /// Anything past the sixth digit is ignored.
    pub fn from_hex(s: &str) -> Result<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);

        let component = |range: std::ops::Range<usize>| -> Result<u8> {
            let digits = hex
                .get(range)
                .ok_or_else(|| Error::Layout(format!("Invalid color '{}'", s)))?;
            u8::from_str_radix(digits, 16)
                .map_err(|_| Error::Layout(format!("Invalid color '{}'", s)))
        };

        Ok(Rgb {
            r: component(0..2)?,
            g: component(2..4)?,
            b: component(4..6)?,
        })
    }

    /// Uppercase `RRGGBB` form used by `<a:srgbClr val="..."/>`.
    pub fn to_hex(self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}
