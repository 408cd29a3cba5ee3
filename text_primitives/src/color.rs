// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::str::FromStr;

/// An RGB color with 16 bits per channel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(C)]
pub struct Color {
    /// Red channel.
    pub red: u16,
    /// Green channel.
    pub green: u16,
    /// Blue channel.
    pub blue: u16,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::new(0xffff, 0xffff, 0xffff);

    /// Creates a color from its three channels.
    pub const fn new(red: u16, green: u16, blue: u16) -> Self {
        Self { red, green, blue }
    }

    /// Parses a hexadecimal color specification.
    ///
    /// Accepted forms are `#rgb`, `#rrggbb`, `#rrrgggbbb` and `#rrrrggggbbbb`. Shorter channel
    /// forms are widened to 16 bits by repeating their bits, so `#fff` is white.
    ///
    /// ```
    /// use text_primitives::Color;
    ///
    /// assert_eq!(Color::parse("#ff0000"), Ok(Color::new(0xffff, 0, 0)));
    /// assert_eq!(Color::parse("#fff"), Ok(Color::WHITE));
    /// assert!(Color::parse("ff0000").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, ParseColorError> {
        let hex = s
            .trim()
            .strip_prefix('#')
            .ok_or(ParseColorError::MissingHash)?;
        let digits = match hex.len() {
            3 => 1,
            6 => 2,
            9 => 3,
            12 => 4,
            _ => return Err(ParseColorError::InvalidLength),
        };
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidDigit);
        }
        let channel = |index: usize| -> Result<u16, ParseColorError> {
            let part = hex
                .get(index * digits..(index + 1) * digits)
                .ok_or(ParseColorError::InvalidDigit)?;
            let value =
                u16::from_str_radix(part, 16).map_err(|_| ParseColorError::InvalidDigit)?;
            Ok(widen(value, digits))
        };
        Ok(Self::new(channel(0)?, channel(1)?, channel(2)?))
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "`digits` is at most 4, so the bit count fits in a u32."
)]
fn widen(value: u16, digits: usize) -> u16 {
    let mut bits = digits as u32 * 4;
    let mut out = value << (16 - bits);
    while bits < 16 {
        out |= out >> bits;
        bits *= 2;
    }
    out
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:04x}{:04x}{:04x}", self.red, self.green, self.blue)
    }
}

/// Errors that can occur when parsing a [`Color`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseColorError {
    /// The specification does not start with `#`.
    MissingHash,
    /// The number of hex digits is not 3, 6, 9 or 12.
    InvalidLength,
    /// A channel contains a non-hexadecimal character.
    InvalidDigit,
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::MissingHash => "color specification must start with '#'",
            Self::InvalidLength => "color specification must have 3, 6, 9 or 12 hex digits",
            Self::InvalidDigit => "color specification contains a non-hex digit",
        })
    }
}

impl core::error::Error for ParseColorError {}

#[cfg(test)]
mod tests {
    extern crate alloc;

    use super::{Color, ParseColorError};
    use alloc::string::ToString;

    #[test]
    fn parses_every_width() {
        assert_eq!(Color::parse("#f00"), Ok(Color::new(0xffff, 0, 0)));
        assert_eq!(Color::parse("#00ff00"), Ok(Color::new(0, 0xffff, 0)));
        assert_eq!(Color::parse("#00000fff"), Err(ParseColorError::InvalidLength));
        assert_eq!(Color::parse("#000000fff"), Ok(Color::new(0, 0, 0xffff)));
        assert_eq!(
            Color::parse("#123456789abc"),
            Ok(Color::new(0x1234, 0x5678, 0x9abc))
        );
    }

    #[test]
    fn narrow_channels_repeat_their_bits() {
        assert_eq!(Color::parse("#800").map(|c| c.red), Ok(0x8888));
        assert_eq!(Color::parse("#80ff00").map(|c| c.red), Ok(0x8080));
        assert_eq!(Color::parse("#abc000000").map(|c| c.red), Ok(0xabca));
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!(Color::parse("red"), Err(ParseColorError::MissingHash));
        assert_eq!(Color::parse("#ab"), Err(ParseColorError::InvalidLength));
        assert_eq!(Color::parse("#gg0000"), Err(ParseColorError::InvalidDigit));
        assert_eq!(Color::parse("#+f0000"), Err(ParseColorError::InvalidDigit));
    }

    #[test]
    fn display_uses_full_width() {
        assert_eq!(Color::new(0xffff, 0, 0x1234).to_string(), "#ffff00001234");
    }
}
