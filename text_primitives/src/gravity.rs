// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Direction towards which the bottom of glyphs points.
///
/// `South` is the usual orientation for horizontal text; `East` and `West` are used for
/// vertical text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Gravity {
    /// Glyphs stand upright.
    #[default]
    South = 0,
    /// Glyphs are rotated 90 degrees counter-clockwise.
    East = 1,
    /// Glyphs are upside-down.
    North = 2,
    /// Glyphs are rotated 90 degrees clockwise.
    West = 3,
    /// Gravity is resolved from the context.
    Auto = 4,
    // NOTICE: If a new value is added, be sure to modify `MAX_VALUE`.
}

impl Gravity {
    /// Returns the maximum numeric value for known variants.
    pub const MAX_VALUE: u8 = Self::Auto as u8;

    /// Converts the raw integer carried by an integer attribute value.
    pub const fn from_raw(raw: i32) -> Option<Self> {
        Some(match raw {
            0 => Self::South,
            1 => Self::East,
            2 => Self::North,
            3 => Self::West,
            4 => Self::Auto,
            _ => return None,
        })
    }

    /// Returns the raw integer representation.
    pub const fn to_raw(self) -> i32 {
        self as i32
    }

    /// Returns `true` for gravities that lay text out vertically.
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::East | Self::West)
    }
}

impl fmt::Display for Gravity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::South => "south",
            Self::East => "east",
            Self::North => "north",
            Self::West => "west",
            Self::Auto => "auto",
        })
    }
}

/// How horizontal scripts behave in a vertical context.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum GravityHint {
    /// Scripts take their natural gravity.
    #[default]
    Natural = 0,
    /// Always use the base gravity.
    Strong = 1,
    /// Rotate scripts so that they read like a rotated line.
    Line = 2,
}

impl GravityHint {
    /// Converts the raw integer carried by an integer attribute value.
    pub const fn from_raw(raw: i32) -> Option<Self> {
        Some(match raw {
            0 => Self::Natural,
            1 => Self::Strong,
            2 => Self::Line,
            _ => return None,
        })
    }

    /// Returns the raw integer representation.
    pub const fn to_raw(self) -> i32 {
        self as i32
    }
}
