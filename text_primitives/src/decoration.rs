// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use bitflags::bitflags;

/// Underline style.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Underline {
    /// No underline.
    #[default]
    None = 0,
    /// A single line.
    Single = 1,
    /// Two lines.
    Double = 2,
    /// A single line placed below descenders.
    Low = 3,
    /// A wavy line, used to flag errors.
    Error = 4,
    /// Like `Single`, but drawn continuously across runs.
    SingleLine = 5,
    /// Like `Double`, but drawn continuously across runs.
    DoubleLine = 6,
    /// Like `Error`, but drawn continuously across runs.
    ErrorLine = 7,
}

impl Underline {
    /// Converts the raw integer carried by an integer attribute value.
    pub const fn from_raw(raw: i32) -> Option<Self> {
        Some(match raw {
            0 => Self::None,
            1 => Self::Single,
            2 => Self::Double,
            3 => Self::Low,
            4 => Self::Error,
            5 => Self::SingleLine,
            6 => Self::DoubleLine,
            7 => Self::ErrorLine,
            _ => return None,
        })
    }

    /// Returns the raw integer representation.
    pub const fn to_raw(self) -> i32 {
        self as i32
    }
}

bitflags! {
    /// Classes of normally invisible characters that should be rendered visibly.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct ShowFlags: u32 {
        /// Render spaces, tabs and newlines visibly.
        const SPACES = 1 << 0;
        /// Render line breaks visibly.
        const LINE_BREAKS = 1 << 1;
        /// Render default-ignorable characters visibly.
        const IGNORABLES = 1 << 2;
    }
}

impl ShowFlags {
    /// Converts the raw integer carried by an integer attribute value.
    ///
    /// Unknown bits are dropped.
    pub const fn from_raw(raw: i32) -> Self {
        Self::from_bits_truncate(raw.cast_unsigned())
    }

    /// Returns the raw integer representation.
    pub const fn to_raw(self) -> i32 {
        self.bits().cast_signed()
    }
}
