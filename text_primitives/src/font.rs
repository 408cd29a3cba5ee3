// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Slant of a font.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum FontStyle {
    /// Upright glyphs.
    #[default]
    Normal = 0,
    /// A slanted version of the upright design.
    Oblique = 1,
    /// A separately designed cursive slant.
    Italic = 2,
}

impl FontStyle {
    /// Converts the raw integer carried by an integer attribute value.
    pub const fn from_raw(raw: i32) -> Option<Self> {
        Some(match raw {
            0 => Self::Normal,
            1 => Self::Oblique,
            2 => Self::Italic,
            _ => return None,
        })
    }

    /// Returns the raw integer representation.
    pub const fn to_raw(self) -> i32 {
        self as i32
    }

    /// Parses a style keyword (`normal`, `oblique` or `italic`).
    ///
    /// ```
    /// use text_primitives::FontStyle;
    ///
    /// assert_eq!(FontStyle::parse("italic"), Some(FontStyle::Italic));
    /// assert_eq!(FontStyle::parse("slanted"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.trim() {
            "normal" => Self::Normal,
            "oblique" => Self::Oblique,
            "italic" => Self::Italic,
            _ => return None,
        })
    }
}

impl fmt::Display for FontStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Normal => "normal",
            Self::Oblique => "oblique",
            Self::Italic => "italic",
        })
    }
}

/// Capitalization variant of a font.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum FontVariant {
    /// Regular capitalization.
    #[default]
    Normal = 0,
    /// Lowercase letters are rendered as small capitals.
    SmallCaps = 1,
    /// All letters are rendered as small capitals.
    AllSmallCaps = 2,
    /// Lowercase letters are rendered as petite capitals.
    PetiteCaps = 3,
    /// All letters are rendered as petite capitals.
    AllPetiteCaps = 4,
    /// Uppercase letters are rendered as small capitals, lowercase stays.
    Unicase = 5,
    /// Capitals designed for titles.
    TitleCaps = 6,
}

impl FontVariant {
    /// Converts the raw integer carried by an integer attribute value.
    pub const fn from_raw(raw: i32) -> Option<Self> {
        Some(match raw {
            0 => Self::Normal,
            1 => Self::SmallCaps,
            2 => Self::AllSmallCaps,
            3 => Self::PetiteCaps,
            4 => Self::AllPetiteCaps,
            5 => Self::Unicase,
            6 => Self::TitleCaps,
            _ => return None,
        })
    }

    /// Returns the raw integer representation.
    pub const fn to_raw(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for FontVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Normal => "normal",
            Self::SmallCaps => "small-caps",
            Self::AllSmallCaps => "all-small-caps",
            Self::PetiteCaps => "petite-caps",
            Self::AllPetiteCaps => "all-petite-caps",
            Self::Unicase => "unicase",
            Self::TitleCaps => "titling-caps",
        })
    }
}

/// Visual weight class of a font, on a scale from 100 to 1000.
///
/// Any integer is accepted; the named constants cover the usual classes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FontWeight(i32);

impl FontWeight {
    /// Weight value of 100.
    pub const THIN: Self = Self(100);

    /// Weight value of 200.
    pub const ULTRA_LIGHT: Self = Self(200);

    /// Weight value of 300.
    pub const LIGHT: Self = Self(300);

    /// Weight value of 350.
    pub const SEMI_LIGHT: Self = Self(350);

    /// Weight value of 380.
    pub const BOOK: Self = Self(380);

    /// Weight value of 400. This is the default value.
    pub const NORMAL: Self = Self(400);

    /// Weight value of 500.
    pub const MEDIUM: Self = Self(500);

    /// Weight value of 600.
    pub const SEMI_BOLD: Self = Self(600);

    /// Weight value of 700.
    pub const BOLD: Self = Self(700);

    /// Weight value of 800.
    pub const ULTRA_BOLD: Self = Self(800);

    /// Weight value of 900.
    pub const HEAVY: Self = Self(900);

    /// Weight value of 1000.
    pub const ULTRA_HEAVY: Self = Self(1000);

    /// Creates a new weight value.
    pub const fn new(weight: i32) -> Self {
        Self(weight)
    }

    /// Returns the underlying weight value.
    pub const fn value(self) -> i32 {
        self.0
    }

    /// Parses a weight keyword or a plain integer.
    ///
    /// ```
    /// use text_primitives::FontWeight;
    ///
    /// assert_eq!(FontWeight::parse("bold"), Some(FontWeight::BOLD));
    /// assert_eq!(FontWeight::parse("450"), Some(FontWeight::new(450)));
    /// assert_eq!(FontWeight::parse("heavyish"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Some(match s {
            "thin" => Self::THIN,
            "ultra-light" => Self::ULTRA_LIGHT,
            "light" => Self::LIGHT,
            "semi-light" => Self::SEMI_LIGHT,
            "book" => Self::BOOK,
            "normal" => Self::NORMAL,
            "medium" => Self::MEDIUM,
            "semi-bold" => Self::SEMI_BOLD,
            "bold" => Self::BOLD,
            "ultra-bold" => Self::ULTRA_BOLD,
            "heavy" => Self::HEAVY,
            "ultra-heavy" => Self::ULTRA_HEAVY,
            _ => Self(s.parse::<i32>().ok()?),
        })
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = match self.0 {
            100 => "thin",
            200 => "ultra-light",
            300 => "light",
            350 => "semi-light",
            380 => "book",
            400 => "normal",
            500 => "medium",
            600 => "semi-bold",
            700 => "bold",
            800 => "ultra-bold",
            900 => "heavy",
            1000 => "ultra-heavy",
            _ => return write!(f, "{}", self.0),
        };
        f.write_str(keyword)
    }
}

/// Width of a font relative to its normal design.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum FontStretch {
    /// 50% of normal.
    UltraCondensed = 0,
    /// 62.5% of normal.
    ExtraCondensed = 1,
    /// 75% of normal.
    Condensed = 2,
    /// 87.5% of normal.
    SemiCondensed = 3,
    /// The normal width.
    #[default]
    Normal = 4,
    /// 112.5% of normal.
    SemiExpanded = 5,
    /// 125% of normal.
    Expanded = 6,
    /// 150% of normal.
    ExtraExpanded = 7,
    /// 200% of normal.
    UltraExpanded = 8,
}

impl FontStretch {
    /// Converts the raw integer carried by an integer attribute value.
    pub const fn from_raw(raw: i32) -> Option<Self> {
        Some(match raw {
            0 => Self::UltraCondensed,
            1 => Self::ExtraCondensed,
            2 => Self::Condensed,
            3 => Self::SemiCondensed,
            4 => Self::Normal,
            5 => Self::SemiExpanded,
            6 => Self::Expanded,
            7 => Self::ExtraExpanded,
            8 => Self::UltraExpanded,
            _ => return None,
        })
    }

    /// Returns the raw integer representation.
    pub const fn to_raw(self) -> i32 {
        self as i32
    }

    /// Returns the width as a ratio, with `1.0` being normal width.
    pub fn ratio(self) -> f32 {
        match self {
            Self::UltraCondensed => 0.5,
            Self::ExtraCondensed => 0.625,
            Self::Condensed => 0.75,
            Self::SemiCondensed => 0.875,
            Self::Normal => 1.0,
            Self::SemiExpanded => 1.125,
            Self::Expanded => 1.25,
            Self::ExtraExpanded => 1.5,
            Self::UltraExpanded => 2.0,
        }
    }
}

impl fmt::Display for FontStretch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::UltraCondensed => "ultra-condensed",
            Self::ExtraCondensed => "extra-condensed",
            Self::Condensed => "condensed",
            Self::SemiCondensed => "semi-condensed",
            Self::Normal => "normal",
            Self::SemiExpanded => "semi-expanded",
            Self::Expanded => "expanded",
            Self::ExtraExpanded => "extra-expanded",
            Self::UltraExpanded => "ultra-expanded",
        })
    }
}
