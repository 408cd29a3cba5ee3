// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::num::NonZeroU32;

/// The first identifier handed out for runtime-registered attribute types.
///
/// Built-in types use identifiers below this value.
pub const FIRST_CUSTOM_TYPE_ID: u32 = 0x0100_0000;

/// An attribute type allocated at runtime by a [`TypeRegistry`].
///
/// [`TypeRegistry`]: crate::TypeRegistry
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CustomType(NonZeroU32);

impl CustomType {
    /// Returns the numeric identifier, which is at least [`FIRST_CUSTOM_TYPE_ID`].
    pub const fn id(self) -> u32 {
        self.0.get()
    }

    /// Wraps an identifier allocated by a registry.
    #[cfg_attr(
        not(feature = "std"),
        allow(dead_code, reason = "Only registries allocate custom types.")
    )]
    pub(crate) fn from_id(id: u32) -> Option<Self> {
        if id < FIRST_CUSTOM_TYPE_ID {
            return None;
        }
        NonZeroU32::new(id).map(Self)
    }
}

/// The kind of an attribute.
///
/// Built-in types determine how the attribute is interpreted by font resolution and rendering.
/// Anything else is a [`Custom`](Self::Custom) type obtained from a registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AttrType {
    /// Language of the text.
    Language,
    /// Font family name list.
    Family,
    /// Font slant.
    Style,
    /// Font weight.
    Weight,
    /// Font capitalization variant.
    Variant,
    /// Font stretch.
    Stretch,
    /// Font size in points.
    Size,
    /// Partial font description.
    FontDesc,
    /// Foreground color.
    Foreground,
    /// Background color.
    Background,
    /// Underline style.
    Underline,
    /// Whether the text is struck through.
    Strikethrough,
    /// Baseline displacement.
    Rise,
    /// Placeholder for an embedded object.
    Shape,
    /// Font size scale factor.
    Scale,
    /// Whether font fallback is enabled.
    Fallback,
    /// Extra space between graphemes.
    LetterSpacing,
    /// Underline color.
    UnderlineColor,
    /// Strikethrough color.
    StrikethroughColor,
    /// Font size in device units.
    AbsoluteSize,
    /// Glyph orientation.
    Gravity,
    /// Gravity policy for mixed scripts.
    GravityHint,
    /// OpenType font feature settings.
    FontFeatures,
    /// Foreground alpha.
    ForegroundAlpha,
    /// Background alpha.
    BackgroundAlpha,
    /// Whether line breaks are allowed.
    AllowBreaks,
    /// Which invisible characters to render visibly.
    Show,
    /// Whether hyphens are inserted at intra-word line breaks.
    InsertHyphens,
    /// A runtime-registered type.
    Custom(CustomType),
}

impl AttrType {
    /// All built-in types, ordered by identifier.
    pub const BUILTINS: [Self; 28] = [
        Self::Language,
        Self::Family,
        Self::Style,
        Self::Weight,
        Self::Variant,
        Self::Stretch,
        Self::Size,
        Self::FontDesc,
        Self::Foreground,
        Self::Background,
        Self::Underline,
        Self::Strikethrough,
        Self::Rise,
        Self::Shape,
        Self::Scale,
        Self::Fallback,
        Self::LetterSpacing,
        Self::UnderlineColor,
        Self::StrikethroughColor,
        Self::AbsoluteSize,
        Self::Gravity,
        Self::GravityHint,
        Self::FontFeatures,
        Self::ForegroundAlpha,
        Self::BackgroundAlpha,
        Self::AllowBreaks,
        Self::Show,
        Self::InsertHyphens,
    ];

    /// Returns the numeric identifier.
    ///
    /// Built-in types are numbered from 1; custom types start at [`FIRST_CUSTOM_TYPE_ID`].
    pub const fn id(self) -> u32 {
        match self {
            Self::Language => 1,
            Self::Family => 2,
            Self::Style => 3,
            Self::Weight => 4,
            Self::Variant => 5,
            Self::Stretch => 6,
            Self::Size => 7,
            Self::FontDesc => 8,
            Self::Foreground => 9,
            Self::Background => 10,
            Self::Underline => 11,
            Self::Strikethrough => 12,
            Self::Rise => 13,
            Self::Shape => 14,
            Self::Scale => 15,
            Self::Fallback => 16,
            Self::LetterSpacing => 17,
            Self::UnderlineColor => 18,
            Self::StrikethroughColor => 19,
            Self::AbsoluteSize => 20,
            Self::Gravity => 21,
            Self::GravityHint => 22,
            Self::FontFeatures => 23,
            Self::ForegroundAlpha => 24,
            Self::BackgroundAlpha => 25,
            Self::AllowBreaks => 26,
            Self::Show => 27,
            Self::InsertHyphens => 28,
            Self::Custom(custom) => custom.id(),
        }
    }

    /// Looks up a built-in type by identifier.
    ///
    /// Custom identifiers are not resolved here, since they are only meaningful relative to the
    /// registry that allocated them.
    pub fn from_builtin_id(id: u32) -> Option<Self> {
        let index = usize::try_from(id.checked_sub(1)?).ok()?;
        Self::BUILTINS.get(index).copied()
    }

    /// Returns the display name of a built-in type, or `None` for custom types.
    pub const fn name(self) -> Option<&'static str> {
        Some(match self {
            Self::Language => "language",
            Self::Family => "family",
            Self::Style => "style",
            Self::Weight => "weight",
            Self::Variant => "variant",
            Self::Stretch => "stretch",
            Self::Size => "size",
            Self::FontDesc => "font-desc",
            Self::Foreground => "foreground",
            Self::Background => "background",
            Self::Underline => "underline",
            Self::Strikethrough => "strikethrough",
            Self::Rise => "rise",
            Self::Shape => "shape",
            Self::Scale => "scale",
            Self::Fallback => "fallback",
            Self::LetterSpacing => "letter-spacing",
            Self::UnderlineColor => "underline-color",
            Self::StrikethroughColor => "strikethrough-color",
            Self::AbsoluteSize => "absolute-size",
            Self::Gravity => "gravity",
            Self::GravityHint => "gravity-hint",
            Self::FontFeatures => "font-features",
            Self::ForegroundAlpha => "foreground-alpha",
            Self::BackgroundAlpha => "background-alpha",
            Self::AllowBreaks => "allow-breaks",
            Self::Show => "show",
            Self::InsertHyphens => "insert-hyphens",
            Self::Custom(_) => return None,
        })
    }

    /// Returns `true` for runtime-registered types.
    pub const fn is_custom(self) -> bool {
        matches!(self, Self::Custom(_))
    }
}

impl From<CustomType> for AttrType {
    fn from(custom: CustomType) -> Self {
        Self::Custom(custom)
    }
}

impl fmt::Display for AttrType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "custom-{:#x}", self.id()),
        }
    }
}
