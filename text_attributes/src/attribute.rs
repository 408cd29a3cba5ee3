// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;
use core::ops::Range;

use text_primitives::{
    Color, FontDescription, FontStretch, FontStyle, FontVariant, FontWeight, Gravity,
    GravityHint, Language, Rectangle, ShowFlags, Underline,
};

use crate::{AttrType, AttrValue, CustomType, Error, ShapeData, ShapeValue};

/// Start index meaning "from the beginning of the text".
pub const ATTR_INDEX_FROM_TEXT_BEGINNING: u32 = 0;

/// End index meaning "to the end of the text".
pub const ATTR_INDEX_TO_TEXT_END: u32 = u32::MAX;

/// A typed value applied to the byte range `start_index..end_index` of some text.
///
/// Constructors produce attributes covering the whole text; use [`with_range`](Self::with_range)
/// to narrow them.
///
/// ```
/// use text_attributes::{AttrType, Attribute};
/// use text_primitives::FontWeight;
///
/// let bold = Attribute::weight(FontWeight::BOLD).with_range(4, 9);
/// assert_eq!(bold.attr_type(), AttrType::Weight);
/// assert_eq!(bold.range(), 4..9);
/// ```
#[derive(Clone, Debug)]
pub struct Attribute {
    pub(crate) start_index: u32,
    pub(crate) end_index: u32,
    ty: AttrType,
    value: AttrValue,
}

impl Attribute {
    fn new(ty: AttrType, value: AttrValue) -> Self {
        Self {
            start_index: ATTR_INDEX_FROM_TEXT_BEGINNING,
            end_index: ATTR_INDEX_TO_TEXT_END,
            ty,
            value,
        }
    }

    fn string(ty: AttrType, value: &str) -> Result<Self, Error> {
        if value.is_empty() {
            return Err(Error::empty_string(ty));
        }
        Ok(Self::new(ty, AttrValue::String(Arc::from(value))))
    }

    fn boolean(ty: AttrType, value: bool) -> Self {
        Self::new(ty, AttrValue::Int(i32::from(value)))
    }

    /// Language of the text.
    pub fn language(language: Language) -> Self {
        Self::new(AttrType::Language, AttrValue::Language(language))
    }

    /// Font family list, as a comma separated string.
    ///
    /// Fails if `family` is empty.
    pub fn family(family: &str) -> Result<Self, Error> {
        Self::string(AttrType::Family, family)
    }

    /// Font slant.
    pub fn style(style: FontStyle) -> Self {
        Self::new(AttrType::Style, AttrValue::Int(style.to_raw()))
    }

    /// Font weight.
    pub fn weight(weight: FontWeight) -> Self {
        Self::new(AttrType::Weight, AttrValue::Int(weight.value()))
    }

    /// Font capitalization variant.
    pub fn variant(variant: FontVariant) -> Self {
        Self::new(AttrType::Variant, AttrValue::Int(variant.to_raw()))
    }

    /// Font stretch.
    pub fn stretch(stretch: FontStretch) -> Self {
        Self::new(AttrType::Stretch, AttrValue::Int(stretch.to_raw()))
    }

    /// Font size in points, scaled by [`SCALE`](text_primitives::SCALE).
    pub fn size(size: i32) -> Self {
        Self::new(
            AttrType::Size,
            AttrValue::Size {
                size,
                absolute: false,
            },
        )
    }

    /// Font size in device units, scaled by [`SCALE`](text_primitives::SCALE).
    pub fn absolute_size(size: i32) -> Self {
        Self::new(
            AttrType::AbsoluteSize,
            AttrValue::Size {
                size,
                absolute: true,
            },
        )
    }

    /// Partial font description.
    ///
    /// Only the fields set in `desc` take part in font resolution.
    pub fn font_desc(desc: FontDescription) -> Self {
        Self::new(AttrType::FontDesc, AttrValue::FontDesc(desc))
    }

    /// Foreground color.
    pub fn foreground(color: Color) -> Self {
        Self::new(AttrType::Foreground, AttrValue::Color(color))
    }

    /// Background color.
    pub fn background(color: Color) -> Self {
        Self::new(AttrType::Background, AttrValue::Color(color))
    }

    /// Underline style.
    pub fn underline(underline: Underline) -> Self {
        Self::new(AttrType::Underline, AttrValue::Int(underline.to_raw()))
    }

    /// Underline color.
    pub fn underline_color(color: Color) -> Self {
        Self::new(AttrType::UnderlineColor, AttrValue::Color(color))
    }

    /// Whether the text is struck through.
    pub fn strikethrough(strikethrough: bool) -> Self {
        Self::boolean(AttrType::Strikethrough, strikethrough)
    }

    /// Strikethrough color.
    pub fn strikethrough_color(color: Color) -> Self {
        Self::new(AttrType::StrikethroughColor, AttrValue::Color(color))
    }

    /// Baseline displacement, in 1/[`SCALE`](text_primitives::SCALE) points. Positive values
    /// raise the text.
    pub fn rise(rise: i32) -> Self {
        Self::new(AttrType::Rise, AttrValue::Int(rise))
    }

    /// Multiplier applied to the resolved font size.
    ///
    /// Fails if `factor` is not finite.
    pub fn scale(factor: f64) -> Result<Self, Error> {
        if !factor.is_finite() {
            return Err(Error::invalid_value(AttrType::Scale));
        }
        Ok(Self::new(AttrType::Scale, AttrValue::Float(factor)))
    }

    /// Whether font fallback is enabled.
    pub fn fallback(enable: bool) -> Self {
        Self::boolean(AttrType::Fallback, enable)
    }

    /// Extra space between graphemes, in 1/[`SCALE`](text_primitives::SCALE) points.
    pub fn letter_spacing(spacing: i32) -> Self {
        Self::new(AttrType::LetterSpacing, AttrValue::Int(spacing))
    }

    /// Placeholder for an embedded object with the given extents.
    pub fn shape(ink_rect: Rectangle, logical_rect: Rectangle) -> Self {
        Self::new(
            AttrType::Shape,
            AttrValue::Shape(ShapeValue {
                ink_rect,
                logical_rect,
                data: None,
            }),
        )
    }

    /// Placeholder for an embedded object, carrying data for the renderer.
    pub fn shape_with_data(ink_rect: Rectangle, logical_rect: Rectangle, data: ShapeData) -> Self {
        Self::new(
            AttrType::Shape,
            AttrValue::Shape(ShapeValue {
                ink_rect,
                logical_rect,
                data: Some(data),
            }),
        )
    }

    /// Glyph orientation.
    ///
    /// Fails for [`Gravity::Auto`], which requests resolution from context rather than naming
    /// an orientation.
    pub fn gravity(gravity: Gravity) -> Result<Self, Error> {
        if gravity == Gravity::Auto {
            return Err(Error::invalid_value(AttrType::Gravity));
        }
        Ok(Self::new(AttrType::Gravity, AttrValue::Int(gravity.to_raw())))
    }

    /// Gravity policy for mixed scripts.
    pub fn gravity_hint(hint: GravityHint) -> Self {
        Self::new(AttrType::GravityHint, AttrValue::Int(hint.to_raw()))
    }

    /// OpenType feature settings in CSS syntax, such as `"liga 0, smcp"`.
    ///
    /// Fails if `features` is empty.
    pub fn font_features(features: &str) -> Result<Self, Error> {
        Self::string(AttrType::FontFeatures, features)
    }

    /// Foreground alpha, from transparent (`0`) to opaque (`u16::MAX`).
    pub fn foreground_alpha(alpha: u16) -> Self {
        Self::new(AttrType::ForegroundAlpha, AttrValue::Int(i32::from(alpha)))
    }

    /// Background alpha, from transparent (`0`) to opaque (`u16::MAX`).
    pub fn background_alpha(alpha: u16) -> Self {
        Self::new(AttrType::BackgroundAlpha, AttrValue::Int(i32::from(alpha)))
    }

    /// Whether line breaks are allowed.
    pub fn allow_breaks(allow: bool) -> Self {
        Self::boolean(AttrType::AllowBreaks, allow)
    }

    /// Which invisible characters to render visibly.
    pub fn show(flags: ShowFlags) -> Self {
        Self::new(AttrType::Show, AttrValue::Int(flags.to_raw()))
    }

    /// Whether hyphens are inserted at intra-word line breaks.
    pub fn insert_hyphens(insert: bool) -> Self {
        Self::boolean(AttrType::InsertHyphens, insert)
    }

    /// An attribute of a runtime-registered type.
    pub fn custom(ty: CustomType, value: AttrValue) -> Self {
        Self::new(AttrType::Custom(ty), value)
    }

    /// Restricts the attribute to `start..end`.
    ///
    /// # Panics
    ///
    /// If `start > end`. Use [`try_with_range`](Self::try_with_range) for untrusted input.
    #[must_use]
    pub fn with_range(self, start: u32, end: u32) -> Self {
        assert!(
            start <= end,
            "invalid range {start}..{end} for `{}` attribute: start > end",
            self.ty
        );
        Self {
            start_index: start,
            end_index: end,
            ..self
        }
    }

    /// Restricts the attribute to `start..end`, failing if `start > end`.
    pub fn try_with_range(self, start: u32, end: u32) -> Result<Self, Error> {
        if start > end {
            return Err(Error::invalid_range(self.ty, start, end));
        }
        Ok(self.with_range(start, end))
    }

    /// The byte range the attribute applies to.
    pub fn range(&self) -> Range<u32> {
        self.start_index..self.end_index
    }

    /// The first byte the attribute applies to.
    pub fn start_index(&self) -> u32 {
        self.start_index
    }

    /// The byte just past the end of the attribute.
    pub fn end_index(&self) -> u32 {
        self.end_index
    }

    /// Returns `true` if the attribute covers no bytes.
    pub fn is_empty(&self) -> bool {
        self.start_index == self.end_index
    }

    /// The type of the attribute.
    pub fn attr_type(&self) -> AttrType {
        self.ty
    }

    /// The payload of the attribute.
    pub fn value(&self) -> &AttrValue {
        &self.value
    }

    /// Returns `true` if both attributes have the same type and payload, ignoring their ranges.
    pub fn value_equal(&self, other: &Self) -> bool {
        self.ty == other.ty && self.value == other.value
    }

    /// The display name of the attribute's type.
    ///
    /// Custom types are looked up in `registry`.
    #[cfg(feature = "std")]
    pub fn name(&self, registry: &crate::TypeRegistry) -> Option<Arc<str>> {
        match self.ty {
            AttrType::Custom(custom) => registry.name_of(custom),
            builtin => builtin.name().map(Arc::from),
        }
    }
}

impl PartialEq for Attribute {
    fn eq(&self, other: &Self) -> bool {
        self.start_index == other.start_index
            && self.end_index == other.end_index
            && self.value_equal(other)
    }
}
