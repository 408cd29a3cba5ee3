// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use smallvec::SmallVec;
use text_primitives::{
    FontDescription, FontMask, FontStretch, FontStyle, FontVariant, FontWeight, Language,
};

use crate::{AttrList, AttrType, AttrValue, Attribute};

/// A cursor over the segments of an [`AttrList`].
///
/// Each segment is a maximal byte range over which the set of active attributes does not
/// change. The list is borrowed for the lifetime of the cursor, so it cannot be modified while
/// a sweep is in progress.
///
/// ```
/// use text_attributes::{AttrList, AttrType, Attribute};
/// use text_primitives::FontStyle;
///
/// let mut list = AttrList::new();
/// list.insert(Attribute::style(FontStyle::Italic).with_range(2, 6));
///
/// let mut iter = list.iterator();
/// assert_eq!(iter.range(), (0, 2));
/// assert!(iter.get(AttrType::Style).is_none());
/// assert!(iter.advance());
/// assert_eq!(iter.range(), (2, 6));
/// assert!(iter.get(AttrType::Style).is_some());
/// assert!(iter.advance());
/// assert_eq!(iter.range(), (6, u32::MAX));
/// assert!(!iter.advance());
/// ```
#[derive(Clone, Debug)]
pub struct AttrIterator<'a> {
    /// Attributes that have not started yet.
    pending: &'a [Attribute],
    /// Active attributes, most recently activated last.
    stack: SmallVec<[&'a Attribute; 8]>,
    start: u32,
    end: u32,
}

/// The font-related result of [`AttrIterator::font`].
#[derive(Clone, Debug, Default)]
pub struct SegmentFont<'a> {
    /// The topmost active language, if any.
    pub language: Option<&'a Language>,
    /// Active attributes that do not affect font selection, one per type except for
    /// [`AttrType::FontFeatures`], in activation order.
    pub extra_attrs: Vec<&'a Attribute>,
}

impl<'a> AttrIterator<'a> {
    /// Opens a sweep over `list`, positioned at the first segment.
    pub fn new(list: &'a AttrList) -> Self {
        let mut iter = Self {
            pending: list.as_slice(),
            stack: SmallVec::new(),
            start: 0,
            end: 0,
        };
        if !iter.advance() {
            iter.end = u32::MAX;
        }
        iter
    }

    /// Moves to the next segment.
    ///
    /// Returns `false`, leaving the cursor where it is, once every attribute has been passed.
    pub fn advance(&mut self) -> bool {
        if self.pending.is_empty() && self.stack.is_empty() {
            return false;
        }
        let start = self.end;
        self.start = start;
        self.stack.retain(|attr| attr.end_index != start);
        self.end = self
            .stack
            .iter()
            .fold(u32::MAX, |end, attr| end.min(attr.end_index));

        while let Some((attr, rest)) = self.pending.split_first() {
            if attr.start_index > start {
                break;
            }
            if attr.end_index > start {
                self.stack.push(attr);
                self.end = self.end.min(attr.end_index);
            }
            self.pending = rest;
        }
        if let Some(next) = self.pending.first() {
            self.end = self.end.min(next.start_index);
        }
        true
    }

    /// The byte range of the current segment.
    pub fn range(&self) -> (u32, u32) {
        (self.start, self.end)
    }

    /// Returns the attribute of type `ty` that applies to the current segment.
    ///
    /// If several are active, the most recently activated one wins.
    pub fn get(&self, ty: AttrType) -> Option<&'a Attribute> {
        self.stack
            .iter()
            .rev()
            .find(|attr| attr.attr_type() == ty)
            .copied()
    }

    /// Returns the attributes that apply to the current segment, one per type.
    ///
    /// For each type the most recently activated attribute is chosen; the result is in
    /// activation order.
    pub fn attrs(&self) -> Vec<&'a Attribute> {
        let mut attrs: Vec<&'a Attribute> = Vec::new();
        for attr in self.active() {
            if !attrs.iter().any(|seen| seen.attr_type() == attr.attr_type()) {
                attrs.push(attr);
            }
        }
        attrs.reverse();
        attrs
    }

    /// Iterates over the active attributes, most recently activated first.
    pub fn active(&self) -> impl DoubleEndedIterator<Item = &'a Attribute> + '_ {
        self.stack.iter().rev().copied()
    }

    /// Applies the font attributes of the current segment to `desc`.
    ///
    /// Attributes override what `desc` already holds; among attributes, the most recently
    /// activated one wins for each field. Font description attributes contribute every field
    /// they declare that a more recent attribute has not already set. The most recent scale
    /// attribute multiplies the resolved size, if there is one.
    ///
    /// Language and the remaining attributes are returned rather than applied.
    pub fn font(&self, desc: &mut FontDescription) -> SegmentFont<'a> {
        let mut seen = FontMask::empty();
        let mut scale = None;
        let mut font = SegmentFont::default();

        for attr in self.active() {
            let value = attr.value();
            match attr.attr_type() {
                AttrType::FontDesc => {
                    if let AttrValue::FontDesc(attr_desc) = value {
                        let fresh = attr_desc.set_fields() - seen;
                        seen |= fresh;
                        desc.unset_fields(fresh);
                        desc.merge(attr_desc, false);
                    }
                }
                AttrType::Family => {
                    if let Some(family) = value.as_str() {
                        if claim(&mut seen, FontMask::FAMILY) {
                            desc.set_family(family);
                        }
                    }
                }
                AttrType::Style => {
                    if let Some(style) = value.as_int().and_then(FontStyle::from_raw) {
                        if claim(&mut seen, FontMask::STYLE) {
                            desc.set_style(style);
                        }
                    }
                }
                AttrType::Variant => {
                    if let Some(variant) = value.as_int().and_then(FontVariant::from_raw) {
                        if claim(&mut seen, FontMask::VARIANT) {
                            desc.set_variant(variant);
                        }
                    }
                }
                AttrType::Weight => {
                    if let Some(weight) = value.as_int() {
                        if claim(&mut seen, FontMask::WEIGHT) {
                            desc.set_weight(FontWeight::new(weight));
                        }
                    }
                }
                AttrType::Stretch => {
                    if let Some(stretch) = value.as_int().and_then(FontStretch::from_raw) {
                        if claim(&mut seen, FontMask::STRETCH) {
                            desc.set_stretch(stretch);
                        }
                    }
                }
                AttrType::Size | AttrType::AbsoluteSize => {
                    if let Some((size, absolute)) = value.as_size() {
                        if claim(&mut seen, FontMask::SIZE) {
                            if absolute {
                                desc.set_absolute_size(size);
                            } else {
                                desc.set_size(size);
                            }
                        }
                    }
                }
                AttrType::Scale => {
                    if scale.is_none() {
                        scale = value.as_float();
                    }
                }
                AttrType::Language => {
                    if font.language.is_none() {
                        font.language = value.as_language();
                    }
                }
                ty => {
                    let duplicate = ty != AttrType::FontFeatures
                        && font.extra_attrs.iter().any(|extra| extra.attr_type() == ty);
                    if !duplicate {
                        font.extra_attrs.push(attr);
                    }
                }
            }
        }
        font.extra_attrs.reverse();

        if let (Some(scale), Some(size)) = (scale, desc.size()) {
            let scaled = scaled_size(size, scale);
            if desc.size_is_absolute() {
                desc.set_absolute_size(scaled);
            } else {
                desc.set_size(scaled);
            }
        }
        font
    }
}

/// Marks `field` as seen, returning `true` if it was not already.
fn claim(seen: &mut FontMask, field: FontMask) -> bool {
    let fresh = !seen.contains(field);
    seen.insert(field);
    fresh
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "Font sizes are truncated to whole units, saturating at the bounds of `i32`."
)]
fn scaled_size(size: i32, scale: f64) -> i32 {
    (f64::from(size) * scale) as i32
}

#[cfg(test)]
mod tests {
    use super::AttrIterator;
    use crate::{AttrList, AttrType, Attribute};
    use alloc::vec::Vec;
    use text_primitives::{
        Color, FontDescription, FontMask, FontStyle, FontWeight, SCALE, language_from_string,
    };

    fn segments(list: &AttrList) -> Vec<(u32, u32)> {
        let mut iter = list.iterator();
        let mut ranges = alloc::vec![iter.range()];
        while iter.advance() {
            ranges.push(iter.range());
        }
        ranges
    }

    #[test]
    fn empty_list_has_one_unbounded_segment() {
        let list = AttrList::new();
        let mut iter = AttrIterator::new(&list);
        assert_eq!(iter.range(), (0, u32::MAX));
        assert!(!iter.advance());
        assert_eq!(iter.range(), (0, u32::MAX));
        assert!(iter.attrs().is_empty());
    }

    #[test]
    fn segments_split_at_every_boundary() {
        let mut list = AttrList::new();
        list.insert(Attribute::rise(1).with_range(0, 10));
        list.insert(Attribute::rise(2).with_range(3, 6));
        list.insert(Attribute::fallback(false).with_range(5, 12));
        assert_eq!(
            segments(&list),
            [(0, 3), (3, 5), (5, 6), (6, 10), (10, 12), (12, u32::MAX)]
        );
    }

    #[test]
    fn whole_text_attributes_end_with_empty_segment() {
        let mut list = AttrList::new();
        list.insert(Attribute::fallback(false));
        assert_eq!(segments(&list), [(0, u32::MAX), (u32::MAX, u32::MAX)]);
    }

    #[test]
    fn empty_attributes_are_skipped() {
        let mut list = AttrList::new();
        list.insert(Attribute::rise(1).with_range(4, 4));
        list.insert(Attribute::rise(2).with_range(4, 8));
        let mut iter = list.iterator();
        assert!(iter.advance());
        assert_eq!(iter.range(), (4, 8));
        assert_eq!(iter.active().count(), 1);
        assert_eq!(iter.get(AttrType::Rise).unwrap().value().as_int(), Some(2));
    }

    #[test]
    fn later_activation_wins() {
        let mut list = AttrList::new();
        list.insert(Attribute::rise(1).with_range(0, 10));
        list.insert(Attribute::rise(2).with_range(0, 10));
        list.insert_before(Attribute::rise(3).with_range(0, 10));
        list.insert(Attribute::rise(4).with_range(5, 7));
        let mut iter = list.iterator();
        assert_eq!(iter.get(AttrType::Rise).unwrap().value().as_int(), Some(2));
        assert!(iter.advance());
        assert_eq!(iter.get(AttrType::Rise).unwrap().value().as_int(), Some(4));
        assert!(iter.advance());
        assert_eq!(iter.range(), (7, 10));
        assert_eq!(iter.get(AttrType::Rise).unwrap().value().as_int(), Some(2));
    }

    #[test]
    fn attrs_picks_topmost_per_type() {
        let mut list = AttrList::new();
        list.insert(Attribute::rise(1).with_range(0, 10));
        list.insert(Attribute::foreground(Color::BLACK).with_range(0, 10));
        list.insert(Attribute::rise(2).with_range(0, 10));
        let iter = list.iterator();
        let attrs = iter.attrs();
        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs[0].attr_type(), AttrType::Foreground);
        assert_eq!(attrs[1].value().as_int(), Some(2));
    }

    #[test]
    fn copies_advance_independently() {
        let mut list = AttrList::new();
        list.insert(Attribute::rise(1).with_range(0, 4));
        let mut iter = list.iterator();
        let copy = iter.clone();
        assert!(iter.advance());
        assert_eq!(iter.range(), (4, u32::MAX));
        assert_eq!(copy.range(), (0, 4));
    }

    #[test]
    fn font_prefers_more_recent_fields() {
        let mut desc = FontDescription::new();
        desc.set_family("B");
        desc.set_size(12 * SCALE);

        let mut list = AttrList::new();
        list.insert(Attribute::font_desc(desc).with_range(0, 20));
        list.insert(Attribute::family("A").unwrap().with_range(5, 10));

        let mut iter = list.iterator();
        assert!(iter.advance());
        assert_eq!(iter.range(), (5, 10));

        let mut resolved = FontDescription::new();
        resolved.set_family("Base");
        resolved.set_style(FontStyle::Oblique);
        iter.font(&mut resolved);
        assert_eq!(resolved.family(), Some("A"));
        assert_eq!(resolved.size(), Some(12 * SCALE));
        assert_eq!(resolved.style(), Some(FontStyle::Oblique));
    }

    #[test]
    fn font_desc_overrides_base_but_not_newer_attributes() {
        let mut attr_desc = FontDescription::new();
        attr_desc.set_weight(FontWeight::LIGHT);
        attr_desc.set_style(FontStyle::Italic);

        let mut list = AttrList::new();
        list.insert(Attribute::font_desc(attr_desc).with_range(0, 10));
        list.insert(Attribute::weight(FontWeight::BOLD).with_range(0, 10));

        let mut resolved = FontDescription::new();
        resolved.set_style(FontStyle::Oblique);
        list.iterator().font(&mut resolved);
        assert_eq!(resolved.weight(), Some(FontWeight::BOLD));
        assert_eq!(resolved.style(), Some(FontStyle::Italic));
        assert_eq!(resolved.set_fields(), FontMask::WEIGHT | FontMask::STYLE);
    }

    #[test]
    fn font_scales_declared_size() {
        let mut list = AttrList::new();
        list.insert(Attribute::absolute_size(10 * SCALE).with_range(0, 10));
        list.insert(Attribute::scale(1.5).unwrap().with_range(0, 10));
        list.insert(Attribute::scale(3.0).unwrap().with_range(0, 10));
        let mut resolved = FontDescription::new();
        list.iterator().font(&mut resolved);
        assert_eq!(resolved.size(), Some(30 * SCALE));
        assert!(resolved.size_is_absolute());

        let mut list = AttrList::new();
        list.insert(Attribute::scale(2.0).unwrap().with_range(0, 10));
        let mut resolved = FontDescription::new();
        list.iterator().font(&mut resolved);
        assert_eq!(resolved.size(), None);
    }

    #[test]
    fn font_returns_language_and_extras() {
        let en = language_from_string("en").unwrap();
        let fr = language_from_string("fr").unwrap();
        let mut list = AttrList::new();
        list.insert(Attribute::language(en).with_range(0, 10));
        list.insert(Attribute::foreground(Color::BLACK).with_range(0, 10));
        list.insert(Attribute::font_features("liga 0").unwrap().with_range(0, 10));
        list.insert(Attribute::language(fr.clone()).with_range(0, 10));
        list.insert(Attribute::foreground(Color::WHITE).with_range(0, 10));
        list.insert(Attribute::font_features("smcp").unwrap().with_range(0, 10));

        let mut resolved = FontDescription::new();
        let font = list.iterator().font(&mut resolved);
        assert_eq!(font.language, Some(&fr));
        let extras: Vec<_> = font.extra_attrs.iter().map(|attr| attr.value()).collect();
        assert_eq!(extras.len(), 3);
        assert_eq!(extras[0].as_str(), Some("liga 0"));
        assert_eq!(extras[1].as_color(), Some(Color::WHITE));
        assert_eq!(extras[2].as_str(), Some("smcp"));
        assert_eq!(resolved.set_fields(), FontMask::empty());
    }
}
