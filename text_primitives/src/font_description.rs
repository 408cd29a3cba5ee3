// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;
use bitflags::bitflags;

use crate::{FontStretch, FontStyle, FontVariant, FontWeight, Gravity};

/// Number of layout units per point (or per device unit for absolute sizes).
pub const SCALE: i32 = 1024;

bitflags! {
    /// The set of fields declared by a [`FontDescription`].
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct FontMask: u16 {
        /// The family name.
        const FAMILY = 1 << 0;
        /// The style.
        const STYLE = 1 << 1;
        /// The capitalization variant.
        const VARIANT = 1 << 2;
        /// The weight.
        const WEIGHT = 1 << 3;
        /// The stretch.
        const STRETCH = 1 << 4;
        /// The size, absolute or relative.
        const SIZE = 1 << 5;
        /// The gravity.
        const GRAVITY = 1 << 6;
    }
}

/// A partial description of a font.
///
/// Every field is optional; the [`FontMask`] returned by [`set_fields`](Self::set_fields)
/// records which ones have been declared. Undeclared fields hold their defaults and are ignored
/// by comparison and merging.
#[derive(Clone, Debug, Default)]
pub struct FontDescription {
    family: Option<Arc<str>>,
    style: FontStyle,
    variant: FontVariant,
    weight: FontWeight,
    stretch: FontStretch,
    gravity: Gravity,
    size: i32,
    size_is_absolute: bool,
    mask: FontMask,
}

impl FontDescription {
    /// Creates a description with no fields declared.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the declared fields.
    pub fn set_fields(&self) -> FontMask {
        self.mask
    }

    /// Returns `true` if every field in `fields` is declared.
    pub fn is_set(&self, fields: FontMask) -> bool {
        self.mask.contains(fields)
    }

    /// Declares the family name.
    pub fn set_family(&mut self, family: impl Into<Arc<str>>) {
        self.family = Some(family.into());
        self.mask |= FontMask::FAMILY;
    }

    /// Returns the family name, if declared.
    pub fn family(&self) -> Option<&str> {
        self.family.as_deref()
    }

    /// Declares the style.
    pub fn set_style(&mut self, style: FontStyle) {
        self.style = style;
        self.mask |= FontMask::STYLE;
    }

    /// Returns the style, if declared.
    pub fn style(&self) -> Option<FontStyle> {
        self.is_set(FontMask::STYLE).then_some(self.style)
    }

    /// Declares the capitalization variant.
    pub fn set_variant(&mut self, variant: FontVariant) {
        self.variant = variant;
        self.mask |= FontMask::VARIANT;
    }

    /// Returns the capitalization variant, if declared.
    pub fn variant(&self) -> Option<FontVariant> {
        self.is_set(FontMask::VARIANT).then_some(self.variant)
    }

    /// Declares the weight.
    pub fn set_weight(&mut self, weight: FontWeight) {
        self.weight = weight;
        self.mask |= FontMask::WEIGHT;
    }

    /// Returns the weight, if declared.
    pub fn weight(&self) -> Option<FontWeight> {
        self.is_set(FontMask::WEIGHT).then_some(self.weight)
    }

    /// Declares the stretch.
    pub fn set_stretch(&mut self, stretch: FontStretch) {
        self.stretch = stretch;
        self.mask |= FontMask::STRETCH;
    }

    /// Returns the stretch, if declared.
    pub fn stretch(&self) -> Option<FontStretch> {
        self.is_set(FontMask::STRETCH).then_some(self.stretch)
    }

    /// Declares the gravity.
    pub fn set_gravity(&mut self, gravity: Gravity) {
        self.gravity = gravity;
        self.mask |= FontMask::GRAVITY;
    }

    /// Returns the gravity, if declared.
    pub fn gravity(&self) -> Option<Gravity> {
        self.is_set(FontMask::GRAVITY).then_some(self.gravity)
    }

    /// Declares a size in points, scaled by [`SCALE`].
    pub fn set_size(&mut self, size: i32) {
        self.size = size;
        self.size_is_absolute = false;
        self.mask |= FontMask::SIZE;
    }

    /// Declares a size in device units, scaled by [`SCALE`].
    pub fn set_absolute_size(&mut self, size: i32) {
        self.size = size;
        self.size_is_absolute = true;
        self.mask |= FontMask::SIZE;
    }

    /// Returns the size, if declared.
    ///
    /// Whether it is measured in points or device units is reported by
    /// [`size_is_absolute`](Self::size_is_absolute).
    pub fn size(&self) -> Option<i32> {
        self.is_set(FontMask::SIZE).then_some(self.size)
    }

    /// Returns `true` if the declared size is in device units.
    pub fn size_is_absolute(&self) -> bool {
        self.size_is_absolute
    }

    /// Clears the given fields, resetting them to their defaults.
    pub fn unset_fields(&mut self, fields: FontMask) {
        let defaults = Self::default();
        if fields.contains(FontMask::FAMILY) {
            self.family = None;
        }
        if fields.contains(FontMask::STYLE) {
            self.style = defaults.style;
        }
        if fields.contains(FontMask::VARIANT) {
            self.variant = defaults.variant;
        }
        if fields.contains(FontMask::WEIGHT) {
            self.weight = defaults.weight;
        }
        if fields.contains(FontMask::STRETCH) {
            self.stretch = defaults.stretch;
        }
        if fields.contains(FontMask::GRAVITY) {
            self.gravity = defaults.gravity;
        }
        if fields.contains(FontMask::SIZE) {
            self.size = defaults.size;
            self.size_is_absolute = defaults.size_is_absolute;
        }
        self.mask.remove(fields);
    }

    /// Copies the fields declared by `other` into `self`.
    ///
    /// With `replace_existing` unset, fields `self` already declares are kept.
    ///
    /// ```
    /// use text_primitives::{FontDescription, FontMask, FontWeight};
    ///
    /// let mut base = FontDescription::new();
    /// base.set_family("Cantarell");
    ///
    /// let mut other = FontDescription::new();
    /// other.set_family("Noto Sans");
    /// other.set_weight(FontWeight::BOLD);
    ///
    /// base.merge(&other, false);
    /// assert_eq!(base.family(), Some("Cantarell"));
    /// assert_eq!(base.weight(), Some(FontWeight::BOLD));
    /// assert_eq!(base.set_fields(), FontMask::FAMILY | FontMask::WEIGHT);
    /// ```
    pub fn merge(&mut self, other: &Self, replace_existing: bool) {
        let fields = if replace_existing {
            other.mask
        } else {
            other.mask - self.mask
        };
        if fields.contains(FontMask::FAMILY) {
            self.family.clone_from(&other.family);
        }
        if fields.contains(FontMask::STYLE) {
            self.style = other.style;
        }
        if fields.contains(FontMask::VARIANT) {
            self.variant = other.variant;
        }
        if fields.contains(FontMask::WEIGHT) {
            self.weight = other.weight;
        }
        if fields.contains(FontMask::STRETCH) {
            self.stretch = other.stretch;
        }
        if fields.contains(FontMask::GRAVITY) {
            self.gravity = other.gravity;
        }
        if fields.contains(FontMask::SIZE) {
            self.size = other.size;
            self.size_is_absolute = other.size_is_absolute;
        }
        self.mask |= fields;
    }
}

impl PartialEq for FontDescription {
    fn eq(&self, other: &Self) -> bool {
        self.mask == other.mask
            && self.family == other.family
            && self.style() == other.style()
            && self.variant() == other.variant()
            && self.weight() == other.weight()
            && self.stretch() == other.stretch()
            && self.gravity() == other.gravity()
            && self.size() == other.size()
            && (!self.is_set(FontMask::SIZE) || self.size_is_absolute == other.size_is_absolute)
    }
}

impl Eq for FontDescription {}

#[cfg(test)]
mod tests {
    use super::{FontDescription, FontMask, SCALE};
    use crate::{FontStyle, FontWeight, Gravity};

    #[test]
    fn setters_declare_fields() {
        let mut desc = FontDescription::new();
        assert!(desc.set_fields().is_empty());
        desc.set_style(FontStyle::Italic);
        desc.set_size(12 * SCALE);
        assert_eq!(desc.set_fields(), FontMask::STYLE | FontMask::SIZE);
        assert_eq!(desc.style(), Some(FontStyle::Italic));
        assert_eq!(desc.size(), Some(12 * SCALE));
        assert!(!desc.size_is_absolute());
        assert_eq!(desc.weight(), None);
    }

    #[test]
    fn unset_resets_to_defaults() {
        let mut desc = FontDescription::new();
        desc.set_family("Sans");
        desc.set_absolute_size(20 * SCALE);
        desc.unset_fields(FontMask::SIZE | FontMask::FAMILY);
        assert!(desc.set_fields().is_empty());
        assert_eq!(desc.family(), None);
        assert!(!desc.size_is_absolute());
        assert_eq!(desc, FontDescription::new());
    }

    #[test]
    fn merge_with_replacement() {
        let mut base = FontDescription::new();
        base.set_weight(FontWeight::LIGHT);
        let mut other = FontDescription::new();
        other.set_weight(FontWeight::HEAVY);
        other.set_gravity(Gravity::East);

        let mut kept = base.clone();
        kept.merge(&other, false);
        assert_eq!(kept.weight(), Some(FontWeight::LIGHT));
        assert_eq!(kept.gravity(), Some(Gravity::East));

        base.merge(&other, true);
        assert_eq!(base.weight(), Some(FontWeight::HEAVY));
    }

    #[test]
    fn equality_needs_same_mask() {
        let mut a = FontDescription::new();
        a.set_weight(FontWeight::NORMAL);
        let b = FontDescription::new();
        // `b` has the same stored weight, but does not declare it.
        assert_ne!(a, b);

        let mut c = FontDescription::new();
        c.set_weight(FontWeight::NORMAL);
        assert_eq!(a, c);

        let mut relative = FontDescription::new();
        relative.set_size(10 * SCALE);
        let mut absolute = FontDescription::new();
        absolute.set_absolute_size(10 * SCALE);
        assert_ne!(relative, absolute);
    }
}
