// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;
use core::mem;

use log::trace;

use crate::{AttrIterator, Attribute};

/// An ordered collection of attributes over one text buffer.
///
/// Attributes are kept sorted by start index. Among attributes with the same start, the order
/// depends on how they were added: [`insert`](Self::insert) places an attribute after its
/// peers and [`insert_before`](Self::insert_before) before them. Later attributes take
/// precedence over earlier ones of the same type when iterating.
///
/// Cloning a list is cheap and shares storage; the first mutation through a shared handle
/// detaches it from the others.
///
/// ```
/// use text_attributes::{AttrList, AttrType, Attribute};
/// use text_primitives::FontWeight;
///
/// let mut list = AttrList::new();
/// list.change(Attribute::weight(FontWeight::BOLD).with_range(0, 10));
/// list.change(Attribute::weight(FontWeight::BOLD).with_range(5, 15));
/// assert_eq!(list.len(), 1);
/// assert_eq!(list.iter().next().unwrap().range(), 0..15);
///
/// let iter = list.iterator();
/// assert_eq!(iter.range(), (0, 15));
/// assert!(iter.get(AttrType::Weight).is_some());
/// ```
#[derive(Clone, Debug, Default)]
pub struct AttrList {
    attrs: Arc<Vec<Attribute>>,
}

impl AttrList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of handles sharing this list's storage.
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.attrs)
    }

    /// Returns an unshared deep copy of the list.
    #[must_use]
    pub fn copy(&self) -> Self {
        Self {
            attrs: Arc::new(self.attrs.as_ref().clone()),
        }
    }

    /// Returns the number of attributes.
    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    /// Returns `true` if the list holds no attributes.
    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    /// Iterates over the attributes in stored order.
    pub fn iter(&self) -> core::slice::Iter<'_, Attribute> {
        self.attrs.iter()
    }

    /// Returns clones of the attributes in stored order.
    pub fn attributes(&self) -> Vec<Attribute> {
        self.attrs.as_ref().clone()
    }

    /// Opens a sweep over the list, positioned at the first segment.
    pub fn iterator(&self) -> AttrIterator<'_> {
        AttrIterator::new(self)
    }

    pub(crate) fn as_slice(&self) -> &[Attribute] {
        &self.attrs
    }

    fn attrs_mut(&mut self) -> &mut Vec<Attribute> {
        Arc::make_mut(&mut self.attrs)
    }

    /// Adds an attribute after any existing attributes with the same start index.
    pub fn insert(&mut self, attr: Attribute) {
        insert_after_peers(self.attrs_mut(), attr);
    }

    /// Adds an attribute before any existing attributes with the same start index.
    pub fn insert_before(&mut self, attr: Attribute) {
        let attrs = self.attrs_mut();
        let start = attr.start_index;
        let index = match attrs.last() {
            Some(last) if last.start_index >= start => {
                attrs.partition_point(|existing| existing.start_index < start)
            }
            _ => attrs.len(),
        };
        attrs.insert(index, attr);
    }

    /// Applies `attr` to its range, replacing whatever attributes of the same type said there.
    ///
    /// Overlapping attributes of the same type with a different value are clipped or split
    /// around `attr`; those with an equal value are merged with it. Attributes of other types
    /// are left alone. An empty `attr` is discarded.
    pub fn change(&mut self, attr: Attribute) {
        if attr.is_empty() {
            trace!("discarding empty `{}` attribute", attr.attr_type());
            return;
        }
        let start = attr.start_index;
        let end = attr.end_index;
        let ty = attr.attr_type();
        let attrs = self.attrs_mut();

        // Settle attributes starting at or before `start`, then seat `attr`.
        let mut i = 0;
        let pos = loop {
            let Some(existing) = attrs.get(i) else {
                attrs.push(attr);
                break i;
            };
            if existing.start_index > start {
                attrs.insert(i, attr);
                break i;
            }
            if existing.attr_type() != ty || existing.end_index < start {
                i += 1;
                continue;
            }
            if existing.value() == attr.value() {
                if existing.end_index >= end {
                    trace!("`{ty}` attribute {start}..{end} is already covered");
                    return;
                }
                attrs[i].end_index = end;
                break i;
            }
            if existing.end_index > end {
                let mut tail = existing.clone();
                tail.start_index = end;
                insert_after_peers(attrs, tail);
            }
            if attrs[i].start_index == start {
                attrs[i] = attr;
                break i;
            }
            attrs[i].end_index = start;
            i += 1;
        };

        // Absorb or clip same-type attributes that start inside the new range.
        let mut i = pos + 1;
        while let Some(entry) = attrs.get(i) {
            if entry.start_index > end {
                break;
            }
            if entry.attr_type() != ty {
                i += 1;
                continue;
            }
            let merged_end = attrs[pos].end_index;
            if entry.end_index <= merged_end || entry.value() == attrs[pos].value() {
                let absorbed = attrs.remove(i);
                attrs[pos].end_index = merged_end.max(absorbed.end_index);
                continue;
            }
            attrs[i].start_index = merged_end;
            let mut k = i;
            while attrs
                .get(k + 1)
                .is_some_and(|next| next.start_index < merged_end)
            {
                attrs.swap(k, k + 1);
                k += 1;
            }
            if k == i {
                i += 1;
            }
        }
        debug_assert!(is_sorted(attrs), "attribute list out of order after change");
    }

    /// Remaps attribute ranges after the text was edited.
    ///
    /// The edit replaced `remove` bytes at `pos` with `add` new bytes. Attributes inside the
    /// removed bytes are dropped; endpoints inside them move to the edit point, and endpoints
    /// after them shift by the change in length. The "whole text" sentinels
    /// [`ATTR_INDEX_FROM_TEXT_BEGINNING`](crate::ATTR_INDEX_FROM_TEXT_BEGINNING) and
    /// [`ATTR_INDEX_TO_TEXT_END`](crate::ATTR_INDEX_TO_TEXT_END) are never moved.
    pub fn update(&mut self, pos: u32, remove: u32, add: u32) {
        let removed_end = pos.saturating_add(remove);
        let shift = |index: u32| {
            if add >= remove {
                index.saturating_add(add - remove)
            } else {
                index - (remove - add)
            }
        };
        let attrs = self.attrs_mut();
        attrs.retain_mut(|attr| {
            // An attribute ending exactly at the end of the removed bytes survives.
            if attr.start_index >= pos && attr.end_index < removed_end {
                trace!(
                    "dropping `{}` attribute {}..{} inside removed bytes",
                    attr.attr_type(),
                    attr.start_index,
                    attr.end_index
                );
                return false;
            }
            if attr.start_index != crate::ATTR_INDEX_FROM_TEXT_BEGINNING {
                if attr.start_index >= removed_end {
                    attr.start_index = shift(attr.start_index);
                } else if attr.start_index >= pos {
                    attr.start_index = pos.saturating_add(add);
                }
            }
            if attr.end_index != crate::ATTR_INDEX_TO_TEXT_END {
                if attr.end_index >= removed_end {
                    attr.end_index = shift(attr.end_index);
                } else if attr.end_index >= pos {
                    attr.end_index = pos;
                }
            }
            true
        });
        debug_assert!(is_sorted(attrs), "attribute list out of order after update");
    }

    /// Merges `other` into this list at `pos`, after opening a hole of `len` bytes there.
    ///
    /// Attributes covering `pos` are stretched over the hole and attributes after it are moved
    /// past it. The attributes of `other` are then offset by `pos` and applied with
    /// [`change`](Self::change).
    pub fn splice(&mut self, other: &Self, pos: u32, len: u32) {
        trace!(
            "splicing {} attributes at {pos} into a hole of {len} bytes",
            other.len()
        );
        for attr in self.attrs_mut().iter_mut() {
            if attr.start_index <= pos {
                if attr.end_index > pos {
                    attr.end_index = attr.end_index.saturating_add(len);
                }
            } else {
                attr.start_index = attr.start_index.saturating_add(len);
                attr.end_index = attr.end_index.saturating_add(len);
            }
        }
        for attr in other.iter() {
            let mut attr = attr.clone();
            attr.start_index = attr.start_index.saturating_add(pos);
            attr.end_index = attr.end_index.saturating_add(pos);
            self.change(attr);
        }
    }

    /// Moves the attributes matching `predicate` into a new list.
    ///
    /// Both lists keep the relative order of their attributes. Returns `None`, leaving the list
    /// untouched, if nothing matched.
    pub fn filter(&mut self, mut predicate: impl FnMut(&Attribute) -> bool) -> Option<Self> {
        let attrs = Arc::unwrap_or_clone(mem::take(&mut self.attrs));
        let (matched, kept): (Vec<_>, Vec<_>) =
            attrs.into_iter().partition(|attr| predicate(attr));
        self.attrs = Arc::new(kept);
        trace!(
            "filter moved {} attributes, kept {}",
            matched.len(),
            self.attrs.len()
        );
        if matched.is_empty() {
            return None;
        }
        Some(Self {
            attrs: Arc::new(matched),
        })
    }
}

/// Lists are equal when they hold the same attributes, in any order.
impl PartialEq for AttrList {
    fn eq(&self, other: &Self) -> bool {
        if Arc::ptr_eq(&self.attrs, &other.attrs) {
            return true;
        }
        if self.len() != other.len() {
            return false;
        }
        let mut matched = vec![false; other.len()];
        self.iter().all(|attr| {
            let found = other
                .iter()
                .zip(matched.iter_mut())
                .find(|(candidate, used)| !**used && *candidate == attr);
            match found {
                Some((_, used)) => {
                    *used = true;
                    true
                }
                None => false,
            }
        })
    }
}

impl FromIterator<Attribute> for AttrList {
    fn from_iter<I: IntoIterator<Item = Attribute>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl Extend<Attribute> for AttrList {
    fn extend<I: IntoIterator<Item = Attribute>>(&mut self, iter: I) {
        for attr in iter {
            self.insert(attr);
        }
    }
}

impl<'a> IntoIterator for &'a AttrList {
    type Item = &'a Attribute;
    type IntoIter = core::slice::Iter<'a, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn insert_after_peers(attrs: &mut Vec<Attribute>, attr: Attribute) {
    let start = attr.start_index;
    // Appending is the common case.
    let index = match attrs.last() {
        Some(last) if last.start_index > start => {
            attrs.partition_point(|existing| existing.start_index <= start)
        }
        _ => attrs.len(),
    };
    attrs.insert(index, attr);
}

fn is_sorted(attrs: &[Attribute]) -> bool {
    attrs
        .windows(2)
        .all(|pair| pair[0].start_index <= pair[1].start_index)
}
