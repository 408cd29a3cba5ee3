// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{AttrIterator, AttrList, AttrType, Attribute};
use alloc::vec::Vec;
use core::ptr;
use text_primitives::{FontDescription, FontWeight, SCALE};

struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u32(&mut self) -> u32 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 32) as u32
    }

    fn below(&mut self, max: u32) -> u32 {
        if max == 0 { 0 } else { self.next_u32() % max }
    }

    fn one_in(&mut self, n: u32) -> bool {
        self.below(n) == 0
    }
}

fn is_sorted(list: &AttrList) -> bool {
    list.attributes()
        .windows(2)
        .all(|pair| pair[0].start_index() <= pair[1].start_index())
}

/// A small random attribute of one of three types, with one of three values.
fn random_attr(rng: &mut Lcg) -> Attribute {
    let value = rng.below(3) as i32;
    let attr = match rng.below(3) {
        0 => Attribute::rise(value),
        1 => Attribute::letter_spacing(value),
        _ => Attribute::weight(FontWeight::new(100 * (value + 1))),
    };
    if rng.one_in(20) {
        return attr;
    }
    let start = rng.below(40);
    let end = if rng.one_in(10) {
        u32::MAX
    } else {
        start + rng.below(12)
    };
    attr.with_range(start, end)
}

fn random_list(rng: &mut Lcg, len: u32) -> AttrList {
    let mut list = AttrList::new();
    for _ in 0..len {
        let attr = random_attr(rng);
        match rng.below(3) {
            0 => list.insert(attr),
            1 => list.insert_before(attr),
            _ => list.change(attr),
        }
    }
    list
}

#[test]
fn edits_keep_list_sorted() {
    let mut rng = Lcg::new(0x5eed_0001);
    for _case in 0..200 {
        let mut list = AttrList::new();
        for _ in 0..30 {
            match rng.below(6) {
                0 => list.insert(random_attr(&mut rng)),
                1 => list.insert_before(random_attr(&mut rng)),
                2 => list.change(random_attr(&mut rng)),
                3 => list.update(rng.below(50), rng.below(10), rng.below(10)),
                4 => {
                    let other = random_list(&mut rng, 4);
                    list.splice(&other, rng.below(50), rng.below(10));
                }
                _ => {
                    let _ = list.filter(|attr| attr.attr_type() == AttrType::Rise);
                }
            }
            assert!(is_sorted(&list), "unsorted list: {list:?}");
            assert!(
                list.iter().all(|attr| attr.start_index() <= attr.end_index()),
                "inverted range in {list:?}"
            );
        }
    }
}

#[test]
fn change_twice_is_change_once() {
    let mut rng = Lcg::new(0x5eed_0002);
    for _case in 0..300 {
        let mut once = AttrList::new();
        for _ in 0..rng.below(15) {
            once.change(random_attr(&mut rng));
        }
        let attr = random_attr(&mut rng);
        once.change(attr.clone());
        let mut twice = once.copy();
        twice.change(attr);
        assert_eq!(once, twice);
    }
}

#[test]
fn change_coalesces_then_clips() {
    let mut list = AttrList::new();
    list.change(Attribute::rise(1).with_range(0, 10));
    list.change(Attribute::rise(1).with_range(5, 15));
    assert_eq!(list.attributes(), [Attribute::rise(1).with_range(0, 15)]);

    list.change(Attribute::rise(2).with_range(5, 10));
    let expected: AttrList = [
        Attribute::rise(1).with_range(0, 5),
        Attribute::rise(2).with_range(5, 10),
        Attribute::rise(1).with_range(10, 15),
    ]
    .into_iter()
    .collect();
    assert_eq!(list, expected);
}

/// Builds a list whose attributes are told apart by their rise value.
fn tagged_list(rng: &mut Lcg, len: i32) -> AttrList {
    let mut list = AttrList::new();
    for tag in 0..len {
        let start = rng.below(40);
        let end = if rng.one_in(8) {
            u32::MAX
        } else {
            start + rng.below(12)
        };
        list.insert(Attribute::rise(tag).with_range(start, end));
    }
    list
}

fn find_tag(list: &AttrList, tag: i32) -> Option<&Attribute> {
    list.iter().find(|attr| attr.value().as_int() == Some(tag))
}

#[test]
fn update_drops_attributes_inside_removed_bytes() {
    let mut rng = Lcg::new(0x5eed_0003);
    for _case in 0..200 {
        let before = tagged_list(&mut rng, 12);
        let pos = rng.below(40);
        let removed = rng.below(15);
        let mut after = before.copy();
        after.update(pos, removed, rng.below(5));

        for attr in before.iter() {
            let tag = attr.value().as_int().unwrap();
            let inside = attr.start_index() >= pos && attr.end_index() < pos + removed;
            assert_eq!(
                find_tag(&after, tag).is_none(),
                inside,
                "attribute {:?} with edit at {pos} removing {removed}",
                attr.range()
            );
        }
    }
}

#[test]
fn update_round_trip_restores_outside_ranges() {
    let mut rng = Lcg::new(0x5eed_0004);
    for _case in 0..200 {
        let before = tagged_list(&mut rng, 12);
        let pos = rng.below(40);
        let removed = rng.below(15);
        let mut after = before.copy();
        after.update(pos, removed, 0);
        after.update(pos, 0, removed);

        let outside = |index: u32| index < pos || index >= pos + removed;
        for attr in before.iter() {
            if !(outside(attr.start_index()) && outside(attr.end_index())) {
                continue;
            }
            let tag = attr.value().as_int().unwrap();
            let restored = find_tag(&after, tag).expect("attribute outside the edit was dropped");
            assert_eq!(restored.range(), attr.range());
        }
    }
}

#[test]
fn splice_into_covering_attribute() {
    let mut list = AttrList::new();
    list.insert(Attribute::rise(1).with_range(0, 20));
    list.splice(&AttrList::new(), 10, 5);
    assert_eq!(list.attributes(), [Attribute::rise(1).with_range(0, 25)]);
}

/// Segment boundaries: zero, every endpoint, and the end of the text.
fn reference_boundaries(list: &AttrList) -> Vec<u32> {
    let mut boundaries = Vec::from([0]);
    for attr in list.iter() {
        boundaries.push(attr.start_index());
        boundaries.push(attr.end_index());
    }
    boundaries.sort_unstable();
    boundaries.dedup();
    // Either the unbounded tail segment, or the empty segment reported after attributes that
    // run to the end of the text.
    boundaries.push(u32::MAX);
    boundaries
}

/// Attributes active at `index`, in activation order.
fn reference_active(list: &AttrList, index: u32) -> Vec<&Attribute> {
    list.iter()
        .filter(|attr| attr.start_index() <= index && index < attr.end_index())
        .collect()
}

#[test]
fn sweep_matches_reference() {
    let mut rng = Lcg::new(0x5eed_0005);
    for _case in 0..300 {
        let len = rng.below(20);
        let list = random_list(&mut rng, len);
        let boundaries = reference_boundaries(&list);

        let mut iter = AttrIterator::new(&list);
        let mut segments = Vec::new();
        loop {
            let (start, end) = iter.range();
            segments.push((start, end));

            if start < end {
                let expected = reference_active(&list, start);
                let actual: Vec<_> = iter.active().rev().collect();
                assert_eq!(actual.len(), expected.len(), "segment {start}..{end}");
                assert!(
                    actual
                        .iter()
                        .zip(&expected)
                        .all(|(a, b)| ptr::eq(*a, *b)),
                    "active set differs in segment {start}..{end}"
                );
                for ty in [AttrType::Rise, AttrType::LetterSpacing, AttrType::Weight] {
                    let topmost = expected
                        .iter()
                        .rev()
                        .find(|attr| attr.attr_type() == ty)
                        .copied();
                    assert_eq!(
                        iter.get(ty).map(ptr::from_ref),
                        topmost.map(ptr::from_ref),
                        "`{ty}` in segment {start}..{end}"
                    );
                }
            }
            if !iter.advance() {
                break;
            }
        }

        let expected: Vec<_> = boundaries
            .windows(2)
            .map(|pair| (pair[0], pair[1]))
            .collect();
        assert_eq!(segments, expected, "list: {list:?}");
    }
}

#[test]
fn font_prefers_topmost_declaration() {
    let mut desc = FontDescription::new();
    desc.set_family("B");
    desc.set_size(12 * SCALE);

    // Inserted last, the family attribute sits above the description on the stack.
    let mut list = AttrList::new();
    list.insert(Attribute::font_desc(desc).with_range(0, 10));
    list.insert(Attribute::family("A").unwrap().with_range(0, 10));

    let mut resolved = FontDescription::new();
    let font = list.iterator().font(&mut resolved);
    assert_eq!(resolved.family(), Some("A"));
    assert_eq!(resolved.size(), Some(12 * SCALE));
    assert!(font.extra_attrs.is_empty());
    assert_eq!(font.language, None);
}

#[test]
fn font_matches_topmost_reference() {
    let mut rng = Lcg::new(0x5eed_0006);
    let families = ["A", "B", "C"];
    for _case in 0..200 {
        let mut list = AttrList::new();
        for _ in 0..rng.below(8) {
            let start = rng.below(10);
            let end = start + 1 + rng.below(10);
            let attr = match rng.below(3) {
                0 => Attribute::family(families[rng.below(3) as usize]).unwrap(),
                1 => Attribute::size((8 + rng.below(8) as i32) * SCALE),
                _ => {
                    let mut desc = FontDescription::new();
                    if rng.one_in(2) {
                        desc.set_family(families[rng.below(3) as usize]);
                    }
                    if rng.one_in(2) {
                        desc.set_size((8 + rng.below(8) as i32) * SCALE);
                    }
                    Attribute::font_desc(desc)
                }
            };
            list.insert(attr.with_range(start, end));
        }

        let mut iter = list.iterator();
        loop {
            let (start, end) = iter.range();
            if start < end {
                let active = reference_active(&list, start);
                let family = active.iter().rev().find_map(|attr| match attr.attr_type() {
                    AttrType::Family => attr.value().as_str(),
                    AttrType::FontDesc => attr.value().as_font_desc().and_then(|d| d.family()),
                    _ => None,
                });
                let size = active.iter().rev().find_map(|attr| match attr.attr_type() {
                    AttrType::Size => attr.value().as_size().map(|(size, _)| size),
                    AttrType::FontDesc => attr.value().as_font_desc().and_then(|d| d.size()),
                    _ => None,
                });

                let mut resolved = FontDescription::new();
                iter.font(&mut resolved);
                assert_eq!(resolved.family(), family, "segment {start}..{end}");
                assert_eq!(resolved.size(), size, "segment {start}..{end}");
            }
            if !iter.advance() {
                break;
            }
        }
    }
}
