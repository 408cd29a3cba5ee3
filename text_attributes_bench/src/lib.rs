// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! # Text Attributes Bench
//!
//! This crate provides benchmarks for the `text_attributes` crate.

use std::sync::OnceLock;

use text_attributes::{AttrList, Attribute};
use text_primitives::{
    Color, FontDescription, FontStyle, FontWeight, SCALE, Underline, language_from_string,
};

pub mod benches;

/// A sample to be used for benchmarking.
#[derive(Debug)]
pub struct Sample {
    /// The name of the sample.
    pub name: &'static str,
    /// The modification of the sample.
    pub modification: &'static str,
    /// Length in bytes of the text the attributes describe.
    pub len: u32,
    /// The attributes of the sample.
    pub list: AttrList,
}

static SAMPLES: OnceLock<Vec<Sample>> = OnceLock::new();

/// Returns a list of samples to be used for benchmarking.
pub fn get_samples() -> &'static [Sample] {
    SAMPLES.get_or_init(|| {
        vec![
            Sample {
                name: "Plain",
                modification: "1 paragraph",
                len: 600,
                list: plain(),
            },
            Sample {
                name: "Markup",
                modification: "1 paragraph",
                len: 600,
                list: markup(100, 6),
            },
            Sample {
                name: "Markup",
                modification: "4 paragraph",
                len: 2400,
                list: markup(400, 6),
            },
            Sample {
                name: "Nested",
                modification: "4 paragraph",
                len: 2400,
                list: nested(2400),
            },
        ]
    })
}

/// A paragraph styled only by whole-text defaults.
fn plain() -> AttrList {
    let mut desc = FontDescription::new();
    desc.set_family("Roboto");
    desc.set_size(14 * SCALE);

    let mut list = AttrList::new();
    list.insert(Attribute::font_desc(desc));
    if let Ok(language) = language_from_string("en-US") {
        list.insert(Attribute::language(language));
    }
    list
}

/// Whole-text defaults plus a run of formatting on every third word, as a markup parser
/// would produce.
fn markup(words: u32, word_len: u32) -> AttrList {
    let mut list = plain();
    for word in (0..words).step_by(3) {
        let start = word * word_len;
        let end = start + word_len - 1;
        let attr = match word % 4 {
            0 => Attribute::weight(FontWeight::BOLD),
            1 => Attribute::style(FontStyle::Italic),
            2 => Attribute::foreground(Color::new(0x3333, 0x6666, 0xcccc)),
            _ => Attribute::underline(Underline::Single),
        };
        list.change(attr.with_range(start, end));
    }
    list
}

/// Deeply overlapping ranges of several types.
fn nested(len: u32) -> AttrList {
    let mut list = plain();
    let mut start = 0;
    let mut depth = 0_i32;
    while start < len {
        let end = (start + 40 + 13 * depth.unsigned_abs()).min(len);
        list.insert(Attribute::rise(depth * SCALE).with_range(start, end));
        list.insert(Attribute::size((10 + depth) * SCALE).with_range(start + 3, end));
        list.insert(Attribute::letter_spacing(depth).with_range(start + 5, end + 7));
        depth = (depth + 1) % 5;
        start += 17;
    }
    list
}
