// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Language tags.
//!
//! Tags are canonicalized on parse, so two tags naming the same language compare equal no matter
//! how they were spelled.

use alloc::string::String;

pub use icu_locale_core::LanguageIdentifier as Language;
pub use icu_locale_core::ParseError as ParseLanguageError;

/// Parses a language tag, accepting `_` as well as `-` between subtags.
///
/// ```
/// use text_primitives::language_from_string;
///
/// let a = language_from_string("en_US").unwrap();
/// let b = language_from_string("EN-us").unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a.to_string(), "en-US");
/// ```
pub fn language_from_string(tag: &str) -> Result<Language, ParseLanguageError> {
    let tag = tag.trim();
    if tag.contains('_') {
        let normalized: String = tag.chars().map(|c| if c == '_' { '-' } else { c }).collect();
        normalized.parse()
    } else {
        tag.parse()
    }
}
