// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vocabulary types shared by text attributes and the layers around them.
//!
//! This crate holds the small value types that attribute lists carry but do not own the meaning
//! of: partial font descriptions, language tags, colors, rectangles and the enumerations used by
//! integer attributes.
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for forward compatibility.
//! - `bytemuck`: Implement traits from `bytemuck` on [`Color`], [`Rectangle`] and [`Gravity`].
//!
//! ## Example
//!
//! ```
//! use text_primitives::{Color, FontDescription, FontMask, FontWeight, SCALE};
//!
//! let mut desc = FontDescription::new();
//! desc.set_family("Cantarell");
//! desc.set_weight(FontWeight::BOLD);
//! desc.set_size(11 * SCALE);
//! assert_eq!(
//!     desc.set_fields(),
//!     FontMask::FAMILY | FontMask::WEIGHT | FontMask::SIZE
//! );
//!
//! assert_eq!(Color::parse("#00f").unwrap(), Color::new(0, 0, 0xffff));
//! ```
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;

mod color;
mod decoration;
mod font;
mod font_description;
mod gravity;
#[cfg(feature = "bytemuck")]
mod impl_bytemuck;
mod language;
mod rect;

pub use color::{Color, ParseColorError};
pub use decoration::{ShowFlags, Underline};
pub use font::{FontStretch, FontStyle, FontVariant, FontWeight};
pub use font_description::{FontDescription, FontMask, SCALE};
pub use gravity::{Gravity, GravityHint};
pub use language::{Language, ParseLanguageError, language_from_string};
pub use rect::Rectangle;
