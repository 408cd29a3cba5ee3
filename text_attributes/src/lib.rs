// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text Attributes holds the styling and semantic annotations applied to byte ranges of a text
//! buffer, as consumed by itemization and shaping.
//!
//! An [`AttrList`] keeps [`Attribute`]s sorted by start index and supports the edits a rich text
//! producer needs: plain insertion, coalescing assignment with [`AttrList::change`], remapping
//! after a text edit with [`AttrList::update`], merging a fragment with [`AttrList::splice`] and
//! partitioning with [`AttrList::filter`].
//!
//! An [`AttrIterator`] sweeps a list from start to end, yielding the maximal segments over which
//! the set of active attributes is constant, and resolves the font of each segment.
//!
//! ## Features
//!
//! - `std` (enabled by default): Enables [`TypeRegistry`], which allocates custom attribute
//!   types.
//!
//! ## Example
//!
//! ```
//! use text_attributes::{AttrList, Attribute};
//! use text_primitives::{FontDescription, FontStyle, FontWeight, SCALE};
//!
//! let mut list = AttrList::new();
//! list.insert(Attribute::size(12 * SCALE));
//! list.change(Attribute::weight(FontWeight::BOLD).with_range(0, 5));
//! list.change(Attribute::style(FontStyle::Italic).with_range(3, 8));
//!
//! let mut iter = list.iterator();
//! let mut runs = Vec::new();
//! loop {
//!     let mut desc = FontDescription::new();
//!     iter.font(&mut desc);
//!     runs.push((iter.range(), desc.weight(), desc.style()));
//!     if !iter.advance() {
//!         break;
//!     }
//! }
//! assert_eq!(runs[1], ((3, 5), Some(FontWeight::BOLD), Some(FontStyle::Italic)));
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
#[cfg(feature = "std")]
extern crate std;

mod attr_type;
mod attribute;
mod error;
mod iter;
mod list;
#[cfg(feature = "std")]
mod registry;
mod value;

#[cfg(test)]
mod tests;

pub use crate::attr_type::{AttrType, CustomType, FIRST_CUSTOM_TYPE_ID};
pub use crate::attribute::{ATTR_INDEX_FROM_TEXT_BEGINNING, ATTR_INDEX_TO_TEXT_END, Attribute};
pub use crate::error::{Error, ErrorKind};
pub use crate::iter::{AttrIterator, SegmentFont};
pub use crate::list::AttrList;
#[cfg(feature = "std")]
pub use crate::registry::TypeRegistry;
pub use crate::value::{AttrValue, ShapeData, ShapeValue};
