// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// An integer rectangle, in layout units.
///
/// The origin is the top-left corner; `y` grows downwards, so the ascent of a glyph is a negative
/// `y`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(C)]
pub struct Rectangle {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width; may be negative for mirrored extents.
    pub width: i32,
    /// Height; may be negative for mirrored extents.
    pub height: i32,
}

impl Rectangle {
    /// Creates a rectangle from its origin and extents.
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns `true` if the rectangle covers no area.
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}
