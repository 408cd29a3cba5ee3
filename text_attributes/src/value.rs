// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;
use core::any::Any;
use core::fmt;

use text_primitives::{Color, FontDescription, Language, Rectangle};

/// The payload of an attribute.
///
/// Cloning deep-copies owned payloads. Equality is payload equality as used when coalescing
/// attributes, which is looser than structural equality for some variants:
///
/// - [`Size`](Self::Size) compares only the magnitude, since the absolute flag is implied by the
///   attribute type.
/// - [`Shape`](Self::Shape) compares the rectangles and the *identity* of the user data.
#[derive(Clone, Debug)]
pub enum AttrValue {
    /// A string, such as a family list or font feature settings.
    String(Arc<str>),
    /// A language tag.
    Language(Language),
    /// An integer, also used for enumerations and booleans.
    Int(i32),
    /// A floating point number.
    Float(f64),
    /// A 16-bit-per-channel color.
    Color(Color),
    /// A font size, scaled by [`SCALE`](text_primitives::SCALE).
    Size {
        /// The magnitude.
        size: i32,
        /// `true` if the size is in device units rather than points.
        absolute: bool,
    },
    /// Extents of an embedded object.
    Shape(ShapeValue),
    /// A partial font description.
    FontDesc(FontDescription),
}

impl AttrValue {
    /// Returns the string payload.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the language payload.
    pub fn as_language(&self) -> Option<&Language> {
        match self {
            Self::Language(language) => Some(language),
            _ => None,
        }
    }

    /// Returns the integer payload.
    pub fn as_int(&self) -> Option<i32> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the floating point payload.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the color payload.
    pub fn as_color(&self) -> Option<Color> {
        match self {
            Self::Color(color) => Some(*color),
            _ => None,
        }
    }

    /// Returns the size payload and whether it is absolute.
    pub fn as_size(&self) -> Option<(i32, bool)> {
        match self {
            Self::Size { size, absolute } => Some((*size, *absolute)),
            _ => None,
        }
    }

    /// Returns the shape payload.
    pub fn as_shape(&self) -> Option<&ShapeValue> {
        match self {
            Self::Shape(shape) => Some(shape),
            _ => None,
        }
    }

    /// Returns the font description payload.
    pub fn as_font_desc(&self) -> Option<&FontDescription> {
        match self {
            Self::FontDesc(desc) => Some(desc),
            _ => None,
        }
    }
}

impl PartialEq for AttrValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Language(a), Self::Language(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Color(a), Self::Color(b)) => a == b,
            (Self::Size { size: a, .. }, Self::Size { size: b, .. }) => a == b,
            (Self::Shape(a), Self::Shape(b)) => a == b,
            (Self::FontDesc(a), Self::FontDesc(b)) => a == b,
            _ => false,
        }
    }
}

/// The extents of an object drawn in place of the attributed text.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeValue {
    /// Ink extents of the object.
    pub ink_rect: Rectangle,
    /// Logical extents of the object.
    pub logical_rect: Rectangle,
    /// Data for whoever renders the object.
    pub data: Option<ShapeData>,
}

/// Opaque user data attached to a shape attribute.
///
/// Copies of an attribute share the same data; dropping the last copy drops the data. Two
/// `ShapeData` values are equal only if they share the same allocation.
#[derive(Clone)]
pub struct ShapeData(Arc<dyn Any + Send + Sync>);

impl ShapeData {
    /// Wraps a value.
    pub fn new<T: Any + Send + Sync>(data: T) -> Self {
        Self(Arc::new(data))
    }

    /// Returns the data if it is of type `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref()
    }
}

impl From<Arc<dyn Any + Send + Sync>> for ShapeData {
    fn from(data: Arc<dyn Any + Send + Sync>) -> Self {
        Self(data)
    }
}

impl PartialEq for ShapeData {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for ShapeData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ShapeData({:p})", Arc::as_ptr(&self.0))
    }
}
