// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::AttrType;

/// Error returned when an attribute cannot be constructed from the given input.
///
/// Carries a non-exhaustive [`ErrorKind`] plus the attribute type being built and, for range
/// errors, the offending range.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    /// The non-exhaustive category describing this error.
    kind: ErrorKind,

    /// The type of the attribute being constructed.
    attr_type: AttrType,

    /// The start byte index of a rejected range.
    start: u32,

    /// The end byte index (exclusive) of a rejected range.
    end: u32,
}

impl Error {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The type of the attribute that was being constructed.
    pub fn attr_type(&self) -> AttrType {
        self.attr_type
    }

    /// The start of the rejected range, for [`ErrorKind::InvalidRange`].
    pub fn start(&self) -> u32 {
        self.start
    }

    /// The end of the rejected range, for [`ErrorKind::InvalidRange`].
    pub fn end(&self) -> u32 {
        self.end
    }

    pub(crate) fn empty_string(attr_type: AttrType) -> Self {
        Self {
            kind: ErrorKind::EmptyString,
            attr_type,
            start: 0,
            end: 0,
        }
    }

    pub(crate) fn invalid_value(attr_type: AttrType) -> Self {
        Self {
            kind: ErrorKind::InvalidValue,
            attr_type,
            start: 0,
            end: 0,
        }
    }

    pub(crate) fn invalid_range(attr_type: AttrType, start: u32, end: u32) -> Self {
        Self {
            kind: ErrorKind::InvalidRange,
            attr_type,
            start,
            end,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let ty = self.attr_type;
        match self.kind {
            ErrorKind::EmptyString => write!(f, "`{ty}` attribute requires a non-empty string"),
            ErrorKind::InvalidValue => write!(f, "invalid value for `{ty}` attribute"),
            ErrorKind::InvalidRange => write!(
                f,
                "invalid range {}..{} for `{ty}` attribute: start > end",
                self.start, self.end
            ),
        }
    }
}

impl core::error::Error for Error {}

/// The non-exhaustive category of an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A string-valued attribute was given an empty string.
    EmptyString,

    /// The value is outside the domain of the attribute, such as a non-finite scale factor.
    InvalidValue,

    /// The provided range had `start > end`.
    InvalidRange,
}
