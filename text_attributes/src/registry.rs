// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;
use alloc::vec::Vec;
use std::sync::{Mutex, PoisonError};

use log::debug;

use crate::{CustomType, FIRST_CUSTOM_TYPE_ID};

/// Allocates identifiers for attribute types defined outside this crate.
///
/// Every call to [`register`](Self::register) returns a fresh identifier, even when the name
/// has been registered before. Registries are independent: identifiers from one registry mean
/// nothing to another.
///
/// A registry can be shared between threads; each operation holds the internal lock only for
/// the duration of a lookup or push.
///
/// ```
/// use text_attributes::{AttrType, TypeRegistry};
///
/// let registry = TypeRegistry::new();
/// let link = registry.register("link");
/// assert_eq!(registry.name_of(link).as_deref(), Some("link"));
/// assert!(AttrType::from(link).is_custom());
/// ```
#[derive(Debug, Default)]
pub struct TypeRegistry {
    names: Mutex<Vec<Arc<str>>>,
}

impl TypeRegistry {
    /// Creates an empty registry.
    pub const fn new() -> Self {
        Self {
            names: Mutex::new(Vec::new()),
        }
    }

    /// Allocates a new attribute type with the given display name.
    ///
    /// # Panics
    ///
    /// If the identifier space above [`FIRST_CUSTOM_TYPE_ID`] is exhausted.
    pub fn register(&self, name: &str) -> CustomType {
        let mut names = self.names.lock().unwrap_or_else(PoisonError::into_inner);
        let id = u32::try_from(names.len())
            .ok()
            .and_then(|index| FIRST_CUSTOM_TYPE_ID.checked_add(index))
            .and_then(CustomType::from_id)
            .expect("custom attribute type identifiers exhausted");
        names.push(Arc::from(name));
        debug!("registered attribute type `{name}` as {:#x}", id.id());
        id
    }

    /// Returns the name a type was registered with.
    ///
    /// Returns `None` if the type was not allocated by this registry.
    pub fn name_of(&self, ty: CustomType) -> Option<Arc<str>> {
        let index = usize::try_from(ty.id() - FIRST_CUSTOM_TYPE_ID).ok()?;
        let names = self.names.lock().unwrap_or_else(PoisonError::into_inner);
        names.get(index).cloned()
    }

    /// Returns the number of registered types.
    pub fn len(&self) -> usize {
        self.names.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Returns `true` if no types have been registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
