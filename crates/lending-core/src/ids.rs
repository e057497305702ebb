//! # Identifiers
//!
//! Type-safe identifiers for every entity the engine hands out, plus the
//! [`IdAllocator`] that mints them. Each owner (catalog, holder registry,
//! reservation ledger) carries its own allocator, so two catalogs never share
//! a counter.

use crate::error::IdExhausted;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::marker::PhantomData;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(pub u32);

        impl From<u32> for $name {
            fn from(id: u32) -> Self {
                Self(id)
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!($prefix, "_{}"), self.0)
            }
        }
    };
}

entity_id!(
    /// Type-safe identifier for catalog resources.
    ResourceId,
    "resource"
);
entity_id!(
    /// Type-safe identifier for holders.
    HolderId,
    "holder"
);
entity_id!(
    /// Type-safe identifier for reservation records.
    ReservationId,
    "reservation"
);

/// Monotonic id source. The first id handed out is `1`.
#[derive(Debug)]
pub struct IdAllocator<I> {
    next: u32,
    _marker: PhantomData<fn() -> I>,
}

impl<I: From<u32>> IdAllocator<I> {
    pub fn new() -> Self {
        Self {
            next: 1,
            _marker: PhantomData,
        }
    }

    #[cfg(test)]
    pub(crate) fn starting_at(next: u32) -> Self {
        Self {
            next,
            _marker: PhantomData,
        }
    }

    /// Hands out the next id and advances the counter.
    ///
    /// # Errors
    /// [`IdExhausted`] once the counter cannot advance past `u32::MAX`. The
    /// allocator stays exhausted afterwards.
    pub fn allocate(&mut self) -> Result<I, IdExhausted> {
        let id = self.next;
        self.next = id.checked_add(1).ok_or(IdExhausted)?;
        Ok(I::from(id))
    }
}

impl<I: From<u32>> Default for IdAllocator<I> {
    fn default() -> Self {
        Self::new()
    }
}
