//! Multi-license resources under the pooled policy.

use super::reservable::{Lease, Reservable};
use crate::ids::HolderId;
use std::num::NonZeroU32;

/// A license pool: up to `capacity` concurrent holders, tracked by count.
///
/// Only the most recent lease is remembered. Earlier holders of the still
/// active licenses are not recorded, and `release` frees one license without
/// asking whose it was.
#[derive(Debug, Clone, PartialEq)]
pub struct PooledResource {
    capacity: NonZeroU32,
    in_use: u32,
    // Mirrors `in_use < capacity`; recomputed on every transition.
    available: bool,
    last_lease: Option<Lease>,
}

impl PooledResource {
    pub fn new(capacity: NonZeroU32) -> Self {
        Self {
            capacity,
            in_use: 0,
            available: true,
            last_lease: None,
        }
    }

    pub fn capacity(&self) -> u32 {
        self.capacity.get()
    }

    pub fn in_use(&self) -> u32 {
        self.in_use
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn last_holder(&self) -> Option<HolderId> {
        self.last_lease.map(|lease| lease.holder)
    }

    fn has_free_license(&self) -> bool {
        self.in_use < self.capacity.get()
    }

    fn recompute_availability(&mut self) {
        self.available = self.has_free_license();
    }
}

impl Reservable for PooledResource {
    fn is_reservable(&self) -> bool {
        debug_assert_eq!(self.available, self.has_free_license());
        self.has_free_license()
    }

    fn reserve(&mut self, holder: HolderId) {
        if !self.has_free_license() {
            return;
        }
        self.in_use += 1;
        self.last_lease = Some(Lease::now(holder));
        self.recompute_availability();
    }

    fn release(&mut self) {
        if self.in_use > 0 {
            self.in_use -= 1;
            self.recompute_availability();
        }
    }

    fn describe_reservation(&self) -> String {
        match &self.last_lease {
            Some(lease) if self.in_use > 0 => format!(
                "{}/{} licenses in use, last reserved by {} on {}",
                self.in_use,
                self.capacity,
                lease.holder,
                lease.reserved_at.format("%Y-%m-%d")
            ),
            _ => format!("Available ({} licenses)", self.capacity),
        }
    }
}
