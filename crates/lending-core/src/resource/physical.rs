//! Single-copy resources under the exclusive policy.

use super::reservable::{Lease, Reservable};
use crate::ids::HolderId;
use serde::{Deserialize, Serialize};

/// Wear state of a physical copy. Damaged copies are never lent out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Condition {
    #[default]
    New,
    Used,
    Damaged,
}

/// A single copy: either free or held by exactly one holder.
///
/// The copy counts as reserved exactly when a lease is present, so a holder id
/// can never exist without the reserved state or the other way round.
#[derive(Debug, Clone, PartialEq)]
pub struct PhysicalResource {
    location: Option<String>,
    condition: Condition,
    lease: Option<Lease>,
}

impl PhysicalResource {
    pub fn new(location: Option<String>) -> Self {
        Self {
            location,
            condition: Condition::New,
            lease: None,
        }
    }

    pub fn is_reserved(&self) -> bool {
        self.lease.is_some()
    }

    pub fn holder(&self) -> Option<HolderId> {
        self.lease.map(|lease| lease.holder)
    }

    pub fn lease(&self) -> Option<&Lease> {
        self.lease.as_ref()
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn condition(&self) -> Condition {
        self.condition
    }

    /// Changing the condition never cancels a lease already granted.
    pub fn set_condition(&mut self, condition: Condition) {
        self.condition = condition;
    }
}

impl Reservable for PhysicalResource {
    fn is_reservable(&self) -> bool {
        self.lease.is_none() && self.condition != Condition::Damaged
    }

    fn reserve(&mut self, holder: HolderId) {
        if self.is_reservable() {
            self.lease = Some(Lease::now(holder));
        }
    }

    fn release(&mut self) {
        self.lease = None;
    }

    fn describe_reservation(&self) -> String {
        match (&self.lease, self.condition) {
            (Some(lease), _) => format!(
                "Reserved by {} on {}",
                lease.holder,
                lease.reserved_at.format("%Y-%m-%d")
            ),
            (None, Condition::Damaged) => "Damaged".to_string(),
            (None, _) => "Available".to_string(),
        }
    }
}
