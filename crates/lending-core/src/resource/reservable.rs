//! The [`Reservable`] capability shared by every allocation policy.

use crate::ids::HolderId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Anything that can be reserved and released.
///
/// # Silent no-ops
/// `reserve` on a resource that is not reservable leaves it untouched, and so
/// does `release` on a resource nobody holds. Neither signals failure at this
/// layer. Callers that need a reason use
/// [`ReservationService::reserve`](crate::service::ReservationService::reserve).
pub trait Reservable {
    /// Whether the policy-specific availability predicate currently holds.
    fn is_reservable(&self) -> bool;

    /// Takes one unit of the resource for `holder`.
    fn reserve(&mut self, holder: HolderId);

    /// Gives back one unit, whoever holds it.
    fn release(&mut self);

    /// Human-readable reservation status.
    fn describe_reservation(&self) -> String;
}

/// Who took a unit and when.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lease {
    pub holder: HolderId,
    pub reserved_at: DateTime<Utc>,
}

impl Lease {
    pub(crate) fn now(holder: HolderId) -> Self {
        Self {
            holder,
            reserved_at: Utc::now(),
        }
    }
}
