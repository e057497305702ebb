//! # Reservations
//!
//! Reservation records and the append-only ledger that stores them. Records
//! are never removed; closing one only flips its status.

use crate::error::IdExhausted;
use crate::ids::{HolderId, IdAllocator, ReservationId, ResourceId};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReservationStatus {
    Active,
    Closed,
}

/// A granted reservation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: ReservationId,
    pub holder_id: HolderId,
    pub resource_id: ResourceId,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub status: ReservationStatus,
}

impl Reservation {
    pub fn is_active(&self) -> bool {
        self.status == ReservationStatus::Active
    }

    /// Whether the loan window has passed at `now`. Expiry does not close the
    /// reservation by itself.
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        self.is_active() && now > self.expires_at
    }
}

/// Counts over the whole ledger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageSummary {
    pub total: usize,
    pub active: usize,
    pub closed: usize,
}

/// Append-only store of reservation records.
#[derive(Debug, Default)]
pub struct ReservationLedger {
    records: Vec<Reservation>,
    ids: IdAllocator<ReservationId>,
}

impl ReservationLedger {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub(crate) fn starting_at(next_id: u32) -> Self {
        Self {
            records: Vec::new(),
            ids: IdAllocator::starting_at(next_id),
        }
    }

    /// Appends an Active record starting now and lasting `loan_period`.
    ///
    /// An expiry beyond the representable range is pinned to the latest
    /// representable instant. Nothing is appended when no id is left.
    pub(crate) fn open(
        &mut self,
        holder_id: HolderId,
        resource_id: ResourceId,
        loan_period: Duration,
    ) -> Result<&Reservation, IdExhausted> {
        let id = self.ids.allocate()?;
        let created_at = Utc::now();
        let expires_at = created_at
            .checked_add_signed(loan_period)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        let index = self.records.len();
        self.records.push(Reservation {
            id,
            holder_id,
            resource_id,
            created_at,
            expires_at,
            status: ReservationStatus::Active,
        });
        Ok(&self.records[index])
    }

    pub fn find(&self, id: ReservationId) -> Option<&Reservation> {
        self.records.iter().find(|record| record.id == id)
    }

    pub(crate) fn find_mut(&mut self, id: ReservationId) -> Option<&mut Reservation> {
        self.records.iter_mut().find(|record| record.id == id)
    }

    pub fn all(&self) -> Vec<Reservation> {
        self.records.clone()
    }

    pub fn usage(&self) -> UsageSummary {
        let active = self.records.iter().filter(|r| r.is_active()).count();
        UsageSummary {
            total: self.records.len(),
            active,
            closed: self.records.len() - active,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
