//! # Holders
//!
//! The engine consumes holders through the narrow [`Holder`] trait: an id, an
//! eligibility predicate and an active-reservation counter. Account details,
//! passwords and notifications belong to whoever implements it.
//!
//! [`Member`] is the implementation shipped with the crate, with two kinds:
//! - **Regular** members may hold up to a fixed number of active reservations
//!   and must be active.
//! - **Administrators** may always reserve, and their reservations are not
//!   counted.

use crate::error::IdExhausted;
use crate::ids::{HolderId, IdAllocator};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use tracing::info;

/// Active-reservation cap applied to regular members unless overridden.
pub const DEFAULT_RESERVATION_LIMIT: u32 = 3;

/// Contract the reservation engine needs from a holder.
pub trait Holder: Clone + Debug {
    /// The data required to register a new holder.
    type Create: Debug;

    /// Builds the holder from its freshly allocated id and payload.
    fn from_create_params(id: HolderId, params: Self::Create) -> Self;

    fn id(&self) -> HolderId;

    /// Whether this holder may take another reservation right now.
    fn can_reserve(&self) -> bool;

    fn active_reservations(&self) -> u32;

    /// Called once per successful reservation.
    fn record_reservation(&mut self);

    /// Called once per closed reservation. Never drops below zero.
    fn record_release(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HolderKind {
    Regular,
    Administrator,
}

/// A library member.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub id: HolderId,
    pub name: String,
    pub email: Option<String>,
    pub kind: HolderKind,
    active: bool,
    active_reservations: u32,
    reservation_limit: u32,
}

impl Member {
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn reservation_limit(&self) -> u32 {
        self.reservation_limit
    }

    pub fn activate(&mut self) {
        self.active = true;
    }

    /// Inactive regular members cannot reserve. Administrators are unaffected.
    pub fn deactivate(&mut self) {
        self.active = false;
    }
}

/// Payload for registering a [`Member`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberCreate {
    pub name: String,
    pub email: Option<String>,
    pub kind: HolderKind,
    pub reservation_limit: u32,
}

impl MemberCreate {
    pub fn regular(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: None,
            kind: HolderKind::Regular,
            reservation_limit: DEFAULT_RESERVATION_LIMIT,
        }
    }

    pub fn administrator(name: impl Into<String>) -> Self {
        Self {
            kind: HolderKind::Administrator,
            ..Self::regular(name)
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.reservation_limit = limit;
        self
    }
}

impl Holder for Member {
    type Create = MemberCreate;

    fn from_create_params(id: HolderId, params: MemberCreate) -> Self {
        Self {
            id,
            name: params.name,
            email: params.email,
            kind: params.kind,
            active: true,
            active_reservations: 0,
            reservation_limit: params.reservation_limit,
        }
    }

    fn id(&self) -> HolderId {
        self.id
    }

    fn can_reserve(&self) -> bool {
        match self.kind {
            HolderKind::Administrator => true,
            HolderKind::Regular => {
                self.active && self.active_reservations < self.reservation_limit
            }
        }
    }

    fn active_reservations(&self) -> u32 {
        self.active_reservations
    }

    /// Only regular members are counted; administrators have no cap to track.
    fn record_reservation(&mut self) {
        if self.kind == HolderKind::Regular {
            self.active_reservations += 1;
        }
    }

    fn record_release(&mut self) {
        self.active_reservations = self.active_reservations.saturating_sub(1);
    }
}

/// Owns the registered holders and their id allocator.
#[derive(Debug)]
pub struct HolderRegistry<H: Holder = Member> {
    holders: Vec<H>,
    ids: IdAllocator<HolderId>,
}

impl<H: Holder> Default for HolderRegistry<H> {
    fn default() -> Self {
        Self {
            holders: Vec::new(),
            ids: IdAllocator::new(),
        }
    }
}

impl<H: Holder> HolderRegistry<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, params: H::Create) -> Result<HolderId, IdExhausted> {
        let id = self.ids.allocate()?;
        self.holders.push(H::from_create_params(id, params));
        info!(%id, size = self.holders.len(), "Holder registered");
        Ok(id)
    }

    pub fn find(&self, id: HolderId) -> Option<&H> {
        self.holders.iter().find(|holder| holder.id() == id)
    }

    pub fn find_mut(&mut self, id: HolderId) -> Option<&mut H> {
        self.holders.iter_mut().find(|holder| holder.id() == id)
    }

    pub fn all(&self) -> Vec<H> {
        self.holders.clone()
    }

    pub fn len(&self) -> usize {
        self.holders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holders.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_member_is_capped() {
        let mut member = Member::from_create_params(HolderId(1), MemberCreate::regular("Joao"));

        for _ in 0..DEFAULT_RESERVATION_LIMIT {
            assert!(member.can_reserve());
            member.record_reservation();
        }

        assert!(!member.can_reserve());
        member.record_release();
        assert!(member.can_reserve());
    }

    #[test]
    fn test_inactive_regular_member_cannot_reserve() {
        let mut member = Member::from_create_params(HolderId(1), MemberCreate::regular("Maria"));
        member.deactivate();
        assert!(!member.can_reserve());
        member.activate();
        assert!(member.can_reserve());
    }

    #[test]
    fn test_administrator_is_never_capped() {
        let mut admin = Member::from_create_params(
            HolderId(1),
            MemberCreate::administrator("Ana").with_limit(1),
        );
        admin.deactivate();
        for _ in 0..10 {
            admin.record_reservation();
        }
        assert!(admin.can_reserve());
        assert_eq!(admin.active_reservations(), 0);

        admin.record_release();
        assert_eq!(admin.active_reservations(), 0);
    }

    #[test]
    fn test_release_never_goes_negative() {
        let mut member = Member::from_create_params(HolderId(1), MemberCreate::regular("Joao"));
        member.record_release();
        assert_eq!(member.active_reservations(), 0);
    }

    #[test]
    fn test_registry_assigns_ids_and_finds_members() {
        let mut registry = HolderRegistry::<Member>::new();
        let joao = registry
            .register(MemberCreate::regular("Joao").with_email("joao@email.com"))
            .unwrap();
        let ana = registry
            .register(MemberCreate::administrator("Ana"))
            .unwrap();

        assert_eq!(joao, HolderId(1));
        assert_eq!(ana, HolderId(2));
        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.find(joao).unwrap().email.as_deref(),
            Some("joao@email.com")
        );
        assert_eq!(registry.find(ana).unwrap().kind, HolderKind::Administrator);
        assert!(registry.find(HolderId(3)).is_none());

        registry.find_mut(joao).unwrap().deactivate();
        assert!(!registry.all()[0].is_active());
    }
}
