//! # Engine Errors
//!
//! One error enum per concern. Reservation failures are a discriminated result
//! rather than a generic failure, so each branch can be matched by the caller.

use crate::ids::{HolderId, ReservationId, ResourceId};
use thiserror::Error;

/// Raised when a [`BoundedCache`](crate::cache::BoundedCache) is built with no room.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum CacheConfigError {
    #[error("Cache capacity must be greater than zero")]
    ZeroCapacity,
}

/// An [`IdAllocator`](crate::ids::IdAllocator) has handed out its last id.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("Identifier space exhausted")]
pub struct IdExhausted;

/// Why a reservation attempt was refused.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ReserveError {
    /// No holder is registered under the given id.
    #[error("Holder not found: {0}")]
    HolderNotFound(HolderId),

    /// No resource is catalogued under the given id.
    #[error("Resource not found: {0}")]
    ResourceNotFound(ResourceId),

    /// The holder exists but its eligibility policy refuses another reservation.
    #[error("Holder not eligible to reserve: {0}")]
    HolderIneligible(HolderId),

    /// The resource exists but has no free copy or license.
    #[error("Resource unavailable: {0}")]
    ResourceUnavailable(ResourceId),

    /// No reservation id is left to record the reservation under.
    #[error(transparent)]
    Ids(#[from] IdExhausted),
}

/// Why a reservation could not be closed.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum CloseError {
    #[error("Reservation not found: {0}")]
    ReservationNotFound(ReservationId),

    #[error("Reservation already closed: {0}")]
    AlreadyClosed(ReservationId),
}

/// Errors raised while populating or editing the catalog.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// The ISBN does not follow the `ddd-dd-dddd-ddd-d` layout.
    #[error("Invalid ISBN: {0}")]
    InvalidIsbn(String),

    /// A pooled resource needs at least one license.
    #[error("Pooled resource needs at least one license: {0}")]
    NoLicenses(String),

    #[error("Resource not found: {0}")]
    NotFound(ResourceId),

    /// The operation only applies to physical copies.
    #[error("Resource is not a physical copy: {0}")]
    NotPhysical(ResourceId),

    #[error(transparent)]
    Ids(#[from] IdExhausted),
}

/// Invalid engine configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid configuration: {field} {reason}")]
    Invalid { field: &'static str, reason: String },

    #[error("Invalid value for {var}: {value:?}")]
    Env { var: &'static str, value: String },

    #[error(transparent)]
    Cache(#[from] CacheConfigError),
}
