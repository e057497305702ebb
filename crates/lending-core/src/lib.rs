//! # Lending Core
//!
//! An in-process reservation engine for lendable resources: decide whether
//! something can be reserved, track availability under two allocation
//! policies, and serve repeated searches from a bounded cache.
//!
//! ## Architecture Overview
//!
//! Leaves first:
//!
//! 1. **[`cache`]** - [`BoundedCache`](cache::BoundedCache), fixed capacity, FIFO eviction
//! 2. **[`resource`]** - the [`Reservable`](resource::Reservable) capability and its two
//!    policies: [`PhysicalResource`](resource::PhysicalResource) (one copy, exclusive) and
//!    [`PooledResource`](resource::PooledResource) (N concurrent licenses)
//! 3. **[`catalog`]** - [`ResourceCatalog`](catalog::ResourceCatalog), owns resources and runs predicates
//! 4. **[`holder`]** - the [`Holder`](holder::Holder) contract and the bundled [`Member`](holder::Member)
//! 5. **[`reservation`]** - reservation records and their ledger
//! 6. **[`service`]** - [`ReservationService`](service::ReservationService), the orchestrator
//!
//! ## Example
//!
//! ```rust
//! use lending_core::config::LendingConfig;
//! use lending_core::error::ReserveError;
//! use lending_core::holder::MemberCreate;
//! use lending_core::resource::ResourceCreate;
//! use lending_core::service::ReservationService;
//!
//! let mut service: ReservationService = ReservationService::new(&LendingConfig::default()).unwrap();
//! let alice = service.register_holder(MemberCreate::regular("Alice")).unwrap();
//! let bob = service.register_holder(MemberCreate::regular("Bob")).unwrap();
//! let book = service
//!     .add_resource(ResourceCreate::physical("Design Patterns", "Gang of Four"))
//!     .unwrap();
//!
//! assert_eq!(service.search("design", None).len(), 1);
//! assert!(service.reserve(alice, book).is_ok());
//! assert_eq!(
//!     service.reserve(bob, book),
//!     Err(ReserveError::ResourceUnavailable(book))
//! );
//! ```
//!
//! ## Concurrency
//!
//! Nothing here locks. Every mutating call takes `&mut self`, so sharing a
//! service means wrapping it in one exclusive owner. The `lending-service`
//! crate does this with a single actor task.

pub mod cache;
pub mod catalog;
pub mod config;
pub mod error;
pub mod holder;
pub mod ids;
pub mod reservation;
pub mod resource;
pub mod service;

pub use cache::BoundedCache;
pub use catalog::ResourceCatalog;
pub use config::LendingConfig;
pub use error::{
    CacheConfigError, CatalogError, CloseError, ConfigError, IdExhausted, ReserveError,
};
pub use holder::{Holder, HolderKind, HolderRegistry, Member, MemberCreate};
pub use ids::{HolderId, ReservationId, ResourceId};
pub use reservation::{Reservation, ReservationStatus, UsageSummary};
pub use resource::{MediaKind, Reservable, Resource, ResourceCreate, ResourceView};
pub use service::{InventorySummary, ReservationService};
