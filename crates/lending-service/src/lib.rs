//! # Lending Service
//!
//! Runs the [`lending_core`] reservation engine inside a single Tokio actor
//! and exposes it through a cloneable async client.
//!
//! ## Components
//!
//! - **[actor]**: [`LendingActor`] owns the
//!   [`ReservationService`](lending_core::ReservationService) and handles one
//!   request at a time.
//! - **[client]**: [`LendingClient`] turns method calls into messages and
//!   awaits the answer.
//! - **[message]**: the request enum travelling between the two.
//! - **[lifecycle]**: [`LendingSystem`] to start and stop the actor, and
//!   [`setup_tracing`] for logging.
//! - **[mock]**: helpers for testing client code without a running actor.
//!
//! ## Concurrency
//!
//! Any number of tasks may hold a client clone and call `reserve` at the same
//! time. Requests queue in the actor's mailbox and run in arrival order, so
//! for a pooled resource with `N` licenses exactly `N` concurrent reservations
//! succeed and the rest see
//! [`ReserveError::ResourceUnavailable`](lending_core::ReserveError::ResourceUnavailable).

pub mod actor;
pub mod client;
pub mod error;
pub mod lifecycle;
pub mod message;
pub mod mock;

pub use actor::LendingActor;
pub use client::LendingClient;
pub use error::ServiceError;
pub use lifecycle::{setup_tracing, LendingSystem};
pub use message::LendingRequest;
