//! # Service Errors
//!
//! Errors surfaced by [`LendingClient`](crate::client::LendingClient): channel
//! failures between client and actor, plus the engine's own refusals passed
//! through unchanged so callers can still match on each reason.

use lending_core::{CatalogError, CloseError, ConfigError, IdExhausted, ReserveError};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ServiceError {
    /// The actor is gone; the request could not be delivered.
    #[error("Actor closed")]
    ActorClosed,

    /// The actor dropped the response channel without answering.
    #[error("Actor dropped response channel")]
    ActorDropped,

    /// The actor task panicked or was aborted.
    #[error("Actor task failed: {0}")]
    TaskFailed(String),

    #[error(transparent)]
    Reserve(#[from] ReserveError),

    #[error(transparent)]
    Close(#[from] CloseError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Ids(#[from] IdExhausted),
}
