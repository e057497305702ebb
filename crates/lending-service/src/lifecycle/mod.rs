//! # System Lifecycle
//!
//! Starting, wiring and stopping the lending actor.
//!
//! ```rust,ignore
//! setup_tracing();
//! let system = LendingSystem::new(&LendingConfig::from_env()?)?;
//!
//! let holder = system.client.register_holder(MemberCreate::regular("Ana")).await?;
//! // ...
//!
//! system.shutdown().await?;
//! ```
//!
//! Shutdown drops the system's client. Once every clone held elsewhere is gone
//! too, the actor's mailbox closes, its loop ends and `shutdown` returns.

mod system;
mod tracing;

pub use system::LendingSystem;
pub use tracing::setup_tracing;
