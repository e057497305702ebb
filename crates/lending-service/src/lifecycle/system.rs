use crate::actor::LendingActor;
use crate::client::LendingClient;
use crate::error::ServiceError;
use lending_core::LendingConfig;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// A running lending actor and the client used to reach it.
pub struct LendingSystem {
    /// Client for the lending actor. Clone it freely; shutdown waits for
    /// every clone to be dropped.
    pub client: LendingClient,

    handle: JoinHandle<()>,
}

impl LendingSystem {
    /// Validates `config` and spawns the actor on the current runtime.
    pub fn new(config: &LendingConfig) -> Result<Self, ServiceError> {
        let (actor, client) = LendingActor::new(config)?;
        let handle = tokio::spawn(actor.run());
        info!(
            cache_capacity = config.cache_capacity,
            loan_period_days = config.loan_period_days,
            "Lending system started"
        );
        Ok(Self { client, handle })
    }

    /// Closes the channel and waits for the actor to finish.
    ///
    /// Returns [`ServiceError::TaskFailed`] if the actor task panicked.
    pub async fn shutdown(self) -> Result<(), ServiceError> {
        info!("Shutting down system...");
        drop(self.client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(ServiceError::TaskFailed(e.to_string()));
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
