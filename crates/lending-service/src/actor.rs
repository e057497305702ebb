//! # Lending Actor
//!
//! The server half of the lending system. [`LendingActor`] owns the
//! [`ReservationService`] outright and works through its mailbox one request
//! at a time, so every reservation check and its commit happen with nothing
//! else interleaved. Callers never touch the service directly; they go through
//! a [`LendingClient`].
//!
//! ```rust
//! use lending_core::{LendingConfig, MemberCreate, ResourceCreate};
//! use lending_service::actor::LendingActor;
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = LendingActor::new(&LendingConfig::default()).unwrap();
//!     tokio::spawn(actor.run());
//!
//!     let holder = client.register_holder(MemberCreate::regular("Ana")).await.unwrap();
//!     let book = client
//!         .add_resource(ResourceCreate::physical("Refactoring", "Martin Fowler"))
//!         .await
//!         .unwrap();
//!     assert!(client.reserve(holder, book).await.is_ok());
//!     assert!(client.reserve(holder, book).await.is_err());
//! }
//! ```

use crate::client::LendingClient;
use crate::message::LendingRequest;
use lending_core::{ConfigError, LendingConfig, Member, ReservationService};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

pub struct LendingActor {
    receiver: mpsc::Receiver<LendingRequest>,
    service: ReservationService<Member>,
}

impl LendingActor {
    /// Creates the actor and the client that talks to it.
    ///
    /// The channel holds up to `config.channel_buffer` pending requests; once
    /// full, client calls wait for space.
    pub fn new(config: &LendingConfig) -> Result<(Self, LendingClient), ConfigError> {
        let service = ReservationService::new(config)?;
        let (sender, receiver) = mpsc::channel(config.channel_buffer);
        let actor = Self { receiver, service };
        Ok((actor, LendingClient::new(sender)))
    }

    /// Processes requests until every client has been dropped.
    pub async fn run(mut self) {
        info!(
            cache_capacity = self.service.cache_capacity(),
            "Actor started"
        );

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                LendingRequest::AddResource { params, respond_to } => {
                    debug!(?params, "AddResource");
                    let result = self.service.add_resource(params);
                    match &result {
                        Ok(id) => info!(%id, size = self.service.catalog().len(), "Added"),
                        Err(e) => warn!(error = %e, "AddResource failed"),
                    }
                    let _ = respond_to.send(result);
                }
                LendingRequest::SetCondition {
                    id,
                    condition,
                    respond_to,
                } => {
                    debug!(%id, ?condition, "SetCondition");
                    let result = self.service.set_condition(id, condition);
                    if let Err(e) = &result {
                        warn!(%id, error = %e, "SetCondition failed");
                    }
                    let _ = respond_to.send(result);
                }
                LendingRequest::RegisterHolder { params, respond_to } => {
                    debug!(?params, "RegisterHolder");
                    let result = self.service.register_holder(params);
                    match &result {
                        Ok(id) => info!(%id, size = self.service.holders().len(), "Registered"),
                        Err(e) => warn!(error = %e, "RegisterHolder failed"),
                    }
                    let _ = respond_to.send(result);
                }
                LendingRequest::Search {
                    title,
                    author,
                    respond_to,
                } => {
                    let results = self.service.search(&title, author.as_deref());
                    debug!(%title, ?author, found = results.len(), "Search");
                    let _ = respond_to.send(results);
                }
                LendingRequest::Reserve {
                    holder_id,
                    resource_id,
                    respond_to,
                } => {
                    debug!(%holder_id, %resource_id, "Reserve");
                    let result = self.service.reserve(holder_id, resource_id);
                    match &result {
                        Ok(reservation) => {
                            debug!(%holder_id, %resource_id, reservation_id = %reservation.id, "Reserved")
                        }
                        Err(e) => warn!(%holder_id, %resource_id, error = %e, "Reserve refused"),
                    }
                    let _ = respond_to.send(result);
                }
                LendingRequest::Close {
                    reservation_id,
                    respond_to,
                } => {
                    debug!(%reservation_id, "Close");
                    let result = self.service.close(reservation_id);
                    match &result {
                        Ok(_) => debug!(%reservation_id, "Closed"),
                        Err(e) => warn!(%reservation_id, error = %e, "Close failed"),
                    }
                    let _ = respond_to.send(result);
                }
                LendingRequest::GetResource { id, respond_to } => {
                    let view = self.service.resource(id);
                    debug!(%id, found = view.is_some(), "GetResource");
                    let _ = respond_to.send(view);
                }
                LendingRequest::Reservations { respond_to } => {
                    let _ = respond_to.send(self.service.reservations());
                }
                LendingRequest::UsageSummary { respond_to } => {
                    let _ = respond_to.send(self.service.usage_summary());
                }
                LendingRequest::InventorySummary { respond_to } => {
                    let _ = respond_to.send(self.service.inventory_summary());
                }
            }
        }

        info!(
            resources = self.service.catalog().len(),
            reservations = self.service.reservations().len(),
            "Shutdown"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ServiceError;
    use lending_core::resource::Condition;
    use lending_core::{CatalogError, CloseError, MemberCreate, ReserveError, ResourceCreate};

    fn spawn_actor() -> LendingClient {
        let (actor, client) = LendingActor::new(&LendingConfig::default()).unwrap();
        tokio::spawn(actor.run());
        client
    }

    #[tokio::test]
    async fn test_new_rejects_invalid_config() {
        let config = LendingConfig {
            channel_buffer: 0,
            ..LendingConfig::default()
        };
        assert!(LendingActor::new(&config).is_err());
    }

    #[tokio::test]
    async fn test_reserve_then_close_frees_the_copy() {
        let client = spawn_actor();
        let joao = client
            .register_holder(MemberCreate::regular("João Silva"))
            .await
            .unwrap();
        let maria = client
            .register_holder(MemberCreate::regular("Maria Santos"))
            .await
            .unwrap();
        let book = client
            .add_resource(ResourceCreate::physical("Design Patterns", "Gang of Four"))
            .await
            .unwrap();

        let first = client.reserve(joao, book).await.unwrap();
        assert_eq!(
            client.reserve(maria, book).await,
            Err(ServiceError::Reserve(ReserveError::ResourceUnavailable(
                book
            )))
        );

        client.close(first.id).await.unwrap();
        assert!(client.reserve(maria, book).await.is_ok());
        assert_eq!(
            client.close(first.id).await,
            Err(ServiceError::Close(CloseError::AlreadyClosed(first.id)))
        );
    }

    #[tokio::test]
    async fn test_damaged_copy_cannot_be_reserved() {
        let client = spawn_actor();
        let holder = client
            .register_holder(MemberCreate::regular("Ana"))
            .await
            .unwrap();
        let book = client
            .add_resource(ResourceCreate::physical("Refactoring", "Martin Fowler"))
            .await
            .unwrap();

        client
            .set_condition(book, Condition::Damaged)
            .await
            .unwrap();

        assert_eq!(
            client.reserve(holder, book).await,
            Err(ServiceError::Reserve(ReserveError::ResourceUnavailable(
                book
            )))
        );
        let view = client.resource(book).await.unwrap().unwrap();
        assert!(!view.available);
    }

    #[tokio::test]
    async fn test_catalog_errors_pass_through() {
        let client = spawn_actor();

        let result = client
            .add_resource(
                ResourceCreate::physical("Clean Code", "Robert Martin").with_isbn("not-an-isbn"),
            )
            .await;

        assert_eq!(
            result,
            Err(ServiceError::Catalog(CatalogError::InvalidIsbn(
                "not-an-isbn".to_string()
            )))
        );
        assert_eq!(client.inventory_summary().await.unwrap().total, 0);
    }

    #[tokio::test]
    async fn test_actor_stops_when_clients_drop() {
        let (actor, client) = LendingActor::new(&LendingConfig::default()).unwrap();
        let handle = tokio::spawn(actor.run());

        client.usage_summary().await.unwrap();
        drop(client);

        assert!(handle.await.is_ok());
    }
}
