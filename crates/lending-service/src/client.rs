//! # Lending Client
//!
//! Provides an async API for interacting with the [`LendingActor`](crate::actor::LendingActor).
//! The client holds only a channel sender, so it is cheap to clone and share
//! across tasks.
use crate::error::ServiceError;
use crate::message::LendingRequest;
use lending_core::resource::Condition;
use lending_core::{
    HolderId, InventorySummary, MemberCreate, Reservation, ReservationId, ResourceCreate,
    ResourceId, ResourceView, UsageSummary,
};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

/// Client for the lending actor.
#[derive(Clone, Debug)]
pub struct LendingClient {
    sender: mpsc::Sender<LendingRequest>,
}

impl LendingClient {
    pub fn new(sender: mpsc::Sender<LendingRequest>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(oneshot::Sender<R>) -> LendingRequest,
    ) -> Result<R, ServiceError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| ServiceError::ActorClosed)?;
        response.await.map_err(|_| ServiceError::ActorDropped)
    }

    #[instrument(skip(self))]
    pub async fn add_resource(&self, params: ResourceCreate) -> Result<ResourceId, ServiceError> {
        debug!("Sending request");
        Ok(self
            .request(|respond_to| LendingRequest::AddResource { params, respond_to })
            .await??)
    }

    #[instrument(skip(self))]
    pub async fn set_condition(
        &self,
        id: ResourceId,
        condition: Condition,
    ) -> Result<(), ServiceError> {
        debug!("Sending request");
        Ok(self
            .request(|respond_to| LendingRequest::SetCondition {
                id,
                condition,
                respond_to,
            })
            .await??)
    }

    #[instrument(skip(self))]
    pub async fn register_holder(&self, params: MemberCreate) -> Result<HolderId, ServiceError> {
        debug!("Sending request");
        Ok(self
            .request(|respond_to| LendingRequest::RegisterHolder { params, respond_to })
            .await??)
    }

    /// Case-insensitive search on title and optional author.
    #[instrument(skip(self))]
    pub async fn search(
        &self,
        title: &str,
        author: Option<&str>,
    ) -> Result<Vec<ResourceView>, ServiceError> {
        debug!("Sending request");
        self.request(|respond_to| LendingRequest::Search {
            title: title.to_string(),
            author: author.map(str::to_string),
            respond_to,
        })
        .await
    }

    /// Reserves one unit of a resource.
    ///
    /// Engine refusals come back as [`ServiceError::Reserve`] with the
    /// original [`ReserveError`](lending_core::ReserveError) inside.
    #[instrument(skip(self))]
    pub async fn reserve(
        &self,
        holder_id: HolderId,
        resource_id: ResourceId,
    ) -> Result<Reservation, ServiceError> {
        debug!("Sending request");
        Ok(self
            .request(|respond_to| LendingRequest::Reserve {
                holder_id,
                resource_id,
                respond_to,
            })
            .await??)
    }

    #[instrument(skip(self))]
    pub async fn close(&self, reservation_id: ReservationId) -> Result<Reservation, ServiceError> {
        debug!("Sending request");
        Ok(self
            .request(|respond_to| LendingRequest::Close {
                reservation_id,
                respond_to,
            })
            .await??)
    }

    #[instrument(skip(self))]
    pub async fn resource(&self, id: ResourceId) -> Result<Option<ResourceView>, ServiceError> {
        debug!("Sending request");
        self.request(|respond_to| LendingRequest::GetResource { id, respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn reservations(&self) -> Result<Vec<Reservation>, ServiceError> {
        debug!("Sending request");
        self.request(|respond_to| LendingRequest::Reservations { respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn usage_summary(&self) -> Result<UsageSummary, ServiceError> {
        self.request(|respond_to| LendingRequest::UsageSummary { respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn inventory_summary(&self) -> Result<InventorySummary, ServiceError> {
        self.request(|respond_to| LendingRequest::InventorySummary { respond_to })
            .await
    }
}
