//! # Messages
//!
//! The request enum sent from [`LendingClient`](crate::client::LendingClient)
//! to [`LendingActor`](crate::actor::LendingActor). Each variant carries a
//! oneshot sender for its answer; engine refusals travel inside the answer, so
//! the channel itself only fails when the actor is gone.

use lending_core::resource::Condition;
use lending_core::{
    CatalogError, CloseError, HolderId, IdExhausted, InventorySummary, MemberCreate, Reservation,
    ReservationId, ReserveError, ResourceCreate, ResourceId, ResourceView, UsageSummary,
};
use tokio::sync::oneshot;

/// One-shot reply channel used by every request.
pub type Response<T> = oneshot::Sender<T>;

#[derive(Debug)]
pub enum LendingRequest {
    AddResource {
        params: ResourceCreate,
        respond_to: Response<Result<ResourceId, CatalogError>>,
    },
    SetCondition {
        id: ResourceId,
        condition: Condition,
        respond_to: Response<Result<(), CatalogError>>,
    },
    RegisterHolder {
        params: MemberCreate,
        respond_to: Response<Result<HolderId, IdExhausted>>,
    },
    Search {
        title: String,
        author: Option<String>,
        respond_to: Response<Vec<ResourceView>>,
    },
    Reserve {
        holder_id: HolderId,
        resource_id: ResourceId,
        respond_to: Response<Result<Reservation, ReserveError>>,
    },
    Close {
        reservation_id: ReservationId,
        respond_to: Response<Result<Reservation, CloseError>>,
    },
    GetResource {
        id: ResourceId,
        respond_to: Response<Option<ResourceView>>,
    },
    Reservations {
        respond_to: Response<Vec<Reservation>>,
    },
    UsageSummary {
        respond_to: Response<UsageSummary>,
    },
    InventorySummary {
        respond_to: Response<InventorySummary>,
    },
}
