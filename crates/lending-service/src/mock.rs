//! # Mock Helpers
//!
//! Lets a test play the actor side of the channel. Create a client whose
//! requests land on a receiver you own, then pull each request off, assert on
//! it and answer through its responder:
//!
//! ```rust
//! use lending_service::mock::{create_mock_client, expect_search};
//!
//! #[tokio::main]
//! async fn main() {
//!     let (client, mut receiver) = create_mock_client(4);
//!     let task = tokio::spawn(async move { client.search("clean", None).await });
//!
//!     let (title, author, responder) = expect_search(&mut receiver).await.unwrap();
//!     assert_eq!(title, "clean");
//!     assert!(author.is_none());
//!     responder.send(Vec::new()).unwrap();
//!
//!     assert!(task.await.unwrap().unwrap().is_empty());
//! }
//! ```
//!
//! Failure paths that are awkward to reach with a real actor (a dropped
//! responder, a closed channel) are one line each here.

use crate::client::LendingClient;
use crate::message::{LendingRequest, Response};
use lending_core::{
    CloseError, HolderId, Reservation, ReservationId, ReserveError, ResourceId, ResourceView,
};
use tokio::sync::mpsc;

/// Creates a client and the receiver its requests arrive on.
pub fn create_mock_client(buffer_size: usize) -> (LendingClient, mpsc::Receiver<LendingRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (LendingClient::new(sender), receiver)
}

/// Next message, if it is a Search request.
pub async fn expect_search(
    receiver: &mut mpsc::Receiver<LendingRequest>,
) -> Option<(String, Option<String>, Response<Vec<ResourceView>>)> {
    match receiver.recv().await {
        Some(LendingRequest::Search {
            title,
            author,
            respond_to,
        }) => Some((title, author, respond_to)),
        _ => None,
    }
}

/// Next message, if it is a Reserve request.
pub async fn expect_reserve(
    receiver: &mut mpsc::Receiver<LendingRequest>,
) -> Option<(
    HolderId,
    ResourceId,
    Response<Result<Reservation, ReserveError>>,
)> {
    match receiver.recv().await {
        Some(LendingRequest::Reserve {
            holder_id,
            resource_id,
            respond_to,
        }) => Some((holder_id, resource_id, respond_to)),
        _ => None,
    }
}

/// Next message, if it is a Close request.
pub async fn expect_close(
    receiver: &mut mpsc::Receiver<LendingRequest>,
) -> Option<(ReservationId, Response<Result<Reservation, CloseError>>)> {
    match receiver.recv().await {
        Some(LendingRequest::Close {
            reservation_id,
            respond_to,
        }) => Some((reservation_id, respond_to)),
        _ => None,
    }
}
