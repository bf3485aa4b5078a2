//! The asynchronous client for the transactions REST API.
//!
//! Each function performs exactly one request and returns a single
//! exhaustive outcome: the decoded payload, or an [ApiError] naming which
//! stage of the round trip failed. Callers surface every failure class the
//! same way (a console log and a blocking alert); the split exists for
//! diagnostics and tests.

use gloo_net::http::Request;

use common::{MutationResponse, Transaction, TransactionId};

use crate::endpoints;

/// The ways a round trip to the transactions API can fail.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The request never completed, e.g. the network is down or the
    /// request could not be built.
    #[error("the request could not be completed: {0}")]
    Transport(String),

    /// The request completed but the server answered with a non-success
    /// HTTP status.
    #[error("the server responded with HTTP status {0}")]
    Status(u16),

    /// The response body was not the JSON this client expected.
    #[error("the response body could not be decoded: {0}")]
    Decode(String),

    /// The request completed but the server reported `success: false`.
    #[error("the server rejected the operation")]
    Rejected,
}

/// Fetch the transaction with the given identifier.
pub async fn fetch_transaction(id: &TransactionId) -> Result<Transaction, ApiError> {
    let response = Request::get(&endpoints::transaction_endpoint(id))
        .send()
        .await
        .map_err(into_transport_error)?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    response.json().await.map_err(into_decode_error)
}

/// Update the transaction identified by `transaction.id` with the given
/// field values.
pub async fn update_transaction(transaction: &Transaction) -> Result<(), ApiError> {
    let request = Request::put(&endpoints::transaction_endpoint(&transaction.id))
        .json(transaction)
        .map_err(into_transport_error)?;

    let response = request.send().await.map_err(into_transport_error)?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    let acknowledgement = response.json().await.map_err(into_decode_error)?;
    into_result(acknowledgement)
}

/// Delete the transaction with the given identifier.
pub async fn delete_transaction(id: &TransactionId) -> Result<(), ApiError> {
    let response = Request::delete(&endpoints::transaction_endpoint(id))
        .send()
        .await
        .map_err(into_transport_error)?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    let acknowledgement = response.json().await.map_err(into_decode_error)?;
    into_result(acknowledgement)
}

/// Collapse the server's two-armed success flag into the error channel, so
/// callers have one failure path for transport errors and rejections alike.
fn into_result(acknowledgement: MutationResponse) -> Result<(), ApiError> {
    if acknowledgement.success {
        Ok(())
    } else {
        Err(ApiError::Rejected)
    }
}

fn into_transport_error(error: gloo_net::Error) -> ApiError {
    ApiError::Transport(error.to_string())
}

fn into_decode_error(error: gloo_net::Error) -> ApiError {
    ApiError::Decode(error.to_string())
}
