//! The transactions API endpoint URIs.
//!
//! The single-transaction route takes a parameter; use
//! [transaction_endpoint] to fill it in.

use common::TransactionId;

/// The route to read, update, or delete a single transaction.
pub const TRANSACTION: &str = "/api/transactions/{transaction_id}";

/// Substitute `id` into the `{transaction_id}` parameter of [TRANSACTION].
pub fn transaction_endpoint(id: &TransactionId) -> String {
    format_endpoint(TRANSACTION, id)
}

/// Replace the first `{...}` parameter in `endpoint_path` with `id`.
///
/// A path without a parameter is returned unchanged.
fn format_endpoint(endpoint_path: &str, id: &TransactionId) -> String {
    match (endpoint_path.find('{'), endpoint_path.find('}')) {
        (Some(start), Some(end)) if start < end => {
            format!("{}{}{}", &endpoint_path[..start], id, &endpoint_path[end + 1..])
        }
        _ => endpoint_path.to_owned(),
    }
}
