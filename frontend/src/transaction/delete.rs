//! The confirm-then-delete flow behind the page's delete buttons.

use gloo_dialogs::{alert, confirm};
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen_futures::spawn_local;
use web_sys::Document;

use common::TransactionId;

use crate::{api, dom};

/// The prompt shown before any delete request is issued.
const CONFIRM_MESSAGE: &str = "Are you sure you want to delete this transaction?";
/// The alert shown when a delete could not be applied.
const DELETE_ERROR_MESSAGE: &str = "Error deleting transaction";
/// The path of the summary view. Its aggregated balance goes stale on any
/// mutation, so deletions there reload the whole page instead of patching
/// the list.
const SUMMARY_VIEW_PATH: &str = "/";

/// Ask the user for confirmation and delete the given transaction.
///
/// Exported as `deleteTransaction` for the inline `onclick` handlers the
/// page markup attaches to its delete buttons. Cancelling the confirmation
/// ends the flow with no request and no DOM change. A confirmed delete
/// issues exactly one request; only a `success: true` response mutates the
/// page.
#[wasm_bindgen(js_name = deleteTransaction)]
pub fn delete_transaction(id: String) {
    if !confirm(CONFIRM_MESSAGE) {
        return;
    }

    let id = TransactionId::from(id);
    spawn_local(async move {
        match api::delete_transaction(&id).await {
            Ok(()) => remove_from_view(&id),
            Err(error) => {
                log::error!("could not delete transaction {id}: {error}");
                alert(DELETE_ERROR_MESSAGE);
            }
        }
    });
}

/// Apply a confirmed deletion to the current view: reload the summary view
/// so its balance is recomputed, or remove the transaction's list item
/// everywhere else.
fn remove_from_view(id: &TransactionId) {
    let pathname = gloo_utils::window()
        .location()
        .pathname()
        .unwrap_or_else(|error| {
            log::error!("could not read the current path: {error:?}");
            String::new()
        });

    if is_summary_view(&pathname) {
        dom::reload_page();
        return;
    }

    remove_transaction_list_item(&gloo_utils::document(), id);
}

/// Remove the list item displaying the given transaction, if the page has
/// one.
pub fn remove_transaction_list_item(document: &Document, id: &TransactionId) {
    let selector = format!(".transaction-item[data-id=\"{id}\"]");

    match document.query_selector(&selector) {
        Ok(Some(item)) => item.remove(),
        Ok(None) => {
            log::warn!("transaction {id} was deleted but had no list item to remove");
        }
        Err(error) => {
            log::error!("could not look up the deleted transaction's list item: {error:?}");
        }
    }
}

/// Whether `pathname` is the summary/dashboard view.
fn is_summary_view(pathname: &str) -> bool {
    pathname == SUMMARY_VIEW_PATH
}
