//! The fetch-for-edit flow behind the page's edit buttons.

use gloo_dialogs::alert;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen_futures::spawn_local;

use common::TransactionId;

use crate::{api, edit_dialog::EditDialog};

/// The alert shown when a transaction cannot be loaded into the modal.
const LOAD_ERROR_MESSAGE: &str = "Error loading transaction data";

/// Fetch a transaction and open the edit modal populated with it.
///
/// Exported as `editTransaction` for the inline `onclick` handlers the
/// page markup attaches to its edit buttons. One request per invocation,
/// re-triggerable by the user; on any failure the form is left untouched,
/// the modal stays hidden, and the user is alerted.
#[wasm_bindgen(js_name = editTransaction)]
pub fn edit_transaction(id: String) {
    let dialog = match EditDialog::bind(&gloo_utils::document()) {
        Ok(Some(dialog)) => dialog,
        Ok(None) => {
            log::warn!("a transaction edit was requested but this page has no edit modal");
            return;
        }
        Err(error) => {
            log::error!("the edit modal markup is incomplete: {error}");
            alert(LOAD_ERROR_MESSAGE);
            return;
        }
    };

    let id = TransactionId::from(id);
    spawn_local(async move {
        match api::fetch_transaction(&id).await {
            Ok(transaction) => {
                dialog.fill(&transaction);
                dialog.show();
            }
            Err(error) => {
                log::error!("could not fetch transaction {id}: {error}");
                alert(LOAD_ERROR_MESSAGE);
            }
        }
    });
}
