//! The browser half of MyMoneyPal, compiled to WebAssembly.
//!
//! Every page is rendered by the backend; this crate binds to that markup
//! and adds the dynamic behavior on top of it: the navigation bar's
//! hamburger toggle, the transaction edit modal, and the fetch, update,
//! and delete round trips against the transactions API.
//!
//! The page markup owns the element ids this crate looks for. Pages that
//! do not render a given control (the log-in page has no edit modal) have
//! the corresponding wiring skipped with a console warning rather than an
//! error.

#![warn(missing_docs)]

use wasm_bindgen::prelude::wasm_bindgen;

mod api;
mod dom;
mod edit_dialog;
mod endpoints;
mod navigation;
mod transaction;

pub use dom::{BindError, FormField};
pub use edit_dialog::{EditDialog, FormError};
pub use navigation::init_navigation;
pub use transaction::{
    delete_transaction, edit_transaction, remove_transaction_list_item, wire_update_submission,
};

/// Wires up the current page once the WebAssembly module has loaded.
///
/// This is the page-ready hook: it installs the console logger and panic
/// hook, then runs each widget's initialization against the document the
/// backend rendered.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    let document = gloo_utils::document();

    init_navigation(&document);

    match EditDialog::bind(&document) {
        Ok(Some(dialog)) => {
            dialog.wire_dismissal(&document);
            wire_update_submission(&dialog);
        }
        Ok(None) => {
            log::warn!("this page has no edit modal, skipping the transaction edit wiring");
        }
        Err(error) => {
            log::error!("the edit modal markup is incomplete: {error}");
        }
    }
}
