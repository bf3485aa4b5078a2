//! The update flow behind the edit form's submission.

use gloo_dialogs::alert;
use gloo_events::{EventListener, EventListenerOptions};
use wasm_bindgen_futures::spawn_local;
use web_sys::EventTarget;

use crate::{api, dom, edit_dialog::EditDialog};

/// The alert shown when an update could not be applied.
const UPDATE_ERROR_MESSAGE: &str = "Error updating transaction";

/// Intercept the edit form's native submission and issue the update
/// request instead.
///
/// The handler always prevents the native navigation, whatever the
/// outcome. On success the modal is hidden and the page reloaded to show
/// the new state; on failure the modal stays open with the user's edits
/// intact so they can retry or cancel.
pub fn wire_update_submission(dialog: &EditDialog) {
    let form: EventTarget = dialog.form().clone().into();
    let dialog = dialog.clone();

    // The listener must not be passive or prevent_default is ignored.
    let options = EventListenerOptions::enable_prevent_default();
    EventListener::new_with_options(&form, "submit", options, move |event| {
        event.prevent_default();

        let payload = match dialog.read_form() {
            Ok(payload) => payload,
            Err(error) => {
                log::error!("could not read the edit form: {error}");
                alert(UPDATE_ERROR_MESSAGE);
                return;
            }
        };

        let dialog = dialog.clone();
        spawn_local(async move {
            match api::update_transaction(&payload).await {
                Ok(()) => {
                    dialog.hide();
                    dom::reload_page();
                }
                Err(error) => {
                    log::error!("could not update transaction {}: {error}", payload.id);
                    alert(UPDATE_ERROR_MESSAGE);
                }
            }
        });
    })
    .forget();
}
