//! Client-side behavior for the navigation bar's hamburger toggle.

use gloo_events::EventListener;
use web_sys::{Document, EventTarget};

/// The id of the control that opens and closes the menu.
const NAV_TOGGLE_ID: &str = "nav-toggle";
/// The id of the collapsible menu container.
const NAV_MENU_ID: &str = "nav-menu";
/// The class whose presence marks the menu as open.
const OPEN_MENU_CLASS: &str = "active";

/// Wire the hamburger toggle, if this page renders one.
///
/// Each click of the toggle flips the `active` class on the menu
/// container. Pages without the toggle are left alone; the skip is logged
/// so a partially rendered page shows up in the console.
pub fn init_navigation(document: &Document) {
    let toggle = match document.get_element_by_id(NAV_TOGGLE_ID) {
        Some(toggle) => toggle,
        None => {
            log::warn!("this page has no #{NAV_TOGGLE_ID}, skipping the menu toggle");
            return;
        }
    };

    let menu = match document.get_element_by_id(NAV_MENU_ID) {
        Some(menu) => menu,
        None => {
            log::error!(
                "found #{NAV_TOGGLE_ID} but no #{NAV_MENU_ID}; the menu toggle is disabled"
            );
            return;
        }
    };

    let toggle: EventTarget = toggle.into();
    EventListener::new(&toggle, "click", move |_| {
        if let Err(error) = menu.class_list().toggle(OPEN_MENU_CLASS) {
            log::error!("could not toggle the navigation menu: {error:?}");
        }
    })
    .forget();
}
