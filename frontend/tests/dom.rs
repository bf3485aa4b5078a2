//! In-browser tests for the page wiring: element binding, the edit modal,
//! the navigation toggle, and list-item removal.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{Document, Event, EventInit};

use chrono::NaiveDate;
use common::{Transaction, TransactionId, TransactionType};
use frontend::{
    init_navigation, remove_transaction_list_item, wire_update_submission, BindError, EditDialog,
};

wasm_bindgen_test_configure!(run_in_browser);

const MODAL_MARKUP: &str = r#"
<div id="editModal" style="display: none">
  <div class="modal-content" id="modalContent">
    <span class="close">&times;</span>
    <form id="editForm">
      <input id="editId" type="hidden">
      <input id="editTitle" type="text" required>
      <textarea id="editDescription"></textarea>
      <input id="editAmount" type="number" step="0.01" required>
      <select id="editType">
        <option value="income">Income</option>
        <option value="expense">Expense</option>
      </select>
      <input id="editDate" type="date" required>
      <button type="submit">Save</button>
    </form>
  </div>
</div>
"#;

const NAV_MARKUP: &str = r#"
<button id="nav-toggle">Menu</button>
<ul id="nav-menu"></ul>
"#;

const LIST_MARKUP: &str = r#"
<ul>
  <li class="transaction-item" data-id="7">Rent</li>
  <li class="transaction-item" data-id="8">Groceries</li>
</ul>
"#;

fn render(markup: &str) -> Document {
    gloo_utils::body().set_inner_html(markup);
    gloo_utils::document()
}

fn groceries() -> Transaction {
    Transaction {
        id: TransactionId::Text("42".to_owned()),
        title: "Groceries".to_owned(),
        description: "Weekly shop".to_owned(),
        amount: 53.20,
        transaction_type: TransactionType::Expense,
        date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
    }
}

fn field_value(document: &Document, id: &str) -> String {
    js_value_of(document.get_element_by_id(id).unwrap())
}

fn js_value_of(element: web_sys::Element) -> String {
    use wasm_bindgen::JsCast;

    if let Some(input) = element.dyn_ref::<web_sys::HtmlInputElement>() {
        return input.value();
    }
    if let Some(text_area) = element.dyn_ref::<web_sys::HtmlTextAreaElement>() {
        return text_area.value();
    }
    element
        .dyn_ref::<web_sys::HtmlSelectElement>()
        .map(|select| select.value())
        .unwrap()
}

fn bubbling_click() -> Event {
    let init = EventInit::new();
    init.set_bubbles(true);
    Event::new_with_event_init_dict("click", &init).unwrap()
}

#[wasm_bindgen_test]
fn fill_populates_every_field_and_show_reveals_the_modal() {
    let document = render(MODAL_MARKUP);
    let dialog = EditDialog::bind(&document).unwrap().unwrap();

    dialog.fill(&groceries());
    dialog.show();

    assert_eq!(field_value(&document, "editId"), "42");
    assert_eq!(field_value(&document, "editTitle"), "Groceries");
    assert_eq!(field_value(&document, "editDescription"), "Weekly shop");
    assert_eq!(field_value(&document, "editAmount"), "53.20");
    assert_eq!(field_value(&document, "editType"), "expense");
    assert_eq!(field_value(&document, "editDate"), "2024-03-01");
    assert!(dialog.is_visible());
}

#[wasm_bindgen_test]
fn read_form_round_trips_the_filled_transaction() {
    let document = render(MODAL_MARKUP);
    let dialog = EditDialog::bind(&document).unwrap().unwrap();
    let transaction = groceries();

    dialog.fill(&transaction);
    let payload = dialog.read_form().unwrap();

    assert_eq!(payload, transaction);
}

#[wasm_bindgen_test]
fn a_page_without_a_modal_binds_to_none() {
    let document = render("<p>Log in</p>");

    let dialog = EditDialog::bind(&document).unwrap();

    assert!(dialog.is_none());
}

#[wasm_bindgen_test]
fn an_incomplete_modal_names_the_missing_element() {
    let markup = MODAL_MARKUP.replace(r#"<input id="editAmount" type="number" step="0.01" required>"#, "");
    let document = render(&markup);

    let error = EditDialog::bind(&document).unwrap_err();

    assert_eq!(error, BindError::MissingElement("editAmount".to_owned()));
}

#[wasm_bindgen_test]
fn backdrop_clicks_hide_the_modal_but_content_clicks_do_not() {
    let document = render(MODAL_MARKUP);
    let dialog = EditDialog::bind(&document).unwrap().unwrap();
    dialog.wire_dismissal(&document);
    dialog.show();

    let content = document.get_element_by_id("modalContent").unwrap();
    content.dispatch_event(&bubbling_click()).unwrap();
    assert!(dialog.is_visible());

    let modal = document.get_element_by_id("editModal").unwrap();
    modal.dispatch_event(&bubbling_click()).unwrap();
    assert!(!dialog.is_visible());
}

#[wasm_bindgen_test]
fn the_close_icon_hides_the_modal() {
    let document = render(MODAL_MARKUP);
    let dialog = EditDialog::bind(&document).unwrap().unwrap();
    dialog.wire_dismissal(&document);
    dialog.show();

    let icon = document.query_selector(".close").unwrap().unwrap();
    icon.dispatch_event(&bubbling_click()).unwrap();

    assert!(!dialog.is_visible());
}

#[wasm_bindgen_test]
fn submission_is_always_intercepted() {
    let document = render(MODAL_MARKUP);
    let dialog = EditDialog::bind(&document).unwrap().unwrap();
    wire_update_submission(&dialog);

    // An empty amount field makes the handler take its failure path; the
    // native navigation must be prevented all the same.
    let init = EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let submit = Event::new_with_event_init_dict("submit", &init).unwrap();

    let not_canceled = document
        .get_element_by_id("editForm")
        .unwrap()
        .dispatch_event(&submit)
        .unwrap();

    assert!(!not_canceled);
}

#[wasm_bindgen_test]
fn the_nav_toggle_flips_the_active_class() {
    let document = render(NAV_MARKUP);
    init_navigation(&document);
    let toggle = document.get_element_by_id("nav-toggle").unwrap();
    let menu = document.get_element_by_id("nav-menu").unwrap();

    toggle.dispatch_event(&bubbling_click()).unwrap();
    assert!(menu.class_list().contains("active"));

    toggle.dispatch_event(&bubbling_click()).unwrap();
    assert!(!menu.class_list().contains("active"));
}

#[wasm_bindgen_test]
fn exactly_the_deleted_list_item_is_removed() {
    let document = render(LIST_MARKUP);

    remove_transaction_list_item(&document, &TransactionId::Number(7));

    assert!(document
        .query_selector(r#".transaction-item[data-id="7"]"#)
        .unwrap()
        .is_none());
    assert!(document
        .query_selector(r#".transaction-item[data-id="8"]"#)
        .unwrap()
        .is_some());
}
