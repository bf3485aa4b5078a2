//! The transaction edit modal and its form, bound as one typed view.
//!
//! [EditDialog] enumerates every element the edit flow touches and
//! validates the whole set in one pass, so the markup contract is checked
//! where the dialog is wired instead of deep inside an event handler.

use chrono::NaiveDate;
use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, EventTarget, HtmlElement, HtmlFormElement};

use common::{ParseTransactionTypeError, Transaction, TransactionId};

use crate::dom::{self, BindError, FormField};

/// The id of the modal container. Its absence means the page does not
/// offer transaction editing at all.
const MODAL_ID: &str = "editModal";
/// The id of the edit form inside the modal.
const FORM_ID: &str = "editForm";
/// The id of the hidden field holding the server-echoed identifier.
const ID_FIELD: &str = "editId";
/// The id of the title field.
const TITLE_FIELD: &str = "editTitle";
/// The id of the description field.
const DESCRIPTION_FIELD: &str = "editDescription";
/// The id of the amount field.
const AMOUNT_FIELD: &str = "editAmount";
/// The id of the income/expense field.
const TYPE_FIELD: &str = "editType";
/// The id of the date field.
const DATE_FIELD: &str = "editDate";
/// The selector for the modal's close icon.
const CLOSE_ICON_SELECTOR: &str = ".close";

/// The modal's `style.display` value while it is shown.
const VISIBLE_DISPLAY: &str = "block";
/// The modal's `style.display` value while it is hidden.
const HIDDEN_DISPLAY: &str = "none";

/// The ways the submitted form state can fail to read back as a
/// transaction.
///
/// Native input types keep these paths unreachable in ordinary use; they
/// exist for markup that bypasses them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// The amount field does not hold a number.
    #[error("\"{0}\" is not a valid amount")]
    InvalidAmount(String),

    /// The date field does not hold an ISO `YYYY-MM-DD` date.
    #[error("could not parse the date \"{0}\": {1}")]
    InvalidDate(String, String),

    /// The type field holds something other than income or expense.
    #[error(transparent)]
    InvalidType(#[from] ParseTransactionTypeError),
}

/// The edit modal, its form, and the six transaction fields, bound as one
/// unit.
#[derive(Debug, Clone)]
pub struct EditDialog {
    modal: HtmlElement,
    form: HtmlFormElement,
    id: FormField,
    title: FormField,
    description: FormField,
    amount: FormField,
    transaction_type: FormField,
    date: FormField,
}

impl EditDialog {
    /// Bind the edit dialog on the given page.
    ///
    /// Returns `Ok(None)` when the page has no modal container at all,
    /// which is how pages without transaction editing look. A modal whose
    /// inner elements are missing or of the wrong kind is a markup defect
    /// and fails with a [BindError] naming the offender.
    pub fn bind(document: &Document) -> Result<Option<EditDialog>, BindError> {
        if document.get_element_by_id(MODAL_ID).is_none() {
            return Ok(None);
        }

        let modal = dom::require_html_element(document, MODAL_ID)?;
        let form = dom::require_element(document, FORM_ID)?
            .dyn_into::<HtmlFormElement>()
            .map_err(|element| {
                BindError::UnexpectedKind(FORM_ID.to_owned(), element.tag_name().to_lowercase())
            })?;

        Ok(Some(EditDialog {
            modal,
            form,
            id: FormField::bind(document, ID_FIELD)?,
            title: FormField::bind(document, TITLE_FIELD)?,
            description: FormField::bind(document, DESCRIPTION_FIELD)?,
            amount: FormField::bind(document, AMOUNT_FIELD)?,
            transaction_type: FormField::bind(document, TYPE_FIELD)?,
            date: FormField::bind(document, DATE_FIELD)?,
        }))
    }

    /// The edit form element, for submit interception.
    pub fn form(&self) -> &HtmlFormElement {
        &self.form
    }

    /// Write a fetched transaction into the form fields.
    pub fn fill(&self, transaction: &Transaction) {
        self.id.set_value(&transaction.id.to_string());
        self.title.set_value(&transaction.title);
        self.description.set_value(&transaction.description);
        self.amount.set_value(&format!("{:.2}", transaction.amount));
        self.transaction_type
            .set_value(transaction.transaction_type.as_str());
        self.date.set_value(&transaction.date.to_string());
    }

    /// Read the form fields back into an update payload.
    ///
    /// The identifier is taken from the hidden field as the server echoed
    /// it; the client never re-derives it.
    pub fn read_form(&self) -> Result<Transaction, FormError> {
        let amount_value = self.amount.value();
        let amount = amount_value
            .parse::<f64>()
            .map_err(|_| FormError::InvalidAmount(amount_value.clone()))?;

        let date_value = self.date.value();
        let date = date_value
            .parse::<NaiveDate>()
            .map_err(|error| FormError::InvalidDate(date_value.clone(), error.to_string()))?;

        Ok(Transaction {
            id: TransactionId::from(self.id.value()),
            title: self.title.value(),
            description: self.description.value(),
            amount,
            transaction_type: self.transaction_type.value().parse()?,
            date,
        })
    }

    /// Make the modal visible.
    pub fn show(&self) {
        self.set_display(VISIBLE_DISPLAY);
    }

    /// Hide the modal.
    pub fn hide(&self) {
        self.set_display(HIDDEN_DISPLAY);
    }

    /// Whether the modal is currently shown.
    pub fn is_visible(&self) -> bool {
        self.modal
            .style()
            .get_property_value("display")
            .map(|display| display == VISIBLE_DISPLAY)
            .unwrap_or(false)
    }

    fn set_display(&self, display: &str) {
        if let Err(error) = self.modal.style().set_property("display", display) {
            log::error!("could not change the modal's visibility: {error:?}");
        }
    }

    /// Install the dismissal handlers: a click on the close icon, or a
    /// click that lands on the modal container itself (the backdrop rather
    /// than the dialog contents), hides the modal.
    pub fn wire_dismissal(&self, document: &Document) {
        match document.query_selector(CLOSE_ICON_SELECTOR) {
            Ok(Some(icon)) => {
                let dialog = self.clone();
                let icon: EventTarget = icon.into();
                EventListener::new(&icon, "click", move |_| dialog.hide()).forget();
            }
            Ok(None) => log::warn!(
                "this page has no {CLOSE_ICON_SELECTOR} icon; \
                the modal can still be dismissed via its backdrop"
            ),
            Err(error) => {
                log::error!("could not look up the {CLOSE_ICON_SELECTOR} icon: {error:?}");
            }
        }

        let dialog = self.clone();
        let backdrop: EventTarget = self.modal.clone().into();
        let window: EventTarget = gloo_utils::window().into();
        EventListener::new(&window, "click", move |event: &Event| {
            if event.target().as_ref() == Some(&backdrop) {
                dialog.hide();
            }
        })
        .forget();
    }
}
