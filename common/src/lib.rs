//! The wire model shared between the MyMoneyPal backend and the browser
//! client: the transaction record as it appears in the JSON API, plus the
//! acknowledgement body for mutations.

mod transaction;

pub use transaction::{
    MutationResponse, ParseTransactionTypeError, Transaction, TransactionId, TransactionType,
};
