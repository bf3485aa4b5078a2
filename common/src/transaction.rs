use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The identifier a transaction is keyed by across the REST API.
///
/// The backend is free to hand out either JSON numbers or JSON strings.
/// The client never interprets the value, it only echoes it back in update
/// and delete requests, so both wire forms are preserved as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TransactionId {
    /// An identifier that arrived as a JSON number.
    Number(i64),
    /// An identifier that arrived as a JSON string.
    Text(String),
}

impl Display for TransactionId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            TransactionId::Number(number) => write!(f, "{number}"),
            TransactionId::Text(text) => f.write_str(text),
        }
    }
}

impl From<String> for TransactionId {
    /// Recover the wire form of an identifier from its rendered form, e.g.
    /// the value of a hidden form field that was populated from a fetched
    /// transaction.
    ///
    /// A value is only treated as a number if rendering the number would
    /// give back the original string, so identifiers such as `"007"` stay
    /// text and survive the round trip unchanged.
    fn from(value: String) -> Self {
        match value.parse::<i64>() {
            Ok(number) if number.to_string() == value => TransactionId::Number(number),
            _ => TransactionId::Text(value),
        }
    }
}

impl FromStr for TransactionId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(TransactionId::from(s.to_owned()))
    }
}

/// Whether a transaction brings money in or takes money out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money earned.
    Income,
    /// Money spent.
    Expense,
}

impl TransactionType {
    /// The lowercase name used on the wire and in `<select>` option values.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }
}

impl Display for TransactionType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = ParseTransactionTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(TransactionType::Income),
            "expense" => Ok(TransactionType::Expense),
            _ => Err(ParseTransactionTypeError(s.to_owned())),
        }
    }
}

/// The error returned when a string is not a transaction type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("\"{0}\" is not a transaction type (expected \"income\" or \"expense\")")]
pub struct ParseTransactionTypeError(String);

/// An expense or income, i.e. an event where money was either spent or
/// earned, as the JSON API represents it.
///
/// The client holds no lasting copy of this record. It exists between a
/// fetch and the form fields it populates, and again between those fields
/// and the update request built from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The identifier the backend assigned to this transaction.
    pub id: TransactionId,
    /// A short name for the transaction.
    pub title: String,
    /// A longer text description. Optional; the backend may omit it.
    #[serde(default)]
    pub description: String,
    /// The amount of money spent or earned. The currency is implied by the
    /// backend.
    pub amount: f64,
    /// Whether this transaction is income or an expense.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// When the transaction happened, as an ISO `YYYY-MM-DD` date. This is
    /// also the value format of `<input type="date">`.
    pub date: NaiveDate,
}

/// The acknowledgement body the backend sends for update and delete
/// requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationResponse {
    /// Whether the backend applied the mutation.
    pub success: bool,
}
