mod record;
mod serialized;

use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::ValidationError;

pub use record::{TransactionDraft, TransactionRecord, MAX_CATEGORY_LENGTH, MAX_NOTE_LENGTH};
pub use serialized::SerializedRecord;

/// Whether a transaction brings money in or takes it out. Decides the sign of the stored amount.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense"
        }
    }
}

impl Display for TransactionKind {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "income" => Ok(TransactionKind::Income),
            "expense" => Ok(TransactionKind::Expense),
            _ => Err(ValidationError::InvalidKind { value: value.to_string() })
        }
    }
}

/// A kind as it arrives from a caller. Text is only checked once the rest of the record has been normalized.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum RawKind {
    Known(TransactionKind),
    Text(String)
}

impl RawKind {
    pub fn to_kind(&self) -> Result<TransactionKind, ValidationError> {
        match self {
            RawKind::Known(kind) => Ok(*kind),
            RawKind::Text(text) => TransactionKind::from_str(text)
        }
    }
}

impl From<TransactionKind> for RawKind {
    fn from(value: TransactionKind) -> Self {
        RawKind::Known(value)
    }
}

impl From<&str> for RawKind {
    fn from(value: &str) -> Self {
        RawKind::Text(value.to_string())
    }
}

impl From<String> for RawKind {
    fn from(value: String) -> Self {
        RawKind::Text(value)
    }
}
