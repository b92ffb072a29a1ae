//! Self-validating income/expense records.
//!
//! A [`TransactionRecord`] is built from raw inputs through [`TransactionDraft`]
//! or from its flat [`SerializedRecord`] form. Construction normalizes the
//! timestamp to UTC, makes the amount exact and signs it by kind, trims the
//! category, and rejects anything that still breaks a rule.

pub mod batch;
pub mod models;
pub mod types;

pub use models::{RawKind, SerializedRecord, TransactionDraft, TransactionKind, TransactionRecord};
pub use types::{FormatError, RecordError, ValidationError};
