use std::fmt;
use std::fmt::{Display, Formatter};

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{RawKind, SerializedRecord, TransactionKind};
use crate::types::{generate_record_id, to_decimal, to_iso_utc, RawAmount, RawTimestamp, RecordError, RecordId, ValidationError};

pub const MAX_CATEGORY_LENGTH: usize = 50;
pub const MAX_NOTE_LENGTH: usize = 500;

/// The raw inputs of a transaction, before normalization.
///
/// Every field is accepted as-is; nothing is checked until [`TransactionDraft::build`].
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDraft {
    /// Left empty (or blank) to have a fresh identifier generated.
    pub id: Option<String>,
    pub timestamp: RawTimestamp,
    pub amount: RawAmount,
    pub kind: RawKind,
    pub category: String,
    pub note: Option<String>
}

impl TransactionDraft {
    pub fn new(
        timestamp: impl Into<RawTimestamp>,
        amount: impl Into<RawAmount>,
        kind: impl Into<RawKind>,
        category: impl Into<String>
    ) -> Self {
        Self {
            id: None,
            timestamp: timestamp.into(),
            amount: amount.into(),
            kind: kind.into(),
            category: category.into(),
            note: None
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn build(self) -> Result<TransactionRecord, RecordError> {
        TransactionRecord::new(self)
    }
}

/// A single income or expense, normalized and validated.
///
/// A record only exists in its canonical form: the timestamp is UTC, the
/// amount carries the sign of its kind, the category is trimmed and the note is
/// either absent or non-empty. Nothing can be changed after construction.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(into = "SerializedRecord", try_from = "SerializedRecord")]
pub struct TransactionRecord {
    id: RecordId,
    timestamp: DateTime<Utc>,
    /// Positive for income, negative for expense.
    amount: Decimal,
    kind: TransactionKind,
    category: String,
    note: Option<String>
}

impl TransactionRecord {
    /// Normalizes and validates a draft into a record.
    ///
    /// The steps run in a fixed order, so when several inputs are bad the
    /// error from the earliest step wins:
    /// 1. timestamp to UTC
    /// 2. amount to an exact decimal
    /// 3. amount sign coerced to match the kind
    /// 4. category trimmed, must not be empty
    /// 5. category and note lengths checked
    /// 6. id generated when missing or blank
    /// 7. kind checked
    ///
    /// # Errors
    /// Returns `RecordError::Format` when the timestamp or amount cannot be
    /// parsed, and `RecordError::Validation` when a parsed value breaks a rule.
    pub fn new(draft: TransactionDraft) -> Result<Self, RecordError> {
        let TransactionDraft { id, timestamp, amount, kind, category, note } = draft;

        let timestamp = timestamp.to_utc()?;
        let amount = to_decimal(&amount)?;

        let resolved_kind = kind.to_kind();
        let amount = match &resolved_kind {
            Ok(kind) => coerce_sign(amount, *kind),
            Err(_) => amount
        };

        let category = category.trim().to_string();

        if category.is_empty() {
            return Err(ValidationError::EmptyCategory.into());
        }

        let note = note.filter(|note| !note.is_empty());
        check_lengths(&category, note.as_deref())?;

        let id = match id {
            Some(id) if !id.trim().is_empty() => id,
            _ => {
                let id = generate_record_id();
                debug!("Generated id [{id}] for record without one");
                id
            }
        };

        let kind = resolved_kind?;

        Ok(Self { id, timestamp, amount, kind, category, note })
    }

    /// Rebuilds a record from its serialized form, re-running every normalization step.
    pub fn from_record(record: SerializedRecord) -> Result<Self, RecordError> {
        let SerializedRecord { id, timestamp, amount, kind, category, note } = record;

        TransactionDraft {
            id: Some(id),
            timestamp: RawTimestamp::from(timestamp),
            amount: RawAmount::from(amount),
            kind: RawKind::from(kind),
            category,
            note: Some(note)
        }.build()
    }

    pub fn to_record(&self) -> SerializedRecord {
        SerializedRecord {
            id: self.id.clone(),
            timestamp: to_iso_utc(&self.timestamp),
            amount: self.amount.to_string(),
            kind: self.kind.to_string(),
            category: self.category.clone(),
            note: self.note.clone().unwrap_or_default()
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// The timestamp shifted into `timezone`, for display.
    pub fn local_timestamp<Tz: TimeZone>(&self, timezone: &Tz) -> DateTime<Tz> {
        self.timestamp.with_timezone(timezone)
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    /// True when money went out. A zero amount is neither an expense nor an income.
    pub fn is_expense(&self) -> bool {
        self.amount < Decimal::ZERO
    }

    /// True when money came in. A zero amount is neither an expense nor an income.
    pub fn is_income(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    pub fn absolute_amount(&self) -> Decimal {
        self.amount.abs()
    }
}

fn coerce_sign(amount: Decimal, kind: TransactionKind) -> Decimal {
    let coerced = match kind {
        TransactionKind::Income if amount < Decimal::ZERO => -amount,
        TransactionKind::Expense if amount > Decimal::ZERO => -amount,
        _ => amount
    };

    if coerced != amount {
        debug!("Coerced amount {amount} to {coerced} to match kind [{kind}]");
    }

    without_negative_zero(coerced)
}

fn without_negative_zero(mut amount: Decimal) -> Decimal {
    if amount.is_zero() {
        amount.set_sign_positive(true);
    }

    amount
}

fn check_lengths(category: &str, note: Option<&str>) -> Result<(), ValidationError> {
    let category_length = category.chars().count();

    if category_length > MAX_CATEGORY_LENGTH {
        return Err(ValidationError::CategoryTooLong { length: category_length, max: MAX_CATEGORY_LENGTH });
    }

    let note_length = note.map_or(0, |note| note.chars().count());

    if note_length > MAX_NOTE_LENGTH {
        return Err(ValidationError::NoteTooLong { length: note_length, max: MAX_NOTE_LENGTH });
    }

    Ok(())
}

impl TryFrom<SerializedRecord> for TransactionRecord {
    type Error = RecordError;

    fn try_from(record: SerializedRecord) -> Result<Self, Self::Error> {
        TransactionRecord::from_record(record)
    }
}

impl From<&TransactionRecord> for SerializedRecord {
    fn from(record: &TransactionRecord) -> Self {
        record.to_record()
    }
}

impl From<TransactionRecord> for SerializedRecord {
    fn from(record: TransactionRecord) -> Self {
        record.to_record()
    }
}

impl Display for TransactionRecord {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{} {} {} [{}]", to_iso_utc(&self.timestamp), self.kind, self.amount, self.category)?;

        if let Some(note) = &self.note {
            write!(formatter, " {note}")?;
        }

        Ok(())
    }
}
