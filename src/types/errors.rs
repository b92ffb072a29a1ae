use thiserror::Error;

/// Raw input that could not be parsed into the type a record field needs.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum FormatError {
    #[error("Format error: invalid timestamp '{value}', expected ISO-8601")]
    InvalidTimestamp {
        value: String
    },
    #[error("Format error: invalid amount '{value}', expected a decimal number")]
    InvalidAmount {
        value: String
    }
}

/// A parsed value that breaks one of the record's business rules.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum ValidationError {
    #[error("Validation error: category is empty")]
    EmptyCategory,
    #[error("Validation error: category has {length} characters, the maximum is {max}")]
    CategoryTooLong {
        length: usize,
        max: usize
    },
    #[error("Validation error: note has {length} characters, the maximum is {max}")]
    NoteTooLong {
        length: usize,
        max: usize
    },
    #[error("Validation error: kind '{value}' is not one of 'income' or 'expense'")]
    InvalidKind {
        value: String
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum RecordError {
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error(transparent)]
    Validation(#[from] ValidationError)
}

impl RecordError {
    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format(_))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl FormatError {
    pub fn invalid_timestamp(value: impl Into<String>) -> Self {
        Self::InvalidTimestamp { value: value.into() }
    }

    pub fn invalid_amount(value: impl Into<String>) -> Self {
        Self::InvalidAmount { value: value.into() }
    }
}
