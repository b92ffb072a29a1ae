mod amount;
mod errors;
mod timestamp;

use uuid::Uuid;

pub use amount::{to_decimal, RawAmount};
pub use errors::{FormatError, RecordError, ValidationError};
pub use timestamp::{parse_iso_to_utc, to_iso_utc, RawTimestamp};

pub type RecordId = String;

/// Produces a fresh random (v4) identifier for a record.
pub fn generate_record_id() -> RecordId {
    Uuid::new_v4().to_string()
}
