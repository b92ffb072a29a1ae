mod reader;
mod writer;

pub use reader::{read_records, read_records_from_path, ImportReport, RejectedRow};
pub use writer::{write_records, CSV_HEADERS};
