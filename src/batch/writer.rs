use crate::models::TransactionRecord;
use csv::WriterBuilder;
use std::io::Write;

pub const CSV_HEADERS: [&str; 6] = ["id", "timestamp", "amount", "kind", "category", "note"];

/// Writes records as CSV in their serialized shape. The header is written even when there are no records.
pub fn write_records<W: Write>(records: &[TransactionRecord], output: W) -> Result<(), csv::Error> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_writer(output);

    writer.write_record(CSV_HEADERS)?;

    for record in records {
        writer.serialize(record.to_record())?;
    }

    writer.flush()?;

    Ok(())
}
