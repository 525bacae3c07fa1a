use crate::types::Records;
use crate::ReaderError;

use std::fmt::Write;

const SHARD_WIDTH: usize = 20;
const POSITION_WIDTH: usize = 60;
const MESSAGE_WIDTH: usize = 40;

fn row(out: &mut String, shard: &str, position: &str, message: &str) {
    // Writing into a String cannot fail.
    let _ = writeln!(
        out,
        "{shard:^SHARD_WIDTH$} {position:^POSITION_WIDTH$} {message:<MESSAGE_WIDTH$}"
    );
}

/// Renders the header, the dash separator and one row per record.
///
/// Every payload is decoded before the table is returned, so an invalid one
/// yields an error instead of a partial table.
pub fn table(shard_id: &str, records: &Records) -> Result<String, ReaderError> {
    let mut out = String::new();

    row(&mut out, "Shard", "Position", "Message");
    row(
        &mut out,
        &"-".repeat(SHARD_WIDTH),
        &"-".repeat(POSITION_WIDTH),
        &"-".repeat(MESSAGE_WIDTH),
    );

    for record in records.iter() {
        row(&mut out, shard_id, record.sequence_number(), record.payload()?);
    }

    Ok(out)
}
