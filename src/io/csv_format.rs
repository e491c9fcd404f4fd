//! CSV export of parsed transactions
//!
//! Writes the header row followed by one row per transaction, in input order.
//! Quoting is minimal: only values containing a comma, a quote or a line
//! break are quoted.

use crate::types::{QifError, QifTransaction, CSV_HEADER};
use csv::WriterBuilder;
use std::io::Write;

/// Write transactions in CSV format
///
/// The header is always written, so an empty slice produces a header-only
/// file.
///
/// # Arguments
///
/// * `transactions` - Records to write, in output order
/// * `output` - Destination writer
pub fn write_transactions_csv(
    transactions: &[QifTransaction],
    output: &mut dyn Write,
) -> Result<(), QifError> {
    // The header is written by hand so it appears even without rows.
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_writer(output);

    writer.write_record(CSV_HEADER)?;
    for transaction in transactions {
        writer.serialize(transaction)?;
    }
    writer.flush()?;

    Ok(())
}
