//! Plain-text transaction summary
//!
//! ```text
//! Transactions Summary
//! ========================================
//! Date: 01-05-2024
//! Amount: -50.00
//! Payee: Grocery Store
//! Category: Food
//! Memo: Weekly shop
//! Account Type: Bank
//! ----------------------------------------
//! ```

use crate::types::{QifError, QifTransaction};
use std::io::Write;

const TITLE: &str = "Transactions Summary";
const RULE_WIDTH: usize = 40;

/// Write the human-readable summary
///
/// Empty fields render as nothing after the label.
pub fn write_summary_text(
    transactions: &[QifTransaction],
    output: &mut dyn Write,
) -> Result<(), QifError> {
    writeln!(output, "{}", TITLE)?;
    writeln!(output, "{}", "=".repeat(RULE_WIDTH))?;

    for transaction in transactions {
        writeln!(output, "Date: {}", transaction.date)?;
        writeln!(output, "Amount: {}", transaction.amount)?;
        writeln!(output, "Payee: {}", transaction.payee)?;
        writeln!(output, "Category: {}", transaction.category)?;
        writeln!(output, "Memo: {}", transaction.memo)?;
        writeln!(output, "Account Type: {}", transaction.account_type)?;
        writeln!(output, "{}", "-".repeat(RULE_WIDTH))?;
    }
    output.flush()?;

    Ok(())
}
