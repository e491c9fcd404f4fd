//! Transaction-related types for the QIF converter
//!
//! A [`QifTransaction`] is the normalized record both renderers consume. The
//! assembler fills it from tagged lines; fields never seen stay empty.

use serde::Serialize;

/// Column names of the CSV export, in output order
pub const CSV_HEADER: [&str; 6] = ["Date", "Amount", "Payee", "Category", "Memo", "Account Type"];

/// One sealed QIF transaction
///
/// All fields are kept as text. The amount in particular is the literal value
/// from the `T` line, without numeric parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QifTransaction {
    /// `MM-DD-YYYY` when the source date parsed, else the raw source text
    #[serde(rename = "Date")]
    pub date: String,

    /// Signed amount exactly as written in the source
    #[serde(rename = "Amount")]
    pub amount: String,

    #[serde(rename = "Payee")]
    pub payee: String,

    #[serde(rename = "Category")]
    pub category: String,

    #[serde(rename = "Memo")]
    pub memo: String,

    /// Most recent `!Type:` value declared before this record was sealed
    #[serde(rename = "Account Type")]
    pub account_type: String,
}

/// Counters collected while parsing one file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseStats {
    /// Physical lines read, blank lines included
    pub lines: usize,
    /// Records sealed by a terminator line
    pub records: usize,
    /// Lines with an unknown tag
    pub unrecognized: usize,
    /// Date fields that matched no known format and were kept verbatim
    pub raw_dates: usize,
    /// Whether a non-empty record was still open at end of input
    pub discarded_trailing: bool,
}

/// Result of parsing one QIF document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOutcome {
    pub transactions: Vec<QifTransaction>,
    pub stats: ParseStats,
}
