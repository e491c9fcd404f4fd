//! Conversion pipeline
//!
//! Orchestrates a full run:
//! 1. Read and parse the QIF input into memory
//! 2. Render the text summary and the CSV into staged temporary files
//! 3. Commit both staged files onto their target paths
//!
//! Any failure aborts the run before step 3, leaving existing output files
//! as they were.

use crate::io::atomic::{commit_all, stage};
use crate::io::{read_qif_file, write_summary_text, write_transactions_csv};
use crate::types::{ParseStats, QifError};
use log::{info, warn};
use std::path::PathBuf;

/// Default path of the text summary
pub const DEFAULT_TEXT_OUTPUT: &str = "transactions_summary.txt";

/// Default path of the CSV export
pub const DEFAULT_CSV_OUTPUT: &str = "transactions.csv";

/// Paths for one conversion run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionConfig {
    /// QIF file to read
    pub input: PathBuf,
    /// Destination of the plain-text summary
    pub text_output: PathBuf,
    /// Destination of the CSV export
    pub csv_output: PathBuf,
}

impl ConversionConfig {
    /// Config with the default output paths
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            text_output: PathBuf::from(DEFAULT_TEXT_OUTPUT),
            csv_output: PathBuf::from(DEFAULT_CSV_OUTPUT),
        }
    }
}

/// What a successful run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    pub text_output: PathBuf,
    pub csv_output: PathBuf,
    pub stats: ParseStats,
}

impl ConversionReport {
    /// Message printed by the CLI on success
    pub fn success_message(&self) -> String {
        format!(
            "Parsing completed successfully. Output written to:\n- {}\n- {}",
            self.text_output.display(),
            self.csv_output.display()
        )
    }
}

/// Convert one QIF file into the text summary and the CSV export
///
/// # Errors
///
/// Returns an error if the input cannot be read or either output cannot be
/// written. Unparseable dates and unknown lines are not errors.
pub fn convert(config: &ConversionConfig) -> Result<ConversionReport, QifError> {
    let outcome = read_qif_file(&config.input)?;
    let stats = outcome.stats;

    info!(
        "Parsed {} transactions from '{}' ({} lines, {} unrecognized, {} raw dates)",
        stats.records,
        config.input.display(),
        stats.lines,
        stats.unrecognized,
        stats.raw_dates
    );
    if stats.discarded_trailing {
        warn!(
            "'{}' ends with a transaction missing its '^' terminator; it was not exported",
            config.input.display()
        );
    }

    let transactions = &outcome.transactions;
    let text = stage(&config.text_output, |w| write_summary_text(transactions, w))?;
    let csv = stage(&config.csv_output, |w| write_transactions_csv(transactions, w))?;
    commit_all(vec![text, csv])?;

    info!(
        "Wrote '{}' and '{}'",
        config.text_output.display(),
        config.csv_output.display()
    );

    Ok(ConversionReport {
        text_output: config.text_output.clone(),
        csv_output: config.csv_output.clone(),
        stats,
    })
}
