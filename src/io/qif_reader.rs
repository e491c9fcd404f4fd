//! QIF file reader
//!
//! Reads the whole input file into memory and hands it to [`parse_qif`].
//! Nothing is written until parsing completes.
//!
//! # Error Handling
//!
//! - A missing file maps to [`QifError::FileNotFound`]
//! - Any other read failure (permissions, invalid UTF-8) maps to
//!   [`QifError::InputRead`]
//! - Malformed lines are never errors

use crate::core::parse_qif;
use crate::types::{ParseOutcome, QifError};
use std::fs;
use std::path::Path;

/// Parse every transaction from a QIF file
///
/// # Examples
///
/// ```no_run
/// use qif_convert::io::read_qif_file;
/// use std::path::Path;
///
/// let outcome = read_qif_file(Path::new("export.qif")).unwrap();
/// println!("{} transactions", outcome.transactions.len());
/// ```
pub fn read_qif_file(path: &Path) -> Result<ParseOutcome, QifError> {
    let content =
        fs::read_to_string(path).map_err(|e| QifError::input(&path.display().to_string(), &e))?;
    Ok(parse_qif(&content))
}
