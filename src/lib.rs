//! QIF Converter Library
//! # Overview
//!
//! This library parses QIF (Quicken Interchange Format) transaction exports
//! and renders them as a plain-text summary and a CSV file.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (QifTransaction, QifError, etc.)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Parsing components:
//!   - [`core::classifier`] - Line tag classification
//!   - [`core::date`] - Date layout fallback chain
//!   - [`core::assembler`] - Transaction assembly state machine
//! - [`io`] - QIF reading, output renderers and atomic output files
//! - [`pipeline`] - End-to-end conversion of one file
//!
//! # Supported Lines
//!
//! - `!Type:<name>`: account type stamped on every following transaction
//! - `D`, `T`, `P`, `L`, `M`: date, amount, payee, category and memo
//! - `^`: end of transaction
//!
//! Any other line is ignored. A transaction missing its final `^` is not
//! exported.
//!
//! # Example
//!
//! ```
//! use qif_convert::core::parse_qif;
//! use qif_convert::io::write_transactions_csv;
//!
//! let outcome = parse_qif("!Type:Bank\nD01/05/2024\nT-50.00\nPGrocery Store\n^\n");
//! let mut csv = Vec::new();
//! write_transactions_csv(&outcome.transactions, &mut csv).unwrap();
//!
//! let csv = String::from_utf8(csv).unwrap();
//! assert_eq!(csv.lines().nth(1), Some("01-05-2024,-50.00,Grocery Store,,,Bank"));
//! ```

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod pipeline;
pub mod types;

pub use crate::core::{classify, normalize_date, parse_qif, Tag, TransactionAssembler};
pub use io::{read_qif_file, write_summary_text, write_transactions_csv};
pub use pipeline::{convert, ConversionConfig, ConversionReport};
pub use types::{ParseOutcome, ParseStats, QifError, QifTransaction};
