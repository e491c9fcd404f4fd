//! I/O module
//!
//! Handles QIF input and the two output formats.
//!
//! # Components
//!
//! - `qif_reader` - Reads a QIF file and drives the assembler
//! - `text_format` - Plain-text summary renderer
//! - `csv_format` - CSV renderer
//! - `atomic` - Stages outputs in temporary files and commits them together

pub mod atomic;
pub mod csv_format;
pub mod qif_reader;
pub mod text_format;

pub use csv_format::write_transactions_csv;
pub use qif_reader::read_qif_file;
pub use text_format::write_summary_text;
