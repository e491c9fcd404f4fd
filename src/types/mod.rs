//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `transaction`: The normalized transaction record and parse statistics
//! - `error`: Error types for the converter

pub mod error;
pub mod transaction;

pub use error::QifError;
pub use transaction::{ParseOutcome, ParseStats, QifTransaction, CSV_HEADER};
