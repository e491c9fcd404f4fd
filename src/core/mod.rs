//! Core parsing module
//!
//! This module contains the QIF parsing components:
//! - `classifier` - Maps one trimmed line to its tag and value
//! - `date` - Ordered date-layout fallback chain
//! - `assembler` - Transaction assembly state machine

pub mod assembler;
pub mod classifier;
pub mod date;

pub use assembler::{parse_qif, TransactionAssembler};
pub use classifier::{classify, Tag};
pub use date::normalize_date;
