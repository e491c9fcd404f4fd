//! Transaction assembly state machine
//!
//! The [`TransactionAssembler`] consumes classified lines in input order,
//! accumulates fields into a working record and seals it at every terminator.
//!
//! State carried between lines:
//! - the working record, whose fields start out absent
//! - the current account type, which survives terminators and only changes
//!   when a new `!Type:` marker appears

use crate::core::classifier::{classify, Tag};
use crate::core::date::{format_date, parse_date};
use crate::types::{ParseOutcome, ParseStats, QifTransaction};
use log::{debug, warn};

/// Fields seen so far for the record being built
#[derive(Debug, Default)]
struct PendingRecord {
    date: Option<String>,
    amount: Option<String>,
    payee: Option<String>,
    category: Option<String>,
    memo: Option<String>,
}

impl PendingRecord {
    fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.amount.is_none()
            && self.payee.is_none()
            && self.category.is_none()
            && self.memo.is_none()
    }

    /// Materialize the record, defaulting absent fields to empty strings
    fn seal(self, account_type: Option<&str>) -> QifTransaction {
        QifTransaction {
            date: self.date.unwrap_or_default(),
            amount: self.amount.unwrap_or_default(),
            payee: self.payee.unwrap_or_default(),
            category: self.category.unwrap_or_default(),
            memo: self.memo.unwrap_or_default(),
            account_type: account_type.unwrap_or_default().to_string(),
        }
    }
}

/// Builds [`QifTransaction`]s from QIF lines
///
/// One assembler serves one parse run. Feed it lines with
/// [`push_line`](Self::push_line) (or already classified tags with
/// [`apply`](Self::apply)) and collect the result with
/// [`finish`](Self::finish).
#[derive(Debug, Default)]
pub struct TransactionAssembler {
    current: PendingRecord,
    account_type: Option<String>,
    transactions: Vec<QifTransaction>,
    stats: ParseStats,
}

impl TransactionAssembler {
    /// Create an assembler with no account type and no records
    pub fn new() -> Self {
        Self::default()
    }

    /// Trim and classify one raw input line, then apply it
    pub fn push_line(&mut self, line: &str) {
        self.stats.lines += 1;
        let tag = classify(line.trim());
        if tag == Tag::Unrecognized {
            self.stats.unrecognized += 1;
            debug!("Ignoring unrecognized line {}: '{}'", self.stats.lines, line.trim());
        }
        self.apply(tag);
    }

    /// Apply one classified line to the state machine
    ///
    /// Repeated field tags overwrite the earlier value. Skip and unrecognized
    /// tags leave the state untouched.
    pub fn apply(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Skip | Tag::Unrecognized => {}
            Tag::AccountTypeMarker(value) => self.account_type = Some(value.to_string()),
            Tag::DateField(raw) => {
                let date = match parse_date(raw) {
                    Some(date) => format_date(date),
                    None => {
                        self.stats.raw_dates += 1;
                        debug!("Keeping unrecognised date '{}' as-is", raw);
                        raw.to_string()
                    }
                };
                self.current.date = Some(date);
            }
            Tag::AmountField(raw) => self.current.amount = Some(raw.to_string()),
            Tag::PayeeField(raw) => self.current.payee = Some(raw.to_string()),
            Tag::CategoryField(raw) => self.current.category = Some(raw.to_string()),
            Tag::MemoField(raw) => self.current.memo = Some(raw.to_string()),
            Tag::Terminator => self.seal(),
        }
    }

    fn seal(&mut self) {
        let pending = std::mem::take(&mut self.current);
        let transaction = pending.seal(self.account_type.as_deref());
        debug!("Sealed transaction #{}: {:?}", self.transactions.len() + 1, transaction);
        self.transactions.push(transaction);
        self.stats.records += 1;
    }

    /// Number of records sealed so far
    pub fn sealed(&self) -> usize {
        self.transactions.len()
    }

    /// Finish the run and return every sealed record in input order
    ///
    /// A record still open at end of input was never terminated and is
    /// dropped.
    pub fn finish(mut self) -> ParseOutcome {
        if !self.current.is_empty() {
            self.stats.discarded_trailing = true;
            warn!(
                "Discarding unterminated transaction at end of input: {:?}",
                self.current
            );
        }
        ParseOutcome {
            transactions: self.transactions,
            stats: self.stats,
        }
    }
}

/// Split text on `\r\n`, `\r` or `\n`
///
/// Like [`str::lines`], a final line ending does not start an extra empty
/// line. Old Mac exports end lines with a bare `\r`.
pub fn split_lines(content: &str) -> impl Iterator<Item = &str> {
    let mut rest = content;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(['\r', '\n']) {
            Some(end) => {
                let line = &rest[..end];
                let width = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[end + width..];
                Some(line)
            }
            None => Some(std::mem::take(&mut rest)),
        }
    })
}

/// Parse a whole QIF document held in memory
///
/// # Examples
///
/// ```
/// use qif_convert::core::parse_qif;
///
/// let outcome = parse_qif("!Type:Bank\nD01/05/2024\nT-50.00\n^\n");
/// assert_eq!(outcome.transactions.len(), 1);
/// assert_eq!(outcome.transactions[0].date, "01-05-2024");
/// assert_eq!(outcome.transactions[0].account_type, "Bank");
/// ```
pub fn parse_qif(content: &str) -> ParseOutcome {
    let mut assembler = TransactionAssembler::new();
    for line in split_lines(content) {
        assembler.push_line(line);
    }
    assembler.finish()
}
