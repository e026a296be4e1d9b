//! The `Record` type: one dated amount with a free-text comment.
//!
//! Whether the amount is money or calories is decided by the calculator that owns the record,
//! not by the record itself.

use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use std::error::Error;
use std::fmt;
use std::fmt::{Debug, Display, Formatter};

/// The textual date format accepted by `Record::dated`, e.g. `08.03.2019`.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Returns the current local calendar date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// A single dated entry.
///
/// # Examples
///
/// ```
/// # use daily_limits::Record;
/// # use chrono::NaiveDate;
/// let record = Record::dated(145, "coffee", "08.11.2019").unwrap();
/// assert_eq!(record.date(), NaiveDate::from_ymd_opt(2019, 11, 8).unwrap());
/// assert_eq!(record.comment(), "coffee");
/// ```
///
/// A malformed date is an error:
/// ```
/// # use daily_limits::Record;
/// assert!(Record::dated(145, "coffee", "2019-11-08").is_err());
/// ```
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Record {
    amount: Decimal,
    comment: String,
    date: NaiveDate,
}

impl Record {
    /// Creates a record dated today.
    pub fn new(amount: impl Into<Decimal>, comment: impl Into<String>) -> Self {
        Self::on(amount, comment, today())
    }

    /// Creates a record for an explicit calendar date.
    pub fn on(amount: impl Into<Decimal>, comment: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            amount: amount.into(),
            comment: comment.into(),
            date,
        }
    }

    /// Creates a record whose date is given as `DD.MM.YYYY` text. Empty text means today.
    pub fn dated(
        amount: impl Into<Decimal>,
        comment: impl Into<String>,
        date: &str,
    ) -> Result<Self, RecordDateError> {
        Ok(Self::on(amount, comment, parse_date(date)?))
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

/// Parses `DD.MM.YYYY` text into a date. Only the empty string means today; surrounding
/// whitespace is an error.
pub fn parse_date(s: &str) -> Result<NaiveDate, RecordDateError> {
    if s.is_empty() {
        return Ok(today());
    }
    if s.trim() != s {
        return Err(RecordDateError {
            text: s.to_string(),
            source: None,
        });
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|source| RecordDateError {
        text: s.to_string(),
        source: Some(source),
    })
}

/// An error that occurs when a record date is not in `DD.MM.YYYY` format.
pub struct RecordDateError {
    text: String,
    source: Option<chrono::ParseError>,
}

impl RecordDateError {
    /// The text that failed to parse.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Debug for RecordDateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordDateError")
            .field("text", &self.text)
            .field("source", &self.source)
            .finish()
    }
}

impl Display for RecordDateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "invalid record date '{}', expected DD.MM.YYYY", self.text)?;
        match &self.source {
            Some(source) => write!(f, ": {source}"),
            None => write!(f, ": unexpected whitespace"),
        }
    }
}

impl std::error::Error for RecordDateError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source.as_ref().map(|e| e as &(dyn Error + 'static))
    }
}
