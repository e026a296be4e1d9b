//! The aggregation base shared by the cash and calorie calculators.
//!
//! A `Calculator` keeps every record it is given, in arrival order, along with a running total per
//! calendar date. The running totals are updated when a record is added so that the "today" and
//! "last 7 days" queries never rescan the full record list.

use crate::model::{today, Record};
use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::fmt;
use std::fmt::{Display, Formatter};
use tracing::trace;

/// Number of calendar days in the trailing week window, today included.
pub const WEEK_DAYS: u64 = 7;

/// Holds a daily limit and the records counted against it.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Calculator {
    limit: Decimal,
    records: Vec<Record>,
    daily_totals: BTreeMap<NaiveDate, Decimal>,
}

impl Calculator {
    pub fn new(limit: impl Into<Decimal>) -> Self {
        Self {
            limit: limit.into(),
            records: Vec::new(),
            daily_totals: BTreeMap::new(),
        }
    }

    pub fn limit(&self) -> Decimal {
        self.limit
    }

    /// All records in the order they were added.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Appends `record`. Nothing is stored if its date's running total would overflow.
    pub fn add_record(&mut self, record: Record) -> Result<(), OverflowError> {
        trace!(
            "Adding record of {} on {} ('{}')",
            record.amount(),
            record.date(),
            record.comment()
        );
        let total = self
            .stats_on(record.date())
            .checked_add(record.amount())
            .ok_or(OverflowError::new("adding a record"))?;
        self.daily_totals.insert(record.date(), total);
        self.records.push(record);
        Ok(())
    }

    /// The total of all records dated `date`.
    pub fn stats_on(&self, date: NaiveDate) -> Decimal {
        self.daily_totals.get(&date).copied().unwrap_or_default()
    }

    /// The total of all records dated within the seven days ending on `date`, inclusive.
    /// Records dated after `date` are not counted.
    pub fn week_stats_ending(&self, date: NaiveDate) -> Result<Decimal, OverflowError> {
        let start = date
            .checked_sub_days(Days::new(WEEK_DAYS - 1))
            .unwrap_or(NaiveDate::MIN);
        self.daily_totals
            .range(start..=date)
            .try_fold(Decimal::ZERO, |sum, (_, v)| sum.checked_add(*v))
            .ok_or(OverflowError::new("summing the week"))
    }
}

/// Shared behavior of anything that counts records against a daily limit.
///
/// Implementors only need to expose their inner `Calculator`.
pub trait Tracker {
    fn calculator(&self) -> &Calculator;

    fn calculator_mut(&mut self) -> &mut Calculator;

    fn limit(&self) -> Decimal {
        self.calculator().limit()
    }

    fn records(&self) -> &[Record] {
        self.calculator().records()
    }

    fn add_record(&mut self, record: Record) -> Result<(), OverflowError> {
        self.calculator_mut().add_record(record)
    }

    /// The total recorded for the current date.
    fn today_stats(&self) -> Decimal {
        self.calculator().stats_on(today())
    }

    /// The total recorded over the last seven days, today included.
    fn week_stats(&self) -> Result<Decimal, OverflowError> {
        self.calculator().week_stats_ending(today())
    }

    /// The limit minus today's total. Negative when the limit has been exceeded.
    fn today_remained(&self) -> Result<Decimal, OverflowError> {
        self.limit()
            .checked_sub(self.today_stats())
            .ok_or(OverflowError::new("subtracting today's total from the limit"))
    }
}

impl Tracker for Calculator {
    fn calculator(&self) -> &Calculator {
        self
    }

    fn calculator_mut(&mut self) -> &mut Calculator {
        self
    }
}

/// An error that occurs when a total falls outside the range of `Decimal`.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct OverflowError {
    operation: &'static str,
}

impl OverflowError {
    pub(crate) fn new(operation: &'static str) -> Self {
        Self { operation }
    }

    /// What was being computed when the overflow happened.
    pub fn operation(&self) -> &'static str {
        self.operation
    }
}

impl Display for OverflowError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "amount overflow while {}", self.operation)
    }
}

impl std::error::Error for OverflowError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::days_ago;

    #[test]
    fn test_empty_calculator_is_zero() {
        let calc = Calculator::new(1000);
        assert_eq!(calc.today_stats(), Decimal::ZERO);
        assert_eq!(calc.week_stats().unwrap(), Decimal::ZERO);
        assert_eq!(calc.today_remained().unwrap(), Decimal::from(1000));
    }

    #[test]
    fn test_today_stats_sums_only_today() {
        let mut calc = Calculator::new(1000);
        calc.add_record(Record::new(145, "coffee")).unwrap();
        calc.add_record(Record::new(300, "lunch")).unwrap();
        calc.add_record(Record::on(3000, "rent", days_ago(1))).unwrap();
        assert_eq!(calc.today_stats(), Decimal::from(445));
    }

    #[test]
    fn test_past_record_does_not_change_today() {
        let mut calc = Calculator::new(1000);
        calc.add_record(Record::new(100, "bread")).unwrap();
        let before = calc.today_stats();
        calc.add_record(Record::on(900, "old", days_ago(3))).unwrap();
        assert_eq!(calc.today_stats(), before);
    }

    #[test]
    fn test_week_boundaries() {
        let mut calc = Calculator::new(1000);
        calc.add_record(Record::new(1, "today")).unwrap();
        calc.add_record(Record::on(10, "six days ago", days_ago(6))).unwrap();
        calc.add_record(Record::on(100, "seven days ago", days_ago(7))).unwrap();
        assert_eq!(calc.week_stats().unwrap(), Decimal::from(11));
    }

    #[test]
    fn test_week_excludes_future() {
        let mut calc = Calculator::new(1000);
        let tomorrow = today().checked_add_days(Days::new(1)).unwrap();
        calc.add_record(Record::on(500, "prepaid", tomorrow)).unwrap();
        calc.add_record(Record::new(20, "snack")).unwrap();
        assert_eq!(calc.week_stats().unwrap(), Decimal::from(20));
        assert_eq!(calc.today_stats(), Decimal::from(20));
    }

    #[test]
    fn test_negative_amounts_offset() {
        let mut calc = Calculator::new(1000);
        calc.add_record(Record::new(500, "shoes")).unwrap();
        calc.add_record(Record::new(-200, "returned")).unwrap();
        assert_eq!(calc.today_stats(), Decimal::from(300));
        assert_eq!(calc.today_remained().unwrap(), Decimal::from(700));
    }

    #[test]
    fn test_records_keep_arrival_order() {
        let mut calc = Calculator::new(0);
        calc.add_record(Record::on(1, "a", days_ago(2))).unwrap();
        calc.add_record(Record::new(2, "b")).unwrap();
        calc.add_record(Record::new(2, "b")).unwrap();
        let comments: Vec<&str> = calc.records().iter().map(|r| r.comment()).collect();
        assert_eq!(comments, vec!["a", "b", "b"]);
    }

    #[test]
    fn test_anchored_queries() {
        let anchor = NaiveDate::from_ymd_opt(2019, 3, 8).unwrap();
        let mut calc = Calculator::new(0);
        calc.add_record(Record::dated(5, "", "08.03.2019").unwrap()).unwrap();
        calc.add_record(Record::dated(7, "", "02.03.2019").unwrap()).unwrap();
        calc.add_record(Record::dated(11, "", "01.03.2019").unwrap()).unwrap();
        calc.add_record(Record::dated(13, "", "09.03.2019").unwrap()).unwrap();
        assert_eq!(calc.stats_on(anchor), Decimal::from(5));
        assert_eq!(calc.week_stats_ending(anchor).unwrap(), Decimal::from(12));
    }

    #[test]
    fn test_week_near_minimum_date() {
        let mut calc = Calculator::new(0);
        calc.add_record(Record::on(3, "", NaiveDate::MIN)).unwrap();
        assert_eq!(calc.week_stats_ending(NaiveDate::MIN).unwrap(), Decimal::from(3));
    }

    #[test]
    fn test_add_record_overflow_is_rejected() {
        let mut calc = Calculator::new(0);
        calc.add_record(Record::new(Decimal::MAX, "a")).unwrap();
        let err = calc.add_record(Record::new(Decimal::MAX, "b")).unwrap_err();
        assert_eq!(err.operation(), "adding a record");
        assert!(err.to_string().contains("overflow"));
        // the rejected record is not kept
        assert_eq!(calc.records().len(), 1);
        assert_eq!(calc.today_stats(), Decimal::MAX);
    }

    #[test]
    fn test_week_sum_overflow() {
        let mut calc = Calculator::new(0);
        calc.add_record(Record::new(Decimal::MAX, "today")).unwrap();
        calc.add_record(Record::on(Decimal::MAX, "yesterday", days_ago(1)))
            .unwrap();
        assert!(calc.week_stats().is_err());
    }

    #[test]
    fn test_today_remained_overflow() {
        let mut calc = Calculator::new(Decimal::MIN);
        calc.add_record(Record::new(Decimal::MAX, "too much")).unwrap();
        let err = calc.today_remained().unwrap_err();
        assert_eq!(err.operation(), "subtracting today's total from the limit");
    }
}
