use crate::args::{CaloriesArgs, CashArgs};
use crate::calculator::Tracker;
use crate::commands::Out;
use crate::import::load_records;
use crate::{CaloriesCalculator, CashCalculator, Config, OverflowError, Result};
use anyhow::Context;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

/// The numbers behind a report message.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct Summary {
    pub limit: Decimal,
    pub records: usize,
    pub today: Decimal,
    pub week: Decimal,
    pub remained: Decimal,
}

impl Summary {
    fn new(tracker: &impl Tracker) -> std::result::Result<Self, OverflowError> {
        Ok(Self {
            limit: tracker.limit(),
            records: tracker.records().len(),
            today: tracker.today_stats(),
            week: tracker.week_stats()?,
            remained: tracker.today_remained()?,
        })
    }
}

/// Loads the records file and reports today's remaining cash in the requested currency.
pub async fn cash(config: Config, args: CashArgs) -> Result<Out<Summary>> {
    let rates = config
        .rates()?
        .overridden(args.usd_rate(), args.euro_rate())
        .context("Invalid exchange rate override")?;
    let limit = args.limit().unwrap_or_else(|| config.cash_limit());
    debug!("Cash limit {limit}, rates {rates:?}");

    let mut calculator = CashCalculator::new(limit).with_rates(rates);
    for record in load_records(args.records()).await? {
        calculator
            .add_record(record)
            .context("Unable to total the spending records")?;
    }

    let summary = Summary::new(&calculator)?;
    let message = format!(
        "{} Spent today: {}, last 7 days: {}.",
        calculator.today_cash_remained(args.currency())?,
        summary.today,
        summary.week
    );
    Ok(Out::new(message, summary))
}

/// Loads the records file and reports how many calories are left for today.
pub async fn calories(config: Config, args: CaloriesArgs) -> Result<Out<Summary>> {
    let limit = args.limit().unwrap_or_else(|| config.calories_limit());
    debug!("Calories limit {limit}");

    let mut calculator = CaloriesCalculator::new(limit);
    for record in load_records(args.records()).await? {
        calculator
            .add_record(record)
            .context("Unable to total the calorie records")?;
    }

    let summary = Summary::new(&calculator)?;
    let message = format!(
        "{} Eaten today: {} kCal, last 7 days: {} kCal.",
        calculator.calories_remained()?,
        summary.today,
        summary.week
    );
    Ok(Out::new(message, summary))
}
