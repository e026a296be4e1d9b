//! Money tracking: reports what is left of today's spending limit in a chosen currency.

use crate::calculator::{Calculator, OverflowError, Tracker};
use crate::model::{Currency, Rates};
use rust_decimal::Decimal;
use tracing::debug;

/// The message used when today's balance is exactly zero.
pub const NO_MONEY: &str = "no money left, hang in there";

/// Counts spending, in local currency, against a daily limit.
///
/// ```
/// # use daily_limits::{CashCalculator, Currency, Record, Tracker};
/// let mut cash = CashCalculator::new(1000);
/// cash.add_record(Record::new(800, "groceries"))?;
/// assert_eq!(
///     cash.today_cash_remained(Currency::Usd)?,
///     "today you may still spend up to 3.33 USD."
/// );
/// # Ok::<(), daily_limits::OverflowError>(())
/// ```
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct CashCalculator {
    calculator: Calculator,
    rates: Rates,
}

impl CashCalculator {
    /// Creates a calculator that converts at the default rates.
    pub fn new(limit: impl Into<Decimal>) -> Self {
        Self {
            calculator: Calculator::new(limit),
            rates: Rates::default(),
        }
    }

    /// Replaces the rates used by `today_cash_remained`.
    pub fn with_rates(mut self, rates: Rates) -> Self {
        self.rates = rates;
        self
    }

    pub fn rates(&self) -> &Rates {
        &self.rates
    }

    /// Describes what is left of today's limit, converted into `currency` at this calculator's
    /// rates.
    pub fn today_cash_remained(&self, currency: Currency) -> Result<String, OverflowError> {
        self.today_cash_remained_at(currency, &self.rates)
    }

    /// Same as `today_cash_remained` but converts at the given `rates` for this call only.
    pub fn today_cash_remained_at(
        &self,
        currency: Currency,
        rates: &Rates,
    ) -> Result<String, OverflowError> {
        let remained = self.today_remained_in(currency, rates)?;
        debug!("Cash remained today: {remained} {currency}");
        Ok(cash_message(remained, currency))
    }

    /// What is left of today's limit, converted into `currency`. `Rates` only holds positive
    /// rates, so the division fails only when the quotient is out of range.
    pub fn today_remained_in(
        &self,
        currency: Currency,
        rates: &Rates,
    ) -> Result<Decimal, OverflowError> {
        self.today_remained()?
            .checked_div(currency.rate(rates))
            .ok_or(OverflowError::new("converting into another currency"))
    }
}

impl Tracker for CashCalculator {
    fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    fn calculator_mut(&mut self) -> &mut Calculator {
        &mut self.calculator
    }
}

fn cash_message(remained: Decimal, currency: Currency) -> String {
    let label = currency.label();
    if remained.is_zero() {
        NO_MONEY.to_string()
    } else if remained.is_sign_positive() {
        format!(
            "today you may still spend up to {:.2} {label}.",
            remained.round_dp(2)
        )
    } else {
        format!(
            "{NO_MONEY}: your debt is {:.2} {label}.",
            remained.abs().round_dp(2)
        )
    }
}
