//! Currencies a cash balance can be reported in, and the rates used to convert into them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::fmt::{Debug, Display, Formatter};

/// Rubles per US dollar unless overridden.
pub const USD_RATE: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

/// Rubles per euro unless overridden.
pub const EURO_RATE: Decimal = Decimal::from_parts(70, 0, 0, false, 0);

/// A reporting currency, parsed case-sensitively from its lowercase code.
///
/// ```
/// # use daily_limits::Currency;
/// # use std::str::FromStr;
/// assert_eq!(Currency::from_str("eur").unwrap(), Currency::Eur);
/// assert!(Currency::from_str("EUR").is_err());
/// ```
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    Usd,
    Eur,
    Rub,
}

serde_plain::derive_display_from_serialize!(Currency);
serde_plain::derive_fromstr_from_deserialize!(Currency, |e| -> CurrencyError { CurrencyError(e) });

impl Currency {
    /// The label used when printing an amount in this currency.
    pub fn label(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "Euro",
            Currency::Rub => "руб",
        }
    }

    /// How many local units make up one unit of this currency.
    pub fn rate(&self, rates: &Rates) -> Decimal {
        match self {
            Currency::Usd => rates.usd,
            Currency::Eur => rates.euro,
            Currency::Rub => Decimal::ONE,
        }
    }
}

/// Exchange rates in local currency per foreign unit.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Rates {
    usd: Decimal,
    euro: Decimal,
}

impl Default for Rates {
    fn default() -> Self {
        Self {
            usd: USD_RATE,
            euro: EURO_RATE,
        }
    }
}

impl Rates {
    /// Both rates must be greater than zero.
    ///
    /// ```
    /// # use daily_limits::Rates;
    /// assert!(Rates::new(61, 72).is_ok());
    /// assert!(Rates::new(0, 72).is_err());
    /// ```
    pub fn new(usd: impl Into<Decimal>, euro: impl Into<Decimal>) -> Result<Self, RateError> {
        let usd = usd.into();
        let euro = euro.into();
        if usd <= Decimal::ZERO {
            return Err(RateError::new(Currency::Usd, usd));
        }
        if euro <= Decimal::ZERO {
            return Err(RateError::new(Currency::Eur, euro));
        }
        Ok(Self { usd, euro })
    }

    /// Replaces whichever rates are given, keeping the rest.
    pub fn overridden(
        self,
        usd: Option<Decimal>,
        euro: Option<Decimal>,
    ) -> Result<Self, RateError> {
        Self::new(usd.unwrap_or(self.usd), euro.unwrap_or(self.euro))
    }

    pub fn usd(&self) -> Decimal {
        self.usd
    }

    pub fn euro(&self) -> Decimal {
        self.euro
    }
}

/// An error that occurs when an exchange rate is zero or negative.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct RateError {
    currency: Currency,
    rate: Decimal,
}

impl RateError {
    fn new(currency: Currency, rate: Decimal) -> Self {
        Self { currency, rate }
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn rate(&self) -> Decimal {
        self.rate
    }
}

impl Display for RateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "the {} rate must be greater than zero, got {}",
            self.currency, self.rate
        )
    }
}

impl std::error::Error for RateError {}

/// An error that occurs when a currency code is not one of `usd`, `eur` or `rub`.
pub struct CurrencyError(serde_plain::Error);

impl Debug for CurrencyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.0, f)
    }
}

impl Display for CurrencyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported currency: {}", self.0)
    }
}

impl std::error::Error for CurrencyError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.0)
    }
}
