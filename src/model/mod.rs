//! Types that represent the core data model, such as `Record` and `Currency`.
mod currency;
mod record;

pub use currency::{Currency, CurrencyError, RateError, Rates, EURO_RATE, USD_RATE};
pub use record::{parse_date, today, Record, RecordDateError, DATE_FORMAT};
