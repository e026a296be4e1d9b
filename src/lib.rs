//! Track daily spending and calorie intake against a limit.
//!
//! Both `CashCalculator` and `CaloriesCalculator` wrap the shared `Calculator`, which keeps the
//! records and answers the "today" and "last 7 days" totals through the `Tracker` trait.

pub mod args;
mod calculator;
mod calories;
mod cash;
pub mod commands;
mod config;
mod error;
mod import;
pub mod model;
mod utils;

pub use calculator::{Calculator, OverflowError, Tracker, WEEK_DAYS};
pub use calories::{CaloriesCalculator, STOP_EATING};
pub use cash::{CashCalculator, NO_MONEY};
pub use config::Config;
pub use error::Error;
pub use error::Result;
pub use import::{load_records, parse_records};
pub use model::{Currency, RateError, Rates, Record};
