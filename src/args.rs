//! These structs provide the CLI interface for the limits CLI.

use crate::model::Currency;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::convert::Infallible;
use std::fmt::{Display, Formatter};
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::error;
use tracing_subscriber::filter::LevelFilter;

/// limits: track what you spend and eat against a daily limit.
///
/// Records are read from a CSV file with the headers `Amount,Comment,Date`, where `Date` is
/// written as DD.MM.YYYY and may be left blank to mean today. The program reports what is left of
/// today's limit and the total of the last seven days. Nothing is written back to the records
/// file.
#[derive(Debug, Parser, Clone)]
pub struct Args {
    #[clap(flatten)]
    common: Common,

    #[command(subcommand)]
    command: Command,
}

impl Args {
    pub fn new(common: Common, command: Command) -> Self {
        Self { common, command }
    }

    pub fn common(&self) -> &Common {
        &self.common
    }

    pub fn command(&self) -> &Command {
        &self.command
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Create the limits home directory and write an initial config.json into it.
    Init(InitArgs),
    /// Report what is left of today's spending limit.
    Cash(CashArgs),
    /// Report how many calories may still be eaten today.
    Calories(CaloriesArgs),
}

/// Arguments common to all subcommands.
#[derive(Debug, Parser, Clone)]
pub struct Common {
    /// The logging verbosity. One of, from least to most verbose:
    /// off, error, warn, info, debug, trace
    ///
    /// This can be overridden by RUST_LOG.
    #[arg(long, default_value_t = LevelFilter::INFO)]
    log_level: LevelFilter,

    /// The directory holding config.json. Defaults to ~/limits
    #[arg(long, env = "LIMITS_HOME", default_value_t = default_limits_home())]
    limits_home: DisplayPath,
}

impl Common {
    pub fn new(log_level: LevelFilter, limits_home: PathBuf) -> Self {
        Self {
            log_level,
            limits_home: limits_home.into(),
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    pub fn limits_home(&self) -> &DisplayPath {
        &self.limits_home
    }
}

/// (Not shown): Args for the `limits init` command.
#[derive(Debug, Parser, Clone)]
pub struct InitArgs {
    /// Daily spending limit in local currency.
    #[arg(long, default_value_t = Decimal::ZERO)]
    cash_limit: Decimal,

    /// Daily calorie limit.
    #[arg(long, default_value_t = Decimal::ZERO)]
    calories_limit: Decimal,
}

impl InitArgs {
    pub fn new(cash_limit: Decimal, calories_limit: Decimal) -> Self {
        Self {
            cash_limit,
            calories_limit,
        }
    }

    pub fn cash_limit(&self) -> Decimal {
        self.cash_limit
    }

    pub fn calories_limit(&self) -> Decimal {
        self.calories_limit
    }
}

/// (Not shown): Args for the `limits cash` command.
#[derive(Debug, Parser, Clone)]
pub struct CashArgs {
    /// The records CSV file.
    #[arg(long)]
    records: PathBuf,

    /// The currency to report in: usd, eur or rub.
    #[arg(long)]
    currency: Currency,

    /// Overrides the daily spending limit from config.json.
    #[arg(long)]
    limit: Option<Decimal>,

    /// Overrides the rubles per US dollar rate.
    #[arg(long)]
    usd_rate: Option<Decimal>,

    /// Overrides the rubles per euro rate.
    #[arg(long)]
    euro_rate: Option<Decimal>,
}

impl CashArgs {
    pub fn new(
        records: impl Into<PathBuf>,
        currency: Currency,
        limit: Option<Decimal>,
        usd_rate: Option<Decimal>,
        euro_rate: Option<Decimal>,
    ) -> Self {
        Self {
            records: records.into(),
            currency,
            limit,
            usd_rate,
            euro_rate,
        }
    }

    pub fn records(&self) -> &Path {
        &self.records
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn limit(&self) -> Option<Decimal> {
        self.limit
    }

    pub fn usd_rate(&self) -> Option<Decimal> {
        self.usd_rate
    }

    pub fn euro_rate(&self) -> Option<Decimal> {
        self.euro_rate
    }
}

/// (Not shown): Args for the `limits calories` command.
#[derive(Debug, Parser, Clone)]
pub struct CaloriesArgs {
    /// The records CSV file.
    #[arg(long)]
    records: PathBuf,

    /// Overrides the daily calorie limit from config.json.
    #[arg(long)]
    limit: Option<Decimal>,
}

impl CaloriesArgs {
    pub fn new(records: impl Into<PathBuf>, limit: Option<Decimal>) -> Self {
        Self {
            records: records.into(),
            limit,
        }
    }

    pub fn records(&self) -> &Path {
        &self.records
    }

    pub fn limit(&self) -> Option<Decimal> {
        self.limit
    }
}

fn default_limits_home() -> DisplayPath {
    DisplayPath(match dirs::home_dir() {
        Some(home) => home.join("limits"),
        None => {
            error!(
                "There was an error when trying to get your home directory. You can get around \
                this by providing --limits-home or LIMITS_HOME.",
            );
            PathBuf::from("limits")
        }
    })
}

#[derive(Debug, Default, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct DisplayPath(PathBuf);

impl From<PathBuf> for DisplayPath {
    fn from(value: PathBuf) -> Self {
        DisplayPath(value)
    }
}

impl Deref for DisplayPath {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<Path> for DisplayPath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl Display for DisplayPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_string_lossy())
    }
}

impl FromStr for DisplayPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(PathBuf::from(s)))
    }
}

impl DisplayPath {
    pub fn path(&self) -> &Path {
        &self.0
    }
}
