//! Calorie tracking: reports how much may still be eaten today.

use crate::calculator::{Calculator, OverflowError, Tracker};
use rust_decimal::Decimal;
use tracing::debug;

/// The message used once today's calorie limit is reached.
pub const STOP_EATING: &str = "stop eating!";

/// Counts calories eaten against a daily limit.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct CaloriesCalculator {
    calculator: Calculator,
}

impl CaloriesCalculator {
    pub fn new(limit: impl Into<Decimal>) -> Self {
        Self {
            calculator: Calculator::new(limit),
        }
    }

    /// Describes how many calories may still be eaten today.
    pub fn calories_remained(&self) -> Result<String, OverflowError> {
        let remained = self.today_remained()?;
        debug!("Calories remained today: {remained}");
        Ok(if remained > Decimal::ZERO {
            format!(
                "today you may still eat something more, but with total calories no more than {} kCal.",
                remained.normalize()
            )
        } else {
            STOP_EATING.to_string()
        })
    }
}

impl Tracker for CaloriesCalculator {
    fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    fn calculator_mut(&mut self) -> &mut Calculator {
        &mut self.calculator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;
    use crate::test::days_ago;
    use std::str::FromStr;

    #[test]
    fn test_calories_left() {
        let mut calories = CaloriesCalculator::new(2000);
        calories.add_record(Record::new(500, "pizza")).unwrap();
        assert_eq!(
            calories.calories_remained().unwrap(),
            "today you may still eat something more, but with total calories no more than 1500 kCal."
        );
    }

    #[test]
    fn test_limit_reached() {
        let mut calories = CaloriesCalculator::new(2000);
        calories.add_record(Record::new(1200, "breakfast")).unwrap();
        calories.add_record(Record::new(800, "dinner")).unwrap();
        assert_eq!(calories.calories_remained().unwrap(), STOP_EATING);
    }

    #[test]
    fn test_limit_exceeded() {
        let mut calories = CaloriesCalculator::new(2000);
        calories.add_record(Record::new(2500, "feast")).unwrap();
        assert_eq!(calories.calories_remained().unwrap(), STOP_EATING);
    }

    #[test]
    fn test_nothing_eaten_yet() {
        let mut calories = CaloriesCalculator::new(1800);
        calories.add_record(Record::on(1700, "yesterday", days_ago(1))).unwrap();
        assert!(calories.calories_remained().unwrap().ends_with("no more than 1800 kCal."));
        assert_eq!(calories.week_stats().unwrap(), Decimal::from(1700));
    }

    #[test]
    fn test_fractional_calories() {
        let mut calories = CaloriesCalculator::new(100);
        let apple = Decimal::from_str("20.50").unwrap();
        calories.add_record(Record::new(apple, "apple")).unwrap();
        assert!(calories.calories_remained().unwrap().ends_with("no more than 79.5 kCal."));
    }

    #[test]
    fn test_remained_overflow_is_an_error() {
        let mut calories = CaloriesCalculator::new(Decimal::MIN);
        calories.add_record(Record::new(Decimal::MAX, "too much")).unwrap();
        assert!(calories.calories_remained().is_err());
    }
}
