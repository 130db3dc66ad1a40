//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with storage and the insights engine. Handlers are
//! the only place the clock is read; every core call below them gets an
//! explicit period and date.

pub mod budget;
pub mod export;
pub mod goal;
pub mod report;
pub mod transaction;

pub use budget::{handle_budget_command, BudgetCommands};
pub use export::{handle_export_command, ExportCommands};
pub use goal::{handle_goal_command, GoalCommands};
pub use report::{
    handle_alerts, handle_check, handle_recommend, handle_report_command, ReportCommands,
};
pub use transaction::{handle_transaction_command, TransactionCommands};

use chrono::NaiveDate;

use crate::error::{FinsightError, FinsightResult};
use crate::models::{Money, Period};

/// Today's date; the single place the CLI reads the clock
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Resolve an optional period argument: "2025-01", "current", "last",
/// or nothing (current month)
pub fn resolve_period(arg: Option<&str>) -> FinsightResult<Period> {
    match arg {
        None | Some("current") => Ok(Period::containing(today())),
        Some("last") => Ok(Period::containing(today()).prev()),
        Some(s) => Period::parse(s).map_err(|e| FinsightError::Parse(e.to_string())),
    }
}

/// Parse a rupee amount argument that must be positive
pub fn parse_positive_amount(arg: &str) -> FinsightResult<Money> {
    let amount = Money::parse(arg).map_err(|e| FinsightError::Parse(e.to_string()))?;
    if !amount.is_positive() {
        return Err(FinsightError::Validation(format!(
            "Amount must be positive, got {}",
            amount
        )));
    }
    Ok(amount)
}

/// Parse a YYYY-MM-DD date argument
pub fn parse_date(arg: &str) -> FinsightResult<NaiveDate> {
    NaiveDate::parse_from_str(arg, "%Y-%m-%d")
        .map_err(|_| FinsightError::Parse(format!("Invalid date (expected YYYY-MM-DD): {}", arg)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_explicit_period() {
        assert_eq!(
            resolve_period(Some("2025-01")).unwrap(),
            Period::new(2025, 1).unwrap()
        );
        assert!(resolve_period(Some("2025-13")).is_err());
    }

    #[test]
    fn test_resolve_relative_periods() {
        let current = resolve_period(None).unwrap();
        assert_eq!(resolve_period(Some("current")).unwrap(), current);
        assert_eq!(resolve_period(Some("last")).unwrap(), current.prev());
    }

    #[test]
    fn test_parse_positive_amount() {
        assert_eq!(parse_positive_amount("12.50").unwrap().paisa(), 1250);
        assert!(parse_positive_amount("0").is_err());
        assert!(parse_positive_amount("-5").is_err());
        assert!(parse_positive_amount("abc").is_err());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2025-01-15").unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
        );
        assert!(parse_date("15/01/2025").is_err());
    }
}
