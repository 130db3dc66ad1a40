//! Report CLI commands
//!
//! Each handler assembles a snapshot, calls the matching insight
//! functions, and prints the formatted result.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{
    format_alerts, format_breakdown, format_budget_overview, format_daily_check, format_goals,
    format_health, format_recommendations, format_summary, format_top_categories, format_trends,
    TrendRow,
};
use crate::error::{FinsightError, FinsightResult};
use crate::insights::{
    active_alerts, burn_rate, category_breakdown, classify_trend, health_score, monthly_summary,
    month_over_month, overview, project_goal, recommendations, top_categories,
};
use crate::models::{Category, ExpenseCategory, Money, Period, Snapshot, TxKind};
use crate::storage::Storage;

use super::{resolve_period, today};

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Income, expense, savings, and burn rate for a period
    Summary {
        /// Period ("2025-01", "current", "last"); default current month
        #[arg(short, long)]
        period: Option<String>,
    },

    /// Category breakdown for a period
    Breakdown {
        /// Period
        #[arg(short, long)]
        period: Option<String>,
        /// "expense" (default) or "income"
        #[arg(short, long, default_value = "expense")]
        kind: String,
        /// Show only the top N categories
        #[arg(short, long)]
        top: Option<usize>,
    },

    /// Budget status for a period
    Budgets {
        /// Period
        #[arg(short, long)]
        period: Option<String>,
    },

    /// Month-over-month category trends
    Trends {
        /// Period
        #[arg(short, long)]
        period: Option<String>,
        /// Periods per trend window (default from settings)
        #[arg(short, long)]
        window: Option<usize>,
    },

    /// Financial health score
    Health {
        /// Period
        #[arg(short, long)]
        period: Option<String>,
    },

    /// Goals with projections
    Goals,
}

/// Handle a report command
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> FinsightResult<()> {
    let snapshot = storage.snapshot()?;
    let today = today();

    match cmd {
        ReportCommands::Summary { period } => {
            let period = resolve_period(period.as_deref())?;
            tracing::debug!(%period, "generating summary report");
            let summary = monthly_summary(&snapshot, period);
            let burn = burn_rate(&snapshot, period, today);
            print!("{}", format_summary(&summary, &burn));

            let top = top_categories(&snapshot, period, TxKind::Expense, settings.top_categories);
            print!("{}", format_top_categories(&top));
        }

        ReportCommands::Breakdown { period, kind, top } => {
            let period = resolve_period(period.as_deref())?;
            let kind: TxKind = kind.parse().map_err(
                |e: crate::models::category::CategoryParseError| FinsightError::Parse(e.to_string()),
            )?;

            let breakdown = match top {
                Some(n) => top_categories(&snapshot, period, kind, n),
                None => category_breakdown(&snapshot, period, kind),
            };
            print!("{}", format_breakdown(period, &breakdown));
        }

        ReportCommands::Budgets { period } => {
            let period = resolve_period(period.as_deref())?;
            print!("{}", format_budget_overview(&overview(&snapshot, period)));
        }

        ReportCommands::Trends { period, window } => {
            let period = resolve_period(period.as_deref())?;
            let window = window.unwrap_or(settings.trend_window);
            print!("{}", format_trends(period, &trend_rows(&snapshot, period, window)));
        }

        ReportCommands::Health { period } => {
            let period = resolve_period(period.as_deref())?;
            print!("{}", format_health(period, &health_score(&snapshot, period)));
        }

        ReportCommands::Goals => {
            let projected: Vec<_> = snapshot
                .goals()
                .iter()
                .map(|goal| (goal.clone(), project_goal(&snapshot, goal, today)))
                .collect();
            print!("{}", format_goals(&projected));
        }
    }

    Ok(())
}

/// Build trend rows for every expense category active this or last period
fn trend_rows(snapshot: &Snapshot, period: Period, window: usize) -> Vec<TrendRow> {
    let current_totals = category_breakdown(snapshot, period, TxKind::Expense);
    let previous_totals = category_breakdown(snapshot, period.prev(), TxKind::Expense);

    let total_for = |breakdown: &[crate::insights::CategoryBreakdown], category: Category| {
        breakdown
            .iter()
            .find(|b| b.category == category)
            .map(|b| b.total)
            .unwrap_or(Money::zero())
    };

    ExpenseCategory::ALL
        .iter()
        .map(|&c| Category::Expense(c))
        .filter(|&category| {
            !total_for(&current_totals, category).is_zero()
                || !total_for(&previous_totals, category).is_zero()
        })
        .map(|category| TrendRow {
            category,
            previous: total_for(&previous_totals, category),
            current: total_for(&current_totals, category),
            change: month_over_month(snapshot, category, period),
            trend: classify_trend(snapshot, category, period, window),
        })
        .collect()
}

/// Show alert listing for a period
pub fn handle_alerts(storage: &Storage, period: Option<String>) -> FinsightResult<()> {
    let snapshot = storage.snapshot()?;
    let period = resolve_period(period.as_deref())?;
    let alerts = active_alerts(&snapshot, period, today());
    print!("{}", format_alerts(&alerts));
    Ok(())
}

/// Show ranked recommendations for a period
pub fn handle_recommend(
    storage: &Storage,
    period: Option<String>,
    top: Option<usize>,
) -> FinsightResult<()> {
    let snapshot = storage.snapshot()?;
    let period = resolve_period(period.as_deref())?;

    let mut recs = recommendations(&snapshot, period);
    if let Some(top) = top {
        recs.truncate(top);
    }
    print!("{}", format_recommendations(&recs));
    Ok(())
}

/// Daily financial check: today's spending against the daily slice of the
/// total monthly budget, plus the most urgent alerts
pub fn handle_check(storage: &Storage) -> FinsightResult<()> {
    let snapshot = storage.snapshot()?;
    let today = today();
    let period = Period::containing(today);

    let today_spending: Money = snapshot
        .expenses_in(period)
        .filter(|txn| txn.date == today)
        .map(|txn| txn.amount)
        .sum();

    let days = period.days_in_month();
    let total_budget = overview(&snapshot, period).total_budget;
    let (daily_budget, _) = total_budget.div_rem(days as i64);

    let alerts = active_alerts(&snapshot, period, today);
    print!(
        "{}",
        format_daily_check(today, today_spending, daily_budget, &alerts)
    );
    Ok(())
}
