//! Report display formatting
//!
//! Renders the derived structures of the insights engine as fixed-width
//! terminal tables. Everything here consumes value objects and produces a
//! String; nothing reaches back into storage.

use crate::insights::{
    Alert, BudgetOverview, BurnRate, CategoryBreakdown, Completion, GoalProjection, HealthScore,
    MonthChange, MonthlySummary, Recommendation, RequiredSavings, Severity, Trend,
};
use crate::models::{Category, Goal, Money, Period};

/// A ten-segment progress bar, capped at 100%
fn bar(bps: i64) -> String {
    let filled = (bps.clamp(0, 10_000) / 1_000) as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(10 - filled))
}

/// One-decimal percent, truncated in integer math so 9975 bps is always
/// "99.7%" regardless of float rounding
fn percent(bps: i64) -> String {
    let sign = if bps < 0 { "-" } else { "" };
    let abs = bps.abs();
    format!("{}{}.{}%", sign, abs / 100, (abs % 100) / 10)
}

fn signed_percent(change: MonthChange) -> String {
    match change {
        MonthChange::Change(bps) if bps >= 0 => format!("+{}", percent(bps)),
        MonthChange::Change(bps) => percent(bps),
        MonthChange::NoBaseline => "n/a".to_string(),
    }
}

/// Format a monthly summary with its burn rate
pub fn format_summary(summary: &MonthlySummary, burn: &BurnRate) -> String {
    let mut output = String::new();

    output.push_str(&format!("Summary for {}\n", summary.period));
    output.push_str(&format!("{:-<40}\n", ""));
    output.push_str(&format!("  {:<18} {:>16}\n", "Total Income", summary.total_income.to_string()));
    output.push_str(&format!("  {:<18} {:>16}\n", "Total Expense", summary.total_expense.to_string()));
    output.push_str(&format!("  {:<18} {:>16}\n", "Net Savings", summary.net_savings.to_string()));
    output.push_str(&format!("  {:<18} {:>16}\n", "Savings Rate", percent(summary.savings_rate_bps)));

    // Round the daily average up when the remainder is past half a day
    let rounded = if burn.remainder.paisa() * 2 >= burn.days as i64 {
        burn.per_day + Money::from_paisa(1)
    } else {
        burn.per_day
    };
    output.push_str(&format!(
        "  {:<18} {:>16}  (over {} days)\n",
        "Daily Burn Rate",
        rounded.to_string(),
        burn.days,
    ));

    output
}

/// Format a category breakdown table
pub fn format_breakdown(period: Period, breakdown: &[CategoryBreakdown]) -> String {
    if breakdown.is_empty() {
        return format!("No data for {}.\n", period);
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<15}  {:>14}  {:>7}  {:>5}\n",
        "Category", "Total", "Share", "Count"
    ));
    output.push_str(&format!("{:-<15}  {:->14}  {:->7}  {:->5}\n", "", "", "", ""));

    for entry in breakdown {
        output.push_str(&format!(
            "{:<15}  {:>14}  {:>7}  {:>5}\n",
            entry.category.as_str(),
            entry.total.to_string(),
            percent(entry.share_bps),
            entry.transaction_count,
        ));
    }

    let total: Money = breakdown.iter().map(|b| b.total).sum();
    output.push_str(&format!("{:-<15}  {:->14}  {:->7}  {:->5}\n", "", "", "", ""));
    output.push_str(&format!("{:<15}  {:>14}\n", "TOTAL", total.to_string()));

    output
}

/// Format a short top-spending-categories list for the summary report
pub fn format_top_categories(top: &[CategoryBreakdown]) -> String {
    if top.is_empty() {
        return String::new();
    }

    let mut output = String::from("\nTop spending categories:\n");
    for (i, entry) in top.iter().enumerate() {
        output.push_str(&format!(
            "  {}. {:<15} {:>14}  ({})\n",
            i + 1,
            entry.category.as_str(),
            entry.total.to_string(),
            percent(entry.share_bps),
        ));
    }
    output
}

/// Format the budget overview table plus its unbudgeted tail
pub fn format_budget_overview(overview: &BudgetOverview) -> String {
    if overview.rows.is_empty() && overview.unbudgeted.is_empty() {
        return "No budgets set yet.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!("Budget status for {}\n", overview.period));
    output.push_str(&format!(
        "{:<15}  {:>14}  {:>14}  {:>14}  {:>7}  {:<8}  {}\n",
        "Category", "Budget", "Spent", "Remaining", "Used", "Status", "Progress"
    ));
    output.push_str(&format!("{:-<92}\n", ""));

    for row in &overview.rows {
        output.push_str(&format!(
            "{:<15}  {:>14}  {:>14}  {:>14}  {:>7}  {:<8}  {}\n",
            row.category.as_str(),
            row.limit.to_string(),
            row.spent.to_string(),
            row.remaining.to_string(),
            percent(row.utilization_bps),
            row.status.as_str(),
            bar(row.utilization_bps),
        ));
    }

    if !overview.rows.is_empty() {
        output.push_str(&format!("{:-<92}\n", ""));
        output.push_str(&format!(
            "{:<15}  {:>14}  {:>14}  {:>14}  {:>7}\n",
            "TOTAL",
            overview.total_budget.to_string(),
            overview.total_spent.to_string(),
            (overview.total_budget - overview.total_spent).to_string(),
            percent(overview.overall_utilization_bps),
        ));
        output.push_str(&format!(
            "{} ok | {} warning | {} over\n",
            overview.ok_count, overview.warning_count, overview.over_count,
        ));
    }

    if !overview.unbudgeted.is_empty() {
        output.push_str("\nSpending without a budget:\n");
        for entry in &overview.unbudgeted {
            output.push_str(&format!(
                "  {:<15} {}\n",
                entry.category.as_str(),
                entry.spent,
            ));
        }
    }

    output
}

/// One row of the trends report, assembled by the caller
#[derive(Debug, Clone)]
pub struct TrendRow {
    pub category: Category,
    pub previous: Money,
    pub current: Money,
    pub change: MonthChange,
    pub trend: Trend,
}

/// Format the month-over-month trends table
pub fn format_trends(period: Period, rows: &[TrendRow]) -> String {
    if rows.is_empty() {
        return "Not enough data to show trends.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!("Trends for {} vs {}\n", period, period.prev()));
    output.push_str(&format!(
        "{:<15}  {:>14}  {:>14}  {:>8}  {}\n",
        "Category", "Last Month", "This Month", "Change", "Trend"
    ));
    output.push_str(&format!("{:-<70}\n", ""));

    for row in rows {
        let trend = match row.trend {
            Trend::Increasing => "rising",
            Trend::Decreasing => "falling",
            Trend::Stable => "stable",
            Trend::InsufficientData => "n/a",
        };
        output.push_str(&format!(
            "{:<15}  {:>14}  {:>14}  {:>8}  {}\n",
            row.category.as_str(),
            row.previous.to_string(),
            row.current.to_string(),
            signed_percent(row.change),
            trend,
        ));
    }

    output
}

/// Format the health score breakdown
pub fn format_health(period: Period, score: &HealthScore) -> String {
    let mut output = String::new();

    output.push_str(&format!("Financial health for {}\n", period));
    output.push_str(&format!(
        "{:<22}  {:>5}  {:>4}  {}\n",
        "Component", "Score", "Max", "Level"
    ));
    output.push_str(&format!("{:-<50}\n", ""));

    let rows: [(&str, u8, u8); 4] = [
        ("Savings Rate", score.savings, 30),
        ("Budget Adherence", score.budget_adherence, 25),
        ("Income vs Expenses", score.balance, 25),
        ("Spending Consistency", score.consistency, 20),
    ];
    for (label, value, max) in rows {
        let share_bps = value as i64 * 10_000 / max as i64;
        output.push_str(&format!(
            "{:<22}  {:>5}  {:>4}  {}\n",
            label,
            value,
            max,
            bar(share_bps),
        ));
    }

    output.push_str(&format!("{:-<50}\n", ""));
    output.push_str(&format!(
        "{:<22}  {:>5}  {:>4}  {}\n",
        "Overall",
        score.overall,
        100,
        score.rating,
    ));

    output
}

/// Format the alert list grouped by severity order
pub fn format_alerts(alerts: &[Alert]) -> String {
    if alerts.is_empty() {
        return "No alerts. Your finances are in good shape.\n".to_string();
    }

    let mut output = String::new();
    for alert in alerts {
        let tag = match alert.severity {
            Severity::Critical => "CRITICAL",
            Severity::Warning => "WARNING",
            Severity::Info => "INFO",
            Severity::Success => "SUCCESS",
        };
        output.push_str(&format!("  [{:<8}] {}\n", tag, alert.message));
    }
    output.push_str(&format!("{} alert(s)\n", alerts.len()));

    output
}

/// Format the ranked recommendation list
pub fn format_recommendations(recommendations: &[Recommendation]) -> String {
    if recommendations.is_empty() {
        return "No recommendations right now. Keep it up.\n".to_string();
    }

    let mut output = String::new();
    for (i, rec) in recommendations.iter().enumerate() {
        output.push_str(&format!(
            "  {}. {} (impact {})\n",
            i + 1,
            rec.text,
            rec.estimated_impact,
        ));
    }

    output
}

/// Format goals with their projections
pub fn format_goals(goals: &[(Goal, GoalProjection)]) -> String {
    if goals.is_empty() {
        return "No goals set yet.\n".to_string();
    }

    let mut output = String::new();
    for (goal, projection) in goals {
        output.push_str(&format!("{} ({})\n", goal.name, goal.kind));
        output.push_str(&format!(
            "  Progress:  {} {}  ({} / {})\n",
            bar(projection.progress_bps),
            percent(projection.progress_bps),
            goal.saved,
            goal.target,
        ));

        match projection.required_monthly {
            RequiredSavings::PerMonth(amount) => {
                output.push_str(&format!("  Required:  {}/month to meet the deadline\n", amount));
            }
            RequiredSavings::Overdue => {
                output.push_str("  Required:  overdue\n");
            }
        }

        match projection.expected_completion {
            Completion::By(date) => {
                output.push_str(&format!("  Expected:  {}\n", date.format("%Y-%m-%d")));
            }
            Completion::NotOnTrack => {
                output.push_str("  Expected:  n/a (no savings at the current rate)\n");
            }
        }

        let status = if projection.on_track {
            "on track"
        } else if projection.days_remaining < 0 {
            "past deadline"
        } else {
            "behind schedule"
        };
        output.push_str(&format!(
            "  Deadline:  {} ({} days) - {}\n\n",
            goal.deadline.format("%Y-%m-%d"),
            projection.days_remaining,
            status,
        ));
    }

    output
}

/// Format the daily financial check
pub fn format_daily_check(
    today: chrono::NaiveDate,
    today_spending: Money,
    daily_budget: Money,
    alerts: &[Alert],
) -> String {
    let mut output = String::new();
    let remaining = daily_budget - today_spending;

    output.push_str(&format!("Daily check for {}\n", today.format("%Y-%m-%d")));
    output.push_str(&format!("{:-<40}\n", ""));
    output.push_str(&format!(
        "  {:<18} {:>16}\n",
        "Spent Today",
        today_spending.to_string()
    ));
    output.push_str(&format!(
        "  {:<18} {:>16}\n",
        "Daily Budget",
        daily_budget.to_string()
    ));
    let status = if remaining.is_negative() { "over" } else { "ok" };
    output.push_str(&format!(
        "  {:<18} {:>16}  ({})\n",
        "Remaining",
        remaining.to_string(),
        status,
    ));

    if !alerts.is_empty() {
        output.push_str(&format!("\nActive alerts: {}\n", alerts.len()));
        for alert in alerts.iter().take(3) {
            output.push_str(&format!("  - {}\n", alert.message));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insights::{health_score, monthly_summary, overview, BurnRate};
    use crate::models::{
        Budget, Category, ExpenseCategory, GoalKind, IncomeCategory, Snapshot, Transaction,
    };
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_snapshot() -> Snapshot {
        Snapshot::new(
            vec![
                Transaction::new(
                    date(2025, 1, 1),
                    Category::Income(IncomeCategory::Salary),
                    Money::from_paisa(500000),
                ),
                Transaction::with_description(
                    date(2025, 1, 10),
                    Category::Expense(ExpenseCategory::Food),
                    Money::from_paisa(1250),
                    "lunch",
                ),
            ],
            vec![Budget::monthly(ExpenseCategory::Food, Money::from_paisa(10000))],
            vec![],
        )
    }

    fn jan() -> Period {
        Period::new(2025, 1).unwrap()
    }

    #[test]
    fn test_format_summary() {
        let summary = monthly_summary(&sample_snapshot(), jan());
        let burn = BurnRate {
            per_day: Money::from_paisa(125),
            remainder: Money::zero(),
            days: 10,
        };

        let output = format_summary(&summary, &burn);
        assert!(output.contains("Rs 5000.00"));
        assert!(output.contains("99.7%"));
        assert!(output.contains("over 10 days"));
    }

    #[test]
    fn test_format_budget_overview() {
        let overview = overview(&sample_snapshot(), jan());
        let output = format_budget_overview(&overview);
        assert!(output.contains("food"));
        assert!(output.contains("TOTAL"));
        assert!(output.contains("1 ok"));
    }

    #[test]
    fn test_format_budget_overview_empty() {
        let snapshot = Snapshot::default();
        let output = format_budget_overview(&overview(&snapshot, jan()));
        assert!(output.contains("No budgets set yet"));
    }

    #[test]
    fn test_format_health() {
        let score = health_score(&sample_snapshot(), jan());
        let output = format_health(jan(), &score);
        assert!(output.contains("Savings Rate"));
        assert!(output.contains("Overall"));
        assert!(output.contains("Excellent"));
    }

    #[test]
    fn test_format_goals() {
        let goal = Goal::new(
            "Vacation",
            GoalKind::Vacation,
            Money::from_paisa(100000),
            date(2025, 12, 31),
            date(2025, 1, 1),
        );
        let projection = crate::insights::project_goal(&sample_snapshot(), &goal, date(2025, 6, 15));

        let output = format_goals(&[(goal, projection)]);
        assert!(output.contains("Vacation"));
        assert!(output.contains("0.0%"));
    }

    #[test]
    fn test_bar_clamps() {
        assert_eq!(bar(0), "[----------]");
        assert_eq!(bar(5000), "[#####-----]");
        assert_eq!(bar(25_000), "[##########]");
        assert_eq!(bar(-100), "[----------]");
    }
}
