//! Alert evaluation
//!
//! A single stateless pass over the snapshot that turns threshold breaches
//! into severity-ranked alerts. Nothing is remembered between calls;
//! dismissal or deduplication state belongs to whoever displays these.

use chrono::NaiveDate;

use crate::models::{Category, ExpenseCategory, Period, Snapshot};

use super::aggregate::monthly_summary;
use super::budget::overview;
use super::goal::project_goal;

/// Critical budget alert threshold (90% used)
pub const BUDGET_CRITICAL_BPS: i64 = 9_000;
/// Warning budget alert threshold (80% used)
pub const BUDGET_WARNING_BPS: i64 = 8_000;
/// A single expense above this share of period income is "large"
pub const LARGE_TX_INCOME_BPS: i64 = 2_000;
/// Savings rate below this draws a warning
pub const LOW_SAVINGS_BPS: i64 = 500;
/// Goal deadlines inside this many days draw attention
pub const GOAL_DEADLINE_DAYS: i64 = 30;
/// Goal progress below this near a deadline is worrying (90%)
pub const GOAL_PROGRESS_BPS: i64 = 9_000;
/// Same-category expense count on one day that counts as a spree
pub const SPREE_COUNT: usize = 3;

/// How urgent an alert is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Critical,
    Warning,
    Info,
    Success,
}

impl Severity {
    /// Numeric priority for sorting (higher = more urgent)
    pub fn priority(&self) -> u8 {
        match self {
            Severity::Critical => 4,
            Severity::Warning => 3,
            Severity::Info => 2,
            Severity::Success => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::Warning => "warning",
            Severity::Info => "info",
            Severity::Success => "success",
        }
    }
}

/// What condition tripped an alert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    BudgetCritical,
    BudgetWarning,
    LargeTransaction,
    Deficit,
    LowSavingsRate,
    GoalDeadline,
    GoalCompleted,
    SpendingSpree,
}

/// One evaluated alert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub severity: Severity,
    pub message: String,
    pub category: Option<Category>,
    /// Distance past the rule's threshold, in the rule's native unit
    /// (bps, paisa, or count); the tie-break within a severity band
    pub deviation: i64,
}

/// Evaluate every alert rule for a period.
///
/// Output is sorted by severity, then deviation magnitude descending, so
/// callers can truncate for a "top alerts" view.
pub fn active_alerts(snapshot: &Snapshot, period: Period, today: NaiveDate) -> Vec<Alert> {
    let mut alerts = Vec::new();

    budget_alerts(snapshot, period, &mut alerts);
    large_transaction_alerts(snapshot, period, &mut alerts);
    savings_alerts(snapshot, period, &mut alerts);
    goal_alerts(snapshot, today, &mut alerts);
    spree_alerts(snapshot, today, &mut alerts);

    alerts.sort_by(|a, b| {
        b.severity
            .priority()
            .cmp(&a.severity.priority())
            .then_with(|| b.deviation.cmp(&a.deviation))
            .then_with(|| a.message.cmp(&b.message))
    });

    alerts
}

fn budget_alerts(snapshot: &Snapshot, period: Period, alerts: &mut Vec<Alert>) {
    for row in overview(snapshot, period).rows {
        let bps = row.utilization_bps;
        if bps >= BUDGET_CRITICAL_BPS {
            let message = if row.remaining.is_negative() {
                format!(
                    "{} budget exceeded: {} spent of {} ({} over)",
                    row.category,
                    row.spent,
                    row.limit,
                    (-row.remaining),
                )
            } else {
                format!(
                    "{} at {:.0}% of budget ({} left)",
                    row.category,
                    bps as f64 / 100.0,
                    row.remaining,
                )
            };
            alerts.push(Alert {
                kind: AlertKind::BudgetCritical,
                severity: Severity::Critical,
                message,
                category: Some(Category::Expense(row.category)),
                deviation: bps - BUDGET_CRITICAL_BPS,
            });
        } else if bps >= BUDGET_WARNING_BPS {
            alerts.push(Alert {
                kind: AlertKind::BudgetWarning,
                severity: Severity::Warning,
                message: format!(
                    "{} at {:.0}% of budget ({} left)",
                    row.category,
                    bps as f64 / 100.0,
                    row.remaining,
                ),
                category: Some(Category::Expense(row.category)),
                deviation: bps - BUDGET_WARNING_BPS,
            });
        }
    }
}

fn large_transaction_alerts(snapshot: &Snapshot, period: Period, alerts: &mut Vec<Alert>) {
    let income = monthly_summary(snapshot, period).total_income;
    if income.is_zero() {
        return;
    }

    // Strictly greater than 20% of income; the boundary itself is fine
    let threshold = income.scale_bps(LARGE_TX_INCOME_BPS);
    for txn in snapshot.expenses_in(period) {
        if txn.amount > threshold {
            alerts.push(Alert {
                kind: AlertKind::LargeTransaction,
                severity: Severity::Critical,
                message: format!(
                    "Large transaction: {} ({})",
                    if txn.description.is_empty() {
                        txn.category.as_str()
                    } else {
                        txn.description.as_str()
                    },
                    txn.amount,
                ),
                category: Some(txn.category),
                deviation: (txn.amount - threshold).paisa(),
            });
        }
    }
}

fn savings_alerts(snapshot: &Snapshot, period: Period, alerts: &mut Vec<Alert>) {
    let summary = monthly_summary(snapshot, period);

    if summary.net_savings.is_negative() {
        alerts.push(Alert {
            kind: AlertKind::Deficit,
            severity: Severity::Critical,
            message: format!(
                "Spending exceeds income this month: {} deficit",
                summary.net_savings.abs(),
            ),
            category: None,
            deviation: summary.net_savings.abs().paisa(),
        });
    } else if summary.total_income.is_positive() && summary.savings_rate_bps < LOW_SAVINGS_BPS {
        alerts.push(Alert {
            kind: AlertKind::LowSavingsRate,
            severity: Severity::Warning,
            message: format!(
                "Low savings rate: {:.1}% (target 20%)",
                summary.savings_rate_bps as f64 / 100.0,
            ),
            category: None,
            deviation: LOW_SAVINGS_BPS - summary.savings_rate_bps,
        });
    }
}

fn goal_alerts(snapshot: &Snapshot, today: NaiveDate, alerts: &mut Vec<Alert>) {
    for goal in snapshot.goals() {
        let projection = project_goal(snapshot, goal, today);

        if projection.progress_bps >= 10_000 {
            alerts.push(Alert {
                kind: AlertKind::GoalCompleted,
                severity: Severity::Success,
                message: format!("Goal '{}' completed", goal.name),
                category: None,
                deviation: projection.progress_bps - 10_000,
            });
            continue;
        }

        let days = projection.days_remaining;
        if (0..=GOAL_DEADLINE_DAYS).contains(&days) && projection.progress_bps < GOAL_PROGRESS_BPS {
            alerts.push(Alert {
                kind: AlertKind::GoalDeadline,
                severity: Severity::Warning,
                message: format!(
                    "Goal '{}' due in {} days at {:.0}% progress",
                    goal.name,
                    days,
                    projection.progress_bps as f64 / 100.0,
                ),
                category: None,
                deviation: GOAL_PROGRESS_BPS - projection.progress_bps,
            });
        }
    }
}

fn spree_alerts(snapshot: &Snapshot, today: NaiveDate, alerts: &mut Vec<Alert>) {
    for category in ExpenseCategory::ALL {
        let count = snapshot
            .transactions()
            .iter()
            .filter(|txn| txn.date == today && txn.category == Category::Expense(category))
            .count();

        if count >= SPREE_COUNT {
            alerts.push(Alert {
                kind: AlertKind::SpendingSpree,
                severity: Severity::Info,
                message: format!("{} {} transactions today", count, category),
                category: Some(Category::Expense(category)),
                deviation: count as i64,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Budget, Goal, GoalKind, IncomeCategory, Money, Transaction};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn expense(y: i32, m: u32, d: u32, category: ExpenseCategory, paisa: i64) -> Transaction {
        Transaction::new(
            date(y, m, d),
            Category::Expense(category),
            Money::from_paisa(paisa),
        )
    }

    fn income(y: i32, m: u32, d: u32, paisa: i64) -> Transaction {
        Transaction::new(
            date(y, m, d),
            Category::Income(IncomeCategory::Salary),
            Money::from_paisa(paisa),
        )
    }

    fn jan() -> Period {
        Period::new(2025, 1).unwrap()
    }

    fn kinds(alerts: &[Alert]) -> Vec<AlertKind> {
        alerts.iter().map(|a| a.kind).collect()
    }

    #[test]
    fn test_budget_critical_at_90_percent() {
        let snapshot = Snapshot::new(
            vec![
                income(2025, 1, 1, 100000),
                expense(2025, 1, 5, ExpenseCategory::Food, 9000),
            ],
            vec![Budget::monthly(ExpenseCategory::Food, Money::from_paisa(10000))],
            vec![],
        );

        let alerts = active_alerts(&snapshot, jan(), date(2025, 1, 20));
        assert!(kinds(&alerts).contains(&AlertKind::BudgetCritical));
    }

    #[test]
    fn test_budget_warning_band() {
        let snapshot = Snapshot::new(
            vec![
                income(2025, 1, 1, 100000),
                expense(2025, 1, 5, ExpenseCategory::Food, 8500),
            ],
            vec![Budget::monthly(ExpenseCategory::Food, Money::from_paisa(10000))],
            vec![],
        );

        let alerts = active_alerts(&snapshot, jan(), date(2025, 1, 20));
        assert!(kinds(&alerts).contains(&AlertKind::BudgetWarning));
        assert!(!kinds(&alerts).contains(&AlertKind::BudgetCritical));
    }

    #[test]
    fn test_large_transaction_strict_boundary() {
        // Income 500000: threshold is exactly 100000
        let snapshot = Snapshot::new(
            vec![
                income(2025, 1, 1, 500000),
                expense(2025, 1, 5, ExpenseCategory::Shopping, 100000),
            ],
            vec![],
            vec![],
        );

        // Exactly 20% of income does NOT trigger
        let alerts = active_alerts(&snapshot, jan(), date(2025, 1, 20));
        assert!(!kinds(&alerts).contains(&AlertKind::LargeTransaction));

        // One paisa more does
        let snapshot = Snapshot::new(
            vec![
                income(2025, 1, 1, 500000),
                expense(2025, 1, 5, ExpenseCategory::Shopping, 100001),
            ],
            vec![],
            vec![],
        );
        let alerts = active_alerts(&snapshot, jan(), date(2025, 1, 20));
        let large: Vec<&Alert> = alerts
            .iter()
            .filter(|a| a.kind == AlertKind::LargeTransaction)
            .collect();
        assert_eq!(large.len(), 1);
        assert_eq!(large[0].deviation, 1);
    }

    #[test]
    fn test_large_transaction_inert_without_income() {
        let snapshot = Snapshot::new(
            vec![expense(2025, 1, 5, ExpenseCategory::Shopping, 100000)],
            vec![],
            vec![],
        );

        let alerts = active_alerts(&snapshot, jan(), date(2025, 1, 20));
        assert!(!kinds(&alerts).contains(&AlertKind::LargeTransaction));
    }

    #[test]
    fn test_deficit_alert() {
        let snapshot = Snapshot::new(
            vec![
                income(2025, 1, 1, 1000),
                expense(2025, 1, 5, ExpenseCategory::Food, 5000),
            ],
            vec![],
            vec![],
        );

        let alerts = active_alerts(&snapshot, jan(), date(2025, 1, 20));
        let deficit = alerts
            .iter()
            .find(|a| a.kind == AlertKind::Deficit)
            .unwrap();
        assert_eq!(deficit.severity, Severity::Critical);
        assert_eq!(deficit.deviation, 4000);
    }

    #[test]
    fn test_low_savings_rate_alert() {
        // Rate: 2000/100000 = 2%
        let snapshot = Snapshot::new(
            vec![
                income(2025, 1, 1, 100000),
                expense(2025, 1, 5, ExpenseCategory::Food, 98000),
            ],
            vec![],
            vec![],
        );

        let alerts = active_alerts(&snapshot, jan(), date(2025, 1, 20));
        assert!(kinds(&alerts).contains(&AlertKind::LowSavingsRate));
    }

    #[test]
    fn test_goal_deadline_alert() {
        let mut goal = Goal::new(
            "Vacation",
            GoalKind::Vacation,
            Money::from_paisa(100000),
            date(2025, 2, 1),
            date(2024, 6, 1),
        );
        goal.saved = Money::from_paisa(50000);

        let snapshot = Snapshot::new(vec![], vec![], vec![goal]);
        let alerts = active_alerts(&snapshot, jan(), date(2025, 1, 20));
        let deadline = alerts
            .iter()
            .find(|a| a.kind == AlertKind::GoalDeadline)
            .unwrap();
        assert_eq!(deadline.severity, Severity::Warning);
        assert_eq!(deadline.deviation, 4000);
    }

    #[test]
    fn test_goal_deadline_quiet_when_nearly_done() {
        let mut goal = Goal::new(
            "Vacation",
            GoalKind::Vacation,
            Money::from_paisa(100000),
            date(2025, 2, 1),
            date(2024, 6, 1),
        );
        goal.saved = Money::from_paisa(95000);

        let snapshot = Snapshot::new(vec![], vec![], vec![goal]);
        let alerts = active_alerts(&snapshot, jan(), date(2025, 1, 20));
        assert!(!kinds(&alerts).contains(&AlertKind::GoalDeadline));
    }

    #[test]
    fn test_goal_completed_alert() {
        let mut goal = Goal::new(
            "Vacation",
            GoalKind::Vacation,
            Money::from_paisa(100000),
            date(2025, 6, 1),
            date(2024, 6, 1),
        );
        goal.saved = Money::from_paisa(100000);

        let snapshot = Snapshot::new(vec![], vec![], vec![goal]);
        let alerts = active_alerts(&snapshot, jan(), date(2025, 1, 20));
        let done = alerts
            .iter()
            .find(|a| a.kind == AlertKind::GoalCompleted)
            .unwrap();
        assert_eq!(done.severity, Severity::Success);
    }

    #[test]
    fn test_spending_spree_alert() {
        let snapshot = Snapshot::new(
            vec![
                income(2025, 1, 1, 1_000_000),
                expense(2025, 1, 20, ExpenseCategory::Shopping, 1000),
                expense(2025, 1, 20, ExpenseCategory::Shopping, 2000),
                expense(2025, 1, 20, ExpenseCategory::Shopping, 3000),
            ],
            vec![],
            vec![],
        );

        let alerts = active_alerts(&snapshot, jan(), date(2025, 1, 20));
        let spree = alerts
            .iter()
            .find(|a| a.kind == AlertKind::SpendingSpree)
            .unwrap();
        assert_eq!(spree.severity, Severity::Info);
        assert_eq!(spree.deviation, 3);
    }

    #[test]
    fn test_sorted_by_severity_then_deviation() {
        let snapshot = Snapshot::new(
            vec![
                income(2025, 1, 1, 10000),
                // deficit of 14000 and two over-budget categories
                expense(2025, 1, 5, ExpenseCategory::Food, 12000),
                expense(2025, 1, 6, ExpenseCategory::Transport, 12000),
            ],
            vec![
                Budget::monthly(ExpenseCategory::Food, Money::from_paisa(10000)),
                Budget::monthly(ExpenseCategory::Transport, Money::from_paisa(6000)),
            ],
            vec![],
        );

        let alerts = active_alerts(&snapshot, jan(), date(2025, 1, 20));
        assert!(alerts.len() >= 3);
        // All criticals first
        let priorities: Vec<u8> = alerts.iter().map(|a| a.severity.priority()).collect();
        let mut sorted = priorities.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(priorities, sorted);

        // Within criticals, transport (20000 - 9000 = 11000 bps over) beats
        // food (12000 - 9000 = 3000 bps over)
        let budget_criticals: Vec<&Alert> = alerts
            .iter()
            .filter(|a| a.kind == AlertKind::BudgetCritical)
            .collect();
        assert_eq!(
            budget_criticals[0].category,
            Some(Category::Expense(ExpenseCategory::Transport))
        );
    }

    #[test]
    fn test_quiet_month_no_alerts() {
        let snapshot = Snapshot::new(
            vec![
                income(2025, 1, 1, 100000),
                expense(2025, 1, 5, ExpenseCategory::Food, 5000),
            ],
            vec![Budget::monthly(ExpenseCategory::Food, Money::from_paisa(10000))],
            vec![],
        );

        let alerts = active_alerts(&snapshot, jan(), date(2025, 1, 20));
        assert!(alerts.is_empty());
    }
}
