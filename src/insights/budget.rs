//! Budget tracking
//!
//! Utilization of each budget for a period, status classification, an
//! overall overview with unbudgeted spending, and the chronic over/under
//! signals the recommendation rules feed on.

use std::fmt;

use crate::models::{Cadence, Category, ExpenseCategory, Money, Period, Snapshot, TxKind};

use super::aggregate::category_breakdown;

/// Warning starts at 70% utilization (inclusive)
pub const WARNING_BPS: i64 = 7_000;
/// Over starts at 100% utilization (inclusive)
pub const OVER_BPS: i64 = 10_000;
/// Chronically-under ceiling: below 50% utilization
pub const UNDER_BPS: i64 = 5_000;
/// Periods examined by the chronic classifiers
pub const CHRONIC_WINDOW: u32 = 3;

/// Classification of a budget's utilization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetStatus {
    Ok,
    Warning,
    Over,
}

impl BudgetStatus {
    /// Classify a utilization value; both boundaries are inclusive
    pub fn from_utilization_bps(bps: i64) -> Self {
        if bps >= OVER_BPS {
            BudgetStatus::Over
        } else if bps >= WARNING_BPS {
            BudgetStatus::Warning
        } else {
            BudgetStatus::Ok
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetStatus::Ok => "ok",
            BudgetStatus::Warning => "warning",
            BudgetStatus::Over => "over",
        }
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One budget's standing for a period
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetUsage {
    pub category: ExpenseCategory,
    pub cadence: Cadence,
    /// Monthly-equivalent limit
    pub limit: Money,
    pub spent: Money,
    /// Limit minus spent; negative when over
    pub remaining: Money,
    pub utilization_bps: i64,
    pub status: BudgetStatus,
}

/// Spending in a category that has no budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnbudgetedSpend {
    pub category: ExpenseCategory,
    pub spent: Money,
}

/// Period-wide budget standing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetOverview {
    pub period: Period,
    pub rows: Vec<BudgetUsage>,
    /// Sum of monthly-equivalent limits
    pub total_budget: Money,
    /// Spending within budgeted categories only
    pub total_spent: Money,
    pub overall_utilization_bps: i64,
    pub ok_count: usize,
    pub warning_count: usize,
    pub over_count: usize,
    /// Spending with no matching budget; reported but excluded from the
    /// utilization aggregates above
    pub unbudgeted: Vec<UnbudgetedSpend>,
}

/// Spending in a category during a period
fn spent_in(snapshot: &Snapshot, category: ExpenseCategory, period: Period) -> Money {
    snapshot
        .expenses_in(period)
        .filter(|txn| txn.category == Category::Expense(category))
        .map(|txn| txn.amount)
        .sum()
}

/// Utilization of a category's budget in basis points.
///
/// `None` when the category has no budget; a monthly budget wins over a
/// weekly one when both exist.
pub fn utilization(snapshot: &Snapshot, category: ExpenseCategory, period: Period) -> Option<i64> {
    usage(snapshot, category, period).map(|u| u.utilization_bps)
}

/// Full standing of a category's budget for a period
pub fn usage(snapshot: &Snapshot, category: ExpenseCategory, period: Period) -> Option<BudgetUsage> {
    let budget = snapshot.budget_for(category)?;
    let limit = budget.monthly_limit(period.days_in_month());
    let spent = spent_in(snapshot, category, period);
    let utilization_bps = spent.ratio_bps(limit);

    Some(BudgetUsage {
        category,
        cadence: budget.cadence,
        limit,
        spent,
        remaining: limit - spent,
        utilization_bps,
        status: BudgetStatus::from_utilization_bps(utilization_bps),
    })
}

/// Budget standing across all budgeted categories, sorted by utilization
/// descending, plus the unbudgeted spending list.
pub fn overview(snapshot: &Snapshot, period: Period) -> BudgetOverview {
    let mut rows: Vec<BudgetUsage> = snapshot
        .budgets()
        .iter()
        .filter(|b| snapshot.budget_for(b.category).map(|chosen| chosen.cadence) == Some(b.cadence))
        .filter_map(|b| usage(snapshot, b.category, period))
        .collect();

    rows.sort_by(|a, b| {
        b.utilization_bps
            .cmp(&a.utilization_bps)
            .then_with(|| a.category.as_str().cmp(b.category.as_str()))
    });

    let total_budget: Money = rows.iter().map(|r| r.limit).sum();
    let total_spent: Money = rows.iter().map(|r| r.spent).sum();

    let mut unbudgeted: Vec<UnbudgetedSpend> = category_breakdown(snapshot, period, TxKind::Expense)
        .into_iter()
        .filter_map(|entry| match entry.category {
            Category::Expense(category) if snapshot.budget_for(category).is_none() => {
                Some(UnbudgetedSpend {
                    category,
                    spent: entry.total,
                })
            }
            _ => None,
        })
        .collect();
    unbudgeted.sort_by(|a, b| {
        b.spent
            .cmp(&a.spent)
            .then_with(|| a.category.as_str().cmp(b.category.as_str()))
    });

    BudgetOverview {
        period,
        overall_utilization_bps: total_spent.ratio_bps(total_budget),
        ok_count: rows.iter().filter(|r| r.status == BudgetStatus::Ok).count(),
        warning_count: rows
            .iter()
            .filter(|r| r.status == BudgetStatus::Warning)
            .count(),
        over_count: rows
            .iter()
            .filter(|r| r.status == BudgetStatus::Over)
            .count(),
        rows,
        total_budget,
        total_spent,
        unbudgeted,
    }
}

/// True when the ledger reaches back to the start of the chronic window.
///
/// Without this, a fresh ledger's silent past months would read as zero
/// utilization and trip the under classifier immediately.
fn covers_chronic_window(snapshot: &Snapshot, period: Period) -> bool {
    let window = period.window(CHRONIC_WINDOW as usize);
    matches!(snapshot.earliest_period(), Some(earliest) if earliest <= window[0])
}

/// Over budget in each of the last CHRONIC_WINDOW periods ending at `period`
pub fn chronically_over(snapshot: &Snapshot, category: ExpenseCategory, period: Period) -> bool {
    covers_chronic_window(snapshot, period)
        && period
            .window(CHRONIC_WINDOW as usize)
            .into_iter()
            .all(|p| matches!(utilization(snapshot, category, p), Some(bps) if bps >= OVER_BPS))
}

/// Below UNDER_BPS utilization in each of the last CHRONIC_WINDOW periods
pub fn chronically_under(snapshot: &Snapshot, category: ExpenseCategory, period: Period) -> bool {
    covers_chronic_window(snapshot, period)
        && period
            .window(CHRONIC_WINDOW as usize)
            .into_iter()
            .all(|p| matches!(utilization(snapshot, category, p), Some(bps) if bps < UNDER_BPS))
}
