//! Period aggregation
//!
//! Sums, breakdowns, and rates for a single calendar month. Everything here
//! is a pure function of the snapshot; all money math is integer paisa and
//! every ratio is zero-denominator safe.

use chrono::{Datelike, NaiveDate};

use crate::models::{Category, Money, Period, Snapshot, TxKind};

/// Income, expense, and savings totals for one period
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlySummary {
    pub period: Period,
    pub total_income: Money,
    pub total_expense: Money,
    /// Income minus expense; negative means a deficit
    pub net_savings: Money,
    /// Net savings as a share of income, in basis points; 0 when income is 0
    pub savings_rate_bps: i64,
}

/// Sum income and expense for a period.
///
/// An empty period yields zero totals, never an error.
pub fn monthly_summary(snapshot: &Snapshot, period: Period) -> MonthlySummary {
    let total_income: Money = snapshot.income_in(period).map(|t| t.amount).sum();
    let total_expense: Money = snapshot.expenses_in(period).map(|t| t.amount).sum();
    let net_savings = total_income - total_expense;

    MonthlySummary {
        period,
        total_income,
        total_expense,
        net_savings,
        savings_rate_bps: net_savings.ratio_bps(total_income),
    }
}

/// One category's share of a period's total for a kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryBreakdown {
    pub category: Category,
    pub total: Money,
    /// Share of the grand total in basis points; 0 when the grand total is 0
    pub share_bps: i64,
    pub transaction_count: usize,
}

/// Per-category totals for a period, largest first.
///
/// Ties break by category name ascending so the ordering is deterministic.
pub fn category_breakdown(snapshot: &Snapshot, period: Period, kind: TxKind) -> Vec<CategoryBreakdown> {
    let mut totals: Vec<(Category, Money, usize)> = Vec::new();

    for txn in snapshot.in_period_of_kind(period, kind) {
        match totals.iter_mut().find(|(c, _, _)| *c == txn.category) {
            Some((_, total, count)) => {
                *total += txn.amount;
                *count += 1;
            }
            None => totals.push((txn.category, txn.amount, 1)),
        }
    }

    let grand_total: Money = totals.iter().map(|(_, total, _)| *total).sum();

    let mut breakdown: Vec<CategoryBreakdown> = totals
        .into_iter()
        .map(|(category, total, transaction_count)| CategoryBreakdown {
            category,
            total,
            share_bps: total.ratio_bps(grand_total),
            transaction_count,
        })
        .collect();

    breakdown.sort_by(|a, b| {
        b.total
            .cmp(&a.total)
            .then_with(|| a.category.as_str().cmp(b.category.as_str()))
    });

    breakdown
}

/// The `n` largest categories of a period, in breakdown order
pub fn top_categories(
    snapshot: &Snapshot,
    period: Period,
    kind: TxKind,
    n: usize,
) -> Vec<CategoryBreakdown> {
    let mut breakdown = category_breakdown(snapshot, period, kind);
    breakdown.truncate(n);
    breakdown
}

/// Average daily spending for a period
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BurnRate {
    /// Average expense per elapsed day (truncated)
    pub per_day: Money,
    /// Truncation remainder, for display rounding
    pub remainder: Money,
    /// Days the average was taken over
    pub days: u32,
}

/// Total expense divided by days elapsed in the period.
///
/// For the period containing `today` only the days so far count; any other
/// period uses its full day count.
pub fn burn_rate(snapshot: &Snapshot, period: Period, today: NaiveDate) -> BurnRate {
    let total: Money = snapshot.expenses_in(period).map(|t| t.amount).sum();

    let days = if period.contains(today) {
        today.day()
    } else {
        period.days_in_month()
    };

    let (per_day, remainder) = total.div_rem(days as i64);
    BurnRate {
        per_day,
        remainder,
        days,
    }
}

/// Mean net savings over the `months` periods ending at `period`.
///
/// Truncating integer division; the goal projector reads this as the
/// trailing contribution rate.
pub fn average_net_savings(snapshot: &Snapshot, period: Period, months: u32) -> Money {
    if months == 0 {
        return Money::zero();
    }

    let total: Money = period
        .window(months as usize)
        .into_iter()
        .map(|p| monthly_summary(snapshot, p).net_savings)
        .sum();

    let (mean, _) = total.div_rem(months as i64);
    mean
}
