//! Recommendation rules
//!
//! A fixed table of independent evaluators, each a pure function of the
//! snapshot and its derived aggregates. Every matching rule contributes
//! advice with an estimated monetary impact; the caller ranks by impact
//! and decides how many to surface.

use crate::models::{Category, Money, Period, Snapshot, TxKind};

use super::aggregate::{category_breakdown, monthly_summary, CategoryBreakdown, MonthlySummary};
use super::budget::{chronically_over, chronically_under, overview, BudgetOverview, BudgetStatus};
use super::health::TARGET_SAVINGS_RATE_BPS;

/// Budget share that makes a category worth watching (80%)
pub const WATCH_BPS: i64 = 8_000;
/// Expense share that counts as concentration (25% of total)
pub const CONCENTRATION_BPS: i64 = 2_500;
/// Suggested cut for a concentrated category (15%)
pub const CONCENTRATION_CUT_BPS: i64 = 1_500;
/// Chronic-over budgets are suggested a 20% raise
pub const RAISE_BPS: i64 = 2_000;
/// Chronic-under budgets shrink to 130% of actual spend
pub const SHRINK_TO_BPS: i64 = 13_000;

/// One piece of ranked advice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    pub text: String,
    /// Rough monthly amount at stake, used for ranking
    pub estimated_impact: Money,
}

/// Inputs shared by every rule, computed once
struct RuleContext<'a> {
    snapshot: &'a Snapshot,
    period: Period,
    summary: MonthlySummary,
    budgets: BudgetOverview,
    expenses: Vec<CategoryBreakdown>,
}

type Rule = fn(&RuleContext<'_>, &mut Vec<Recommendation>);

/// Evaluation order is fixed but carries no meaning: rules never read each
/// other's output.
const RULES: &[Rule] = &[
    over_budget_rule,
    watch_rule,
    savings_target_rule,
    chronic_over_rule,
    chronic_under_rule,
    unbudgeted_rule,
    concentration_rule,
    no_budgets_rule,
];

/// Evaluate every rule for a period, ranked by estimated impact descending
/// (ties by text, for a deterministic order).
pub fn recommendations(snapshot: &Snapshot, period: Period) -> Vec<Recommendation> {
    let ctx = RuleContext {
        snapshot,
        period,
        summary: monthly_summary(snapshot, period),
        budgets: overview(snapshot, period),
        expenses: category_breakdown(snapshot, period, TxKind::Expense),
    };

    let mut recommendations = Vec::new();
    for rule in RULES {
        rule(&ctx, &mut recommendations);
    }

    recommendations.sort_by(|a, b| {
        b.estimated_impact
            .cmp(&a.estimated_impact)
            .then_with(|| a.text.cmp(&b.text))
    });

    recommendations
}

/// Over-budget categories: cut back by the overage
fn over_budget_rule(ctx: &RuleContext<'_>, out: &mut Vec<Recommendation>) {
    for row in &ctx.budgets.rows {
        if row.status == BudgetStatus::Over {
            let overage = row.spent - row.limit;
            out.push(Recommendation {
                text: format!(
                    "Cut {} spending by {} to get back within budget",
                    row.category, overage,
                ),
                estimated_impact: overage,
            });
        }
    }
}

/// Categories at 80%+ but not yet over: watch them
fn watch_rule(ctx: &RuleContext<'_>, out: &mut Vec<Recommendation>) {
    for row in &ctx.budgets.rows {
        if row.status != BudgetStatus::Over && row.utilization_bps >= WATCH_BPS {
            let at_stake = row.spent - row.limit.scale_bps(WATCH_BPS);
            out.push(Recommendation {
                text: format!(
                    "Watch {} spending: {:.0}% of budget used with {} left",
                    row.category,
                    row.utilization_bps as f64 / 100.0,
                    row.remaining,
                ),
                estimated_impact: at_stake,
            });
        }
    }
}

/// Savings rate below the 20% target: trim by the shortfall
fn savings_target_rule(ctx: &RuleContext<'_>, out: &mut Vec<Recommendation>) {
    let summary = &ctx.summary;
    if summary.total_income.is_positive() && summary.savings_rate_bps < TARGET_SAVINGS_RATE_BPS {
        let target = summary.total_income.scale_bps(TARGET_SAVINGS_RATE_BPS);
        let shortfall = target - summary.net_savings;
        out.push(Recommendation {
            text: format!(
                "Trim expenses by {} to reach a 20% savings rate",
                shortfall,
            ),
            estimated_impact: shortfall,
        });
    }
}

/// Budgets blown three months running are set too low
fn chronic_over_rule(ctx: &RuleContext<'_>, out: &mut Vec<Recommendation>) {
    for row in &ctx.budgets.rows {
        if chronically_over(ctx.snapshot, row.category, ctx.period) {
            let raise = row.limit.scale_bps(RAISE_BPS);
            out.push(Recommendation {
                text: format!(
                    "Raise the {} budget to {} (over budget three months running)",
                    row.category,
                    row.limit + raise,
                ),
                estimated_impact: raise,
            });
        }
    }
}

/// Budgets under half-used three months running free up allocation
fn chronic_under_rule(ctx: &RuleContext<'_>, out: &mut Vec<Recommendation>) {
    for row in &ctx.budgets.rows {
        if chronically_under(ctx.snapshot, row.category, ctx.period) {
            let suggested = row.spent.scale_bps(SHRINK_TO_BPS);
            let freed = row.limit - suggested;
            if freed.is_positive() {
                out.push(Recommendation {
                    text: format!(
                        "Lower the {} budget to {} and free up {}",
                        row.category, suggested, freed,
                    ),
                    estimated_impact: freed,
                });
            }
        }
    }
}

/// Spending in categories with no budget goes untracked
fn unbudgeted_rule(ctx: &RuleContext<'_>, out: &mut Vec<Recommendation>) {
    for entry in &ctx.budgets.unbudgeted {
        out.push(Recommendation {
            text: format!(
                "Set a budget for {} ({} spent this month without one)",
                entry.category, entry.spent,
            ),
            estimated_impact: entry.spent,
        });
    }
}

/// A category eating more than a quarter of spending has room to shrink
fn concentration_rule(ctx: &RuleContext<'_>, out: &mut Vec<Recommendation>) {
    for entry in &ctx.expenses {
        if entry.share_bps > CONCENTRATION_BPS {
            if let Category::Expense(category) = entry.category {
                let saving = entry.total.scale_bps(CONCENTRATION_CUT_BPS);
                out.push(Recommendation {
                    text: format!(
                        "{} takes {:.0}% of spending; a 15% cut saves {} per month",
                        category,
                        entry.share_bps as f64 / 100.0,
                        saving,
                    ),
                    estimated_impact: saving,
                });
            }
        }
    }
}

/// No budgets at all: nothing else can be tracked
fn no_budgets_rule(ctx: &RuleContext<'_>, out: &mut Vec<Recommendation>) {
    if ctx.budgets.rows.is_empty() && !ctx.summary.total_expense.is_zero() {
        out.push(Recommendation {
            text: "Set budgets for your spending categories to track where money goes".to_string(),
            estimated_impact: ctx.summary.total_expense,
        });
    }
}
