//! Financial health scoring
//!
//! Four independently clamped sub-scores summed into a 0-100 composite:
//! savings rate (30), budget adherence (25), balance (25), and spending
//! consistency (20).

use std::fmt;

use crate::models::{Category, Period, Snapshot};

use super::aggregate::monthly_summary;
use super::budget::{overview, BudgetStatus};
use super::trend::{spikes_in, SPIKE_K};

/// Sub-score ceilings
pub const SAVINGS_MAX: u8 = 30;
pub const ADHERENCE_MAX: u8 = 25;
pub const BALANCE_MAX: u8 = 25;
pub const CONSISTENCY_MAX: u8 = 20;

/// Savings rate that earns the full savings sub-score (20%)
pub const TARGET_SAVINGS_RATE_BPS: i64 = 2_000;
/// Points lost per over-budget or spiking category
pub const CONSISTENCY_PENALTY: u8 = 5;

/// Qualitative band for an overall score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rating {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl Rating {
    pub fn from_score(score: u8) -> Self {
        match score {
            80..=u8::MAX => Rating::Excellent,
            60..=79 => Rating::Good,
            40..=59 => Rating::Fair,
            _ => Rating::Poor,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::Excellent => "Excellent",
            Rating::Good => "Good",
            Rating::Fair => "Fair",
            Rating::Poor => "Poor",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Composite health score with its four components
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthScore {
    pub savings: u8,
    pub budget_adherence: u8,
    pub balance: u8,
    pub consistency: u8,
    pub overall: u8,
    pub rating: Rating,
}

/// Score a period's finances.
///
/// Total over any snapshot: every sub-score floors at 0 and the composite
/// clamps to [0, 100].
pub fn health_score(snapshot: &Snapshot, period: Period) -> HealthScore {
    let summary = monthly_summary(snapshot, period);
    let budgets = overview(snapshot, period);

    // Savings: linear up to the 20% target, negative rates floor at 0
    let savings = {
        let rate = summary.savings_rate_bps.max(0);
        (rate * SAVINGS_MAX as i64 / TARGET_SAVINGS_RATE_BPS).min(SAVINGS_MAX as i64) as u8
    };

    // Adherence: share of budgets not Over; no budgets means nothing was
    // violated, so the full score stands
    let budget_adherence = if budgets.rows.is_empty() {
        ADHERENCE_MAX
    } else {
        let within = budgets
            .rows
            .iter()
            .filter(|row| row.status != BudgetStatus::Over)
            .count();
        (within * ADHERENCE_MAX as usize / budgets.rows.len()) as u8
    };

    // Balance: full marks for non-negative savings, otherwise scaled down
    // by the deficit-to-income ratio
    let balance = if !summary.net_savings.is_negative() {
        BALANCE_MAX
    } else if summary.total_income.is_zero() {
        0
    } else {
        let deficit = -summary.net_savings;
        let penalty = deficit.paisa() * BALANCE_MAX as i64 / summary.total_income.paisa();
        (BALANCE_MAX as i64 - penalty).max(0) as u8
    };

    // Consistency: penalty per category that is over budget or spiking
    let consistency = {
        let over = budgets.over_count;

        let mut spike_categories: Vec<Category> = spikes_in(snapshot, period, SPIKE_K)
            .iter()
            .map(|txn| txn.category)
            .collect();
        spike_categories.sort();
        spike_categories.dedup();

        let offenders = (over + spike_categories.len()) as i64;
        (CONSISTENCY_MAX as i64 - offenders * CONSISTENCY_PENALTY as i64).max(0) as u8
    };

    let overall = (savings as i64 + budget_adherence as i64 + balance as i64 + consistency as i64)
        .clamp(0, 100) as u8;

    HealthScore {
        savings,
        budget_adherence,
        balance,
        consistency,
        overall,
        rating: Rating::from_score(overall),
    }
}
