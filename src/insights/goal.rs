//! Goal projection
//!
//! Progress, required monthly savings, and an expected completion estimate
//! for each goal. A past deadline is `Overdue` and a non-positive savings
//! rate is `NotOnTrack`; no ratio here ever produces an infinite or
//! negative date.

use chrono::{Datelike, Months, NaiveDate};

use crate::models::{Goal, Money, Period, Snapshot};

use super::aggregate::average_net_savings;

/// Months of history averaged into the contribution rate
pub const CONTRIBUTION_WINDOW: u32 = 3;

/// Savings needed per month to hit the deadline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredSavings {
    /// Save this much each remaining month
    PerMonth(Money),
    /// The deadline has already passed
    Overdue,
}

/// When the goal is expected to complete at the current savings rate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// Expected completion date
    By(NaiveDate),
    /// The trailing savings rate is zero or negative; no date exists
    NotOnTrack,
}

/// Derived standing of one goal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoalProjection {
    /// Saved amount as a share of the target, in basis points
    pub progress_bps: i64,
    pub required_monthly: RequiredSavings,
    pub expected_completion: Completion,
    /// True iff the expected completion lands on or before the deadline
    pub on_track: bool,
    /// Days until the deadline; negative once it has passed
    pub days_remaining: i64,
}

/// Whole calendar months from `from` to `to`; negative when `to` is earlier
pub fn months_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to.year() as i64 - from.year() as i64) * 12 + (to.month() as i64 - from.month() as i64)
}

/// Project a goal against the snapshot's trailing savings rate.
///
/// The contribution rate is the trailing 3-month average net savings ending
/// at the period containing `today`.
pub fn project_goal(snapshot: &Snapshot, goal: &Goal, today: NaiveDate) -> GoalProjection {
    let progress_bps = goal.saved.ratio_bps(goal.target);
    let remaining = goal.remaining();
    let days_remaining = (goal.deadline - today).num_days();

    let required_monthly = if remaining.is_zero() {
        RequiredSavings::PerMonth(Money::zero())
    } else if goal.deadline < today {
        RequiredSavings::Overdue
    } else {
        let months = months_between(today, goal.deadline).max(1);
        // Ceiling division so the last month never comes up short
        let per_month = (remaining.paisa() + months - 1) / months;
        RequiredSavings::PerMonth(Money::from_paisa(per_month))
    };

    let expected_completion = if remaining.is_zero() {
        Completion::By(today)
    } else {
        let rate = average_net_savings(snapshot, Period::containing(today), CONTRIBUTION_WINDOW);
        if rate.is_positive() {
            let months_needed = (remaining.paisa() + rate.paisa() - 1) / rate.paisa();
            match u32::try_from(months_needed)
                .ok()
                .and_then(|m| today.checked_add_months(Months::new(m)))
            {
                Some(date) => Completion::By(date),
                None => Completion::NotOnTrack,
            }
        } else {
            Completion::NotOnTrack
        }
    };

    let on_track = matches!(expected_completion, Completion::By(date) if date <= goal.deadline);

    GoalProjection {
        progress_bps,
        required_monthly,
        expected_completion,
        on_track,
        days_remaining,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, GoalKind, IncomeCategory, Transaction};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn income(y: i32, m: u32, d: u32, paisa: i64) -> Transaction {
        Transaction::new(
            date(y, m, d),
            Category::Income(IncomeCategory::Salary),
            Money::from_paisa(paisa),
        )
    }

    fn goal(target: i64, saved: i64, deadline: NaiveDate) -> Goal {
        let mut goal = Goal::new(
            "Vacation",
            GoalKind::Vacation,
            Money::from_paisa(target),
            deadline,
            date(2025, 1, 1),
        );
        goal.saved = Money::from_paisa(saved);
        goal
    }

    /// Snapshot saving 5000/month for the three months ending at `today`
    fn steady_saver() -> Snapshot {
        Snapshot::new(
            vec![
                income(2025, 4, 1, 5000),
                income(2025, 5, 1, 5000),
                income(2025, 6, 1, 5000),
            ],
            vec![],
            vec![],
        )
    }

    #[test]
    fn test_required_and_on_track() {
        // Target 100000, saved 80000, deadline two months out, trailing
        // contribution 5000/month
        let today = date(2025, 6, 15);
        let goal = goal(100000, 80000, date(2025, 8, 15));
        let snapshot = steady_saver();

        let projection = project_goal(&snapshot, &goal, today);
        assert_eq!(projection.progress_bps, 8000);
        assert_eq!(
            projection.required_monthly,
            RequiredSavings::PerMonth(Money::from_paisa(10000))
        );
        // 20000 remaining at 5000/month takes 4 months; deadline is in 2
        assert_eq!(
            projection.expected_completion,
            Completion::By(date(2025, 10, 15))
        );
        assert!(!projection.on_track);
    }

    #[test]
    fn test_overdue_never_negative() {
        let today = date(2025, 6, 15);
        let goal = goal(100000, 20000, date(2025, 3, 1));

        let projection = project_goal(&steady_saver(), &goal, today);
        assert_eq!(projection.required_monthly, RequiredSavings::Overdue);
        assert!(projection.days_remaining < 0);
    }

    #[test]
    fn test_not_on_track_without_savings() {
        let today = date(2025, 6, 15);
        let goal = goal(100000, 20000, date(2026, 6, 15));
        // Empty ledger: trailing rate is zero
        let snapshot = Snapshot::default();

        let projection = project_goal(&snapshot, &goal, today);
        assert_eq!(projection.expected_completion, Completion::NotOnTrack);
        assert!(!projection.on_track);
    }

    #[test]
    fn test_funded_goal_completes_today() {
        let today = date(2025, 6, 15);
        let goal = goal(100000, 100000, date(2025, 12, 31));
        let snapshot = Snapshot::default();

        let projection = project_goal(&snapshot, &goal, today);
        assert_eq!(projection.progress_bps, 10000);
        assert_eq!(
            projection.required_monthly,
            RequiredSavings::PerMonth(Money::zero())
        );
        assert_eq!(projection.expected_completion, Completion::By(today));
        assert!(projection.on_track);
    }

    #[test]
    fn test_on_track_with_ample_rate() {
        let today = date(2025, 6, 15);
        let goal = goal(100000, 90000, date(2025, 12, 31));
        // 10000 remaining at 5000/month: done in 2 months
        let projection = project_goal(&steady_saver(), &goal, today);
        assert_eq!(
            projection.expected_completion,
            Completion::By(date(2025, 8, 15))
        );
        assert!(projection.on_track);
    }

    #[test]
    fn test_required_savings_ceils() {
        let today = date(2025, 6, 15);
        // 10001 remaining over 2 months must require 5001, not 5000
        let goal = goal(100000, 89999, date(2025, 8, 20));
        let projection = project_goal(&steady_saver(), &goal, today);
        assert_eq!(
            projection.required_monthly,
            RequiredSavings::PerMonth(Money::from_paisa(5001))
        );
    }

    #[test]
    fn test_deadline_same_month_counts_one_month() {
        let today = date(2025, 6, 10);
        let goal = goal(100000, 90000, date(2025, 6, 25));
        let projection = project_goal(&steady_saver(), &goal, today);
        // months_between is 0, floored to 1
        assert_eq!(
            projection.required_monthly,
            RequiredSavings::PerMonth(Money::from_paisa(10000))
        );
    }

    #[test]
    fn test_months_between() {
        assert_eq!(months_between(date(2025, 6, 15), date(2025, 8, 15)), 2);
        assert_eq!(months_between(date(2025, 6, 15), date(2025, 6, 25)), 0);
        assert_eq!(months_between(date(2025, 6, 15), date(2024, 6, 15)), -12);
    }

    #[test]
    fn test_idempotence() {
        let today = date(2025, 6, 15);
        let goal = goal(100000, 80000, date(2025, 8, 15));
        let snapshot = steady_saver();

        assert_eq!(
            project_goal(&snapshot, &goal, today),
            project_goal(&snapshot, &goal, today)
        );
    }
}
