//! Trend analysis
//!
//! Month-over-month change, multi-period trend classification, and spike
//! detection. Ambiguity is always a sentinel, never a guessed number: a
//! missing baseline is `NoBaseline`, a short history is `InsufficientData`,
//! and spike detection with too few samples simply stays off.

use crate::models::{Category, Money, Period, Snapshot, Transaction};

/// Changes smaller than this (in bps of the prior total) count as stable
pub const STABILITY_BPS: i64 = 500;
/// Default number of periods a trend is judged over
pub const DEFAULT_TREND_WINDOW: usize = 3;
/// Default spike threshold: mean + k sigma
pub const SPIKE_K: f64 = 2.0;
/// Spike detection needs at least this many historical samples
pub const MIN_SPIKE_SAMPLES: usize = 2;

/// Signed month-over-month change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthChange {
    /// Change vs. the previous period, in basis points (+10000 = doubled)
    Change(i64),
    /// The previous period's total was zero; no ratio exists
    NoBaseline,
}

/// Multi-period direction of a category's spending
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Increasing,
    Decreasing,
    Stable,
    /// The ledger does not cover the requested window
    InsufficientData,
}

/// Total for one category in one period, either kind
fn category_total(snapshot: &Snapshot, category: Category, period: Period) -> Money {
    snapshot
        .in_period(period)
        .filter(|txn| txn.category == category)
        .map(|txn| txn.amount)
        .sum()
}

/// Total expense in one period
fn expense_total(snapshot: &Snapshot, period: Period) -> Money {
    snapshot.expenses_in(period).map(|txn| txn.amount).sum()
}

fn change_between(previous: Money, current: Money) -> MonthChange {
    if previous.is_zero() {
        MonthChange::NoBaseline
    } else {
        MonthChange::Change((current - previous).ratio_bps(previous))
    }
}

/// Signed change of a category's total vs. the previous period
pub fn month_over_month(snapshot: &Snapshot, category: Category, period: Period) -> MonthChange {
    change_between(
        category_total(snapshot, category, period.prev()),
        category_total(snapshot, category, period),
    )
}

/// Signed change of total expense vs. the previous period
pub fn month_over_month_total(snapshot: &Snapshot, period: Period) -> MonthChange {
    change_between(
        expense_total(snapshot, period.prev()),
        expense_total(snapshot, period),
    )
}

/// Classify a category's direction over the `window` periods ending at
/// `period`.
///
/// The window is scorable only when the ledger reaches back to its first
/// period; otherwise a genuine zero month cannot be told from missing data
/// and the answer is `InsufficientData`. Direction comes from the latest
/// consecutive delta; below the stability threshold it is `Stable`.
pub fn classify_trend(
    snapshot: &Snapshot,
    category: Category,
    period: Period,
    window: usize,
) -> Trend {
    if window < 2 {
        return Trend::InsufficientData;
    }

    let periods = period.window(window);
    match snapshot.earliest_period() {
        Some(earliest) if earliest <= periods[0] => {}
        _ => return Trend::InsufficientData,
    }

    let totals: Vec<Money> = periods
        .iter()
        .map(|p| category_total(snapshot, category, *p))
        .collect();

    let previous = totals[window - 2];
    let current = totals[window - 1];
    let delta = current - previous;

    if previous.is_zero() {
        return if current.is_zero() {
            Trend::Stable
        } else {
            Trend::Increasing
        };
    }

    let change_bps = delta.ratio_bps(previous);
    if change_bps.abs() < STABILITY_BPS {
        Trend::Stable
    } else if delta.is_positive() {
        Trend::Increasing
    } else {
        Trend::Decreasing
    }
}

/// Mean and spread of historical expense amounts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpikeBaseline {
    pub mean: f64,
    pub std_dev: f64,
    pub samples: usize,
}

/// Baseline over the expenses of the `window` periods preceding `period`.
///
/// The standard deviation is the population sigma; this is the only
/// floating-point math in the engine, and it never feeds back into money
/// values.
pub fn spike_baseline(snapshot: &Snapshot, period: Period, window: usize) -> SpikeBaseline {
    let amounts: Vec<f64> = period
        .prev()
        .window(window)
        .into_iter()
        .flat_map(|p| snapshot.expenses_in(p).map(|txn| txn.amount.paisa() as f64).collect::<Vec<_>>())
        .collect();

    let samples = amounts.len();
    if samples == 0 {
        return SpikeBaseline {
            mean: 0.0,
            std_dev: 0.0,
            samples,
        };
    }

    let mean = amounts.iter().sum::<f64>() / samples as f64;
    let variance = amounts
        .iter()
        .map(|a| (a - mean) * (a - mean))
        .sum::<f64>()
        / samples as f64;

    SpikeBaseline {
        mean,
        std_dev: variance.sqrt(),
        samples,
    }
}

/// True when `amount > mean + k * sigma` over a sufficient baseline.
///
/// Fewer than MIN_SPIKE_SAMPLES historical points disables detection
/// entirely instead of judging against an undefined variance.
pub fn is_spike(amount: Money, baseline: &SpikeBaseline, k: f64) -> bool {
    if baseline.samples < MIN_SPIKE_SAMPLES {
        return false;
    }
    amount.paisa() as f64 > baseline.mean + k * baseline.std_dev
}

/// The period's expenses that spike above the trailing baseline,
/// largest first
pub fn spikes_in(snapshot: &Snapshot, period: Period, k: f64) -> Vec<&Transaction> {
    let baseline = spike_baseline(snapshot, period, DEFAULT_TREND_WINDOW);

    let mut spikes: Vec<&Transaction> = snapshot
        .expenses_in(period)
        .filter(|txn| is_spike(txn.amount, &baseline, k))
        .collect();

    spikes.sort_by(|a, b| b.amount.cmp(&a.amount));
    spikes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseCategory, IncomeCategory, Transaction};
    use chrono::NaiveDate;

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

    fn transport() -> Category {
        Category::Expense(ExpenseCategory::Transport)
    }

    #[test]
    fn test_month_over_month_doubling() {
        // 1000 then 2000 in consecutive months: +100%
        let snapshot = Snapshot::new(
            vec![
                expense(2025, 1, 10, ExpenseCategory::Transport, 1000),
                expense(2025, 2, 10, ExpenseCategory::Transport, 2000),
            ],
            vec![],
            vec![],
        );

        let change = month_over_month(&snapshot, transport(), Period::new(2025, 2).unwrap());
        assert_eq!(change, MonthChange::Change(10000));
    }

    #[test]
    fn test_month_over_month_no_baseline() {
        let snapshot = Snapshot::new(
            vec![expense(2025, 2, 10, ExpenseCategory::Transport, 2000)],
            vec![],
            vec![],
        );

        let change = month_over_month(&snapshot, transport(), Period::new(2025, 2).unwrap());
        assert_eq!(change, MonthChange::NoBaseline);
    }

    #[test]
    fn test_month_over_month_decrease() {
        let snapshot = Snapshot::new(
            vec![
                expense(2025, 1, 10, ExpenseCategory::Transport, 4000),
                expense(2025, 2, 10, ExpenseCategory::Transport, 3000),
            ],
            vec![],
            vec![],
        );

        let change = month_over_month(&snapshot, transport(), Period::new(2025, 2).unwrap());
        assert_eq!(change, MonthChange::Change(-2500));
    }

    #[test]
    fn test_month_over_month_total() {
        let snapshot = Snapshot::new(
            vec![
                expense(2025, 1, 10, ExpenseCategory::Food, 1000),
                expense(2025, 1, 11, ExpenseCategory::Transport, 1000),
                expense(2025, 2, 10, ExpenseCategory::Food, 3000),
            ],
            vec![],
            vec![],
        );

        let change = month_over_month_total(&snapshot, Period::new(2025, 2).unwrap());
        assert_eq!(change, MonthChange::Change(5000));
    }

    #[test]
    fn test_trend_insufficient_data_with_short_history() {
        // Only two months of ledger, three-month window
        let snapshot = Snapshot::new(
            vec![
                expense(2025, 1, 10, ExpenseCategory::Transport, 1000),
                expense(2025, 2, 10, ExpenseCategory::Transport, 2000),
            ],
            vec![],
            vec![],
        );

        let trend = classify_trend(&snapshot, transport(), Period::new(2025, 2).unwrap(), 3);
        assert_eq!(trend, Trend::InsufficientData);
    }

    #[test]
    fn test_trend_increasing() {
        let snapshot = Snapshot::new(
            vec![
                expense(2024, 12, 10, ExpenseCategory::Transport, 1000),
                expense(2025, 1, 10, ExpenseCategory::Transport, 1500),
                expense(2025, 2, 10, ExpenseCategory::Transport, 2500),
            ],
            vec![],
            vec![],
        );

        let trend = classify_trend(&snapshot, transport(), Period::new(2025, 2).unwrap(), 3);
        assert_eq!(trend, Trend::Increasing);
    }

    #[test]
    fn test_trend_decreasing() {
        let snapshot = Snapshot::new(
            vec![
                expense(2024, 12, 10, ExpenseCategory::Transport, 3000),
                expense(2025, 1, 10, ExpenseCategory::Transport, 2000),
                expense(2025, 2, 10, ExpenseCategory::Transport, 1000),
            ],
            vec![],
            vec![],
        );

        let trend = classify_trend(&snapshot, transport(), Period::new(2025, 2).unwrap(), 3);
        assert_eq!(trend, Trend::Decreasing);
    }

    #[test]
    fn test_trend_stable_below_threshold() {
        // 2000 -> 2040 is a 2% change, below the 5% threshold
        let snapshot = Snapshot::new(
            vec![
                expense(2024, 12, 10, ExpenseCategory::Transport, 1000),
                expense(2025, 1, 10, ExpenseCategory::Transport, 2000),
                expense(2025, 2, 10, ExpenseCategory::Transport, 2040),
            ],
            vec![],
            vec![],
        );

        let trend = classify_trend(&snapshot, transport(), Period::new(2025, 2).unwrap(), 3);
        assert_eq!(trend, Trend::Stable);
    }

    #[test]
    fn test_trend_zero_history_months_count_once_covered() {
        // Ledger starts in Nov 2024 (other category); transport itself is
        // silent until February. Zero months are real zeros here.
        let snapshot = Snapshot::new(
            vec![
                expense(2024, 11, 10, ExpenseCategory::Food, 500),
                expense(2025, 2, 10, ExpenseCategory::Transport, 2000),
            ],
            vec![],
            vec![],
        );

        let trend = classify_trend(&snapshot, transport(), Period::new(2025, 2).unwrap(), 3);
        assert_eq!(trend, Trend::Increasing);
    }

    #[test]
    fn test_trend_all_zero_is_stable() {
        let snapshot = Snapshot::new(
            vec![expense(2024, 1, 10, ExpenseCategory::Food, 500)],
            vec![],
            vec![],
        );

        let trend = classify_trend(&snapshot, transport(), Period::new(2024, 6).unwrap(), 3);
        assert_eq!(trend, Trend::Stable);
    }

    #[test]
    fn test_spike_baseline_and_detection() {
        // History: 1000, 1000, 1000, 5000 in the three months before March
        let snapshot = Snapshot::new(
            vec![
                expense(2024, 12, 5, ExpenseCategory::Food, 1000),
                expense(2025, 1, 5, ExpenseCategory::Food, 1000),
                expense(2025, 2, 5, ExpenseCategory::Food, 1000),
                expense(2025, 2, 6, ExpenseCategory::Food, 5000),
                // March expenses under test
                expense(2025, 3, 5, ExpenseCategory::Food, 9000),
                expense(2025, 3, 6, ExpenseCategory::Food, 1000),
            ],
            vec![],
            vec![],
        );

        let march = Period::new(2025, 3).unwrap();
        let baseline = spike_baseline(&snapshot, march, 3);
        assert_eq!(baseline.samples, 4);
        assert!((baseline.mean - 2000.0).abs() < f64::EPSILON);

        let spikes = spikes_in(&snapshot, march, SPIKE_K);
        assert_eq!(spikes.len(), 1);
        assert_eq!(spikes[0].amount.paisa(), 9000);
    }

    #[test]
    fn test_spike_disabled_with_few_samples() {
        let baseline = SpikeBaseline {
            mean: 100.0,
            std_dev: 0.0,
            samples: 1,
        };
        // Would be a spike with enough history, but detection is off
        assert!(!is_spike(Money::from_paisa(1_000_000), &baseline, SPIKE_K));
    }

    #[test]
    fn test_income_category_trends_too() {
        let salary = Category::Income(IncomeCategory::Salary);
        let snapshot = Snapshot::new(
            vec![
                Transaction::new(date(2025, 1, 1), salary, Money::from_paisa(100000)),
                Transaction::new(date(2025, 2, 1), salary, Money::from_paisa(150000)),
            ],
            vec![],
            vec![],
        );

        let change = month_over_month(&snapshot, salary, Period::new(2025, 2).unwrap());
        assert_eq!(change, MonthChange::Change(5000));
    }
}
