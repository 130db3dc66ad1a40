//! Financial aggregation and insights engine
//!
//! The pure computation layer of finsight: every function here takes an
//! immutable [`Snapshot`](crate::models::Snapshot) plus explicit period and
//! date parameters and returns freshly computed value objects. Nothing is
//! cached, nothing is mutated, and no I/O happens inside this module, so
//! calls are idempotent and safe to repeat or run concurrently on a shared
//! snapshot.
//!
//! Modules in dependency order: `aggregate` (sums and rates), `budget`
//! (utilization and status), `trend` (deltas and spikes), `goal`
//! (projections), `health` (composite score), `alert` and `recommend`
//! (rule evaluation over everything above).

pub mod aggregate;
pub mod alert;
pub mod budget;
pub mod goal;
pub mod health;
pub mod recommend;
pub mod trend;

pub use aggregate::{
    average_net_savings, burn_rate, category_breakdown, monthly_summary, top_categories,
    BurnRate, CategoryBreakdown, MonthlySummary,
};
pub use alert::{active_alerts, Alert, AlertKind, Severity};
pub use budget::{
    chronically_over, chronically_under, overview, usage, utilization, BudgetOverview,
    BudgetStatus, BudgetUsage, UnbudgetedSpend,
};
pub use goal::{project_goal, Completion, GoalProjection, RequiredSavings};
pub use health::{health_score, HealthScore, Rating};
pub use recommend::{recommendations, Recommendation};
pub use trend::{
    classify_trend, is_spike, month_over_month, month_over_month_total, spike_baseline, spikes_in,
    MonthChange, SpikeBaseline, Trend,
};
