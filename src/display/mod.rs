//! Display formatting for terminal output
//!
//! Provides utilities for formatting data models and derived insights for
//! terminal display as fixed-width tables and detail views.

pub mod report;
pub mod transaction;

pub use report::{
    format_alerts, format_breakdown, format_budget_overview, format_daily_check, format_goals,
    format_health, format_recommendations, format_summary, format_top_categories, format_trends,
    TrendRow,
};
pub use transaction::format_transaction_list;
