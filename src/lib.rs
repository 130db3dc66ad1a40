//! finsight - Terminal-based personal finance tracker
//!
//! This library provides the core functionality for the finsight
//! application: a ledger of income/expense transactions, budgets, and
//! savings goals, plus the pure aggregation-and-insights engine that turns
//! a ledger snapshot into summaries, trends, scores, alerts, and
//! recommendations.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, periods, transactions, budgets,
//!   goals, snapshot)
//! - `insights`: The pure aggregation and insights engine
//! - `storage`: JSON file storage layer
//! - `display`: Terminal table formatting
//! - `export`: CSV/JSON/YAML export
//! - `cli`: Command handlers
//!
//! The `insights` module is deliberately free of I/O and ambient state:
//! every function takes an immutable [`models::Snapshot`] with explicit
//! period and date parameters, so results are reproducible and safe to
//! recompute at any time.

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod insights;
pub mod models;
pub mod storage;

pub use error::FinsightError;
