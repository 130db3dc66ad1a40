//! JSON export
//!
//! Machine-readable full-ledger export. The same structure backs the YAML
//! exporter; only the serializer differs.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{FinsightError, FinsightResult};
use crate::models::{Budget, Goal, Transaction};

/// Bumped whenever the export shape changes
pub const EXPORT_SCHEMA_VERSION: u32 = 1;

/// Complete ledger export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    pub schema_version: u32,
    pub exported_at: DateTime<Utc>,
    pub transactions: Vec<Transaction>,
    pub budgets: Vec<Budget>,
    pub goals: Vec<Goal>,
}

impl FullExport {
    /// Bundle the ledger's records for export
    pub fn new(transactions: Vec<Transaction>, budgets: Vec<Budget>, goals: Vec<Goal>) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION,
            exported_at: Utc::now(),
            transactions,
            budgets,
            goals,
        }
    }
}

/// Write the full ledger as pretty-printed JSON
pub fn export_full_json<W: Write>(writer: &mut W, export: &FullExport) -> FinsightResult<()> {
    serde_json::to_writer_pretty(&mut *writer, export)
        .map_err(|e| FinsightError::Export(e.to_string()))?;
    writer
        .write_all(b"\n")
        .map_err(|e| FinsightError::Export(e.to_string()))
}
