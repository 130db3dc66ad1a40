//! YAML export
//!
//! Human-readable full-ledger export, sharing the JSON exporter's
//! structure.

use std::io::Write;

use crate::error::{FinsightError, FinsightResult};

use super::json::FullExport;

/// Write the full ledger as YAML
pub fn export_full_yaml<W: Write>(writer: W, export: &FullExport) -> FinsightResult<()> {
    serde_yaml::to_writer(writer, export).map_err(|e| FinsightError::Export(e.to_string()))
}
