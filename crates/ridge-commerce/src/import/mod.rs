//! Bulk product import module.
//!
//! Parses the shop's CSV export, validates rows against the product form
//! rules, and tracks sequential-insert progress and per-row outcomes.

mod importer;

pub use importer::{CsvImporter, ImportPlan, ImportProgress};

use crate::catalog::Severity;
use serde::{Deserialize, Serialize};

/// A finding attached to one row of the import file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowIssue {
    /// 1-indexed data row (the header line is row 0).
    pub row: usize,
    /// Field the issue belongs to; "row" for whole-row problems,
    /// "insert" for backend failures during execution.
    pub field: String,
    /// Human-readable description.
    pub message: String,
    /// Whether the row was blocked.
    pub severity: Severity,
}

/// Summary of a completed import run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportReport {
    /// Rows inserted into the catalog.
    pub inserted: usize,
    /// Rows that failed at insert time.
    pub failed: usize,
    /// All issues: validation findings plus insert failures.
    pub issues: Vec<RowIssue>,
}

impl ImportReport {
    /// Whether every planned row made it in.
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}
