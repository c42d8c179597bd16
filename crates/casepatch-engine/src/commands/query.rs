//! Read-only case view

use std::time::Instant;

use casepatch_core::errors::Result;
use casepatch_core::loader::CaseLoader;
use casepatch_core::view::{map_case, CaseSummary, CaseView};
use casepatch_core::{log_op_end, log_op_error, log_op_start};
use serde::Serialize;

use crate::commands::snapshot::load_snapshot;

/// Nested view of a case with its monetary summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaseQueryResult {
    pub case: CaseView,
    pub summary: CaseSummary,
}

/// Load a case and assemble its nested view
///
/// # Errors
///
/// Same as [`load_snapshot`].
pub fn query_case<L: CaseLoader + ?Sized>(loader: &L, case_key: &str) -> Result<CaseQueryResult> {
    log_op_start!("query_case", case_key = case_key);
    let start = Instant::now();

    let result = load_snapshot(loader, case_key)
        .map(|snapshot| {
            let case = map_case(&snapshot);
            let summary = case.summary();
            CaseQueryResult { case, summary }
        })
        .map_err(|e| {
            log_op_error!(
                "query_case",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                case_key = case_key
            );
            e
        })?;

    log_op_end!(
        "query_case",
        duration_ms = start.elapsed().as_millis() as u64,
        case_key = case_key,
        groupings = result.summary.grouping_count
    );

    Ok(result)
}
