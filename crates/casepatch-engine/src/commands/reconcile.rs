//! Reconciliation of a case against a desired-state tree

use std::time::Instant;

use casepatch_core::errors::{CasePatchError, ExError, Result};
use casepatch_core::loader::CaseLoader;
use casepatch_core::patch::PatchRequest;
use casepatch_core::reconcile::{reconcile, ReconciliationResult};
use casepatch_core::{log_op_end, log_op_error, log_op_start};

use crate::commands::snapshot::load_snapshot;

/// Compute the statements that bring a case to the desired state
///
/// Nothing is executed. `path_case_key` is the case the caller addressed; it
/// must match the case number inside the request body.
///
/// # Errors
///
/// - `InvalidInput`: the request carries no case number
/// - `CaseKeyMismatch`: addressed case differs from the request body
/// - `NotFound`: the case has no groupings
/// - `Persistence`: a store could not be read
pub fn reconcile_case<L: CaseLoader + ?Sized>(
    loader: &L,
    path_case_key: &str,
    request: &PatchRequest,
) -> Result<ReconciliationResult> {
    log_op_start!("reconcile_case", case_key = path_case_key);
    let start = Instant::now();

    let result = reconcile_case_impl(loader, path_case_key, request).map_err(|e| {
        log_op_error!(
            "reconcile_case",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64,
            case_key = path_case_key
        );
        e
    })?;

    log_op_end!(
        "reconcile_case",
        duration_ms = start.elapsed().as_millis() as u64,
        case_key = path_case_key,
        deletes = result.summary.total_deletes(),
        moves = result.summary.total_moves(),
        payments_statements = result.forward_statements.store1.len(),
        refunds_statements = result.forward_statements.store2.len()
    );

    Ok(result)
}

fn reconcile_case_impl<L: CaseLoader + ?Sized>(
    loader: &L,
    path_case_key: &str,
    request: &PatchRequest,
) -> Result<ReconciliationResult> {
    if request.case_key.trim().is_empty() {
        return Err(ExError::from(CasePatchError::MissingCaseKey)
            .with_op("reconcile_case")
            .with_case_key(path_case_key));
    }

    if request.case_key != path_case_key {
        return Err(ExError::from(CasePatchError::CaseKeyMismatch {
            addressed: path_case_key.to_string(),
            body: request.case_key.clone(),
        })
        .with_op("reconcile_case"));
    }

    let snapshot = load_snapshot(loader, path_case_key)?;
    Ok(reconcile(&snapshot, request))
}
