//! Loading the current state of a case

use std::time::Instant;

use casepatch_core::errors::{CasePatchError, ExError, Result};
use casepatch_core::loader::CaseLoader;
use casepatch_core::model::CaseSnapshot;
use casepatch_core::{log_op_end, log_op_error, log_op_start};

/// Load every row of a case from both stores
///
/// The refunds store is queried by the payment references found in the
/// payments store, not by case number.
///
/// # Errors
///
/// - `InvalidInput`: empty case key
/// - `NotFound`: the case has no groupings
/// - `Persistence`: a store could not be read
pub fn load_snapshot<L: CaseLoader + ?Sized>(loader: &L, case_key: &str) -> Result<CaseSnapshot> {
    log_op_start!("load_snapshot", case_key = case_key);
    let start = Instant::now();

    let snapshot = load_snapshot_impl(loader, case_key).map_err(|e| {
        log_op_error!(
            "load_snapshot",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64,
            case_key = case_key
        );
        e
    })?;

    log_op_end!(
        "load_snapshot",
        duration_ms = start.elapsed().as_millis() as u64,
        case_key = case_key,
        rows = snapshot.row_count()
    );

    Ok(snapshot)
}

fn load_snapshot_impl<L: CaseLoader + ?Sized>(loader: &L, case_key: &str) -> Result<CaseSnapshot> {
    if case_key.trim().is_empty() {
        return Err(ExError::from(CasePatchError::MissingCaseKey).with_op("load_snapshot"));
    }

    let graph = loader.load_payment_graph(case_key)?;
    if graph.groupings.is_empty() {
        return Err(ExError::from(CasePatchError::CaseNotFound {
            case_key: case_key.to_string(),
        })
        .with_op("load_snapshot"));
    }

    let refunds = loader.load_refunds(&graph.payment_references())?;
    Ok(CaseSnapshot::from_parts(graph, refunds))
}
