use tracing::debug;

use super::classify::classify_case;
use super::keep_set::resolve_keep_set;
use super::model::ReconciliationResult;
use super::statements::{forward_statements, rollback_statements};
use super::summary::ChangeSummary;
use crate::model::CaseSnapshot;
use crate::patch::PatchRequest;

/// Reconcile a case snapshot with a desired-state tree
///
/// Pure and infallible: identifications that resolve nothing are inert and
/// only produce more deletes. The caller is responsible for checking that the
/// case exists before calling this.
pub fn reconcile(snapshot: &CaseSnapshot, request: &PatchRequest) -> ReconciliationResult {
    let keep = resolve_keep_set(snapshot, request);
    let classified = classify_case(snapshot, &keep);

    let result = ReconciliationResult {
        forward_statements: forward_statements(&classified),
        rollback_statements: rollback_statements(&classified),
        summary: ChangeSummary::from_classified(&classified),
    };

    debug!(
        case_key = %request.case_key,
        deletes = result.summary.total_deletes(),
        moves = result.summary.total_moves(),
        payments_statements = result.forward_statements.store1.len(),
        refunds_statements = result.forward_statements.store2.len(),
        "reconciled case"
    );

    result
}
