//! Classification of current rows against a keep set
//!
//! Every current row lands in exactly one of keep, move or delete, and each
//! list preserves input order.

use super::keep_set::KeepSet;
use super::model::{Classified, ClassifiedCase, Move};
use crate::model::{CaseSnapshot, GroupedRow};

/// Classify every row of the snapshot
pub fn classify_case(snapshot: &CaseSnapshot, keep: &KeepSet) -> ClassifiedCase {
    ClassifiedCase {
        groupings: classify_kept(&snapshot.groupings, |g| keep.groupings.contains(&g.id)),
        fees: classify_grouped(&snapshot.fees, |f| keep.fees.get(&f.id).copied()),
        payments: classify_grouped(&snapshot.payments, |p| keep.payments.get(&p.id).copied()),
        remissions: classify_grouped(&snapshot.remissions, |r| {
            r.hwf_reference
                .as_ref()
                .and_then(|reference| keep.remissions.get(reference))
                .copied()
        }),
        apportionments: classify_grouped(&snapshot.apportionments, |a| {
            keep.apportionments.get(&a.id).copied()
        }),
        refunds: classify_kept(&snapshot.refunds, |r| {
            r.reference
                .as_ref()
                .is_some_and(|reference| keep.refunds.contains(reference))
        }),
    }
}

/// Rows that can move: no target deletes, same parent keeps, else moves
pub fn classify_grouped<T, F>(rows: &[T], target_of: F) -> Classified<T>
where
    T: GroupedRow + Clone,
    F: Fn(&T) -> Option<i64>,
{
    rows.iter().fold(Classified::default(), |mut out, row| {
        match target_of(row) {
            None => out.deletes.push(row.clone()),
            Some(target) if row.payment_link_id() == Some(target) => out.keep.push(row.clone()),
            Some(target) => out.moves.push(Move {
                row: row.clone(),
                from: row.payment_link_id(),
                to: target,
            }),
        }
        out
    })
}

/// Rows that are only kept or deleted
pub fn classify_kept<T, F>(rows: &[T], is_kept: F) -> Classified<T>
where
    T: Clone,
    F: Fn(&T) -> bool,
{
    rows.iter().fold(Classified::default(), |mut out, row| {
        if is_kept(row) {
            out.keep.push(row.clone());
        } else {
            out.deletes.push(row.clone());
        }
        out
    })
}
