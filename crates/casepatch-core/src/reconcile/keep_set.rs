//! Keep-set resolution
//!
//! Walks the desired-state tree once and records, for every entity it can
//! identify, the grouping that entity should belong to afterwards.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::model::{CaseSnapshot, GroupingRow, PaymentRow};
use crate::patch::{GroupingPatch, PatchRequest, PaymentPatch};

/// Resolved keep instructions
///
/// Maps go from entity identity to target grouping id. Refunds carry no
/// target; membership alone keeps them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct KeepSet {
    pub groupings: BTreeSet<i64>,
    pub fees: BTreeMap<i64, i64>,
    /// Keyed by Help-with-Fees reference
    pub remissions: BTreeMap<String, i64>,
    pub payments: BTreeMap<i64, i64>,
    pub apportionments: BTreeMap<i64, i64>,
    /// Kept refund references
    pub refunds: BTreeSet<String>,
}

/// Resolve the desired-state tree against the current rows
///
/// Entries that identify nothing are skipped. A grouping entry that does not
/// resolve contributes nothing for its whole subtree. Later entries
/// overwrite earlier ones for the same entity.
pub fn resolve_keep_set(snapshot: &CaseSnapshot, request: &PatchRequest) -> KeepSet {
    request
        .groupings
        .iter()
        .fold(KeepSet::default(), |keep, entry| {
            match resolve_grouping(&snapshot.groupings, entry) {
                Some(target) => keep_grouping(keep, &snapshot.payments, entry, target),
                None => keep,
            }
        })
}

/// By id when the entry carries one, else first grouping with the reference
fn resolve_grouping(groupings: &[GroupingRow], entry: &GroupingPatch) -> Option<i64> {
    match (entry.id, entry.reference_key.as_deref()) {
        (Some(id), _) => groupings.iter().find(|g| g.id == id).map(|g| g.id),
        (None, Some(reference)) => groupings
            .iter()
            .find(|g| g.payment_reference.as_deref() == Some(reference))
            .map(|g| g.id),
        (None, None) => None,
    }
}

/// A carried id is used as-is. Otherwise the reference is matched against
/// every current payment, whatever its current grouping, so a payment can
/// be followed out of a grouping that is being dropped.
fn resolve_payment(payments: &[PaymentRow], entry: &PaymentPatch) -> Option<i64> {
    match (entry.id, entry.reference_key.as_deref()) {
        (Some(id), _) => Some(id),
        (None, Some(reference)) => payments
            .iter()
            .find(|p| p.reference.as_deref() == Some(reference))
            .map(|p| p.id),
        (None, None) => None,
    }
}

fn keep_grouping(
    mut keep: KeepSet,
    payments: &[PaymentRow],
    entry: &GroupingPatch,
    target: i64,
) -> KeepSet {
    keep.groupings.insert(target);

    for fee in &entry.fees {
        if let Some(id) = fee.id {
            keep.fees.insert(id, target);
        }
        // Remissions identify themselves, so they count even under an id-less fee
        for remission in &fee.remissions {
            if let Some(reference) = &remission.reference_key {
                keep.remissions.insert(reference.clone(), target);
            }
        }
    }

    for payment in &entry.payments {
        // Unresolved payments keep nothing beneath them
        let Some(payment_id) = resolve_payment(payments, payment) else {
            continue;
        };
        keep.payments.insert(payment_id, target);

        for refund in &payment.refunds {
            if let Some(reference) = &refund.reference_key {
                keep.refunds.insert(reference.clone());
            }
        }
        for apportionment in &payment.apportionments {
            if let Some(id) = apportionment.id {
                keep.apportionments.insert(id, target);
            }
        }
    }

    keep
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patch::{ApportionmentPatch, FeePatch, RefundPatch, RemissionPatch};

    fn snapshot() -> CaseSnapshot {
        CaseSnapshot {
            groupings: vec![
                GroupingRow {
                    id: 1,
                    payment_reference: Some("SR-1".into()),
                    ..Default::default()
                },
                GroupingRow {
                    id: 2,
                    payment_reference: Some("SR-2".into()),
                    ..Default::default()
                },
            ],
            payments: vec![
                PaymentRow {
                    id: 5,
                    reference: Some("RC-1".into()),
                    payment_link_id: Some(2),
                    ..Default::default()
                },
                PaymentRow {
                    id: 6,
                    reference: Some("RC-1".into()),
                    payment_link_id: Some(1),
                    ..Default::default()
                },
            ],
            ..Default::default()
        }
    }

    fn request(groupings: Vec<GroupingPatch>) -> PatchRequest {
        PatchRequest {
            case_key: "1".into(),
            groupings,
        }
    }

    #[test]
    fn test_grouping_resolves_by_reference_without_id() {
        let keep = resolve_keep_set(
            &snapshot(),
            &request(vec![GroupingPatch {
                reference_key: Some("SR-2".into()),
                fees: vec![FeePatch {
                    id: Some(101),
                    remissions: vec![],
                }],
                ..Default::default()
            }]),
        );
        assert_eq!(keep.groupings, BTreeSet::from([2]));
        assert_eq!(keep.fees.get(&101), Some(&2));
    }

    #[test]
    fn test_unknown_grouping_id_skips_subtree_even_with_valid_reference() {
        let keep = resolve_keep_set(
            &snapshot(),
            &request(vec![GroupingPatch {
                id: Some(99),
                reference_key: Some("SR-1".into()),
                fees: vec![FeePatch {
                    id: Some(101),
                    remissions: vec![],
                }],
                ..Default::default()
            }]),
        );
        assert_eq!(keep, KeepSet::default());
    }

    #[test]
    fn test_idless_fee_still_keeps_its_remissions() {
        let keep = resolve_keep_set(
            &snapshot(),
            &request(vec![GroupingPatch {
                id: Some(1),
                fees: vec![FeePatch {
                    id: None,
                    remissions: vec![
                        RemissionPatch {
                            reference_key: Some("HWF-1".into()),
                        },
                        RemissionPatch {
                            reference_key: None,
                        },
                    ],
                }],
                ..Default::default()
            }]),
        );
        assert!(keep.fees.is_empty());
        assert_eq!(keep.remissions.len(), 1);
        assert_eq!(keep.remissions.get("HWF-1"), Some(&1));
    }

    #[test]
    fn test_payment_reference_takes_first_match_in_load_order() {
        let keep = resolve_keep_set(
            &snapshot(),
            &request(vec![GroupingPatch {
                id: Some(1),
                payments: vec![PaymentPatch {
                    reference_key: Some("RC-1".into()),
                    ..Default::default()
                }],
                ..Default::default()
            }]),
        );
        // payment 5 lives in grouping 2 but is listed first
        assert_eq!(keep.payments, BTreeMap::from([(5, 1)]));
    }

    #[test]
    fn test_unresolved_payment_keeps_nothing_beneath_it() {
        let keep = resolve_keep_set(
            &snapshot(),
            &request(vec![GroupingPatch {
                id: Some(1),
                payments: vec![
                    PaymentPatch {
                        reference_key: Some("RC-404".into()),
                        refunds: vec![RefundPatch {
                            reference_key: Some("RF-1".into()),
                        }],
                        apportionments: vec![ApportionmentPatch { id: Some(7) }],
                        ..Default::default()
                    },
                    PaymentPatch {
                        refunds: vec![RefundPatch {
                            reference_key: Some("RF-2".into()),
                        }],
                        ..Default::default()
                    },
                ],
                ..Default::default()
            }]),
        );
        assert!(keep.payments.is_empty());
        assert!(keep.refunds.is_empty());
        assert!(keep.apportionments.is_empty());
        assert_eq!(keep.groupings, BTreeSet::from([1]));
    }

    #[test]
    fn test_last_entry_wins_for_duplicates() {
        let fee_under = |grouping: i64| GroupingPatch {
            id: Some(grouping),
            fees: vec![FeePatch {
                id: Some(101),
                remissions: vec![],
            }],
            ..Default::default()
        };
        let keep = resolve_keep_set(&snapshot(), &request(vec![fee_under(1), fee_under(2)]));
        assert_eq!(keep.fees.get(&101), Some(&2));
        assert_eq!(keep.groupings, BTreeSet::from([1, 2]));
    }
}
