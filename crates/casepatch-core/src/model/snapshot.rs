use serde::{Deserialize, Serialize};

use super::{ApportionmentRow, FeeRow, GroupingRow, PaymentRow, RefundRow, RemissionRow};
use crate::loader::PaymentGraph;

/// Fully materialized current state of one case across both stores
///
/// No ordering is assumed on any collection.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CaseSnapshot {
    pub groupings: Vec<GroupingRow>,
    pub fees: Vec<FeeRow>,
    pub payments: Vec<PaymentRow>,
    pub remissions: Vec<RemissionRow>,
    pub apportionments: Vec<ApportionmentRow>,
    pub refunds: Vec<RefundRow>,
}

impl CaseSnapshot {
    /// Join the payments-store graph with the refunds fetched for it
    pub fn from_parts(graph: PaymentGraph, refunds: Vec<RefundRow>) -> Self {
        Self {
            groupings: graph.groupings,
            fees: graph.fees,
            payments: graph.payments,
            remissions: graph.remissions,
            apportionments: graph.apportionments,
            refunds,
        }
    }

    /// A case with no groupings does not exist
    pub fn is_empty(&self) -> bool {
        self.groupings.is_empty()
    }

    /// Total number of rows across all six collections
    pub fn row_count(&self) -> usize {
        self.groupings.len()
            + self.fees.len()
            + self.payments.len()
            + self.remissions.len()
            + self.apportionments.len()
            + self.refunds.len()
    }

    /// Copy with every collection ordered by id
    pub fn sorted(&self) -> Self {
        let mut out = self.clone();
        out.groupings.sort_by_key(|r| r.id);
        out.fees.sort_by_key(|r| r.id);
        out.payments.sort_by_key(|r| r.id);
        out.remissions.sort_by_key(|r| r.id);
        out.apportionments.sort_by_key(|r| r.id);
        out.refunds.sort_by_key(|r| r.id);
        out
    }
}
