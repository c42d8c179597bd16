use serde::{Deserialize, Serialize};

use super::model::ClassifiedCase;

/// Per-kind counts of deletes and moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeSummary {
    pub groupings_to_delete: usize,
    pub fees_to_delete: usize,
    pub payments_to_delete: usize,
    pub remissions_to_delete: usize,
    pub refunds_to_delete: usize,
    pub apportionments_to_delete: usize,
    pub fees_to_move: usize,
    pub payments_to_move: usize,
    pub remissions_to_move: usize,
    pub apportionments_to_move: usize,
}

impl ChangeSummary {
    pub fn from_classified(case: &ClassifiedCase) -> Self {
        Self {
            groupings_to_delete: case.groupings.deletes.len(),
            fees_to_delete: case.fees.deletes.len(),
            payments_to_delete: case.payments.deletes.len(),
            remissions_to_delete: case.remissions.deletes.len(),
            refunds_to_delete: case.refunds.deletes.len(),
            apportionments_to_delete: case.apportionments.deletes.len(),
            fees_to_move: case.fees.moves.len(),
            payments_to_move: case.payments.moves.len(),
            remissions_to_move: case.remissions.moves.len(),
            apportionments_to_move: case.apportionments.moves.len(),
        }
    }

    pub fn total_deletes(&self) -> usize {
        self.groupings_to_delete
            + self.fees_to_delete
            + self.payments_to_delete
            + self.remissions_to_delete
            + self.refunds_to_delete
            + self.apportionments_to_delete
    }

    pub fn total_moves(&self) -> usize {
        self.fees_to_move
            + self.payments_to_move
            + self.remissions_to_move
            + self.apportionments_to_move
    }

    pub fn is_zero(&self) -> bool {
        self.total_deletes() == 0 && self.total_moves() == 0
    }
}
