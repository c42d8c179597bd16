use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{CaseView, GroupingView};

/// Monetary totals and counts for display
///
/// `net_amount` is what was received net of refunds (payments plus
/// remissions minus refunds); `amount_due` is what is still owed (fees minus
/// payments minus remissions). Missing amounts count as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseSummary {
    pub total_fees: Decimal,
    pub total_payments: Decimal,
    pub total_refunds: Decimal,
    pub total_remissions: Decimal,
    pub grouping_count: usize,
    pub fee_count: usize,
    pub payment_count: usize,
    pub refund_count: usize,
    pub remission_count: usize,
    pub net_amount: Decimal,
    pub amount_due: Decimal,
}

impl CaseSummary {
    fn with_derived(mut self) -> Self {
        self.net_amount = self.total_payments + self.total_remissions - self.total_refunds;
        self.amount_due = self.total_fees - self.total_payments - self.total_remissions;
        self
    }
}

fn sum<I: IntoIterator<Item = Option<Decimal>>>(amounts: I) -> Decimal {
    amounts.into_iter().flatten().sum()
}

impl GroupingView {
    pub fn summary(&self) -> CaseSummary {
        let remissions = self.fees.iter().flat_map(|f| f.remissions.iter());
        let refunds = self.payments.iter().flat_map(|p| p.refunds.iter());

        CaseSummary {
            total_fees: sum(self.fees.iter().map(|f| f.amount)),
            total_payments: sum(self.payments.iter().map(|p| p.amount)),
            total_refunds: sum(refunds.clone().map(|r| r.amount)),
            total_remissions: sum(remissions.clone().map(|r| r.amount)),
            grouping_count: 1,
            fee_count: self.fees.len(),
            payment_count: self.payments.len(),
            refund_count: refunds.count(),
            remission_count: remissions.count(),
            ..Default::default()
        }
        .with_derived()
    }
}

impl CaseView {
    pub fn summary(&self) -> CaseSummary {
        self.groupings
            .iter()
            .map(GroupingView::summary)
            .fold(CaseSummary::default(), |acc, s| CaseSummary {
                total_fees: acc.total_fees + s.total_fees,
                total_payments: acc.total_payments + s.total_payments,
                total_refunds: acc.total_refunds + s.total_refunds,
                total_remissions: acc.total_remissions + s.total_remissions,
                grouping_count: acc.grouping_count + s.grouping_count,
                fee_count: acc.fee_count + s.fee_count,
                payment_count: acc.payment_count + s.payment_count,
                refund_count: acc.refund_count + s.refund_count,
                remission_count: acc.remission_count + s.remission_count,
                ..Default::default()
            })
            .with_derived()
    }
}
