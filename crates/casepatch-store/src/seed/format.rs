//! Seed fixture schema
//!
//! A fixture lists raw rows per table, keyed by the table's snake_case name
//! with an `s` appended. Rows use the stored column names.

use casepatch_core::model::{
    ApportionmentRow, CaseSnapshot, FeeRow, GroupingRow, PaymentRow, RefundRow, RemissionRow,
};
use serde::{Deserialize, Serialize};

/// Top-level seed file structure
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedFixture {
    pub payment_fee_links: Vec<GroupingRow>,
    pub fees: Vec<FeeRow>,
    pub payments: Vec<PaymentRow>,
    pub remissions: Vec<RemissionRow>,
    pub apportionments: Vec<ApportionmentRow>,
    pub refunds: Vec<RefundRow>,
}

impl SeedFixture {
    pub fn row_count(&self) -> usize {
        self.payment_fee_links.len()
            + self.fees.len()
            + self.payments.len()
            + self.remissions.len()
            + self.apportionments.len()
            + self.refunds.len()
    }
}

impl From<CaseSnapshot> for SeedFixture {
    fn from(snapshot: CaseSnapshot) -> Self {
        Self {
            payment_fee_links: snapshot.groupings,
            fees: snapshot.fees,
            payments: snapshot.payments,
            remissions: snapshot.remissions,
            apportionments: snapshot.apportionments,
            refunds: snapshot.refunds,
        }
    }
}

impl From<SeedFixture> for CaseSnapshot {
    fn from(fixture: SeedFixture) -> Self {
        Self {
            groupings: fixture.payment_fee_links,
            fees: fixture.fees,
            payments: fixture.payments,
            remissions: fixture.remissions,
            apportionments: fixture.apportionments,
            refunds: fixture.refunds,
        }
    }
}
