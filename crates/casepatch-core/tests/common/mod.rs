//! Row and tree builders shared by the integration tests

use casepatch_core::model::{
    ApportionmentRow, FeeRow, GroupingRow, PaymentRow, RefundRow, RemissionRow,
};
use casepatch_core::patch::{
    ApportionmentPatch, FeePatch, GroupingPatch, PatchRequest, PaymentPatch, RefundPatch,
    RemissionPatch,
};

pub const CASE: &str = "1234567890123456";

#[allow(dead_code)]
pub fn grouping(id: i64) -> GroupingRow {
    GroupingRow {
        id,
        payment_reference: Some(format!("2024-{:013}", id)),
        ccd_case_number: Some(CASE.to_string()),
        ..Default::default()
    }
}

#[allow(dead_code)]
pub fn fee(id: i64, parent: i64) -> FeeRow {
    FeeRow {
        id,
        code: Some(format!("FEE{:04}", id)),
        version: Some("1".to_string()),
        payment_link_id: Some(parent),
        ccd_case_number: Some(CASE.to_string()),
        ..Default::default()
    }
}

#[allow(dead_code)]
pub fn payment(id: i64, parent: i64, reference: &str) -> PaymentRow {
    PaymentRow {
        id,
        reference: Some(reference.to_string()),
        payment_link_id: Some(parent),
        ccd_case_number: Some(CASE.to_string()),
        currency: Some("GBP".to_string()),
        ..Default::default()
    }
}

#[allow(dead_code)]
pub fn remission(id: i64, fee_id: i64, parent: i64, hwf_reference: &str) -> RemissionRow {
    RemissionRow {
        id,
        fee_id: Some(fee_id),
        hwf_reference: Some(hwf_reference.to_string()),
        payment_link_id: Some(parent),
        ccd_case_number: Some(CASE.to_string()),
        ..Default::default()
    }
}

#[allow(dead_code)]
pub fn apportionment(id: i64, fee_id: i64, payment_id: i64, parent: i64) -> ApportionmentRow {
    ApportionmentRow {
        id,
        fee_id: Some(fee_id),
        payment_id: Some(payment_id),
        payment_link_id: Some(parent),
        ccd_case_number: Some(CASE.to_string()),
        ..Default::default()
    }
}

#[allow(dead_code)]
pub fn refund(id: i64, reference: &str, payment_reference: &str) -> RefundRow {
    RefundRow {
        id,
        reference: Some(reference.to_string()),
        payment_reference: Some(payment_reference.to_string()),
        ccd_case_number: Some(CASE.to_string()),
        ..Default::default()
    }
}

#[allow(dead_code)]
pub fn request(groupings: Vec<GroupingPatch>) -> PatchRequest {
    PatchRequest {
        case_key: CASE.to_string(),
        groupings,
    }
}

/// Grouping entry identified by id
#[allow(dead_code)]
pub fn keep_grouping(id: i64, fees: Vec<FeePatch>, payments: Vec<PaymentPatch>) -> GroupingPatch {
    GroupingPatch {
        id: Some(id),
        reference_key: None,
        fees,
        payments,
    }
}

#[allow(dead_code)]
pub fn keep_fee(id: i64, remissions: &[&str]) -> FeePatch {
    FeePatch {
        id: Some(id),
        remissions: remissions
            .iter()
            .map(|r| RemissionPatch {
                reference_key: Some(r.to_string()),
            })
            .collect(),
    }
}

#[allow(dead_code)]
pub fn keep_payment(id: i64, refunds: &[&str], apportionments: &[i64]) -> PaymentPatch {
    PaymentPatch {
        id: Some(id),
        reference_key: None,
        refunds: refunds
            .iter()
            .map(|r| RefundPatch {
                reference_key: Some(r.to_string()),
            })
            .collect(),
        apportionments: apportionments
            .iter()
            .map(|id| ApportionmentPatch { id: Some(*id) })
            .collect(),
    }
}
