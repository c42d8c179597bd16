//! In-memory loaders and builders shared by the engine tests

use casepatch_core::errors::{ExError, ExErrorKind, Result};
use casepatch_core::loader::{CaseLoader, PaymentGraph};
use casepatch_core::model::{CaseSnapshot, FeeRow, GroupingRow, PaymentRow, RefundRow};
use casepatch_core::patch::{FeePatch, GroupingPatch, PatchRequest, PaymentPatch, RefundPatch};
use rust_decimal::Decimal;

#[allow(dead_code)]
pub const CASE: &str = "1234567890123456";

/// Serves rows from a fixed snapshot, filtered the way the SQL loader filters
pub struct MemoryLoader {
    pub data: CaseSnapshot,
}

impl CaseLoader for MemoryLoader {
    fn load_payment_graph(&self, case_key: &str) -> Result<PaymentGraph> {
        let on_case = |ccd: &Option<String>| ccd.as_deref() == Some(case_key);
        Ok(PaymentGraph {
            groupings: self
                .data
                .groupings
                .iter()
                .filter(|r| on_case(&r.ccd_case_number))
                .cloned()
                .collect(),
            fees: self
                .data
                .fees
                .iter()
                .filter(|r| on_case(&r.ccd_case_number))
                .cloned()
                .collect(),
            payments: self
                .data
                .payments
                .iter()
                .filter(|r| on_case(&r.ccd_case_number))
                .cloned()
                .collect(),
            remissions: self
                .data
                .remissions
                .iter()
                .filter(|r| on_case(&r.ccd_case_number))
                .cloned()
                .collect(),
            apportionments: self
                .data
                .apportionments
                .iter()
                .filter(|r| on_case(&r.ccd_case_number))
                .cloned()
                .collect(),
        })
    }

    fn load_refunds(&self, payment_references: &[String]) -> Result<Vec<RefundRow>> {
        Ok(self
            .data
            .refunds
            .iter()
            .filter(|r| {
                r.payment_reference
                    .as_ref()
                    .is_some_and(|p| payment_references.contains(p))
            })
            .cloned()
            .collect())
    }
}

/// A store that is down
#[allow(dead_code)]
pub struct FailingLoader;

impl CaseLoader for FailingLoader {
    fn load_payment_graph(&self, _case_key: &str) -> Result<PaymentGraph> {
        Err(ExError::new(ExErrorKind::Persistence)
            .with_op("sqlite")
            .with_message("database is locked"))
    }

    fn load_refunds(&self, _payment_references: &[String]) -> Result<Vec<RefundRow>> {
        Err(ExError::new(ExErrorKind::Persistence).with_op("sqlite"))
    }
}

fn amount(s: &str) -> Option<Decimal> {
    s.parse().ok()
}

/// Two groupings on `case_key`: fee 101 and payment 201 (refund RF-1) under
/// grouping 1, fee 102 under grouping 2
#[allow(dead_code)]
pub fn two_grouping_case(case_key: &str) -> MemoryLoader {
    let ccd = Some(case_key.to_string());
    MemoryLoader {
        data: CaseSnapshot {
            groupings: vec![
                GroupingRow {
                    id: 1,
                    payment_reference: Some("2024-0000000000001".into()),
                    ccd_case_number: ccd.clone(),
                    ..Default::default()
                },
                GroupingRow {
                    id: 2,
                    payment_reference: Some("2024-0000000000002".into()),
                    ccd_case_number: ccd.clone(),
                    ..Default::default()
                },
            ],
            fees: vec![
                FeeRow {
                    id: 101,
                    code: Some("FEE0001".into()),
                    payment_link_id: Some(1),
                    fee_amount: amount("100.00"),
                    ccd_case_number: ccd.clone(),
                    ..Default::default()
                },
                FeeRow {
                    id: 102,
                    code: Some("FEE0002".into()),
                    payment_link_id: Some(2),
                    fee_amount: amount("50.00"),
                    ccd_case_number: ccd.clone(),
                    ..Default::default()
                },
            ],
            payments: vec![PaymentRow {
                id: 201,
                amount: amount("100.00"),
                payment_link_id: Some(1),
                reference: Some("RC-1".into()),
                ccd_case_number: ccd.clone(),
                ..Default::default()
            }],
            refunds: vec![RefundRow {
                id: 501,
                amount: amount("20.00"),
                reference: Some("RF-1".into()),
                payment_reference: Some("RC-1".into()),
                ccd_case_number: ccd,
                ..Default::default()
            }],
            ..Default::default()
        },
    }
}

/// Everything consolidated under grouping 1; grouping 2 is dropped
#[allow(dead_code)]
pub fn consolidate(case_key: &str) -> PatchRequest {
    PatchRequest {
        case_key: case_key.to_string(),
        groupings: vec![GroupingPatch {
            id: Some(1),
            reference_key: None,
            fees: vec![
                FeePatch {
                    id: Some(101),
                    remissions: vec![],
                },
                FeePatch {
                    id: Some(102),
                    remissions: vec![],
                },
            ],
            payments: vec![PaymentPatch {
                id: Some(201),
                reference_key: None,
                refunds: vec![RefundPatch {
                    reference_key: Some("RF-1".into()),
                }],
                apportionments: vec![],
            }],
        }],
    }
}
