use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{EntityKind, Row};

/// A refund of part of a payment, stored in the refunds store
///
/// There is no foreign key across stores: the owning payment is whichever
/// payment carries `payment_reference` as its `reference`. Refunds have no
/// parent-grouping id and are only ever kept or deleted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RefundRow {
    pub id: i64,
    pub date_created: Option<NaiveDateTime>,
    pub date_updated: Option<NaiveDateTime>,
    pub amount: Option<Decimal>,
    pub reason: Option<String>,
    pub refund_status: Option<String>,
    pub reference: Option<String>,
    pub payment_reference: Option<String>,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
    pub ccd_case_number: Option<String>,
    pub fee_ids: Option<String>,
    pub notification_sent_flag: Option<String>,
    pub contact_details: Option<String>,
    pub service_type: Option<String>,
    pub refund_instruction_type: Option<String>,
}

impl Row for RefundRow {
    const KIND: EntityKind = EntityKind::Refund;

    const COLUMNS: &'static [&'static str] = &[
        "id",
        "date_created",
        "date_updated",
        "amount",
        "reason",
        "refund_status",
        "reference",
        "payment_reference",
        "created_by",
        "updated_by",
        "ccd_case_number",
        "fee_ids",
        "notification_sent_flag",
        "contact_details",
        "service_type",
        "refund_instruction_type",
    ];

    fn id(&self) -> i64 {
        self.id
    }
}
