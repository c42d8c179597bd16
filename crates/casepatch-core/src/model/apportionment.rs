use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{EntityKind, GroupedRow, Row};

/// Allocation of part of a payment against a fee
///
/// Like remissions, carries a denormalized `payment_link_id` next to its
/// real parents (`fee_id`, `payment_id`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ApportionmentRow {
    pub id: i64,
    pub payment_id: Option<i64>,
    pub fee_id: Option<i64>,
    pub payment_link_id: Option<i64>,
    pub fee_amount: Option<Decimal>,
    pub payment_amount: Option<Decimal>,
    pub apportion_amount: Option<Decimal>,
    pub ccd_case_number: Option<String>,
    pub apportion_type: Option<String>,
    pub call_surplus_amount: Option<Decimal>,
    pub created_by: Option<String>,
    pub date_created: Option<NaiveDateTime>,
    pub date_updated: Option<NaiveDateTime>,
}

impl Row for ApportionmentRow {
    const KIND: EntityKind = EntityKind::Apportionment;

    const COLUMNS: &'static [&'static str] = &[
        "id",
        "payment_id",
        "fee_id",
        "payment_link_id",
        "fee_amount",
        "payment_amount",
        "apportion_amount",
        "ccd_case_number",
        "apportion_type",
        "call_surplus_amount",
        "created_by",
        "date_created",
        "date_updated",
    ];

    fn id(&self) -> i64 {
        self.id
    }
}

impl GroupedRow for ApportionmentRow {
    fn payment_link_id(&self) -> Option<i64> {
        self.payment_link_id
    }
}
