use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{EntityKind, GroupedRow, Row};

/// A charge owed against a case, owned by one grouping
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FeeRow {
    pub id: i64,
    pub code: Option<String>,
    pub version: Option<String>,
    pub payment_link_id: Option<i64>,
    pub calculated_amount: Option<Decimal>,
    pub volume: Option<i32>,
    pub ccd_case_number: Option<String>,
    pub reference: Option<String>,
    pub net_amount: Option<Decimal>,
    pub fee_amount: Option<Decimal>,
    pub amount_due: Option<Decimal>,
    pub date_created: Option<NaiveDateTime>,
    pub date_updated: Option<NaiveDateTime>,
}

impl Row for FeeRow {
    const KIND: EntityKind = EntityKind::Fee;

    const COLUMNS: &'static [&'static str] = &[
        "id",
        "code",
        "version",
        "payment_link_id",
        "calculated_amount",
        "volume",
        "ccd_case_number",
        "reference",
        "net_amount",
        "fee_amount",
        "amount_due",
        "date_created",
        "date_updated",
    ];

    fn id(&self) -> i64 {
        self.id
    }
}

impl GroupedRow for FeeRow {
    fn payment_link_id(&self) -> Option<i64> {
        self.payment_link_id
    }
}
