use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{EntityKind, GroupedRow, Row};

/// A Help-with-Fees waiver against one fee
///
/// The true parent is `fee_id`. `payment_link_id` duplicates the fee's
/// grouping on purpose so a move is detected by comparing one column,
/// without joining through the fee.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RemissionRow {
    pub id: i64,
    pub fee_id: Option<i64>,
    /// Alternate key; a remission without one can never be kept
    pub hwf_reference: Option<String>,
    pub hwf_amount: Option<Decimal>,
    pub beneficiary_name: Option<String>,
    pub ccd_case_number: Option<String>,
    pub case_reference: Option<String>,
    pub payment_link_id: Option<i64>,
    pub site_id: Option<String>,
    pub date_created: Option<NaiveDateTime>,
    pub date_updated: Option<NaiveDateTime>,
    pub remission_reference: Option<String>,
}

impl Row for RemissionRow {
    const KIND: EntityKind = EntityKind::Remission;

    const COLUMNS: &'static [&'static str] = &[
        "id",
        "fee_id",
        "hwf_reference",
        "hwf_amount",
        "beneficiary_name",
        "ccd_case_number",
        "case_reference",
        "payment_link_id",
        "site_id",
        "date_created",
        "date_updated",
        "remission_reference",
    ];

    fn id(&self) -> i64 {
        self.id
    }
}

impl GroupedRow for RemissionRow {
    fn payment_link_id(&self) -> Option<i64> {
        self.payment_link_id
    }
}
