use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{EntityKind, Row};

/// Grouping (service request) - the root of a case subdivision
///
/// Stored in `payment_fee_link`. Fees and payments point at it through
/// their `payment_link_id`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupingRow {
    pub id: i64,
    pub date_created: Option<NaiveDateTime>,
    pub date_updated: Option<NaiveDateTime>,
    /// Alternate key used when a desired grouping carries no id
    pub payment_reference: Option<String>,
    pub org_id: Option<String>,
    pub enterprise_service_name: Option<String>,
    pub ccd_case_number: Option<String>,
    pub case_reference: Option<String>,
    pub service_request_callback_url: Option<String>,
}

impl Row for GroupingRow {
    const KIND: EntityKind = EntityKind::Grouping;

    const COLUMNS: &'static [&'static str] = &[
        "id",
        "date_created",
        "date_updated",
        "payment_reference",
        "org_id",
        "enterprise_service_name",
        "ccd_case_number",
        "case_reference",
        "service_request_callback_url",
    ];

    fn id(&self) -> i64 {
        self.id
    }
}
