use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{EntityKind, GroupedRow, Row};

/// A payment received against a case, owned by one grouping
///
/// `reference` is the alternate key; refunds in the other store point at a
/// payment by carrying the same string in their `payment_reference`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentRow {
    pub id: i64,
    pub amount: Option<Decimal>,
    pub case_reference: Option<String>,
    pub ccd_case_number: Option<String>,
    pub currency: Option<String>,
    pub date_created: Option<NaiveDateTime>,
    pub date_updated: Option<NaiveDateTime>,
    pub description: Option<String>,
    pub service_type: Option<String>,
    pub site_id: Option<String>,
    pub user_id: Option<String>,
    pub payment_channel: Option<String>,
    pub payment_method: Option<String>,
    pub payment_provider: Option<String>,
    pub payment_status: Option<String>,
    pub payment_link_id: Option<i64>,
    pub customer_reference: Option<String>,
    pub external_reference: Option<String>,
    pub organisation_name: Option<String>,
    pub pba_number: Option<String>,
    pub reference: Option<String>,
    pub giro_slip_no: Option<String>,
    pub s2s_service_name: Option<String>,
    pub reported_date_offline: Option<NaiveDateTime>,
    pub service_callback_url: Option<String>,
    pub document_control_number: Option<String>,
    pub banked_date: Option<NaiveDateTime>,
    pub payer_name: Option<String>,
    pub internal_reference: Option<String>,
}

impl Row for PaymentRow {
    const KIND: EntityKind = EntityKind::Payment;

    const COLUMNS: &'static [&'static str] = &[
        "id",
        "amount",
        "case_reference",
        "ccd_case_number",
        "currency",
        "date_created",
        "date_updated",
        "description",
        "service_type",
        "site_id",
        "user_id",
        "payment_channel",
        "payment_method",
        "payment_provider",
        "payment_status",
        "payment_link_id",
        "customer_reference",
        "external_reference",
        "organisation_name",
        "pba_number",
        "reference",
        "giro_slip_no",
        "s2s_service_name",
        "reported_date_offline",
        "service_callback_url",
        "document_control_number",
        "banked_date",
        "payer_name",
        "internal_reference",
    ];

    fn id(&self) -> i64 {
        self.id
    }
}

impl GroupedRow for PaymentRow {
    fn payment_link_id(&self) -> Option<i64> {
        self.payment_link_id
    }
}
