//! SQL literal rendering and statement text
//!
//! Statement text is the external contract of the crate: it is reviewed by a
//! person before anyone runs it, and tests compare it byte for byte. Keep the
//! shapes below stable.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::model::{
    ApportionmentRow, EntityKind, FeeRow, GroupingRow, PaymentRow, RefundRow, RemissionRow, Row,
    PARENT_COLUMN,
};

/// Timestamp literal layout, shared with anything writing rows directly
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

/// A single column value as it appears in an INSERT
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Int(i64),
    Decimal(Decimal),
    Text(String),
    Timestamp(NaiveDateTime),
}

impl SqlValue {
    /// Render as a SQL literal
    pub fn render(&self) -> String {
        match self {
            SqlValue::Null => "NULL".to_string(),
            SqlValue::Int(n) => n.to_string(),
            SqlValue::Decimal(d) => d.to_string(),
            SqlValue::Text(s) => quote(s),
            SqlValue::Timestamp(ts) => format!("'{}'", ts.format(TIMESTAMP_FORMAT)),
        }
    }
}

impl From<i64> for SqlValue {
    fn from(n: i64) -> Self {
        SqlValue::Int(n)
    }
}

impl From<Option<i64>> for SqlValue {
    fn from(v: Option<i64>) -> Self {
        v.map_or(SqlValue::Null, SqlValue::Int)
    }
}

impl From<Option<i32>> for SqlValue {
    fn from(v: Option<i32>) -> Self {
        v.map_or(SqlValue::Null, |n| SqlValue::Int(i64::from(n)))
    }
}

impl From<Option<Decimal>> for SqlValue {
    fn from(v: Option<Decimal>) -> Self {
        v.map_or(SqlValue::Null, SqlValue::Decimal)
    }
}

impl From<&Option<String>> for SqlValue {
    fn from(v: &Option<String>) -> Self {
        v.as_ref()
            .map_or(SqlValue::Null, |s| SqlValue::Text(s.clone()))
    }
}

impl From<Option<NaiveDateTime>> for SqlValue {
    fn from(v: Option<NaiveDateTime>) -> Self {
        v.map_or(SqlValue::Null, SqlValue::Timestamp)
    }
}

/// Single-quote a string, doubling embedded quotes
pub fn quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}

/// A row that can be reconstructed by an INSERT
pub trait SqlRow: Row {
    /// Column values in `COLUMNS` order
    fn values(&self) -> Vec<SqlValue>;
}

/// `DELETE FROM <table> WHERE id = <id>;`
pub fn delete_by_id(kind: EntityKind, id: i64) -> String {
    format!("DELETE FROM {} WHERE id = {};", kind.table(), id)
}

/// `UPDATE <table> SET payment_link_id = <parent> WHERE id = <id>;`
///
/// A missing parent renders `NULL`; it only occurs when undoing a move of a
/// row that had no grouping.
pub fn update_parent(kind: EntityKind, id: i64, parent: Option<i64>) -> String {
    format!(
        "UPDATE {} SET {} = {} WHERE id = {};",
        kind.table(),
        PARENT_COLUMN,
        SqlValue::from(parent).render(),
        id
    )
}

/// `INSERT INTO <table> (<cols>) VALUES (<vals>);`
pub fn insert<T: SqlRow>(row: &T) -> String {
    let values: Vec<String> = row.values().iter().map(SqlValue::render).collect();
    format!(
        "INSERT INTO {} ({}) VALUES ({});",
        T::KIND.table(),
        T::COLUMNS.join(", "),
        values.join(", ")
    )
}

impl SqlRow for GroupingRow {
    fn values(&self) -> Vec<SqlValue> {
        vec![
            self.id.into(),
            self.date_created.into(),
            self.date_updated.into(),
            (&self.payment_reference).into(),
            (&self.org_id).into(),
            (&self.enterprise_service_name).into(),
            (&self.ccd_case_number).into(),
            (&self.case_reference).into(),
            (&self.service_request_callback_url).into(),
        ]
    }
}

impl SqlRow for FeeRow {
    fn values(&self) -> Vec<SqlValue> {
        vec![
            self.id.into(),
            (&self.code).into(),
            (&self.version).into(),
            self.payment_link_id.into(),
            self.calculated_amount.into(),
            self.volume.into(),
            (&self.ccd_case_number).into(),
            (&self.reference).into(),
            self.net_amount.into(),
            self.fee_amount.into(),
            self.amount_due.into(),
            self.date_created.into(),
            self.date_updated.into(),
        ]
    }
}

impl SqlRow for PaymentRow {
    fn values(&self) -> Vec<SqlValue> {
        vec![
            self.id.into(),
            self.amount.into(),
            (&self.case_reference).into(),
            (&self.ccd_case_number).into(),
            (&self.currency).into(),
            self.date_created.into(),
            self.date_updated.into(),
            (&self.description).into(),
            (&self.service_type).into(),
            (&self.site_id).into(),
            (&self.user_id).into(),
            (&self.payment_channel).into(),
            (&self.payment_method).into(),
            (&self.payment_provider).into(),
            (&self.payment_status).into(),
            self.payment_link_id.into(),
            (&self.customer_reference).into(),
            (&self.external_reference).into(),
            (&self.organisation_name).into(),
            (&self.pba_number).into(),
            (&self.reference).into(),
            (&self.giro_slip_no).into(),
            (&self.s2s_service_name).into(),
            self.reported_date_offline.into(),
            (&self.service_callback_url).into(),
            (&self.document_control_number).into(),
            self.banked_date.into(),
            (&self.payer_name).into(),
            (&self.internal_reference).into(),
        ]
    }
}

impl SqlRow for RemissionRow {
    fn values(&self) -> Vec<SqlValue> {
        vec![
            self.id.into(),
            self.fee_id.into(),
            (&self.hwf_reference).into(),
            self.hwf_amount.into(),
            (&self.beneficiary_name).into(),
            (&self.ccd_case_number).into(),
            (&self.case_reference).into(),
            self.payment_link_id.into(),
            (&self.site_id).into(),
            self.date_created.into(),
            self.date_updated.into(),
            (&self.remission_reference).into(),
        ]
    }
}

impl SqlRow for ApportionmentRow {
    fn values(&self) -> Vec<SqlValue> {
        vec![
            self.id.into(),
            self.payment_id.into(),
            self.fee_id.into(),
            self.payment_link_id.into(),
            self.fee_amount.into(),
            self.payment_amount.into(),
            self.apportion_amount.into(),
            (&self.ccd_case_number).into(),
            (&self.apportion_type).into(),
            self.call_surplus_amount.into(),
            (&self.created_by).into(),
            self.date_created.into(),
            self.date_updated.into(),
        ]
    }
}

impl SqlRow for RefundRow {
    fn values(&self) -> Vec<SqlValue> {
        vec![
            self.id.into(),
            self.date_created.into(),
            self.date_updated.into(),
            self.amount.into(),
            (&self.reason).into(),
            (&self.refund_status).into(),
            (&self.reference).into(),
            (&self.payment_reference).into(),
            (&self.created_by).into(),
            (&self.updated_by).into(),
            (&self.ccd_case_number).into(),
            (&self.fee_ids).into(),
            (&self.notification_sent_flag).into(),
            (&self.contact_details).into(),
            (&self.service_type).into(),
            (&self.refund_instruction_type).into(),
        ]
    }
}
