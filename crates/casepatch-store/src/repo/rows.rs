//! Mapping of SQLite rows onto the case row structs
//!
//! Every `SELECT` issued by this crate lists `T::COLUMNS`, so column indices
//! here follow that order.

use std::str::FromStr;

use casepatch_core::model::{
    ApportionmentRow, FeeRow, GroupingRow, PaymentRow, RefundRow, RemissionRow, Row,
};
use rusqlite::types::{FromSqlError, Type, ValueRef};
use rust_decimal::Decimal;

/// A case row that can be read back from a `SELECT <COLUMNS>` result
pub trait FromSqlRow: Row + Sized {
    fn from_sql_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self>;
}

/// Read a monetary column
///
/// Amount columns have NUMERIC affinity, so SQLite hands back whichever of
/// integer, real or text it stored.
fn decimal(row: &rusqlite::Row<'_>, idx: usize) -> rusqlite::Result<Option<Decimal>> {
    let parse = |s: &str| {
        Decimal::from_str(s)
            .map(Some)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
    };

    match row.get_ref(idx)? {
        ValueRef::Null => Ok(None),
        ValueRef::Integer(n) => Ok(Some(Decimal::from(n))),
        ValueRef::Real(f) => parse(&f.to_string()),
        ValueRef::Text(bytes) => {
            let s = std::str::from_utf8(bytes).map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e))
            })?;
            parse(s)
        }
        ValueRef::Blob(_) => Err(rusqlite::Error::FromSqlConversionFailure(
            idx,
            Type::Blob,
            Box::new(FromSqlError::InvalidType),
        )),
    }
}

impl FromSqlRow for GroupingRow {
    fn from_sql_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            date_created: row.get(1)?,
            date_updated: row.get(2)?,
            payment_reference: row.get(3)?,
            org_id: row.get(4)?,
            enterprise_service_name: row.get(5)?,
            ccd_case_number: row.get(6)?,
            case_reference: row.get(7)?,
            service_request_callback_url: row.get(8)?,
        })
    }
}

impl FromSqlRow for FeeRow {
    fn from_sql_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            code: row.get(1)?,
            version: row.get(2)?,
            payment_link_id: row.get(3)?,
            calculated_amount: decimal(row, 4)?,
            volume: row.get(5)?,
            ccd_case_number: row.get(6)?,
            reference: row.get(7)?,
            net_amount: decimal(row, 8)?,
            fee_amount: decimal(row, 9)?,
            amount_due: decimal(row, 10)?,
            date_created: row.get(11)?,
            date_updated: row.get(12)?,
        })
    }
}

impl FromSqlRow for PaymentRow {
    fn from_sql_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            amount: decimal(row, 1)?,
            case_reference: row.get(2)?,
            ccd_case_number: row.get(3)?,
            currency: row.get(4)?,
            date_created: row.get(5)?,
            date_updated: row.get(6)?,
            description: row.get(7)?,
            service_type: row.get(8)?,
            site_id: row.get(9)?,
            user_id: row.get(10)?,
            payment_channel: row.get(11)?,
            payment_method: row.get(12)?,
            payment_provider: row.get(13)?,
            payment_status: row.get(14)?,
            payment_link_id: row.get(15)?,
            customer_reference: row.get(16)?,
            external_reference: row.get(17)?,
            organisation_name: row.get(18)?,
            pba_number: row.get(19)?,
            reference: row.get(20)?,
            giro_slip_no: row.get(21)?,
            s2s_service_name: row.get(22)?,
            reported_date_offline: row.get(23)?,
            service_callback_url: row.get(24)?,
            document_control_number: row.get(25)?,
            banked_date: row.get(26)?,
            payer_name: row.get(27)?,
            internal_reference: row.get(28)?,
        })
    }
}

impl FromSqlRow for RemissionRow {
    fn from_sql_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            fee_id: row.get(1)?,
            hwf_reference: row.get(2)?,
            hwf_amount: decimal(row, 3)?,
            beneficiary_name: row.get(4)?,
            ccd_case_number: row.get(5)?,
            case_reference: row.get(6)?,
            payment_link_id: row.get(7)?,
            site_id: row.get(8)?,
            date_created: row.get(9)?,
            date_updated: row.get(10)?,
            remission_reference: row.get(11)?,
        })
    }
}

impl FromSqlRow for ApportionmentRow {
    fn from_sql_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            payment_id: row.get(1)?,
            fee_id: row.get(2)?,
            payment_link_id: row.get(3)?,
            fee_amount: decimal(row, 4)?,
            payment_amount: decimal(row, 5)?,
            apportion_amount: decimal(row, 6)?,
            ccd_case_number: row.get(7)?,
            apportion_type: row.get(8)?,
            call_surplus_amount: decimal(row, 9)?,
            created_by: row.get(10)?,
            date_created: row.get(11)?,
            date_updated: row.get(12)?,
        })
    }
}

impl FromSqlRow for RefundRow {
    fn from_sql_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            date_created: row.get(1)?,
            date_updated: row.get(2)?,
            amount: decimal(row, 3)?,
            reason: row.get(4)?,
            refund_status: row.get(5)?,
            reference: row.get(6)?,
            payment_reference: row.get(7)?,
            created_by: row.get(8)?,
            updated_by: row.get(9)?,
            ccd_case_number: row.get(10)?,
            fee_ids: row.get(11)?,
            notification_sent_flag: row.get(12)?,
            contact_details: row.get(13)?,
            service_type: row.get(14)?,
            refund_instruction_type: row.get(15)?,
        })
    }
}
