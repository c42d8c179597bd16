//! `CaseLoader` over the two SQLite stores

use casepatch_core::loader::{CaseLoader, PaymentGraph};
use casepatch_core::model::{
    ApportionmentRow, FeeRow, GroupingRow, PaymentRow, RefundRow, RemissionRow, Row,
};
use rusqlite::Connection;
use tracing::debug;

use crate::errors::{from_rusqlite, Result};
use crate::repo::rows::FromSqlRow;

/// Reads the current state of a case from the payments and refunds stores
pub struct SqliteCaseLoader<'a> {
    payments: &'a Connection,
    refunds: &'a Connection,
}

impl<'a> SqliteCaseLoader<'a> {
    pub fn new(payments: &'a Connection, refunds: &'a Connection) -> Self {
        Self { payments, refunds }
    }
}

impl CaseLoader for SqliteCaseLoader<'_> {
    fn load_payment_graph(&self, case_key: &str) -> Result<PaymentGraph> {
        let graph = PaymentGraph {
            groupings: select_by_case::<GroupingRow>(self.payments, case_key)?,
            fees: select_by_case::<FeeRow>(self.payments, case_key)?,
            payments: select_by_case::<PaymentRow>(self.payments, case_key)?,
            remissions: select_by_case::<RemissionRow>(self.payments, case_key)?,
            apportionments: select_by_case::<ApportionmentRow>(self.payments, case_key)?,
        };

        debug!(
            case_key,
            groupings = graph.groupings.len(),
            fees = graph.fees.len(),
            payments = graph.payments.len(),
            remissions = graph.remissions.len(),
            apportionments = graph.apportionments.len(),
            "loaded payment graph"
        );

        Ok(graph)
    }

    fn load_refunds(&self, payment_references: &[String]) -> Result<Vec<RefundRow>> {
        if payment_references.is_empty() {
            return Ok(Vec::new());
        }

        let placeholders: Vec<String> = (1..=payment_references.len())
            .map(|i| format!("?{}", i))
            .collect();
        let sql = format!(
            "SELECT {} FROM refunds WHERE payment_reference IN ({}) ORDER BY id",
            RefundRow::COLUMNS.join(", "),
            placeholders.join(", ")
        );

        let mut stmt = self.refunds.prepare(&sql).map_err(from_rusqlite)?;
        let refunds = stmt
            .query_map(
                rusqlite::params_from_iter(payment_references.iter()),
                RefundRow::from_sql_row,
            )
            .map_err(from_rusqlite)?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(from_rusqlite)?;

        debug!(
            references = payment_references.len(),
            refunds = refunds.len(),
            "loaded refunds"
        );

        Ok(refunds)
    }
}

/// `SELECT <COLUMNS> FROM <table> WHERE ccd_case_number = ?1 ORDER BY id`
fn select_by_case<T: FromSqlRow>(conn: &Connection, case_key: &str) -> Result<Vec<T>> {
    let sql = format!(
        "SELECT {} FROM {} WHERE ccd_case_number = ?1 ORDER BY id",
        T::COLUMNS.join(", "),
        T::KIND.table()
    );

    let mut stmt = conn.prepare(&sql).map_err(from_rusqlite)?;
    let rows = stmt
        .query_map([case_key], T::from_sql_row)
        .map_err(from_rusqlite)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .map_err(from_rusqlite)?;

    Ok(rows)
}
