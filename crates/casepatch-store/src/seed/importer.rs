//! Seed importer orchestration
//!
//! Writes a validated fixture into both stores, parents before children.
//! Both transactions stay open until every row is in, so a failed insert on
//! either side leaves both stores untouched.

use std::path::Path;

use casepatch_core::reconcile::sql::{SqlRow, SqlValue, TIMESTAMP_FORMAT};
use rusqlite::types::Value;
use rusqlite::Transaction;
use serde::Serialize;
use tracing::debug;

use crate::db::Stores;
use crate::errors::{from_rusqlite, Result};
use crate::seed::digest::compute_seed_digest;
use crate::seed::format::SeedFixture;
use crate::seed::parser::{parse_seed_file, validate_fixture};

/// Rows written per table by one import
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub digest: String,
    pub payment_fee_links: usize,
    pub fees: usize,
    pub payments: usize,
    pub remissions: usize,
    pub apportionments: usize,
    pub refunds: usize,
}

impl SeedReport {
    pub fn total(&self) -> usize {
        self.payment_fee_links
            + self.fees
            + self.payments
            + self.remissions
            + self.apportionments
            + self.refunds
    }
}

/// Import a seed file into both stores
pub fn import_seed(path: &Path, stores: &mut Stores) -> Result<SeedReport> {
    let fixture = parse_seed_file(path)?;
    import_fixture(&fixture, stores)
}

/// Import an in-memory fixture into both stores
pub fn import_fixture(fixture: &SeedFixture, stores: &mut Stores) -> Result<SeedReport> {
    validate_fixture(fixture)?;
    let digest = compute_seed_digest(fixture)?;

    let payments_tx = stores.payments.transaction().map_err(from_rusqlite)?;
    let refunds_tx = stores.refunds.transaction().map_err(from_rusqlite)?;

    insert_rows(&payments_tx, &fixture.payment_fee_links)?;
    insert_rows(&payments_tx, &fixture.fees)?;
    insert_rows(&payments_tx, &fixture.payments)?;
    insert_rows(&payments_tx, &fixture.remissions)?;
    insert_rows(&payments_tx, &fixture.apportionments)?;
    insert_rows(&refunds_tx, &fixture.refunds)?;

    refunds_tx.commit().map_err(from_rusqlite)?;
    payments_tx.commit().map_err(from_rusqlite)?;

    let report = SeedReport {
        digest,
        payment_fee_links: fixture.payment_fee_links.len(),
        fees: fixture.fees.len(),
        payments: fixture.payments.len(),
        remissions: fixture.remissions.len(),
        apportionments: fixture.apportionments.len(),
        refunds: fixture.refunds.len(),
    };

    debug!(digest = %report.digest, rows = report.total(), "seed imported");
    Ok(report)
}

fn insert_rows<T: SqlRow>(tx: &Transaction<'_>, rows: &[T]) -> Result<()> {
    if rows.is_empty() {
        return Ok(());
    }

    let placeholders: Vec<String> = (1..=T::COLUMNS.len()).map(|i| format!("?{}", i)).collect();
    let sql = format!(
        "INSERT INTO {} ({}) VALUES ({})",
        T::KIND.table(),
        T::COLUMNS.join(", "),
        placeholders.join(", ")
    );

    let mut stmt = tx.prepare(&sql).map_err(from_rusqlite)?;
    for row in rows {
        let values = row.values().into_iter().map(param);
        stmt.execute(rusqlite::params_from_iter(values))
            .map_err(|e| from_rusqlite(e).with_entity(format!("{}:{}", T::KIND, row.id())))?;
    }

    Ok(())
}

/// Bind a column value the way the generated statement text would write it
fn param(value: SqlValue) -> Value {
    match value {
        SqlValue::Null => Value::Null,
        SqlValue::Int(n) => Value::Integer(n),
        SqlValue::Decimal(d) => Value::Text(d.to_string()),
        SqlValue::Text(s) => Value::Text(s),
        SqlValue::Timestamp(ts) => Value::Text(ts.format(TIMESTAMP_FORMAT).to_string()),
    }
}
