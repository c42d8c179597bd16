//! Database connection management

use std::path::Path;

use casepatch_core::errors::{ExError, ExErrorKind};
use casepatch_core::model::Store;
use rusqlite::{Connection, OpenFlags};

use crate::errors::{from_rusqlite, io_error, Result};
use crate::migrations::apply_migrations;
use crate::repo::SqliteCaseLoader;

/// Open a SQLite database at the given path
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    Connection::open(path).map_err(from_rusqlite)
}

/// Open an in-memory SQLite database (for testing)
pub fn open_in_memory() -> Result<Connection> {
    Connection::open_in_memory().map_err(from_rusqlite)
}

/// Configure a connection
pub fn configure(conn: &Connection) -> Result<()> {
    // journal_mode returns a row, so it cannot go through execute()
    conn.execute_batch("PRAGMA journal_mode = WAL; PRAGMA busy_timeout = 5000;")
        .map_err(from_rusqlite)?;

    Ok(())
}

/// The two independently owned stores of the system
pub struct Stores {
    pub payments: Connection,
    pub refunds: Connection,
}

impl Stores {
    /// Open (creating if needed) and migrate both store files
    pub fn open<P: AsRef<Path>, R: AsRef<Path>>(payments_path: P, refunds_path: R) -> Result<Self> {
        let payments = open_file(payments_path.as_ref())?;
        let refunds = open_file(refunds_path.as_ref())?;
        Self::migrated(payments, refunds)
    }

    /// Open both store files for reading case state
    ///
    /// Neither file is created or migrated; a missing file is `NotFound`.
    pub fn open_existing<P: AsRef<Path>, R: AsRef<Path>>(
        payments_path: P,
        refunds_path: R,
    ) -> Result<Self> {
        Ok(Self {
            payments: open_existing_file(payments_path.as_ref())?,
            refunds: open_existing_file(refunds_path.as_ref())?,
        })
    }

    /// Both stores in memory, migrated
    pub fn open_in_memory() -> Result<Self> {
        Self::migrated(open_in_memory()?, open_in_memory()?)
    }

    fn migrated(mut payments: Connection, mut refunds: Connection) -> Result<Self> {
        apply_migrations(&mut payments, Store::Payments)?;
        apply_migrations(&mut refunds, Store::Refunds)?;
        Ok(Self { payments, refunds })
    }

    pub fn connection(&self, store: Store) -> &Connection {
        match store {
            Store::Payments => &self.payments,
            Store::Refunds => &self.refunds,
        }
    }

    /// Loader reading the current state of a case from both stores
    pub fn loader(&self) -> SqliteCaseLoader<'_> {
        SqliteCaseLoader::new(&self.payments, &self.refunds)
    }
}

fn open_file(path: &Path) -> Result<Connection> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| io_error("create_store_dir", e))?;
    }
    let conn = open(path)?;
    configure(&conn)?;
    Ok(conn)
}

fn open_existing_file(path: &Path) -> Result<Connection> {
    if !path.is_file() {
        return Err(ExError::new(ExErrorKind::NotFound)
            .with_op("open_store")
            .with_entity(path.display().to_string())
            .with_message("Store file does not exist"));
    }
    let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
        | OpenFlags::SQLITE_OPEN_URI
        | OpenFlags::SQLITE_OPEN_NO_MUTEX;
    let conn = Connection::open_with_flags(path, flags).map_err(from_rusqlite)?;
    conn.busy_timeout(std::time::Duration::from_millis(5000))
        .map_err(from_rusqlite)?;
    Ok(conn)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let payments = dir.path().join("nested/payments.db");
        let refunds = dir.path().join("nested/refunds.db");

        let stores = Stores::open(&payments, &refunds).unwrap();

        assert!(payments.exists());
        assert!(refunds.exists());
        let mode: String = stores
            .payments
            .query_row("PRAGMA journal_mode", [], |row| row.get(0))
            .unwrap();
        assert_eq!(mode, "wal");
    }

    #[test]
    fn test_connection_by_store() {
        let stores = Stores::open_in_memory().unwrap();
        let count: i64 = stores
            .connection(Store::Refunds)
            .query_row("SELECT COUNT(*) FROM refunds", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn test_open_existing_never_creates_files() {
        let dir = tempfile::tempdir().unwrap();
        let payments = dir.path().join("missing/payments.db");
        let refunds = dir.path().join("missing/refunds.db");

        let err = Stores::open_existing(&payments, &refunds).err().unwrap();

        assert_eq!(err.kind(), ExErrorKind::NotFound);
        assert_eq!(err.op(), Some("open_store"));
        assert!(!dir.path().join("missing").exists());
    }

    #[test]
    fn test_open_existing_reads_initialised_stores() {
        let dir = tempfile::tempdir().unwrap();
        let payments = dir.path().join("payments.db");
        let refunds = dir.path().join("refunds.db");
        drop(Stores::open(&payments, &refunds).unwrap());

        let stores = Stores::open_existing(&payments, &refunds).unwrap();
        let count: i64 = stores
            .payments
            .query_row("SELECT COUNT(*) FROM payment_fee_link", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }
}
