//! Error helpers for casepatch-store
//!
//! Every store failure is an `ExError` with a store-specific operation name.

use casepatch_core::errors::{ExError, ExErrorKind};
use thiserror::Error;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Seed fixture problems found before anything is written
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeedError {
    #[error("duplicate id {id} in {table}")]
    DuplicateId { table: &'static str, id: i64 },

    #[error("{table} row {id} has no ccd_case_number")]
    MissingCaseNumber { table: &'static str, id: i64 },
}

impl From<SeedError> for ExError {
    fn from(err: SeedError) -> Self {
        seed_validation(&err.to_string())
    }
}

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> ExError {
    ExError::new(ExErrorKind::Migration)
        .with_op("migration")
        .with_entity(migration_id)
        .with_message(format!("Migration {} failed: {}", migration_id, reason))
}

/// Create a checksum mismatch error for an already applied migration
pub fn checksum_mismatch(migration_id: &str, expected: &str, actual: &str) -> ExError {
    ExError::new(ExErrorKind::Migration)
        .with_op("migration_checksum")
        .with_entity(migration_id)
        .with_message(format!(
            "Checksum mismatch for migration {}: recorded {}, embedded {}",
            migration_id, expected, actual
        ))
}

/// Create a seed validation error
pub fn seed_validation(reason: &str) -> ExError {
    ExError::new(ExErrorKind::InvalidInput)
        .with_op("seed_parse")
        .with_message(reason.to_string())
}

/// Create a database error from rusqlite::Error
pub fn from_rusqlite(err: rusqlite::Error) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("sqlite")
        .with_message(err.to_string())
}

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_error_maps_to_invalid_input() {
        let err: ExError = SeedError::DuplicateId {
            table: "fee",
            id: 7,
        }
        .into();
        assert_eq!(err.kind(), ExErrorKind::InvalidInput);
        assert_eq!(err.message(), "duplicate id 7 in fee");
    }

    #[test]
    fn test_checksum_mismatch_is_migration_error() {
        let err = checksum_mismatch("001_initial_schema", "aa", "bb");
        assert_eq!(err.code(), "ERR_MIGRATION");
        assert_eq!(err.entity(), Some("001_initial_schema"));
    }
}
