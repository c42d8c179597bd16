//! Seed parser with validation
//!
//! Parses YAML and validates id uniqueness per table and the presence of a
//! case number on every grouping.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use casepatch_core::model::{GroupingRow, Row};

use crate::errors::{seed_validation, Result, SeedError};
use crate::seed::format::SeedFixture;

/// Parse a seed file from a path
pub fn parse_seed_file(path: &Path) -> Result<SeedFixture> {
    let content = fs::read_to_string(path)
        .map_err(|e| seed_validation(&format!("Failed to read seed file: {}", e)))?;

    parse_seed_str(&content)
}

/// Parse a seed from a string
pub fn parse_seed_str(content: &str) -> Result<SeedFixture> {
    let fixture: SeedFixture = serde_yaml::from_str(content)
        .map_err(|e| seed_validation(&format!("YAML parse error: {}", e)))?;

    validate_fixture(&fixture)?;

    Ok(fixture)
}

/// Validate a parsed fixture
pub fn validate_fixture(fixture: &SeedFixture) -> Result<()> {
    unique_ids(&fixture.payment_fee_links)?;
    unique_ids(&fixture.fees)?;
    unique_ids(&fixture.payments)?;
    unique_ids(&fixture.remissions)?;
    unique_ids(&fixture.apportionments)?;
    unique_ids(&fixture.refunds)?;

    // groupings are the entry point of every case lookup
    if let Some(link) = fixture
        .payment_fee_links
        .iter()
        .find(|link| link.ccd_case_number.is_none())
    {
        return Err(SeedError::MissingCaseNumber {
            table: GroupingRow::KIND.table(),
            id: link.id,
        }
        .into());
    }

    Ok(())
}

fn unique_ids<T: Row>(rows: &[T]) -> std::result::Result<(), SeedError> {
    let mut seen = HashSet::new();
    for row in rows {
        if !seen.insert(row.id()) {
            return Err(SeedError::DuplicateId {
                table: T::KIND.table(),
                id: row.id(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use casepatch_core::errors::ExErrorKind;

    #[test]
    fn test_parse_minimal_fixture() {
        let fixture = parse_seed_str(
            r#"
payment_fee_links:
  - id: 1
    ccd_case_number: "1234567890123456"
fees:
  - id: 101
    payment_link_id: 1
    fee_amount: "10.50"
"#,
        )
        .unwrap();

        assert_eq!(fixture.payment_fee_links.len(), 1);
        assert_eq!(fixture.fees[0].payment_link_id, Some(1));
        assert!(fixture.refunds.is_empty());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let err = parse_seed_str(
            r#"
fees:
  - id: 101
  - id: 101
"#,
        )
        .unwrap_err();

        assert_eq!(err.kind(), ExErrorKind::InvalidInput);
        assert!(err.message().contains("duplicate id 101 in fee"));
    }

    #[test]
    fn test_same_id_in_different_tables_allowed() {
        let fixture = parse_seed_str(
            r#"
fees:
  - id: 7
payments:
  - id: 7
"#,
        )
        .unwrap();
        assert_eq!(fixture.row_count(), 2);
    }

    #[test]
    fn test_grouping_without_case_number_rejected() {
        let err = parse_seed_str("payment_fee_links:\n  - id: 3\n").unwrap_err();
        assert!(err.message().contains("payment_fee_link row 3"));
    }

    #[test]
    fn test_invalid_yaml_rejected() {
        let err = parse_seed_str("fees: [").unwrap_err();
        assert!(err.message().starts_with("YAML parse error"));
    }
}
