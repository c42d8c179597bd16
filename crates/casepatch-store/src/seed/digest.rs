//! Seed digest canonicalization
//!
//! Computes stable SHA256 digests of fixtures so repeated imports can be
//! compared.

use casepatch_core::errors::{ExError, ExErrorKind};
use casepatch_core::model::CaseSnapshot;
use sha2::{Digest, Sha256};

use crate::errors::Result;
use crate::seed::format::SeedFixture;

/// Compute a stable digest for a fixture
///
/// Rows are ordered by id per table before hashing, so the digest does not
/// depend on the order rows were listed in.
pub fn compute_seed_digest(fixture: &SeedFixture) -> Result<String> {
    let canonical = SeedFixture::from(CaseSnapshot::from(fixture.clone()).sorted());

    let json = serde_json::to_string(&canonical).map_err(|e| {
        ExError::new(ExErrorKind::Serialization)
            .with_op("seed_digest")
            .with_message(e.to_string())
    })?;

    Ok(hex::encode(Sha256::digest(json.as_bytes())))
}
