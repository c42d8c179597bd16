//! Seed fixtures
//!
//! Provides:
//! - The YAML fixture format (one list per table)
//! - Parser with validation
//! - Digest canonicalization
//! - Importer writing both stores

pub mod digest;
pub mod format;
pub mod importer;
pub mod parser;

pub use digest::compute_seed_digest;
pub use format::SeedFixture;
pub use importer::{import_fixture, import_seed, SeedReport};
pub use parser::{parse_seed_file, parse_seed_str};
