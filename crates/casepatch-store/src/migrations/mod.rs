//! Migration framework
//!
//! Each store has its own ordered list of embedded SQL migrations. Applying
//! is idempotent; a migration whose embedded SQL no longer matches the
//! checksum recorded at apply time is refused.

mod checksums;
mod embedded;
mod runner;

pub use embedded::{get_migrations, Migration};
pub use runner::apply_migrations;
