//! casepatch engine - orchestration layer
//!
//! Provides the case-level operations that coordinate a `CaseLoader` with the
//! pure reconciliation and view logic of `casepatch-core`.

pub mod commands;

pub use commands::query::{query_case, CaseQueryResult};
pub use commands::reconcile::reconcile_case;
pub use commands::snapshot::load_snapshot;
