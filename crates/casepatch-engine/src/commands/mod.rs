//! Command orchestration layer.
//!
//! ## Logging Ownership
//!
//! Each public operation here owns its lifecycle logging:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure
//!
//! Lower layers (store, core) use only `tracing::debug!()` for internal details.

pub mod query;
pub mod reconcile;
pub mod snapshot;
