//! casepatch core - pure in-memory reconciliation kernel
//!
//! This crate holds everything that does not touch a database:
//! - Row models for the payments store (service requests, fees, payments,
//!   remissions, apportionments) and the refunds store (refunds)
//! - The desired-state ("keep") tree submitted by an operator
//! - The reconciliation engine: keep-set resolution, classification,
//!   forward/rollback statement generation and the change summary
//! - The read-side case view with monetary totals
//! - The loader contract implemented by the store crate
//! - Error and logging facilities shared by the workspace

pub mod errors;
pub mod loader;
pub mod logging_facility;
pub mod model;
pub mod patch;
pub mod reconcile;
pub mod view;

// Re-export commonly used types
pub use errors::{CasePatchError, ExError, ExErrorKind, Result};
pub use loader::{CaseLoader, PaymentGraph};
pub use model::CaseSnapshot;
pub use patch::PatchRequest;
pub use reconcile::{reconcile, ChangeSummary, ReconciliationResult};
pub use view::{map_case, CaseSummary, CaseView};
