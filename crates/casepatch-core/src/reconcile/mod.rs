//! Reconciliation of current case state with a desired-state tree
//!
//! ```text
//! CaseSnapshot + PatchRequest
//!     -> keep_set::resolve_keep_set   (what to keep, under which grouping)
//!     -> classify::classify_case      (keep / move / delete per row)
//!     -> statements + summary         (ordered SQL text, counts)
//! ```
//!
//! Nothing here touches a store. The statement text is meant to be reviewed
//! and then executed by someone else.

pub mod classify;
pub mod engine;
pub mod keep_set;
pub mod model;
pub mod sql;
pub mod statements;
pub mod summary;

pub use classify::classify_case;
pub use engine::reconcile;
pub use keep_set::{resolve_keep_set, KeepSet};
pub use model::{Classified, ClassifiedCase, Move, ReconciliationResult, StoreStatements};
pub use summary::ChangeSummary;
