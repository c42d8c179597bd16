//! Structured logging facility
//!
//! - Single initialization point via `init(profile)`
//! - Structured logging macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - Test capture mode for deterministic assertions
//!
//! # Usage
//!
//! ```rust
//! use casepatch_core::logging_facility::{init, Profile};
//!
//! // Initialize once at application startup
//! init(Profile::Development);
//! ```
//!
//! Operation boundaries (start/end/end_error) are owned by the engine crate.
//! The store logs row counts at debug level and `reconcile` emits a single
//! `debug!` with its counts.

pub mod init;
pub mod macros;
pub mod test_capture;

// Event names used by the macros; callers reach them through `$crate`
#[doc(hidden)]
pub use casepatch_core_types::schema;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
