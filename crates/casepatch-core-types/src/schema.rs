//! Canonical schema constants for structured logging
//!
//! These constants keep field keys consistent across the engine, store and CLI.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_REQUEST_ID: &str = "request_id";
pub const FIELD_TRACE_ID: &str = "trace_id";

// Case identifiers
pub const FIELD_CASE_KEY: &str = "case_key";

// Statement stream sizes
pub const FIELD_PAYMENTS_STATEMENTS: &str = "payments_statements";
pub const FIELD_REFUNDS_STATEMENTS: &str = "refunds_statements";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
