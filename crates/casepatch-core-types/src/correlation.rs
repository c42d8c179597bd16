//! Correlation types for request tracking
//!
//! A reconciliation call is correlated by a `RequestId` (one per CLI
//! invocation or caller request) and, when the caller supplies one, a
//! `TraceId` propagated from the outside.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! correlation_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Fresh time-ordered identifier (UUIDv7)
            pub fn new() -> Self {
                Self(Uuid::now_v7().to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

correlation_id!(
    /// Identifier of a single reconciliation or query request
    RequestId
);

correlation_id!(
    /// Trace identifier received from an upstream caller
    TraceId
);

/// Correlation carried alongside a request for logs and errors
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    pub request_id: RequestId,
    pub trace_id: Option<TraceId>,
    /// CCD case number the request targets, once known
    pub case_key: Option<String>,
}

impl RequestContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopt an upstream trace id when one was supplied and is not blank
    pub fn with_trace_header(self, header: Option<&str>) -> Self {
        match header.map(str::trim).filter(|h| !h.is_empty()) {
            Some(h) => self.with_trace_id(TraceId::from(h.to_string())),
            None => self,
        }
    }

    pub fn with_trace_id(mut self, trace_id: TraceId) -> Self {
        self.trace_id = Some(trace_id);
        self
    }

    pub fn with_case_key(mut self, case_key: impl Into<String>) -> Self {
        self.case_key = Some(case_key.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(RequestId::new(), RequestId::new());
        assert_ne!(TraceId::new(), TraceId::new());
        assert_eq!(RequestId::new().as_str().len(), 36);
    }

    #[test]
    fn test_display_is_the_raw_value() {
        let id = RequestId::from("req-1".to_string());
        assert_eq!(id.to_string(), "req-1");
    }

    #[test]
    fn test_trace_header_adopted_unless_blank() {
        let ctx = RequestContext::new().with_trace_header(Some(" abc "));
        assert_eq!(ctx.trace_id.as_ref().map(TraceId::as_str), Some("abc"));

        assert!(RequestContext::new().with_trace_header(Some("  ")).trace_id.is_none());
        assert!(RequestContext::new().with_trace_header(None).trace_id.is_none());
    }

    #[test]
    fn test_context_carries_case_key() {
        let ctx = RequestContext::new().with_case_key("1234567890123456");
        assert_eq!(ctx.case_key.as_deref(), Some("1234567890123456"));
        assert!(ctx.trace_id.is_none());
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let id = TraceId::from("t-9".to_string());
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"t-9\"");
        let back: TraceId = serde_json::from_str("\"t-9\"").unwrap();
        assert_eq!(back, id);
    }
}
