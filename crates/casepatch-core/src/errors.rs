use casepatch_core_types::{RequestContext, RequestId, TraceId};
use thiserror::Error;

/// Result type alias using the canonical structured error
pub type Result<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code used by the CLI exit message,
/// by tests, and by any caller that needs to branch on failures.
///
/// The reconciliation engine itself never fails; every kind here belongs
/// to the surrounding collaborators (request validation, loading,
/// configuration, fixtures).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Request validation
    InvalidInput,
    CaseKeyMismatch,
    NotFound,

    // Integration/IO
    Persistence,
    Migration,
    Serialization,
    Io,
    Config,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::CaseKeyMismatch => "ERR_CASE_KEY_MISMATCH",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Migration => "ERR_MIGRATION",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Config => "ERR_CONFIG",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification plus optional context (operation, case key,
/// entity, correlation ids) for programmatic handling and debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    case_key: Option<String>,
    entity: Option<String>,
    request_id: Option<RequestId>,
    trace_id: Option<TraceId>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            case_key: None,
            entity: None,
            request_id: None,
            trace_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add the CCD case number the failing operation targeted
    pub fn with_case_key(mut self, case_key: impl Into<String>) -> Self {
        self.case_key = Some(case_key.into());
        self
    }

    /// Add entity context, e.g. `fee:102` or a table name
    pub fn with_entity(mut self, entity: impl Into<String>) -> Self {
        self.entity = Some(entity.into());
        self
    }

    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    pub fn with_trace_id(mut self, trace_id: TraceId) -> Self {
        self.trace_id = Some(trace_id);
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Attach the correlation of the request the error surfaced in
    ///
    /// A case key already on the error is kept.
    pub fn with_context(self, ctx: &RequestContext) -> Self {
        let mut err = self.with_request_id(ctx.request_id.clone());
        if let Some(trace_id) = &ctx.trace_id {
            err = err.with_trace_id(trace_id.clone());
        }
        if err.case_key.is_none() {
            err.case_key = ctx.case_key.clone();
        }
        err
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn case_key(&self) -> Option<&str> {
        self.case_key.as_deref()
    }

    pub fn entity(&self) -> Option<&str> {
        self.entity.as_deref()
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn trace_id(&self) -> Option<&TraceId> {
        self.trace_id.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(case_key) = &self.case_key {
            write!(f, " (case_key: {})", case_key)?;
        }
        if let Some(entity) = &self.entity {
            write!(f, " (entity: {})", entity)?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, " (request_id: {})", request_id)?;
        }
        if let Some(trace_id) = &self.trace_id {
            write!(f, " (trace_id: {})", trace_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Domain errors raised around the reconciliation engine
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CasePatchError {
    /// No service request exists for the case number
    #[error("Case not found: {case_key}")]
    CaseNotFound { case_key: String },

    /// The case number addressed differs from the one in the request body
    #[error("Case number mismatch: addressed {addressed}, request body {body}")]
    CaseKeyMismatch { addressed: String, body: String },

    /// The request body carries no case number
    #[error("Request is missing its case number")]
    MissingCaseKey,

    /// Request or response (de)serialization failed
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Generic internal error
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl From<CasePatchError> for ExError {
    fn from(err: CasePatchError) -> Self {
        match err {
            CasePatchError::CaseNotFound { case_key } => ExError::new(ExErrorKind::NotFound)
                .with_case_key(case_key)
                .with_message("No service requests exist for this case"),

            CasePatchError::CaseKeyMismatch { addressed, body } => {
                ExError::new(ExErrorKind::CaseKeyMismatch)
                    .with_case_key(addressed)
                    .with_message(format!("Request body targets case {}", body))
            }

            CasePatchError::MissingCaseKey => ExError::new(ExErrorKind::InvalidInput)
                .with_message("Request is missing its case number"),

            CasePatchError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }

            CasePatchError::Internal { message } => {
                ExError::new(ExErrorKind::Internal).with_message(message)
            }
        }
    }
}

impl From<serde_json::Error> for CasePatchError {
    fn from(err: serde_json::Error) -> Self {
        CasePatchError::Serialization {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_unique() {
        let kinds = [
            ExErrorKind::InvalidInput,
            ExErrorKind::CaseKeyMismatch,
            ExErrorKind::NotFound,
            ExErrorKind::Persistence,
            ExErrorKind::Migration,
            ExErrorKind::Serialization,
            ExErrorKind::Io,
            ExErrorKind::Config,
            ExErrorKind::Internal,
        ];
        let mut codes: Vec<&str> = kinds.iter().map(|k| k.code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), kinds.len());
    }

    #[test]
    fn test_display_includes_context() {
        let err = ExError::new(ExErrorKind::NotFound)
            .with_op("reconcile_case")
            .with_case_key("1234567890123456")
            .with_message("No service requests exist for this case");

        assert_eq!(
            err.to_string(),
            "[ERR_NOT_FOUND] in operation 'reconcile_case': No service requests exist for this case (case_key: 1234567890123456)"
        );
    }

    #[test]
    fn test_case_not_found_maps_to_not_found() {
        let err: ExError = CasePatchError::CaseNotFound {
            case_key: "123".to_string(),
        }
        .into();
        assert_eq!(err.kind(), ExErrorKind::NotFound);
        assert_eq!(err.case_key(), Some("123"));
    }

    #[test]
    fn test_mismatch_keeps_addressed_case() {
        let err: ExError = CasePatchError::CaseKeyMismatch {
            addressed: "111".to_string(),
            body: "222".to_string(),
        }
        .into();
        assert_eq!(err.code(), "ERR_CASE_KEY_MISMATCH");
        assert_eq!(err.case_key(), Some("111"));
        assert!(err.message().contains("222"));
    }

    #[test]
    fn test_context_attaches_correlation() {
        let ctx = RequestContext::new()
            .with_trace_id(TraceId::from("t-1".to_string()))
            .with_case_key("1234567890123456");

        let err = ExError::new(ExErrorKind::Persistence)
            .with_message("disk full")
            .with_context(&ctx);

        assert_eq!(err.request_id(), Some(&ctx.request_id));
        assert_eq!(err.trace_id().map(TraceId::as_str), Some("t-1"));
        assert_eq!(err.case_key(), Some("1234567890123456"));
        assert!(err
            .to_string()
            .ends_with(&format!("(request_id: {}) (trace_id: t-1)", ctx.request_id)));
    }

    #[test]
    fn test_context_keeps_existing_case_key() {
        let ctx = RequestContext::new().with_case_key("111");
        let err = ExError::new(ExErrorKind::NotFound)
            .with_case_key("222")
            .with_context(&ctx);

        assert_eq!(err.case_key(), Some("222"));
        assert!(err.trace_id().is_none());
    }
}
