use famtree_core_types::{RequestId, TraceId};
use thiserror::Error;

use crate::model::MemberId;

/// Result type alias using FamilyError
pub type Result<T> = std::result::Result<T, FamilyError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that callers can match on
/// programmatically and that surfaces unchanged in CLI output and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    /// A required field is missing or empty
    Validation,
    /// The referenced id does not correspond to a stored record
    NotFound,
    /// Stored state disagrees with what the code expects (checksums, schema shape)
    ConstraintViolation,

    // Integration/IO
    Io,
    Persistence,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::Validation => "ERR_VALIDATION",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::ConstraintViolation => "ERR_CONSTRAINT_VIOLATION",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification (`kind`) for programmatic handling plus optional
/// context for debugging. Built with the `with_*` methods.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    request_id: Option<RequestId>,
    trace_id: Option<TraceId>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            request_id: None,
            trace_id: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add request ID context
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add trace ID context
    pub fn with_trace_id(mut self, trace_id: TraceId) -> Self {
        self.trace_id = Some(trace_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
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

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
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

    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }

    /// True for the `ValidationError` kind
    pub fn is_validation(&self) -> bool {
        self.kind == ExErrorKind::Validation
    }

    /// True for the `NotFoundError` kind
    pub fn is_not_found(&self) -> bool {
        self.kind == ExErrorKind::NotFound
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
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        if let Some(source) = &self.source {
            write!(f, " caused by {}", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|s| s as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Domain error taxonomy for family member operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FamilyError {
    /// Name is missing, empty, or whitespace-only
    #[error("Family member name is required: {reason}")]
    MissingName { reason: String },

    /// Gender is missing, empty, or whitespace-only
    #[error("Family member gender is required: {reason}")]
    MissingGender { reason: String },

    /// No member is stored under this id
    #[error("Family member not found: {member_id}")]
    MemberNotFound { member_id: MemberId },

    /// Every id up to `i64::MAX` has been handed out
    #[error("Family member id space exhausted")]
    IdSpaceExhausted,
}

impl From<FamilyError> for ExError {
    fn from(err: FamilyError) -> Self {
        match err {
            FamilyError::MissingName { reason } => ExError::new(ExErrorKind::Validation)
                .with_op("validate_member")
                .with_message(format!("name: {}", reason)),

            FamilyError::MissingGender { reason } => ExError::new(ExErrorKind::Validation)
                .with_op("validate_member")
                .with_message(format!("gender: {}", reason)),

            FamilyError::MemberNotFound { member_id } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(member_id.to_string())
                .with_message("Family member not found"),

            FamilyError::IdSpaceExhausted => ExError::new(ExErrorKind::ConstraintViolation)
                .with_op("allocate_id")
                .with_message("Family member id space exhausted"),
        }
    }
}
