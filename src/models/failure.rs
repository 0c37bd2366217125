use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single per-field rejection reported by the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub message: String,
}

/// The one error shape every failed initialization resolves to, whether the
/// gateway rejected the payment, the response was malformed, or the transport
/// never produced a response at all.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{message} ({code})")]
pub struct InitializationFailure {
    pub message: String,
    pub code: String,
    /// Gateway-side error identifier, kept even when `code` came from elsewhere.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldError>,
}

impl InitializationFailure {
    pub fn new<M: Into<String>, C: Into<String>>(message: M, code: C) -> Self {
        InitializationFailure {
            message: message.into(),
            code: code.into(),
            error_id: None,
            errors: Vec::new(),
        }
    }

    pub fn with_error_id(mut self, error_id: Option<String>) -> Self {
        self.error_id = error_id;
        self
    }

    pub fn with_field_errors(mut self, errors: Vec<FieldError>) -> Self {
        self.errors = errors;
        self
    }

    /// Per-field rejections as `field: message` lines, in gateway order.
    pub fn field_messages(&self) -> Vec<String> {
        self.errors
            .iter()
            .map(|e| match (e.field.is_empty(), e.message.is_empty()) {
                (true, _) => e.message.clone(),
                (false, true) => e.field.clone(),
                (false, false) => format!("{}: {}", e.field, e.message),
            })
            .collect()
    }
}
