//! Structured error types shared across the rgraph crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`RgError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (vertex ids, sizes, etc.).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.context.insert(key.into(), value.to_string());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

/// Canonical error type for the rgraph engine.
///
/// Construction errors fail fast: no partially built graph state is ever
/// observable by the caller. `SampleSet` errors indicate internal misuse and
/// never surface through correct use of the public sampling API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum RgError {
    /// Graph construction errors: out-of-bounds vertices, duplicate input
    /// edges, infeasible degree sequences.
    #[error("construction error: {0}")]
    Construction(ErrorInfo),
    /// Invalid arguments supplied to the chain driver.
    #[error("argument error: {0}")]
    Argument(ErrorInfo),
    /// Random selectable set misuse (duplicate insert, missing removal,
    /// empty pick).
    #[error("sample set error: {0}")]
    SampleSet(ErrorInfo),
    /// Serialization and schema errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
    /// Errors raised by a caller-supplied observation callback.
    #[error("callback error: {0}")]
    Callback(ErrorInfo),
}

impl RgError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            RgError::Construction(info)
            | RgError::Argument(info)
            | RgError::SampleSet(info)
            | RgError::Serde(info)
            | RgError::Callback(info) => info,
        }
    }

    /// Returns the stable machine readable code of the error.
    pub fn code(&self) -> &str {
        &self.info().code
    }

    /// Attaches a context entry to the error payload.
    pub fn with_context(self, key: impl Into<String>, value: impl ToString) -> Self {
        match self {
            RgError::Construction(info) => RgError::Construction(info.with_context(key, value)),
            RgError::Argument(info) => RgError::Argument(info.with_context(key, value)),
            RgError::SampleSet(info) => RgError::SampleSet(info.with_context(key, value)),
            RgError::Serde(info) => RgError::Serde(info.with_context(key, value)),
            RgError::Callback(info) => RgError::Callback(info.with_context(key, value)),
        }
    }
}
