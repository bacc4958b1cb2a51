//! Structured error types shared across VCHC crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable error codes emitted by the engine.
pub mod codes {
    /// A node with the same identifier already exists.
    pub const DUPLICATE_NODE: &str = "duplicate-node";
    /// A referenced node identifier or handle is unknown.
    pub const NODE_NOT_FOUND: &str = "node-not-found";
    /// The successor is already present in the adjacency list.
    pub const DUPLICATE_EDGE: &str = "duplicate-edge";
    /// A cover testing component already exists for the endpoint pair.
    pub const COMPONENT_EXISTS: &str = "component-exists";
    /// No cover testing component exists for the endpoint pair.
    pub const COMPONENT_NOT_FOUND: &str = "component-not-found";
    /// The target graph was queried before a reduction ran.
    pub const REDUCTION_NOT_PERFORMED: &str = "reduction-not-performed";
    /// The cover size parameter is outside the accepted range.
    pub const INVALID_PARAMETER: &str = "invalid-parameter";
    /// JSON encoding failed.
    pub const SERIALIZE_JSON: &str = "serialize-json";
    /// Binary encoding failed.
    pub const SERIALIZE_BYTES: &str = "serialize-bytes";
}

/// Structured payload attached to every [`VchcError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (identifiers, sizes, etc.).
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
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for the reduction engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum VchcError {
    /// Node and adjacency errors.
    #[error("graph error: {0}")]
    Graph(ErrorInfo),
    /// Cover testing component bookkeeping errors.
    #[error("component error: {0}")]
    Component(ErrorInfo),
    /// Reduction session sequencing errors.
    #[error("session error: {0}")]
    Session(ErrorInfo),
    /// Rejected reduction parameters.
    #[error("parameter error: {0}")]
    Parameter(ErrorInfo),
    /// Serialization and schema errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
}

/// Typed view over the stable error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`codes::DUPLICATE_NODE`].
    DuplicateNode,
    /// See [`codes::NODE_NOT_FOUND`].
    NodeNotFound,
    /// See [`codes::DUPLICATE_EDGE`].
    DuplicateEdge,
    /// See [`codes::COMPONENT_EXISTS`].
    ComponentExists,
    /// See [`codes::COMPONENT_NOT_FOUND`].
    ComponentNotFound,
    /// See [`codes::REDUCTION_NOT_PERFORMED`].
    IllegalState,
    /// See [`codes::INVALID_PARAMETER`].
    InvalidParameter,
    /// Encoding failures.
    Serialization,
    /// Codes not known to this version of the crate.
    Other,
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

impl VchcError {
    /// Creates a graph family error.
    pub fn graph(code: &str, message: impl Into<String>) -> Self {
        VchcError::Graph(ErrorInfo::new(code, message))
    }

    /// Creates a component family error.
    pub fn component(code: &str, message: impl Into<String>) -> Self {
        VchcError::Component(ErrorInfo::new(code, message))
    }

    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            VchcError::Graph(info)
            | VchcError::Component(info)
            | VchcError::Session(info)
            | VchcError::Parameter(info)
            | VchcError::Serde(info) => info,
        }
    }

    /// Classifies the error by its stable code.
    pub fn kind(&self) -> ErrorKind {
        match self.info().code.as_str() {
            codes::DUPLICATE_NODE => ErrorKind::DuplicateNode,
            codes::NODE_NOT_FOUND => ErrorKind::NodeNotFound,
            codes::DUPLICATE_EDGE => ErrorKind::DuplicateEdge,
            codes::COMPONENT_EXISTS => ErrorKind::ComponentExists,
            codes::COMPONENT_NOT_FOUND => ErrorKind::ComponentNotFound,
            codes::REDUCTION_NOT_PERFORMED => ErrorKind::IllegalState,
            codes::INVALID_PARAMETER => ErrorKind::InvalidParameter,
            codes::SERIALIZE_JSON | codes::SERIALIZE_BYTES => ErrorKind::Serialization,
            _ => ErrorKind::Other,
        }
    }

    /// Attaches a context entry to the payload, preserving the family.
    pub fn with_context(self, key: impl Into<String>, value: impl ToString) -> Self {
        let value = value.to_string();
        match self {
            VchcError::Graph(info) => VchcError::Graph(info.with_context(key, value)),
            VchcError::Component(info) => VchcError::Component(info.with_context(key, value)),
            VchcError::Session(info) => VchcError::Session(info.with_context(key, value)),
            VchcError::Parameter(info) => VchcError::Parameter(info.with_context(key, value)),
            VchcError::Serde(info) => VchcError::Serde(info.with_context(key, value)),
        }
    }

    /// Attaches a remediation hint to the payload, preserving the family.
    pub fn with_hint(self, hint: impl Into<String>) -> Self {
        match self {
            VchcError::Graph(info) => VchcError::Graph(info.with_hint(hint)),
            VchcError::Component(info) => VchcError::Component(info.with_hint(hint)),
            VchcError::Session(info) => VchcError::Session(info.with_hint(hint)),
            VchcError::Parameter(info) => VchcError::Parameter(info.with_hint(hint)),
            VchcError::Serde(info) => VchcError::Serde(info.with_hint(hint)),
        }
    }
}
