use regroup_core_types::RequestId;
use thiserror::Error;

use crate::model::Location;

/// Result type alias using RegroupError
pub type Result<T> = std::result::Result<T, RegroupError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that callers can match on
/// programmatically and surface in external responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Addressing
    InvalidLocation,
    InvalidInput,

    // Integration/IO
    Io,
    Serialization,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidLocation => "ERR_INVALID_LOCATION",
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries classification fields for programmatic handling plus the
/// coordinates and request id needed to diagnose a failed edit.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    group_index: Option<usize>,
    item_index: Option<usize>,
    request_id: Option<RequestId>,
    message: String,
}

impl ExError {
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            group_index: None,
            item_index: None,
            request_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add the offending group index
    pub fn with_group_index(mut self, group_index: usize) -> Self {
        self.group_index = Some(group_index);
        self
    }

    /// Add the offending item index
    pub fn with_item_index(mut self, item_index: usize) -> Self {
        self.item_index = Some(item_index);
        self
    }

    /// Add both coordinates of a location
    pub fn with_location(self, location: Location) -> Self {
        self.with_group_index(location.group_index)
            .with_item_index(location.item_index)
    }

    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
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

    pub fn group_index(&self) -> Option<usize> {
        self.group_index
    }

    pub fn item_index(&self) -> Option<usize> {
        self.item_index
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
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
        if let Some(group_index) = self.group_index {
            write!(f, " (group_index: {})", group_index)?;
        }
        if let Some(item_index) = self.item_index {
            write!(f, " (item_index: {})", item_index)?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, " (request_id: {})", request_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for Regroup operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegroupError {
    // ===== Addressing Errors =====
    /// Group index does not name an existing group
    #[error("Invalid location: group {group_index} does not exist ({group_count} groups)")]
    InvalidLocation {
        group_index: usize,
        group_count: usize,
    },

    /// Item index is past the end of its group
    #[error("Invalid location: item {item_index} does not exist in group {group_index} ({group_len} items)")]
    ItemOutOfRange {
        group_index: usize,
        item_index: usize,
        group_len: usize,
    },

    /// Location text could not be parsed
    #[error("Invalid location syntax '{input}': expected GROUP:ITEM")]
    LocationSyntax { input: String },

    // ===== Generic Errors =====
    /// Serialization error (JSON encoding/decoding)
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// I/O error reading or writing a structure file
    #[error("I/O error: {message}")]
    Io { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl From<serde_json::Error> for RegroupError {
    fn from(err: serde_json::Error) -> Self {
        RegroupError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for RegroupError {
    fn from(err: std::io::Error) -> Self {
        RegroupError::Io {
            message: err.to_string(),
        }
    }
}

/// Conversion from RegroupError to the canonical ExError
impl From<RegroupError> for ExError {
    fn from(err: RegroupError) -> Self {
        let message = err.to_string();
        match err {
            RegroupError::InvalidLocation { group_index, .. } => {
                ExError::new(ExErrorKind::InvalidLocation)
                    .with_group_index(group_index)
                    .with_message(message)
            }

            RegroupError::ItemOutOfRange {
                group_index,
                item_index,
                ..
            } => ExError::new(ExErrorKind::InvalidLocation)
                .with_group_index(group_index)
                .with_item_index(item_index)
                .with_message(message),

            RegroupError::LocationSyntax { .. } => {
                ExError::new(ExErrorKind::InvalidInput).with_message(message)
            }

            RegroupError::Serialization { .. } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }

            RegroupError::Io { .. } => ExError::new(ExErrorKind::Io).with_message(message),

            RegroupError::Internal { .. } => {
                ExError::new(ExErrorKind::Internal).with_message(message)
            }
        }
    }
}
