// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use courtside::CoreError;
use courtside_domain::DomainError;
use std::path::PathBuf;
use thiserror::Error;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Errors raised while loading a club snapshot from disk.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The file could not be read.
    #[error("Failed to read snapshot {path}: {source}")]
    Io {
        /// The snapshot path.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
    /// The file is not a valid snapshot document.
    #[error("Failed to parse snapshot {path}: {source}")]
    Parse {
        /// The snapshot path.
        path: PathBuf,
        /// The underlying JSON error.
        source: serde_json::Error,
    },
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    let message: String = err.to_string();
    match err {
        DomainError::InvalidSlotTime { .. } | DomainError::MissingRequestTime => {
            ApiError::InvalidInput {
                field: String::from("time"),
                message,
            }
        }
        DomainError::InvalidTimeFilter(_) => ApiError::InvalidInput {
            field: String::from("timeFilter"),
            message,
        },
        DomainError::InvalidTimezone(_) => ApiError::InvalidInput {
            field: String::from("timezone"),
            message,
        },
        DomainError::AmbiguousRequestTime => ApiError::InvalidInput {
            field: String::from("timeRange"),
            message,
        },
        DomainError::TemplateVenueMismatch { .. } => ApiError::DomainRuleViolation {
            rule: String::from("template_venue"),
            message,
        },
    }
}

/// Translates a core error into an API error.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    let message: String = err.to_string();
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::IncompleteDraft { field } => ApiError::InvalidInput {
            field: field.to_string(),
            message,
        },
        CoreError::MissingRequestId => ApiError::InvalidInput {
            field: String::from("requestId"),
            message,
        },
        CoreError::TemplateNotFound(_) => ApiError::ResourceNotFound {
            resource_type: String::from("Request template"),
            message,
        },
        CoreError::ScheduleNotFound(_) => ApiError::ResourceNotFound {
            resource_type: String::from("Schedule"),
            message,
        },
        CoreError::VenueNotFound(_) => ApiError::ResourceNotFound {
            resource_type: String::from("Venue"),
            message,
        },
        CoreError::RequestNotAllowed { .. } => ApiError::DomainRuleViolation {
            rule: String::from("requestable_slot"),
            message,
        },
        CoreError::CheckInNotAllowed { .. } => ApiError::DomainRuleViolation {
            rule: String::from("check_in"),
            message,
        },
    }
}
