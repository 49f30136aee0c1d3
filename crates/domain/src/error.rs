// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors raised for malformed domain input.
///
/// Business-rule outcomes (a slot that is not reservable, a user who is not
/// eligible) are never reported through this type. They are ordinary return
/// values of the evaluators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A time-of-day string could not be parsed as zero-padded `HH:mm`.
    InvalidSlotTime {
        /// The offending value.
        value: String,
        /// The parser error message.
        error: String,
    },
    /// A time filter token was not recognized.
    InvalidTimeFilter(String),
    /// A timezone name is not a known IANA zone.
    InvalidTimezone(String),
    /// A request carried both a concrete time and a time range.
    AmbiguousRequestTime,
    /// A request carried neither a concrete time nor a time range.
    MissingRequestTime,
    /// A request template does not belong to the selected venue.
    TemplateVenueMismatch {
        /// The template identifier.
        template: String,
        /// The venue the request targets.
        venue: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSlotTime { value, error } => {
                write!(f, "Invalid time of day '{value}': {error}")
            }
            Self::InvalidTimeFilter(value) => write!(
                f,
                "Invalid time filter '{value}'. Expected 'any', 'any_morning', 'any_afternoon' or HH:mm"
            ),
            Self::InvalidTimezone(zone) => write!(f, "Unknown timezone '{zone}'"),
            Self::AmbiguousRequestTime => {
                write!(f, "A request must not carry both a time and a time range")
            }
            Self::MissingRequestTime => {
                write!(f, "A request must carry either a time or a time range")
            }
            Self::TemplateVenueMismatch { template, venue } => {
                write!(
                    f,
                    "Request template '{template}' does not belong to venue '{venue}'"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
