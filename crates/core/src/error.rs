//! Error types for the site's domain layer.
//!
//! Nothing here is surfaced to visitors: a blocked wizard step simply does
//! not move. The typed errors exist so callers and tests can tell why.

use thiserror::Error;

use crate::estimator::{FormField, WizardStep};

/// Core error type for data, configuration and carousel operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("TOML parse error: {reason}")]
    TomlParseFailed { reason: String },

    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("type distribution sums to {total}%, which exceeds 100%")]
    DistributionOverflow { total: u32 },

    #[error("carousel needs at least one slide")]
    EmptyCarousel,

    #[error("slide index {index} is out of range for {len} slides")]
    SlideOutOfRange { index: usize, len: usize },
}

impl Error {
    /// Create a TOML parse error.
    pub fn toml_parse_failed(reason: impl Into<String>) -> Self {
        Self::TomlParseFailed {
            reason: reason.into(),
        }
    }

    /// Create an invalid configuration error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::toml_parse_failed(err.to_string())
    }
}

/// Reasons a wizard transition is refused.
///
/// The wizard's state is left untouched whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("step {step} is incomplete, missing: {}", list_fields(missing))]
    StepIncomplete {
        step: WizardStep,
        missing: Vec<FormField>,
    },

    #[error("'{action}' is not allowed while {phase}")]
    NotAllowed {
        action: &'static str,
        phase: &'static str,
    },
}

impl WizardError {
    /// Create a not-allowed error.
    pub const fn not_allowed(action: &'static str, phase: &'static str) -> Self {
        Self::NotAllowed { action, phase }
    }

    /// Fields that blocked the transition, if any.
    #[must_use]
    pub fn missing_fields(&self) -> &[FormField] {
        match self {
            Self::StepIncomplete { missing, .. } => missing,
            Self::NotAllowed { .. } => &[],
        }
    }
}

fn list_fields(fields: &[FormField]) -> String {
    fields
        .iter()
        .map(|f| f.name())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = Error::DistributionOverflow { total: 104 };
        assert_eq!(
            error.to_string(),
            "type distribution sums to 104%, which exceeds 100%"
        );

        let error = Error::SlideOutOfRange { index: 5, len: 3 };
        assert_eq!(error.to_string(), "slide index 5 is out of range for 3 slides");
    }

    #[test]
    fn test_step_incomplete_lists_fields() {
        let error = WizardError::StepIncomplete {
            step: WizardStep::Location,
            missing: vec![FormField::Address, FormField::Rooms],
        };
        assert_eq!(
            error.to_string(),
            "step 2 is incomplete, missing: address, rooms"
        );
        assert_eq!(error.missing_fields(), &[FormField::Address, FormField::Rooms]);
    }

    #[test]
    fn test_not_allowed_has_no_missing_fields() {
        let error = WizardError::not_allowed("next", "estimating");
        assert!(error.missing_fields().is_empty());
        assert_eq!(error.to_string(), "'next' is not allowed while estimating");
    }
}
