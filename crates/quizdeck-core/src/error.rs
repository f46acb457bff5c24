//! Error taxonomy for the questionnaire lifecycle.
//!
//! Defined in `quizdeck-core` so the service can classify failures
//! without string matching: user-correctable input errors
//! ([`ValidationError`]), missing references ([`ServiceError::NotFound`]),
//! and storage faults ([`StoreError`]).

use thiserror::Error;
use uuid::Uuid;

/// A questionnaire failed an invariant before persistence.
///
/// The display message is the user-facing reason; nothing is persisted
/// when any of these fire.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("title must not be empty")]
    EmptyTitle,

    #[error("a questionnaire needs at least one question")]
    NoQuestions,

    #[error("question {index} has no text")]
    EmptyQuestionText { index: usize },

    #[error("question {index}: each answer must have a text value")]
    EmptyAnswerText { index: usize },

    #[error("question {index}: answer weight must be a valid number")]
    InvalidWeight { index: usize },

    #[error("question {index}: each answer must have a unique text value")]
    DuplicateAnswerText { index: usize },

    #[error("question {index}: each answer must have a unique weight")]
    DuplicateAnswerWeight { index: usize },

    #[error("question {index} must have exactly one correct answer")]
    CorrectAnswerCount { index: usize },

    #[error("each question must be unique")]
    DuplicateQuestionText,

    #[error("a questionnaire with this title already exists")]
    DuplicateTitle,
}

/// A failure in the persistence collaborator.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing medium could not be read or written.
    #[error("storage I/O failure: {0}")]
    Io(#[from] std::io::Error),

    /// The stored data could not be decoded.
    #[error("stored data is corrupt: {0}")]
    Corrupt(String),
}

/// Anything a lifecycle operation can fail with.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// User input failed an invariant; surfaced verbatim, nothing persisted.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// The referenced questionnaire does not exist.
    #[error("questionnaire not found: {0}")]
    NotFound(Uuid),

    /// The persistence layer failed; details go to the log, not the user.
    #[error("storage failure")]
    Store(#[from] StoreError),
}

impl ServiceError {
    /// Whether this is a user-correctable input error.
    pub fn is_validation(&self) -> bool {
        matches!(self, ServiceError::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_are_user_facing() {
        assert_eq!(
            ValidationError::DuplicateTitle.to_string(),
            "a questionnaire with this title already exists"
        );
        assert_eq!(
            ValidationError::DuplicateAnswerText { index: 2 }.to_string(),
            "question 2: each answer must have a unique text value"
        );
    }

    #[test]
    fn service_error_passes_validation_reason_through() {
        let err = ServiceError::from(ValidationError::EmptyTitle);
        assert_eq!(err.to_string(), "title must not be empty");
        assert!(err.is_validation());
    }

    #[test]
    fn store_error_is_generic_at_the_surface() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");
        let err = ServiceError::from(StoreError::from(io));
        assert_eq!(err.to_string(), "storage failure");
        assert!(!err.is_validation());
    }
}
