//! Errors returned by the step controller

use thiserror::Error;

use super::schema::FieldErrors;
use super::step::Step;

#[derive(Debug, Error)]
pub enum FormError {
    /// One or more fields failed their rule; the user can correct them
    #[error("validation failed: {0}")]
    Validation(FieldErrors),

    #[error("submit is only available on the confirmation step (currently {0})")]
    NotAtConfirmation(Step),

    #[error("form has already been submitted")]
    AlreadySubmitted,

    /// The host's submission callback rejected the record
    #[error("submission handler failed: {0}")]
    Handler(#[source] anyhow::Error),
}

impl FormError {
    /// Field errors carried by this error, if it is a validation failure
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            FormError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, FormError>;
