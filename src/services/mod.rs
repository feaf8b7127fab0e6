//! Page operations. Each function takes the backend capabilities it needs
//! plus the caller's [`SessionContext`](crate::session::SessionContext) and
//! returns page data or a [`ServiceError`].

use thiserror::Error;

use crate::backend::BackendError;
use crate::domain::types::TypeConstraintError;
use crate::forms::FormError;
use crate::session::SessionError;

pub mod auth;
pub mod chatbot;
pub mod contracts;
pub mod dashboard;
#[cfg(test)]
mod fixtures;
pub mod import;
pub mod proposals;
pub mod schedules;

/// Fallback text when the backend gave no `detail`.
pub const UNKNOWN_ERROR: &str = "Erro desconhecido";

#[derive(Debug, Error)]
pub enum ServiceError {
    /// No credential stored; the caller never logged in.
    #[error("not authenticated")]
    Unauthenticated,

    /// The backend answered 401 and the session has been cleared.
    #[error("session expired")]
    Unauthorized,

    #[error("{0}")]
    Form(String),

    #[error(transparent)]
    Backend(BackendError),

    #[error(transparent)]
    TypeConstraint(#[from] TypeConstraintError),

    #[error(transparent)]
    Session(#[from] SessionError),
}

impl ServiceError {
    /// True when the session must end with a redirect to the login page.
    pub fn is_auth(&self) -> bool {
        matches!(self, ServiceError::Unauthenticated | ServiceError::Unauthorized)
    }

    /// Message for a failed mutation: the backend `detail` when present.
    pub fn user_message(&self) -> String {
        match self {
            ServiceError::Form(message) => message.clone(),
            ServiceError::Backend(err) => err.detail().unwrap_or(UNKNOWN_ERROR).to_string(),
            _ => UNKNOWN_ERROR.to_string(),
        }
    }
}

impl From<FormError> for ServiceError {
    fn from(err: FormError) -> Self {
        ServiceError::Form(err.to_string())
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
