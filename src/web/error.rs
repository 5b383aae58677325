use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use std::fmt;

use super::views;
use crate::domain::DomainError;
use crate::services::{AuthError, EmployeeError, HourError, InvoiceError};

#[derive(Debug)]
pub enum WebError {
    NotFound(String),

    ValidationError(String),

    Unauthorized(String),

    InternalError(String),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(msg) => write!(f, "Not found: {msg}"),
            Self::ValidationError(msg) => write!(f, "Validation error: {msg}"),
            Self::Unauthorized(msg) => write!(f, "Unauthorized: {msg}"),
            Self::InternalError(msg) => write!(f, "Internal error: {msg}"),
        }
    }
}

impl std::error::Error for WebError {}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            Self::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            Self::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Er is een interne fout opgetreden".to_string(),
                )
            }
        };

        (status, Html(views::error_page(status, &message))).into_response()
    }
}

impl From<anyhow::Error> for WebError {
    fn from(err: anyhow::Error) -> Self {
        Self::InternalError(err.to_string())
    }
}

impl From<DomainError> for WebError {
    fn from(err: DomainError) -> Self {
        Self::ValidationError(err.to_string())
    }
}

impl From<EmployeeError> for WebError {
    fn from(err: EmployeeError) -> Self {
        match err {
            EmployeeError::Validation(e) => e.into(),
            EmployeeError::Database(msg) | EmployeeError::Internal(msg) => Self::InternalError(msg),
        }
    }
}

impl From<HourError> for WebError {
    fn from(err: HourError) -> Self {
        match err {
            HourError::EmployeeNotFound(id) => Self::employee_not_found(id),
            HourError::Validation(e) => e.into(),
            HourError::Database(msg) | HourError::Internal(msg) => Self::InternalError(msg),
        }
    }
}

impl From<InvoiceError> for WebError {
    fn from(err: InvoiceError) -> Self {
        match err {
            InvoiceError::EmployeeNotFound(id) => Self::employee_not_found(id),
            InvoiceError::Database(msg) | InvoiceError::Internal(msg) => Self::InternalError(msg),
        }
    }
}

impl From<AuthError> for WebError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials | AuthError::UserNotFound(_) => {
                Self::Unauthorized(super::auth::INVALID_LOGIN.to_string())
            }
            AuthError::Validation(msg) => Self::ValidationError(msg),
            AuthError::Database(msg) | AuthError::Internal(msg) => Self::InternalError(msg),
        }
    }
}

impl WebError {
    pub fn employee_not_found(id: impl fmt::Display) -> Self {
        Self::NotFound(format!("Werknemer {id} niet gevonden"))
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::InternalError(msg.into())
    }
}
