use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::error;

use crate::core::ClinicError;

use super::types::ErrorResponse;

pub const READ_FAILED: &str = "Erro ao ler arquivo JSON";
pub const PET_FAILED: &str = "Erro ao processar pet";
pub const SCHEDULE_FAILED: &str = "Erro ao processar agendamento";
pub const PURCHASE_FAILED: &str = "Erro ao processar compra";

/// A service error plus the fixed message reported when it maps to a 500.
#[derive(Debug)]
pub struct ApiError {
    error: ClinicError,
    internal_message: &'static str,
}

impl ApiError {
    pub fn new(error: ClinicError, internal_message: &'static str) -> Self {
        Self {
            error,
            internal_message,
        }
    }

    pub fn read(error: ClinicError) -> Self {
        Self::new(error, READ_FAILED)
    }

    pub fn pet(error: ClinicError) -> Self {
        Self::new(error, PET_FAILED)
    }

    pub fn schedule(error: ClinicError) -> Self {
        Self::new(error, SCHEDULE_FAILED)
    }

    pub fn purchase(error: ClinicError) -> Self {
        Self::new(error, PURCHASE_FAILED)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self.error {
            ClinicError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
            ClinicError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ClinicError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            err @ (ClinicError::IoError(_)
            | ClinicError::ParseError(_)
            | ClinicError::TaskError(_)
            | ClinicError::ConfigParsingError(_)) => {
                error!("{}: {}", self.internal_message, err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    self.internal_message.to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
