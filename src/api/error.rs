use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::campus_actor::CampusError;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Unavailable(String),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    status: u16,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Bulk update reports every campus-level failure as 404.
    pub fn for_update(e: CampusError) -> Self {
        match e {
            CampusError::Unavailable(msg) => Self::Unavailable(msg),
            other => Self::NotFound(other.to_string()),
        }
    }
}

impl From<CampusError> for ApiError {
    fn from(e: CampusError) -> Self {
        match e {
            CampusError::NotFound(_) => Self::NotFound(e.to_string()),
            CampusError::IllegalTransition(_) | CampusError::InvalidArgument(_) => {
                Self::BadRequest(e.to_string())
            }
            CampusError::Unavailable(_) => Self::Unavailable(e.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.to_string(),
            status: status.as_u16(),
        };
        (status, Json(body)).into_response()
    }
}
