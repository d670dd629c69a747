use axum::{
    extract::rejection::{PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::error::RosterError;

#[derive(Debug)]
pub enum ApiError {
    Roster(RosterError),
    MissingQuery(&'static str),
    // Extractor failures keep axum's status and message, re-shaped as JSON.
    Rejected { status: StatusCode, detail: String },
}

impl From<RosterError> for ApiError {
    fn from(e: RosterError) -> Self {
        ApiError::Roster(e)
    }
}

impl From<PathRejection> for ApiError {
    fn from(e: PathRejection) -> Self {
        ApiError::Rejected {
            status: e.status(),
            detail: e.body_text(),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(e: QueryRejection) -> Self {
        ApiError::Rejected {
            status: e.status(),
            detail: e.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::Roster(e) => {
                let status = match e {
                    RosterError::NotFound { .. } => StatusCode::NOT_FOUND,
                    RosterError::AlreadyRegistered { .. }
                    | RosterError::NotRegistered { .. }
                    | RosterError::ActivityFull { .. } => StatusCode::BAD_REQUEST,
                };
                (status, e.to_string())
            }
            ApiError::MissingQuery(name) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                format!("Missing required query parameter: {}", name),
            ),
            ApiError::Rejected { status, detail } => (status, detail),
        };
        (status, Json(serde_json::json!({ "detail": detail }))).into_response()
    }
}
