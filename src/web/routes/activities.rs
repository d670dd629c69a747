use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};

use crate::models::ActivityCatalog;
use crate::services::roster_service::{self, RosterConfirmation};
use crate::web::error::ApiError;
use crate::web::AppState;

// Raw pairs instead of a struct: a repeated `email` keeps the last value
// rather than failing on a duplicate field.
type QueryPairs = Vec<(String, String)>;

fn require_email(query: Result<Query<QueryPairs>, QueryRejection>) -> Result<String, ApiError> {
    let Query(pairs) = query?;
    pairs
        .into_iter()
        .rev()
        .find(|(k, _)| k == "email")
        .map(|(_, v)| v)
        .ok_or(ApiError::MissingQuery("email"))
}

pub async fn list_activities_handler(State(state): State<AppState>) -> Json<ActivityCatalog> {
    Json(roster_service::list_activities(&state.roster))
}

pub async fn signup_handler(
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<QueryPairs>, QueryRejection>,
    State(state): State<AppState>,
) -> Result<Json<RosterConfirmation>, ApiError> {
    let Path(activity_name) = path?;
    let email = require_email(query)?;
    let confirmation = roster_service::sign_up(&state.roster, &activity_name, &email)?;
    Ok(Json(confirmation))
}

pub async fn unregister_handler(
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<QueryPairs>, QueryRejection>,
    State(state): State<AppState>,
) -> Result<Json<RosterConfirmation>, ApiError> {
    let Path(activity_name) = path?;
    let email = require_email(query)?;
    let confirmation = roster_service::unregister(&state.roster, &activity_name, &email)?;
    Ok(Json(confirmation))
}
