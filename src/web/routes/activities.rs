use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::Value;

use crate::services::signup_service::{self, SignupError};
use crate::store::{ActivityStore, Directory};

impl IntoResponse for SignupError {
    fn into_response(self) -> Response {
        let status = match self {
            SignupError::ActivityNotFound | SignupError::NotEnrolled => StatusCode::NOT_FOUND,
            SignupError::AlreadyEnrolled => StatusCode::BAD_REQUEST,
        };
        (status, Json(serde_json::json!({ "detail": self.to_string() }))).into_response()
    }
}

#[derive(Debug, Deserialize)]
pub struct SignupQuery {
    email: String,
}

pub async fn activities_handler(State(store): State<ActivityStore>) -> Json<Directory> {
    Json(signup_service::list_activities(&store))
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<SignupQuery>,
    State(store): State<ActivityStore>,
) -> Result<Json<Value>, SignupError> {
    let message =
        signup_service::enroll(&store, &activity_name, &query.email).map_err(|e| {
            tracing::warn!(activity = %activity_name, error = %e, "signup rejected");
            e
        })?;
    tracing::info!(activity = %activity_name, "participant signed up");
    Ok(Json(serde_json::json!({ "message": message })))
}

pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<SignupQuery>,
    State(store): State<ActivityStore>,
) -> Result<Json<Value>, SignupError> {
    let message =
        signup_service::withdraw(&store, &activity_name, &query.email).map_err(|e| {
            tracing::warn!(activity = %activity_name, error = %e, "unregister rejected");
            e
        })?;
    tracing::info!(activity = %activity_name, "participant unregistered");
    Ok(Json(serde_json::json!({ "message": message })))
}
