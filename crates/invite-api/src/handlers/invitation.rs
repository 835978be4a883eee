//! Invitation handler.

use axum::Json;
use axum::extract::State;

use crate::dto::request::AddUserRequest;
use crate::dto::response::AddUserResponse;
use crate::error::ApiError;
use crate::extractors::JsonOrForm;
use crate::state::AppState;

/// POST /api/add-user
pub async fn add_user(
    State(state): State<AppState>,
    JsonOrForm(req): JsonOrForm<AddUserRequest>,
) -> Result<Json<AddUserResponse>, ApiError> {
    let result = state.workflow.handle(req.into()).await?;
    Ok(Json(result.into()))
}
