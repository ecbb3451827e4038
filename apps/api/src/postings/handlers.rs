use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::job_posting::JobPosting;
use crate::postings::queries::{self, NewPosting};
use crate::state::AppState;

/// List filter; `id` is the owning business id, matching the
/// `?id=ownerId` convention the client already uses.
#[derive(Deserialize)]
pub struct OwnerIdQuery {
    pub id: Uuid,
}

/// Caller identity for mutating operations.
#[derive(Deserialize)]
pub struct CallerQuery {
    pub owner_id: Uuid,
}

#[derive(Deserialize)]
pub struct CreatePostingRequest {
    pub owner_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub salary: Option<String>,
}

/// POST /postings
///
/// Creation is an unconditional INSERT; the schema is the only gate.
pub async fn handle_create(
    State(state): State<AppState>,
    Json(req): Json<CreatePostingRequest>,
) -> Result<Json<Value>, AppError> {
    queries::create_posting(
        &state.db,
        NewPosting {
            business_id: req.owner_id,
            title: &req.title,
            description: req.description.as_deref(),
            location: req.location.as_deref(),
            salary: req.salary.as_deref(),
        },
    )
    .await?;
    Ok(Json(json!({ "success": true })))
}

/// GET /postings?id=ownerId
pub async fn handle_list(
    State(state): State<AppState>,
    Query(params): Query<OwnerIdQuery>,
) -> Result<Json<Vec<JobPosting>>, AppError> {
    let postings = queries::list_postings(&state.db, params.id).await?;
    Ok(Json(postings))
}

/// DELETE /postings/:id?owner_id=...
pub async fn handle_delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(caller): Query<CallerQuery>,
) -> Result<Json<Value>, AppError> {
    queries::delete_posting(&state.db, id, caller.owner_id).await?;
    Ok(Json(json!({ "success": true })))
}
