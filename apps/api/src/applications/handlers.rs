use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::applications::queries;
use crate::applications::status::ApplicationStatus;
use crate::errors::AppError;
use crate::models::application::Application;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CompanyIdQuery {
    pub id: Uuid,
}

#[derive(Deserialize)]
pub struct StatusUpdateRequest {
    /// Caller identity, checked against the application's company_id.
    pub company_id: Uuid,
    pub status: ApplicationStatus,
}

/// GET /applications?id=companyId
pub async fn handle_list(
    State(state): State<AppState>,
    Query(params): Query<CompanyIdQuery>,
) -> Result<Json<Vec<Application>>, AppError> {
    let applications = queries::list_applications(&state.db, params.id).await?;
    Ok(Json(applications))
}

/// PUT /applications/:id
pub async fn handle_update_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<StatusUpdateRequest>,
) -> Result<Json<Value>, AppError> {
    queries::update_application_status(&state.db, id, req.company_id, req.status).await?;
    Ok(Json(json!({ "success": true })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_update_request_parses() {
        let req: StatusUpdateRequest = serde_json::from_value(serde_json::json!({
            "company_id": "7f6df02e-45a9-4b6d-9c2f-0d3a8a3a90d1",
            "status": "reviewed"
        }))
        .unwrap();
        assert_eq!(req.status, ApplicationStatus::Reviewed);
    }

    #[test]
    fn test_status_update_requires_status_field() {
        assert!(serde_json::from_value::<StatusUpdateRequest>(serde_json::json!({
            "company_id": "7f6df02e-45a9-4b6d-9c2f-0d3a8a3a90d1"
        }))
        .is_err());
    }
}
