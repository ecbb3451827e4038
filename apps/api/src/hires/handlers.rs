use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::errors::AppError;
use crate::hires::queries::{self, NewHire};
use crate::models::employee::Employee;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct OwnerIdQuery {
    pub id: Uuid,
}

#[derive(Deserialize)]
pub struct HireRequest {
    pub owner_id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Option<String>,
}

/// POST /hire
///
/// Same contract shape as postings: unconditional INSERT, no field
/// validation beyond deserialization.
pub async fn handle_create(
    State(state): State<AppState>,
    Json(req): Json<HireRequest>,
) -> Result<Json<Value>, AppError> {
    queries::record_hire(
        &state.db,
        NewHire {
            business_id: req.owner_id,
            name: &req.name,
            email: &req.email,
            role: req.role.as_deref(),
        },
    )
    .await?;
    Ok(Json(json!({ "success": true })))
}

/// GET /hire?id=ownerId
pub async fn handle_list(
    State(state): State<AppState>,
    Query(params): Query<OwnerIdQuery>,
) -> Result<Json<Vec<Employee>>, AppError> {
    let employees = queries::list_hires(&state.db, params.id).await?;
    Ok(Json(employees))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_name_and_email_are_accepted() {
        let req: HireRequest = serde_json::from_value(serde_json::json!({
            "owner_id": "7f6df02e-45a9-4b6d-9c2f-0d3a8a3a90d1",
            "name": "",
            "email": ""
        }))
        .unwrap();
        assert_eq!(req.name, "");
        assert_eq!(req.email, "");
    }
}
