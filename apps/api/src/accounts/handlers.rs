use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::accounts::service::{self, SignupRequest};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub id: Uuid,
    pub name: String,
}

/// POST /signup
pub async fn handle_signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> Result<Json<Value>, AppError> {
    service::signup(&state.db, &req).await?;
    Ok(Json(json!({ "success": true })))
}

/// POST /login
pub async fn handle_login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let outcome = service::login(&state.db, &req.email, &req.password).await?;
    Ok(Json(LoginResponse {
        success: true,
        id: outcome.id,
        name: outcome.name,
    }))
}
