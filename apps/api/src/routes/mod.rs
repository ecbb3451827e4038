pub mod health;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::state::AppState;
use crate::{accounts, applications, hires, postings};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Account service
        .route("/signup", post(accounts::handlers::handle_signup))
        .route("/login", post(accounts::handlers::handle_login))
        // Job postings
        .route(
            "/postings",
            post(postings::handlers::handle_create).get(postings::handlers::handle_list),
        )
        .route("/postings/:id", delete(postings::handlers::handle_delete))
        // Hires
        .route(
            "/hire",
            post(hires::handlers::handle_create).get(hires::handlers::handle_list),
        )
        // Applications
        .route("/applications", get(applications::handlers::handle_list))
        .route(
            "/applications/:id",
            put(applications::handlers::handle_update_status),
        )
        .with_state(state)
}
