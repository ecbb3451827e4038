use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A candidate's submission addressed to a business ("company").
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Application {
    pub id: Uuid,
    pub company_id: Uuid,
    pub candidate_name: String,
    pub candidate_email: String,
    pub job_title: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
