use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A business/employer account. The password hash never leaves the server:
/// it is skipped on serialization and no handler returns this struct from
/// a credential path.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Business {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub name: String,
    pub title: Option<String>,
    pub bio: Option<String>,
    pub hourly_rate: Option<f64>,
    pub skills: Vec<String>,
    pub website: Option<String>,
    pub linkedin: Option<String>,
    pub created_at: DateTime<Utc>,
}
