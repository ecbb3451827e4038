use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::authz::allow_idempotent_delete;
use crate::errors::AppError;
use crate::models::job_posting::JobPosting;

pub struct NewPosting<'a> {
    pub business_id: Uuid,
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub location: Option<&'a str>,
    pub salary: Option<&'a str>,
}

pub async fn create_posting(pool: &PgPool, posting: NewPosting<'_>) -> Result<(), AppError> {
    sqlx::query(
        r#"
        INSERT INTO job_postings (business_id, title, description, location, salary)
        VALUES ($1, $2, $3, $4, $5)
        "#,
    )
    .bind(posting.business_id)
    .bind(posting.title)
    .bind(posting.description)
    .bind(posting.location)
    .bind(posting.salary)
    .execute(pool)
    .await?;
    Ok(())
}

/// Returns all postings owned by the business, in insertion order.
pub async fn list_postings(pool: &PgPool, business_id: Uuid) -> Result<Vec<JobPosting>, AppError> {
    Ok(sqlx::query_as::<_, JobPosting>(
        "SELECT * FROM job_postings WHERE business_id = $1 ORDER BY created_at, id",
    )
    .bind(business_id)
    .fetch_all(pool)
    .await?)
}

/// Deletes a posting after the ownership check. Deleting an id that no
/// longer exists succeeds, so repeated deletes are idempotent.
pub async fn delete_posting(pool: &PgPool, id: Uuid, caller: Uuid) -> Result<(), AppError> {
    let owner: Option<Uuid> =
        sqlx::query_scalar("SELECT business_id FROM job_postings WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;

    if allow_idempotent_delete(owner, caller)? {
        sqlx::query("DELETE FROM job_postings WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        info!("Deleted job posting {id}");
    }
    Ok(())
}
