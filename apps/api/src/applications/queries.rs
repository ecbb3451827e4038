use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::applications::status::ApplicationStatus;
use crate::authz::require_owner;
use crate::errors::AppError;
use crate::models::application::Application;

/// Returns all applications addressed to the company, in insertion order.
/// Rows belonging to any other company never match the filter.
pub async fn list_applications(
    pool: &PgPool,
    company_id: Uuid,
) -> Result<Vec<Application>, AppError> {
    Ok(sqlx::query_as::<_, Application>(
        "SELECT * FROM applications WHERE company_id = $1 ORDER BY created_at, id",
    )
    .bind(company_id)
    .fetch_all(pool)
    .await?)
}

/// Sets the status of one application after verifying the caller is the
/// targeted company. Unlike delete, a missing application here is an error:
/// the caller named a specific submission they expect to exist.
pub async fn update_application_status(
    pool: &PgPool,
    id: Uuid,
    caller: Uuid,
    status: ApplicationStatus,
) -> Result<(), AppError> {
    let owner: Option<Uuid> =
        sqlx::query_scalar("SELECT company_id FROM applications WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;

    require_owner(owner, caller, format!("Application {id} not found"))?;

    sqlx::query("UPDATE applications SET status = $2 WHERE id = $1")
        .bind(id)
        .bind(status.as_str())
        .execute(pool)
        .await?;

    info!("Application {id} marked {}", status.as_str());
    Ok(())
}
