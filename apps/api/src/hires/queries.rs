use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::employee::Employee;

pub struct NewHire<'a> {
    pub business_id: Uuid,
    pub name: &'a str,
    pub email: &'a str,
    pub role: Option<&'a str>,
}

pub async fn record_hire(pool: &PgPool, hire: NewHire<'_>) -> Result<(), AppError> {
    sqlx::query(
        r#"
        INSERT INTO employees (business_id, name, email, role)
        VALUES ($1, $2, $3, $4)
        "#,
    )
    .bind(hire.business_id)
    .bind(hire.name)
    .bind(hire.email)
    .bind(hire.role)
    .execute(pool)
    .await?;
    Ok(())
}

/// Returns all employees hired by the business, in insertion order.
pub async fn list_hires(pool: &PgPool, business_id: Uuid) -> Result<Vec<Employee>, AppError> {
    Ok(sqlx::query_as::<_, Employee>(
        "SELECT * FROM employees WHERE business_id = $1 ORDER BY created_at, id",
    )
    .bind(business_id)
    .fetch_all(pool)
    .await?)
}
