use serde::Deserialize;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::accounts::password;
use crate::errors::{is_unique_violation, AppError};
use crate::models::business::Business;

/// Signup payload. The field set is the allow-list: unknown caller-supplied
/// keys are rejected at deserialization instead of being merged into the
/// stored account.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    pub title: Option<String>,
    pub bio: Option<String>,
    pub hourly_rate: Option<f64>,
    #[serde(default)]
    pub skills: Vec<String>,
    pub website: Option<String>,
    pub linkedin: Option<String>,
}

impl SignupRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.email.trim().is_empty() || !self.email.contains('@') {
            return Err(AppError::Validation("a valid email is required".into()));
        }
        if self.password.is_empty() {
            return Err(AppError::Validation("password must not be empty".into()));
        }
        if self.name.trim().is_empty() {
            return Err(AppError::Validation("name must not be empty".into()));
        }
        Ok(())
    }
}

/// Identity returned by a successful login: id and display name only,
/// never the profile or the hash.
#[derive(Debug)]
pub struct LoginOutcome {
    pub id: Uuid,
    pub name: String,
}

/// Creates a business account. The SELECT pre-check is an optimization for
/// the common duplicate case; the UNIQUE constraint on businesses.email is
/// the authoritative guard when two signups race past it.
pub async fn signup(pool: &PgPool, req: &SignupRequest) -> Result<(), AppError> {
    req.validate()?;

    let existing: Option<Uuid> = sqlx::query_scalar("SELECT id FROM businesses WHERE email = $1")
        .bind(&req.email)
        .fetch_optional(pool)
        .await?;
    if existing.is_some() {
        return Err(AppError::DuplicateAccount);
    }

    let password_hash = password::hash_password(&req.password)?;

    let insert = sqlx::query(
        r#"
        INSERT INTO businesses
            (email, password_hash, name, title, bio, hourly_rate, skills, website, linkedin)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        "#,
    )
    .bind(&req.email)
    .bind(&password_hash)
    .bind(&req.name)
    .bind(&req.title)
    .bind(&req.bio)
    .bind(req.hourly_rate)
    .bind(&req.skills)
    .bind(&req.website)
    .bind(&req.linkedin)
    .execute(pool)
    .await;

    match insert {
        Ok(_) => {
            info!("Business account created for {}", &req.email);
            Ok(())
        }
        Err(e) if is_unique_violation(&e) => Err(AppError::DuplicateAccount),
        Err(e) => Err(e.into()),
    }
}

/// Looks up the account by email and verifies the password against the
/// stored hash. Unknown email and bad password are distinct errors.
pub async fn login(pool: &PgPool, email: &str, password: &str) -> Result<LoginOutcome, AppError> {
    let business: Option<Business> =
        sqlx::query_as("SELECT * FROM businesses WHERE email = $1")
            .bind(email)
            .fetch_optional(pool)
            .await?;

    let business = business.ok_or_else(|| AppError::NotFound("Business not found".into()))?;

    if !password::verify_password(password, &business.password_hash)? {
        return Err(AppError::InvalidCredential);
    }

    Ok(LoginOutcome {
        id: business.id,
        name: business.name,
    })
}
