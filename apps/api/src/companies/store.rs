//! Record Store — persistence boundary for company records.
//!
//! `AppState` holds an `Arc<dyn CompanyStore>`; production uses `PgCompanyStore`.
//! Each operation is a single statement, so a write is atomic per record and
//! concurrent updates to the same record resolve as last-write-wins.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::companies::pagination::PageWindow;
use crate::errors::AppError;
use crate::models::company::{CompanyFields, CompanyRow};

#[async_trait]
pub trait CompanyStore: Send + Sync {
    /// All records in creation order, or only the requested window.
    async fn list(&self, window: Option<PageWindow>) -> Result<Vec<CompanyRow>, AppError>;

    async fn count(&self) -> Result<u64, AppError>;

    async fn get(&self, id: Uuid) -> Result<Option<CompanyRow>, AppError>;

    async fn insert(&self, fields: &CompanyFields) -> Result<CompanyRow, AppError>;

    /// Replaces all four attributes. `None` if no record has this id.
    async fn update(
        &self,
        id: Uuid,
        fields: &CompanyFields,
    ) -> Result<Option<CompanyRow>, AppError>;

    /// Removes the record and returns it. `None` if no record has this id.
    async fn delete(&self, id: Uuid) -> Result<Option<CompanyRow>, AppError>;
}

const COMPANY_COLUMNS: &str = "id, name, email, contact, address, created_at, updated_at";

pub struct PgCompanyStore {
    pool: PgPool,
}

impl PgCompanyStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CompanyStore for PgCompanyStore {
    async fn list(&self, window: Option<PageWindow>) -> Result<Vec<CompanyRow>, AppError> {
        let rows = match window {
            None => {
                sqlx::query_as::<_, CompanyRow>(&format!(
                    "SELECT {COMPANY_COLUMNS} FROM companies ORDER BY created_at, id"
                ))
                .fetch_all(&self.pool)
                .await?
            }
            Some(window) => {
                sqlx::query_as::<_, CompanyRow>(&format!(
                    "SELECT {COMPANY_COLUMNS} FROM companies ORDER BY created_at, id LIMIT $1 OFFSET $2"
                ))
                .bind(window.limit() as i64)
                .bind(window.offset() as i64)
                .fetch_all(&self.pool)
                .await?
            }
        };
        Ok(rows)
    }

    async fn count(&self) -> Result<u64, AppError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM companies")
            .fetch_one(&self.pool)
            .await?;
        Ok(total.max(0) as u64)
    }

    async fn get(&self, id: Uuid) -> Result<Option<CompanyRow>, AppError> {
        Ok(sqlx::query_as::<_, CompanyRow>(&format!(
            "SELECT {COMPANY_COLUMNS} FROM companies WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn insert(&self, fields: &CompanyFields) -> Result<CompanyRow, AppError> {
        Ok(sqlx::query_as::<_, CompanyRow>(&format!(
            r#"
            INSERT INTO companies (id, name, email, contact, address)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {COMPANY_COLUMNS}
            "#
        ))
        .bind(Uuid::new_v4())
        .bind(&fields.name)
        .bind(&fields.email)
        .bind(&fields.contact)
        .bind(&fields.address)
        .fetch_one(&self.pool)
        .await?)
    }

    async fn update(
        &self,
        id: Uuid,
        fields: &CompanyFields,
    ) -> Result<Option<CompanyRow>, AppError> {
        Ok(sqlx::query_as::<_, CompanyRow>(&format!(
            r#"
            UPDATE companies
            SET name = $2, email = $3, contact = $4, address = $5, updated_at = now()
            WHERE id = $1
            RETURNING {COMPANY_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&fields.name)
        .bind(&fields.email)
        .bind(&fields.contact)
        .bind(&fields.address)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn delete(&self, id: Uuid) -> Result<Option<CompanyRow>, AppError> {
        Ok(sqlx::query_as::<_, CompanyRow>(&format!(
            "DELETE FROM companies WHERE id = $1 RETURNING {COMPANY_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?)
    }
}
