//! Company record lifecycle over a `CompanyStore`.

use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::companies::pagination::{total_pages, PageWindow};
use crate::companies::store::CompanyStore;
use crate::companies::validation::validate_company;
use crate::errors::AppError;
use crate::models::company::{CompanyInput, CompanyRow};

/// One page of companies plus the totals the client needs to render pagination.
#[derive(Debug)]
pub struct CompanyPage {
    pub companies: Vec<CompanyRow>,
    pub total: u64,
    pub total_pages: u64,
}

#[derive(Debug, Serialize)]
pub struct DeleteConfirmation {
    pub message: String,
    pub id: Uuid,
}

/// An id that does not parse as a UUID cannot name a live record.
pub fn parse_company_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| not_found(raw))
}

fn not_found(id: impl std::fmt::Display) -> AppError {
    AppError::NotFound(format!("Company {id} not found"))
}

pub async fn list_companies(store: &dyn CompanyStore) -> Result<Vec<CompanyRow>, AppError> {
    store.list(None).await
}

pub async fn list_companies_page(
    store: &dyn CompanyStore,
    window: PageWindow,
) -> Result<CompanyPage, AppError> {
    let total = store.count().await?;
    let companies = store.list(Some(window)).await?;
    Ok(CompanyPage {
        companies,
        total,
        total_pages: total_pages(total, window.per_page),
    })
}

pub async fn get_company(store: &dyn CompanyStore, id: Uuid) -> Result<CompanyRow, AppError> {
    store.get(id).await?.ok_or_else(|| not_found(id))
}

/// Validates before touching the store; a rejected request performs no write.
pub async fn create_company(
    store: &dyn CompanyStore,
    input: CompanyInput,
) -> Result<CompanyRow, AppError> {
    let fields = validate_company(input)?;
    let company = store.insert(&fields).await?;
    info!("Created company {} ({})", company.id, company.name);
    Ok(company)
}

pub async fn update_company(
    store: &dyn CompanyStore,
    id: Uuid,
    input: CompanyInput,
) -> Result<CompanyRow, AppError> {
    let fields = validate_company(input)?;
    let company = store
        .update(id, &fields)
        .await?
        .ok_or_else(|| not_found(id))?;
    info!("Updated company {id}");
    Ok(company)
}

pub async fn delete_company(
    store: &dyn CompanyStore,
    id: Uuid,
) -> Result<DeleteConfirmation, AppError> {
    let removed = store.delete(id).await?.ok_or_else(|| not_found(id))?;
    info!("Deleted company {} ({})", removed.id, removed.name);
    Ok(DeleteConfirmation {
        message: "Company deleted".to_string(),
        id: removed.id,
    })
}
