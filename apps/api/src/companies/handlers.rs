//! Axum route handlers for the Company API.

use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Path, Query, State},
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::companies::pagination::ListQuery;
use crate::companies::service::{self, DeleteConfirmation};
use crate::errors::AppError;
use crate::models::company::{CompanyInput, CompanyRow};
use crate::state::AppState;

/// GET /companies
///
/// Full array by default. With `?page=` only that window is returned and the
/// totals travel in `x-total-count` / `x-total-pages`.
pub async fn handle_list_companies(
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Response, AppError> {
    let Query(query) = query?;

    let Some(window) = query.window()? else {
        let companies = service::list_companies(state.store.as_ref()).await?;
        return Ok(Json(companies).into_response());
    };

    let page = service::list_companies_page(state.store.as_ref(), window).await?;
    let mut headers = HeaderMap::new();
    headers.insert("x-total-count", HeaderValue::from(page.total));
    headers.insert("x-total-pages", HeaderValue::from(page.total_pages));
    Ok((headers, Json(page.companies)).into_response())
}

/// GET /companies/:id
pub async fn handle_get_company(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CompanyRow>, AppError> {
    let id = service::parse_company_id(&id)?;
    Ok(Json(service::get_company(state.store.as_ref(), id).await?))
}

/// POST /companies
pub async fn handle_create_company(
    State(state): State<AppState>,
    payload: Result<Json<CompanyInput>, JsonRejection>,
) -> Result<(StatusCode, Json<CompanyRow>), AppError> {
    let Json(input) = payload?;
    let company = service::create_company(state.store.as_ref(), input).await?;
    Ok((StatusCode::CREATED, Json(company)))
}

/// PUT /companies/:id
///
/// Full replace: all four fields must be supplied.
pub async fn handle_update_company(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<CompanyInput>, JsonRejection>,
) -> Result<Json<CompanyRow>, AppError> {
    let Json(input) = payload?;
    let id = service::parse_company_id(&id)?;
    Ok(Json(
        service::update_company(state.store.as_ref(), id, input).await?,
    ))
}

/// DELETE /companies/:id
pub async fn handle_delete_company(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteConfirmation>, AppError> {
    let id = service::parse_company_id(&id)?;
    Ok(Json(service::delete_company(state.store.as_ref(), id).await?))
}
