//! Axum route handler for the bulk notification endpoint.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::mail::dispatcher::{send_bulk, DispatchReport};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SendMailRequest {
    #[serde(default)]
    pub emails: Vec<String>,
    pub subject: Option<String>,
    #[serde(alias = "emailContent")]
    pub email_content: Option<String>,
}

/// POST /companies/send-mail
///
/// Subject and body fall back to the configured defaults.
pub async fn handle_send_mail(
    State(state): State<AppState>,
    payload: Result<Json<SendMailRequest>, JsonRejection>,
) -> Result<Json<DispatchReport>, AppError> {
    let Json(request) = payload?;
    let defaults = &state.config.mail;

    let subject = request.subject.as_deref().unwrap_or(&defaults.subject);
    let body = request.email_content.as_deref().unwrap_or(&defaults.body);

    let report = send_bulk(state.relay.as_ref(), &request.emails, subject, body).await?;
    Ok(Json(report))
}
