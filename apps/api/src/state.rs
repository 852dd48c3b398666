use std::sync::Arc;

use crate::companies::store::CompanyStore;
use crate::config::Config;
use crate::mail::relay::MailRelay;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Record Store. Default: `PgCompanyStore`.
    pub store: Arc<dyn CompanyStore>,
    /// Outbound mail. Default: `SmtpRelay`.
    pub relay: Arc<dyn MailRelay>,
    pub config: Config,
}
