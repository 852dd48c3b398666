pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::companies::handlers;
use crate::mail::handlers::handle_send_mail;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/companies",
            get(handlers::handle_list_companies).post(handlers::handle_create_company),
        )
        .route("/companies/send-mail", post(handle_send_mail))
        .route(
            "/companies/:id",
            get(handlers::handle_get_company)
                .put(handlers::handle_update_company)
                .delete(handlers::handle_delete_company),
        )
        .with_state(state)
}
