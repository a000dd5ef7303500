use axum::{
    Router,
    routing::{get, post},
};

use shared_database::AppState;

use crate::handlers;

/// Mounted under `/appointments`.
pub fn appointment_routes(state: AppState) -> Router {
    Router::new()
        .route("/", post(handlers::create_appointment))
        .route("/{business_id}", get(handlers::get_business_appointments))
        .with_state(state)
}

/// Mounted under `/services`.
pub fn slot_routes(state: AppState) -> Router {
    Router::new()
        .route("/{service_id}/slots", get(handlers::get_available_slots))
        .with_state(state)
}
