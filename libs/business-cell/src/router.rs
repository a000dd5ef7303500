use axum::{
    Router,
    routing::get,
};

use shared_database::AppState;

use crate::handlers;

pub fn business_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::list_businesses))
        .route("/{business_id}", get(handlers::get_business))
        .route("/{business_id}/services", get(handlers::get_business_services))
        .with_state(state)
}
