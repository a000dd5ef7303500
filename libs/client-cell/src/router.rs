use axum::{routing::get, Router};

use shared_database::AppState;

use crate::handlers::*;

pub fn client_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(list_clients).post(create_client))
        .route("/{client_id}", get(get_client))
        .with_state(state)
}
