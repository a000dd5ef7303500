use axum::{
    Json, Router,
    extract::State,
    routing::get,
};
use serde_json::{json, Value};

use appointment_cell::router::{appointment_routes, slot_routes};
use business_cell::router::business_routes;
use client_cell::router::client_routes;
use shared_database::AppState;
use shared_models::error::AppError;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { Json(json!({ "message": "Appointment Scheduler API" })) }))
        .route("/status", get(database_status).with_state(state.clone()))
        .nest("/businesses", business_routes(state.clone()))
        .nest("/services", slot_routes(state.clone()))
        .nest("/appointments", appointment_routes(state.clone()))
        .nest("/clients", client_routes(state))
}

async fn database_status(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    state.supabase.ping().await?;

    Ok(Json(json!({
        "database": "ok",
        "configured": state.config.is_configured()
    })))
}
