use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use shared_database::AppState;
use shared_models::error::AppError;

use crate::models::CreateClientRequest;
use crate::services::ClientService;

#[axum::debug_handler]
pub async fn list_clients(
    State(state): State<AppState>,
) -> Result<Json<Value>, AppError> {
    let service = ClientService::new(state.supabase.clone());

    let clients = service.list_clients().await?;

    Ok(Json(json!(clients)))
}

#[axum::debug_handler]
pub async fn get_client(
    State(state): State<AppState>,
    Path(client_id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    let service = ClientService::new(state.supabase.clone());

    let client = service.get_client(client_id).await?;

    Ok(Json(json!(client)))
}

#[axum::debug_handler]
pub async fn create_client(
    State(state): State<AppState>,
    Json(request): Json<CreateClientRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let service = ClientService::new(state.supabase.clone());

    let client = service.create_client(request).await?;

    Ok((StatusCode::CREATED, Json(json!(client))))
}
