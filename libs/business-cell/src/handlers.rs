use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

use shared_database::AppState;
use shared_models::error::AppError;

use crate::services::BusinessService;

#[axum::debug_handler]
pub async fn list_businesses(
    State(state): State<AppState>,
) -> Result<Json<Value>, AppError> {
    let business_service = BusinessService::new(state.supabase.clone());

    let businesses = business_service.list_businesses().await?;

    Ok(Json(json!(businesses)))
}

#[axum::debug_handler]
pub async fn get_business(
    State(state): State<AppState>,
    Path(business_id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    let business_service = BusinessService::new(state.supabase.clone());

    let business = business_service.get_business(business_id).await?;

    Ok(Json(json!(business)))
}

#[axum::debug_handler]
pub async fn get_business_services(
    State(state): State<AppState>,
    Path(business_id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    let business_service = BusinessService::new(state.supabase.clone());

    let services = business_service.get_services(business_id).await?;

    Ok(Json(json!(services)))
}
