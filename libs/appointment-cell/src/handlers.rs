use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use shared_database::AppState;
use shared_models::error::AppError;

use crate::models::{CreateAppointmentRequest, SlotQuery};
use crate::services::availability::format_slots;
use crate::services::{AppointmentBookingService, SlotService};

#[axum::debug_handler]
pub async fn get_available_slots(
    State(state): State<AppState>,
    Path(service_id): Path<i64>,
    Query(query): Query<SlotQuery>,
) -> Result<Json<Value>, AppError> {
    let slot_service = SlotService::with_supabase(state.supabase.clone());

    let date = query.date.unwrap_or_default();
    let slots = slot_service.available_slots(service_id, &date).await?;

    Ok(Json(json!({
        "slots": format_slots(&slots)
    })))
}

#[axum::debug_handler]
pub async fn create_appointment(
    State(state): State<AppState>,
    Json(request): Json<CreateAppointmentRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let booking_service = AppointmentBookingService::with_supabase(state.supabase.clone());

    let appointment = booking_service.create_appointment(request).await?;

    Ok((StatusCode::CREATED, Json(json!(appointment))))
}

#[axum::debug_handler]
pub async fn get_business_appointments(
    State(state): State<AppState>,
    Path(business_id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    let booking_service = AppointmentBookingService::with_supabase(state.supabase.clone());

    let appointments = booking_service.appointments_for_business(business_id).await?;

    Ok(Json(json!(appointments)))
}
