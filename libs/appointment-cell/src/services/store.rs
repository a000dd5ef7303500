use std::collections::BTreeSet;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use reqwest::Method;
use serde::Deserialize;
use tracing::{debug, warn};

use business_cell::models::{CatalogError, WeeklyHours};
use business_cell::services::BusinessService;
use shared_database::supabase::SupabaseClient;

use crate::error::AppointmentError;
use crate::models::{clock_time, Appointment, NewAppointment};

/// What slot computation needs to know about a service.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceSchedule {
    pub service_id: i64,
    pub business_id: i64,
    pub duration_minutes: i32,
    pub business_hours: WeeklyHours,
}

#[async_trait]
pub trait ScheduleLookup: Send + Sync {
    /// `Ok(None)` when the service id is unknown.
    async fn service_schedule(&self, service_id: i64) -> Result<Option<ServiceSchedule>, AppointmentError>;
}

#[async_trait]
pub trait BookingStore: Send + Sync {
    async fn booked_start_times(
        &self,
        service_id: i64,
        date: NaiveDate,
    ) -> Result<BTreeSet<NaiveTime>, AppointmentError>;

    /// Writes the appointment. Must fail with `SlotUnavailable` when the
    /// (service, date, start time) triple is already taken.
    async fn insert_appointment(&self, appointment: NewAppointment) -> Result<Appointment, AppointmentError>;

    async fn appointments_for_business(&self, business_id: i64) -> Result<Vec<Appointment>, AppointmentError>;
}

/// PostgREST-backed implementation of both collaborators.
pub struct SupabaseScheduleStore {
    supabase: Arc<SupabaseClient>,
    businesses: BusinessService,
}

impl SupabaseScheduleStore {
    pub fn new(supabase: Arc<SupabaseClient>) -> Self {
        Self {
            businesses: BusinessService::new(Arc::clone(&supabase)),
            supabase,
        }
    }
}

#[derive(Debug, Deserialize)]
struct BookedTimeRow {
    start_time: String,
}

#[async_trait]
impl ScheduleLookup for SupabaseScheduleStore {
    async fn service_schedule(&self, service_id: i64) -> Result<Option<ServiceSchedule>, AppointmentError> {
        let resolved = self.businesses.get_service_with_business(service_id).await
            .map_err(|e| match e {
                CatalogError::Database(db) => AppointmentError::Database(db),
                CatalogError::NotFound(_) => AppointmentError::ServiceNotFound(service_id),
            })?;

        Ok(resolved.map(|row| ServiceSchedule {
            service_id: row.service.id,
            business_id: row.business.id,
            duration_minutes: row.service.duration,
            business_hours: row.business.business_hours,
        }))
    }
}

#[async_trait]
impl BookingStore for SupabaseScheduleStore {
    async fn booked_start_times(
        &self,
        service_id: i64,
        date: NaiveDate,
    ) -> Result<BTreeSet<NaiveTime>, AppointmentError> {
        debug!("Fetching booked times for service {} on {}", service_id, date);

        let path = format!(
            "/rest/v1/appointments?select=start_time&service_id=eq.{}&date=eq.{}",
            service_id,
            date.format("%Y-%m-%d")
        );
        let rows: Vec<BookedTimeRow> = self.supabase.request(Method::GET, &path, None).await?;

        let booked = rows
            .into_iter()
            .filter_map(|row| {
                let parsed = clock_time::parse(&row.start_time);
                if parsed.is_none() {
                    warn!("Ignoring unparseable booked start_time '{}' for service {}", row.start_time, service_id);
                }
                parsed
            })
            .collect();

        Ok(booked)
    }

    async fn insert_appointment(&self, appointment: NewAppointment) -> Result<Appointment, AppointmentError> {
        let row = serde_json::to_value(&appointment)
            .map_err(|e| AppointmentError::Validation(e.to_string()))?;

        let result: Vec<Appointment> = self.supabase.insert("appointments", row).await
            .map_err(|e| {
                if e.is_conflict() {
                    AppointmentError::SlotUnavailable {
                        service_id: appointment.service_id,
                        date: appointment.date,
                        start_time: appointment.start_time,
                    }
                } else if e.is_foreign_key() {
                    warn!("Appointment references a missing row: {}", e);
                    AppointmentError::Validation(format!(
                        "client {} or business {} does not exist",
                        appointment.client_id, appointment.business_id
                    ))
                } else {
                    AppointmentError::Database(e)
                }
            })?;

        result.into_iter().next().ok_or(AppointmentError::NotPersisted)
    }

    async fn appointments_for_business(&self, business_id: i64) -> Result<Vec<Appointment>, AppointmentError> {
        debug!("Fetching appointments for business {}", business_id);

        let path = format!(
            "/rest/v1/appointments?select=*&business_id=eq.{}&order=date.asc,start_time.asc",
            business_id
        );
        let appointments: Vec<Appointment> = self.supabase.request(Method::GET, &path, None).await?;

        Ok(appointments)
    }
}
