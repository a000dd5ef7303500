use std::sync::Arc;

use chrono::{Duration, NaiveTime};
use tracing::{debug, info, warn};

use shared_database::supabase::SupabaseClient;

use crate::error::AppointmentError;
use crate::models::{clock_time, Appointment, AppointmentStatus, CreateAppointmentRequest, NewAppointment};
use crate::services::availability::{parse_date, validate_duration};
use crate::services::store::{BookingStore, ScheduleLookup, SupabaseScheduleStore};

pub struct AppointmentBookingService {
    lookup: Arc<dyn ScheduleLookup>,
    bookings: Arc<dyn BookingStore>,
}

impl AppointmentBookingService {
    pub fn new(lookup: Arc<dyn ScheduleLookup>, bookings: Arc<dyn BookingStore>) -> Self {
        Self { lookup, bookings }
    }

    pub fn with_supabase(supabase: Arc<SupabaseClient>) -> Self {
        let store = Arc::new(SupabaseScheduleStore::new(supabase));
        Self::new(store.clone(), store)
    }

    /// Books an appointment as `scheduled`.
    ///
    /// The end time is derived from the service duration. Exclusivity of the
    /// (service, date, start time) triple is enforced by the store, so two
    /// callers racing for the same free slot get one success and one
    /// `SlotUnavailable`.
    pub async fn create_appointment(&self, request: CreateAppointmentRequest) -> Result<Appointment, AppointmentError> {
        info!("Booking service {} for client {} on {} at {}",
              request.service_id, request.client_id, request.date, request.start_time);

        let date = parse_date(&request.date)?;
        let start_time = clock_time::parse_minutes(&request.start_time)
            .ok_or_else(|| AppointmentError::Validation(format!(
                "start_time '{}' must be HH:MM", request.start_time
            )))?;

        let schedule = self.lookup.service_schedule(request.service_id).await?
            .ok_or(AppointmentError::ServiceNotFound(request.service_id))?;

        if schedule.business_id != request.business_id {
            return Err(AppointmentError::Validation(format!(
                "service {} does not belong to business {}",
                request.service_id, request.business_id
            )));
        }

        let end_time = end_of(start_time, schedule.duration_minutes)?;

        if let Some(supplied) = request.end_time.as_deref() {
            let supplied_end = clock_time::parse_minutes(supplied)
                .ok_or_else(|| AppointmentError::Validation(format!("end_time '{}' must be HH:MM", supplied)))?;

            if supplied_end != end_time {
                warn!("Rejecting end_time {} for service {}: expected {}",
                      supplied, request.service_id, end_time.format("%H:%M"));
                return Err(AppointmentError::Validation(format!(
                    "end_time must be {} for a {} minute service starting at {}",
                    end_time.format("%H:%M"),
                    schedule.duration_minutes,
                    start_time.format("%H:%M"),
                )));
            }
        }

        let appointment = self.bookings.insert_appointment(NewAppointment {
            business_id: request.business_id,
            service_id: request.service_id,
            client_id: request.client_id,
            staff_id: request.staff_id,
            date,
            start_time,
            end_time,
            status: AppointmentStatus::Scheduled,
            notes: request.notes,
        }).await?;

        info!("Appointment created with ID: {}", appointment.id);
        Ok(appointment)
    }

    pub async fn appointments_for_business(&self, business_id: i64) -> Result<Vec<Appointment>, AppointmentError> {
        debug!("Listing appointments for business {}", business_id);
        self.bookings.appointments_for_business(business_id).await
    }
}

/// `start + duration`, refusing appointments that would run past midnight.
fn end_of(start: NaiveTime, duration_minutes: i32) -> Result<NaiveTime, AppointmentError> {
    let duration = validate_duration(duration_minutes)?;
    let (end, wrapped_seconds) = start.overflowing_add_signed(Duration::minutes(i64::from(duration)));

    if wrapped_seconds != 0 {
        return Err(AppointmentError::Validation(format!(
            "a {} minute appointment starting at {} would run past midnight",
            duration,
            start.format("%H:%M")
        )));
    }

    Ok(end)
}
