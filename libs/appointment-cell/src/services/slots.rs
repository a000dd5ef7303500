use std::sync::Arc;

use chrono::NaiveTime;
use tracing::debug;

use shared_database::supabase::SupabaseClient;

use crate::error::AppointmentError;
use crate::services::availability::{parse_date, slots_for_day};
use crate::services::store::{BookingStore, ScheduleLookup, SupabaseScheduleStore};

pub struct SlotService {
    lookup: Arc<dyn ScheduleLookup>,
    bookings: Arc<dyn BookingStore>,
}

impl SlotService {
    pub fn new(lookup: Arc<dyn ScheduleLookup>, bookings: Arc<dyn BookingStore>) -> Self {
        Self { lookup, bookings }
    }

    pub fn with_supabase(supabase: Arc<SupabaseClient>) -> Self {
        let store = Arc::new(SupabaseScheduleStore::new(supabase));
        Self::new(store.clone(), store)
    }

    /// Free start times for `service_id` on `date` (`YYYY-MM-DD`).
    ///
    /// An unknown service is `ServiceNotFound`; a known service with nothing
    /// free (closed day, fully booked) is an empty list.
    pub async fn available_slots(&self, service_id: i64, date: &str) -> Result<Vec<NaiveTime>, AppointmentError> {
        let date = parse_date(date)?;
        debug!("Calculating available slots for service {} on {}", service_id, date);

        let schedule = self.lookup.service_schedule(service_id).await?
            .ok_or(AppointmentError::ServiceNotFound(service_id))?;

        let booked = self.bookings.booked_start_times(service_id, date).await?;

        let slots = slots_for_day(
            schedule.duration_minutes,
            &schedule.business_hours,
            date,
            &booked,
        )?;

        debug!("Service {} has {} free slots on {} ({} booked)", service_id, slots.len(), date, booked.len());
        Ok(slots)
    }
}
