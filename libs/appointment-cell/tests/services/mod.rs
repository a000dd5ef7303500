mod booking_test;
mod slots_test;

use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};

use appointment_cell::error::AppointmentError;
use appointment_cell::models::{Appointment, NewAppointment};
use appointment_cell::services::{
    AppointmentBookingService, BookingStore, ScheduleLookup, ServiceSchedule, SlotService,
};
use business_cell::models::WeeklyHours;

/// In-process stand-in for the database. Enforces the same
/// (service, date, start_time) uniqueness the real schema does.
#[derive(Default)]
pub struct InMemoryStore {
    schedules: HashMap<i64, ServiceSchedule>,
    appointments: Mutex<Vec<Appointment>>,
}

impl InMemoryStore {
    pub fn with_service(mut self, service_id: i64, business_id: i64, duration_minutes: i32, hours: WeeklyHours) -> Self {
        self.schedules.insert(service_id, ServiceSchedule {
            service_id,
            business_id,
            duration_minutes,
            business_hours: hours,
        });
        self
    }

    pub fn appointments(&self) -> Vec<Appointment> {
        self.appointments.lock().unwrap().clone()
    }
}

#[async_trait]
impl ScheduleLookup for InMemoryStore {
    async fn service_schedule(&self, service_id: i64) -> Result<Option<ServiceSchedule>, AppointmentError> {
        Ok(self.schedules.get(&service_id).cloned())
    }
}

#[async_trait]
impl BookingStore for InMemoryStore {
    async fn booked_start_times(
        &self,
        service_id: i64,
        date: NaiveDate,
    ) -> Result<BTreeSet<NaiveTime>, AppointmentError> {
        Ok(self.appointments.lock().unwrap()
            .iter()
            .filter(|a| a.service_id == service_id && a.date == date)
            .map(|a| a.start_time)
            .collect())
    }

    async fn insert_appointment(&self, new: NewAppointment) -> Result<Appointment, AppointmentError> {
        let mut appointments = self.appointments.lock().unwrap();

        let taken = appointments.iter().any(|a| {
            a.service_id == new.service_id && a.date == new.date && a.start_time == new.start_time
        });
        if taken {
            return Err(AppointmentError::SlotUnavailable {
                service_id: new.service_id,
                date: new.date,
                start_time: new.start_time,
            });
        }

        let appointment = Appointment {
            id: appointments.len() as i64 + 1,
            business_id: new.business_id,
            service_id: new.service_id,
            client_id: new.client_id,
            staff_id: new.staff_id,
            date: new.date,
            start_time: new.start_time,
            end_time: new.end_time,
            status: new.status,
            notes: new.notes,
        };
        appointments.push(appointment.clone());
        Ok(appointment)
    }

    async fn appointments_for_business(&self, business_id: i64) -> Result<Vec<Appointment>, AppointmentError> {
        let mut found: Vec<Appointment> = self.appointments.lock().unwrap()
            .iter()
            .filter(|a| a.business_id == business_id)
            .cloned()
            .collect();
        found.sort_by_key(|a| (a.date, a.start_time));
        Ok(found)
    }
}

pub fn barbershop_hours() -> WeeklyHours {
    [
        ("monday", "9:00-17:00"),
        ("tuesday", "9:00-17:00"),
        ("wednesday", "9:00-17:00"),
        ("thursday", "9:00-17:00"),
        ("friday", "9:00-17:00"),
        ("saturday", "10:00-15:00"),
        ("sunday", "closed"),
    ]
    .into_iter()
    .collect()
}

/// Service 1 (30 min) and service 2 (60 min) of business 1.
pub fn barbershop_store() -> Arc<InMemoryStore> {
    Arc::new(
        InMemoryStore::default()
            .with_service(1, 1, 30, barbershop_hours())
            .with_service(2, 1, 60, barbershop_hours()),
    )
}

pub fn slot_service(store: &Arc<InMemoryStore>) -> SlotService {
    SlotService::new(store.clone(), store.clone())
}

pub fn booking_service(store: &Arc<InMemoryStore>) -> AppointmentBookingService {
    AppointmentBookingService::new(store.clone(), store.clone())
}

pub fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

/// 2025-03-10 is a Monday.
pub const MONDAY: &str = "2025-03-10";
pub const SATURDAY: &str = "2025-03-08";
pub const SUNDAY: &str = "2025-03-09";
