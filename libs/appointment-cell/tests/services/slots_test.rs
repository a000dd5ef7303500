use std::sync::Arc;

use assert_matches::assert_matches;

use appointment_cell::error::{AppointmentError, AvailabilityError};
use appointment_cell::models::CreateAppointmentRequest;
use business_cell::models::WeeklyHours;

use super::*;

fn booking(service_id: i64, date: &str, start: &str) -> CreateAppointmentRequest {
    CreateAppointmentRequest {
        business_id: 1,
        service_id,
        client_id: 7,
        staff_id: Some(1),
        date: date.to_string(),
        start_time: start.to_string(),
        end_time: None,
        notes: None,
    }
}

#[tokio::test]
async fn test_open_weekday_yields_full_tiling() {
    let store = barbershop_store();

    let slots = slot_service(&store).available_slots(1, MONDAY).await.unwrap();

    assert_eq!(slots.len(), 16);
    assert_eq!(slots[0], t(9, 0));
    assert_eq!(slots[15], t(16, 30));
}

#[tokio::test]
async fn test_saturday_uses_short_hours() {
    let store = barbershop_store();

    let slots = slot_service(&store).available_slots(2, SATURDAY).await.unwrap();

    assert_eq!(slots, vec![t(10, 0), t(11, 0), t(12, 0), t(13, 0), t(14, 0)]);
}

#[tokio::test]
async fn test_closed_day_is_empty_not_an_error() {
    let store = barbershop_store();

    let slots = slot_service(&store).available_slots(1, SUNDAY).await.unwrap();

    assert!(slots.is_empty());
}

#[tokio::test]
async fn test_booked_slots_disappear() {
    let store = barbershop_store();
    let bookings = booking_service(&store);
    bookings.create_appointment(booking(1, MONDAY, "09:00")).await.unwrap();
    bookings.create_appointment(booking(1, MONDAY, "12:00")).await.unwrap();

    let slots = slot_service(&store).available_slots(1, MONDAY).await.unwrap();

    assert_eq!(slots.len(), 14);
    assert!(!slots.contains(&t(9, 0)));
    assert!(!slots.contains(&t(12, 0)));
    assert!(slots.contains(&t(9, 30)));
}

#[tokio::test]
async fn test_bookings_only_affect_their_own_service_and_date() {
    let store = barbershop_store();
    booking_service(&store).create_appointment(booking(1, MONDAY, "10:00")).await.unwrap();

    let other_service = slot_service(&store).available_slots(2, MONDAY).await.unwrap();
    let other_day = slot_service(&store).available_slots(1, "2025-03-11").await.unwrap();

    assert!(other_service.contains(&t(10, 0)));
    assert_eq!(other_day.len(), 16);
}

#[tokio::test]
async fn test_unknown_service_is_not_found() {
    let store = barbershop_store();

    let result = slot_service(&store).available_slots(404, MONDAY).await;

    assert_matches!(result, Err(AppointmentError::ServiceNotFound(404)));
}

#[tokio::test]
async fn test_malformed_date_is_rejected_before_lookup() {
    let store = barbershop_store();

    let result = slot_service(&store).available_slots(404, "03/10/2025").await;

    assert_matches!(result, Err(AppointmentError::Availability(AvailabilityError::MalformedDate(_))));
}

#[tokio::test]
async fn test_inverted_hours_surface_as_malformed() {
    let hours: WeeklyHours = [
        ("monday", "17:00-9:00"),
        ("tuesday", "closed"),
        ("wednesday", "closed"),
        ("thursday", "closed"),
        ("friday", "closed"),
        ("saturday", "closed"),
        ("sunday", "closed"),
    ]
    .into_iter()
    .collect();
    let store = Arc::new(InMemoryStore::default().with_service(9, 1, 30, hours));

    let result = slot_service(&store).available_slots(9, MONDAY).await;

    assert_matches!(result, Err(AppointmentError::Availability(AvailabilityError::MalformedHours(_))));
}

#[tokio::test]
async fn test_zero_duration_service_is_rejected() {
    let store = Arc::new(InMemoryStore::default().with_service(9, 1, 0, barbershop_hours()));

    let result = slot_service(&store).available_slots(9, MONDAY).await;

    assert_matches!(result, Err(AppointmentError::Availability(AvailabilityError::InvalidDuration(0))));
}

#[tokio::test]
async fn test_missing_weekday_is_rejected() {
    let hours: WeeklyHours = [("monday", "9:00-17:00")].into_iter().collect();
    let store = Arc::new(InMemoryStore::default().with_service(9, 1, 30, hours));

    let result = slot_service(&store).available_slots(9, MONDAY).await;

    assert_matches!(result, Err(AppointmentError::Availability(AvailabilityError::IncompleteHours(_))));
}
