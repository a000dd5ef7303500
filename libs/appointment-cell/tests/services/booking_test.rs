use assert_matches::assert_matches;

use appointment_cell::error::{AppointmentError, AvailabilityError};
use appointment_cell::models::{AppointmentStatus, CreateAppointmentRequest};

use super::*;

fn request(start: &str, end: Option<&str>) -> CreateAppointmentRequest {
    CreateAppointmentRequest {
        business_id: 1,
        service_id: 1,
        client_id: 7,
        staff_id: Some(3),
        date: MONDAY.to_string(),
        start_time: start.to_string(),
        end_time: end.map(str::to_string),
        notes: Some("first visit".to_string()),
    }
}

#[tokio::test]
async fn test_create_appointment_derives_end_time() {
    let store = barbershop_store();

    let appointment = booking_service(&store)
        .create_appointment(request("09:30", None))
        .await
        .unwrap();

    assert_eq!(appointment.start_time, t(9, 30));
    assert_eq!(appointment.end_time, t(10, 0));
    assert_eq!(appointment.status, AppointmentStatus::Scheduled);
    assert_eq!(appointment.notes.as_deref(), Some("first visit"));
    assert_eq!(store.appointments().len(), 1);
}

#[tokio::test]
async fn test_matching_end_time_is_accepted() {
    let store = barbershop_store();

    let result = booking_service(&store)
        .create_appointment(request("14:00", Some("14:30")))
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_inconsistent_end_time_is_rejected() {
    let store = barbershop_store();

    let result = booking_service(&store)
        .create_appointment(request("14:00", Some("15:00")))
        .await;

    assert_matches!(result, Err(AppointmentError::Validation(_)));
    assert!(store.appointments().is_empty());
}

#[tokio::test]
async fn test_start_time_with_seconds_is_rejected_not_truncated() {
    let store = barbershop_store();

    let result = booking_service(&store)
        .create_appointment(request("09:00:30", None))
        .await;

    assert_matches!(result, Err(AppointmentError::Validation(msg)) if msg.contains("09:00:30"));
    assert!(store.appointments().is_empty());
}

#[tokio::test]
async fn test_second_booking_of_same_slot_conflicts() {
    let store = barbershop_store();
    let service = booking_service(&store);

    service.create_appointment(request("11:00", None)).await.unwrap();
    let result = service.create_appointment(request("11:00", None)).await;

    assert_matches!(result, Err(AppointmentError::SlotUnavailable { service_id: 1, .. }));
    assert_eq!(store.appointments().len(), 1);
}

#[tokio::test]
async fn test_racing_bookings_yield_exactly_one_winner() {
    let store = barbershop_store();
    let first = booking_service(&store);
    let second = booking_service(&store);

    let (a, b) = tokio::join!(
        first.create_appointment(request("15:00", None)),
        second.create_appointment(request("15:00", None)),
    );

    let outcomes = [a, b];
    assert_eq!(outcomes.iter().filter(|r| r.is_ok()).count(), 1);
    assert!(outcomes.iter().any(|r| matches!(r, Err(AppointmentError::SlotUnavailable { .. }))));
    assert_eq!(store.appointments().len(), 1);
}

#[tokio::test]
async fn test_unknown_service_is_not_found() {
    let store = barbershop_store();
    let mut req = request("09:00", None);
    req.service_id = 77;

    let result = booking_service(&store).create_appointment(req).await;

    assert_matches!(result, Err(AppointmentError::ServiceNotFound(77)));
}

#[tokio::test]
async fn test_service_must_belong_to_business() {
    let store = barbershop_store();
    let mut req = request("09:00", None);
    req.business_id = 2;

    let result = booking_service(&store).create_appointment(req).await;

    assert_matches!(result, Err(AppointmentError::Validation(_)));
}

#[tokio::test]
async fn test_malformed_inputs_are_rejected() {
    let store = barbershop_store();
    let service = booking_service(&store);

    let mut bad_date = request("09:00", None);
    bad_date.date = "2025-13-01".to_string();
    assert_matches!(
        service.create_appointment(bad_date).await,
        Err(AppointmentError::Availability(AvailabilityError::MalformedDate(_)))
    );

    assert_matches!(
        service.create_appointment(request("9 o'clock", None)).await,
        Err(AppointmentError::Validation(_))
    );
    assert!(store.appointments().is_empty());
}

#[tokio::test]
async fn test_business_appointments_are_ordered() {
    let store = barbershop_store();
    let service = booking_service(&store);

    service.create_appointment(request("16:00", None)).await.unwrap();
    service.create_appointment(request("09:00", None)).await.unwrap();
    let mut earlier = request("12:00", None);
    earlier.date = SATURDAY.to_string();
    service.create_appointment(earlier).await.unwrap();

    let listed = service.appointments_for_business(1).await.unwrap();
    let order: Vec<_> = listed.iter().map(|a| (a.date.to_string(), a.start_time)).collect();

    assert_eq!(order, vec![
        (SATURDAY.to_string(), t(12, 0)),
        (MONDAY.to_string(), t(9, 0)),
        (MONDAY.to_string(), t(16, 0)),
    ]);
    assert!(service.appointments_for_business(2).await.unwrap().is_empty());
}
