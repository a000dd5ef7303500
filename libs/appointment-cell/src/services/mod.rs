pub mod availability;
pub mod booking;
pub mod slots;
pub mod store;

pub use booking::AppointmentBookingService;
pub use slots::SlotService;
pub use store::{BookingStore, ScheduleLookup, ServiceSchedule, SupabaseScheduleStore};
