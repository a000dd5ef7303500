use serde_json::{json, Value};

use shared_config::AppConfig;
use shared_database::AppState;

pub struct TestConfig {
    pub supabase_url: String,
    pub supabase_key: String,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            supabase_url: "http://localhost:54321".to_string(),
            supabase_key: "test-anon-key".to_string(),
        }
    }
}

impl TestConfig {
    /// Points the client at a mock PostgREST server, e.g. `MockServer::uri()`.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            supabase_url: url.into(),
            ..Self::default()
        }
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            supabase_url: self.supabase_url.clone(),
            supabase_key: self.supabase_key.clone(),
            bind_addr: "127.0.0.1:0".to_string(),
            cors_allowed_origins: Vec::new(),
        }
    }

    pub fn to_state(&self) -> AppState {
        AppState::new(self.to_app_config())
    }
}

/// Canned PostgREST rows shaped like the seeded tables.
pub struct MockSupabaseResponses;

impl MockSupabaseResponses {
    pub fn weekday_hours() -> Value {
        json!({
            "monday": "9:00-17:00",
            "tuesday": "9:00-17:00",
            "wednesday": "9:00-17:00",
            "thursday": "9:00-17:00",
            "friday": "9:00-17:00",
            "saturday": "10:00-15:00",
            "sunday": "closed"
        })
    }

    pub fn business(id: i64) -> Value {
        json!({
            "id": id,
            "name": "Stylish Cuts Barbershop",
            "email": "info@stylishcuts.example",
            "phone": "555-123-4567",
            "address": "123 Main St, Boston, MA",
            "business_hours": Self::weekday_hours()
        })
    }

    pub fn service(id: i64, business_id: i64, duration: i32) -> Value {
        json!({
            "id": id,
            "business_id": business_id,
            "name": "Regular Haircut",
            "duration": duration,
            "price": 25.0,
            "description": "Standard haircut with clippers and scissors"
        })
    }

    /// Service row with its owning business embedded, as returned by
    /// `select=*,businesses(*)`.
    pub fn service_with_business(id: i64, business_id: i64, duration: i32) -> Value {
        let mut service = Self::service(id, business_id, duration);
        service["businesses"] = Self::business(business_id);
        service
    }

    pub fn client(id: i64) -> Value {
        json!({
            "id": id,
            "name": "James Smith",
            "email": "james@example.com",
            "phone": "555-987-6543",
            "notes": "Prefers afternoon appointments"
        })
    }

    pub fn appointment(id: i64, service_id: i64, date: &str, start: &str, end: &str) -> Value {
        json!({
            "id": id,
            "business_id": 1,
            "service_id": service_id,
            "client_id": 1,
            "staff_id": 1,
            "date": date,
            "start_time": start,
            "end_time": end,
            "status": "scheduled",
            "notes": ""
        })
    }
}
