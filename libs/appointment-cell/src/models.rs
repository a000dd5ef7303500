use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

// ==============================================================================
// CORE APPOINTMENT MODELS
// ==============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Appointment {
    pub id: i64,
    pub business_id: i64,
    pub service_id: i64,
    pub client_id: i64,
    pub staff_id: Option<i64>,
    pub date: NaiveDate,
    #[serde(with = "clock_time")]
    pub start_time: NaiveTime,
    #[serde(with = "clock_time")]
    pub end_time: NaiveTime,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Scheduled,
    Completed,
    Cancelled,
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Scheduled => write!(f, "scheduled"),
            AppointmentStatus::Completed => write!(f, "completed"),
            AppointmentStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

// ==============================================================================
// REQUEST MODELS
// ==============================================================================

/// Body of `POST /appointments`. Dates and times arrive as strings so that
/// malformed values surface as typed validation errors rather than extractor
/// rejections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAppointmentRequest {
    pub business_id: i64,
    pub service_id: i64,
    pub client_id: i64,
    pub staff_id: Option<i64>,
    pub date: String,
    pub start_time: String,
    /// Optional; derived from the service duration. When supplied it must agree.
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// A validated appointment ready to be written.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewAppointment {
    pub business_id: i64,
    pub service_id: i64,
    pub client_id: i64,
    pub staff_id: Option<i64>,
    pub date: NaiveDate,
    #[serde(with = "clock_time")]
    pub start_time: NaiveTime,
    #[serde(with = "clock_time")]
    pub end_time: NaiveTime,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
}

/// Query string of `GET /services/{id}/slots`. A missing `date` is reported
/// as a malformed date rather than an extractor rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SlotQuery {
    #[serde(default)]
    pub date: Option<String>,
}

// ==============================================================================
// SERDE HELPERS
// ==============================================================================

/// `HH:MM` on the way out; accepts `HH:MM` or Postgres' `HH:MM:SS` on the way in.
pub mod clock_time {
    use chrono::NaiveTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%H:%M";

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&time.format(FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| de::Error::custom(format!("invalid time '{}'", raw)))
    }

    /// Lenient form for stored rows, which Postgres returns with seconds.
    pub fn parse(raw: &str) -> Option<NaiveTime> {
        let raw = raw.trim();
        NaiveTime::parse_from_str(raw, "%H:%M:%S")
            .or_else(|_| NaiveTime::parse_from_str(raw, FORMAT))
            .ok()
    }

    /// `HH:MM` only. Request times are written back without seconds, so
    /// anything finer is refused rather than truncated.
    pub fn parse_minutes(raw: &str) -> Option<NaiveTime> {
        NaiveTime::parse_from_str(raw.trim(), FORMAT).ok()
    }
}
