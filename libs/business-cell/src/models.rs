use std::collections::BTreeMap;

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use shared_database::DatabaseError;
use shared_models::error::AppError;

// ==============================================================================
// BUSINESSES
// ==============================================================================

pub const WEEKDAY_NAMES: [&str; 7] = [
    "monday", "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday",
];

/// Lowercase key used in the `business_hours` table for a weekday.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    WEEKDAY_NAMES[weekday.num_days_from_monday() as usize]
}

/// Weekly operating hours keyed by lowercase weekday name. Values should be
/// `"closed"` or an `"HH:MM-HH:MM"` range. They are kept as raw JSON so that a
/// bad entry (a `null`, a number) loads fine and is reported by whoever
/// computes availability instead of failing the whole row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeeklyHours(BTreeMap<String, Value>);

impl WeeklyHours {
    pub fn for_weekday(&self, weekday: Weekday) -> Option<&Value> {
        self.0.get(weekday_name(weekday))
    }

    /// Weekdays with no entry. A complete table has none.
    pub fn missing_days(&self) -> Vec<&'static str> {
        WEEKDAY_NAMES
            .iter()
            .copied()
            .filter(|day| !self.0.contains_key(*day))
            .collect()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for WeeklyHours {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Business {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub business_hours: WeeklyHours,
}

// ==============================================================================
// SERVICES
// ==============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub id: i64,
    pub business_id: i64,
    #[serde(default)]
    pub name: Option<String>,
    /// Minutes.
    pub duration: i32,
    pub price: f64,
    pub description: Option<String>,
}

/// A service row with its owning business embedded (`select=*,businesses(*)`).
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceWithBusiness {
    #[serde(flatten)]
    pub service: Service,
    #[serde(rename = "businesses")]
    pub business: Business,
}

// ==============================================================================
// ERRORS
// ==============================================================================

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("{0} not found")]
    NotFound(String),

    #[error(transparent)]
    Database(#[from] DatabaseError),
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound(what) => AppError::NotFound(format!("{} not found", what)),
            CatalogError::Database(e) => e.into(),
        }
    }
}
