//! Slot availability for a single service on a single day.
//!
//! Slots tile the opening interval back to back from the opening time, one
//! service duration apart. A trailing remainder shorter than the duration is
//! left unused. Booked slots are removed by exact start-time match only: a
//! booking whose start does not sit on this tiling (for instance one made
//! before the service duration changed) is not treated as overlapping.

use std::collections::BTreeSet;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};

use business_cell::models::{weekday_name, WeeklyHours};

use crate::error::AvailabilityError;

pub const CLOSED: &str = "closed";
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One day's entry in a business hours table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoursSpec {
    Closed,
    Open { open: NaiveTime, close: NaiveTime },
}

impl FromStr for HoursSpec {
    type Err = AvailabilityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed == CLOSED {
            return Ok(HoursSpec::Closed);
        }

        let malformed = || AvailabilityError::MalformedHours(s.to_string());

        let parts: Vec<&str> = trimmed.split('-').collect();
        let [open, close] = parts.as_slice() else {
            return Err(malformed());
        };

        let open = parse_clock(open).ok_or_else(malformed)?;
        let close = parse_clock(close).ok_or_else(malformed)?;

        if open >= close {
            return Err(malformed());
        }

        Ok(HoursSpec::Open { open, close })
    }
}

/// Parses a 24-hour `H:MM` / `HH:MM` token.
fn parse_clock(token: &str) -> Option<NaiveTime> {
    let (hour, minute) = token.trim().split_once(':')?;

    let is_field = |s: &str| (1..=2).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit());
    if !is_field(hour) || !is_field(minute) {
        return None;
    }

    NaiveTime::from_hms_opt(hour.parse().ok()?, minute.parse().ok()?, 0)
}

pub fn parse_date(raw: &str) -> Result<NaiveDate, AvailabilityError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|_| AvailabilityError::MalformedDate(raw.to_string()))
}

pub fn validate_duration(duration_minutes: i32) -> Result<u32, AvailabilityError> {
    u32::try_from(duration_minutes)
        .ok()
        .filter(|d| *d > 0)
        .ok_or(AvailabilityError::InvalidDuration(duration_minutes))
}

fn minutes_of(time: NaiveTime) -> u32 {
    time.num_seconds_from_midnight() / 60
}

fn time_of(minutes: u32) -> Option<NaiveTime> {
    NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0)
}

/// Bookable start times for one day's hours, ascending and free of duplicates.
pub fn compute_slots(
    duration_minutes: i32,
    hours_spec: &str,
    booked_start_times: &BTreeSet<NaiveTime>,
) -> Result<Vec<NaiveTime>, AvailabilityError> {
    let (open, close) = match hours_spec.parse::<HoursSpec>()? {
        HoursSpec::Closed => return Ok(Vec::new()),
        HoursSpec::Open { open, close } => (minutes_of(open), minutes_of(close)),
    };
    let duration = validate_duration(duration_minutes)?;

    let slots = (open..close)
        .step_by(duration as usize)
        .take_while(|start| start + duration <= close)
        .filter_map(time_of)
        .filter(|slot| !booked_start_times.contains(slot))
        .collect();

    Ok(slots)
}

/// Picks the hours for `date`'s weekday out of a weekly table and computes
/// the free slots. The table must list all seven days.
pub fn slots_for_day(
    duration_minutes: i32,
    weekly_hours: &WeeklyHours,
    date: NaiveDate,
    booked_start_times: &BTreeSet<NaiveTime>,
) -> Result<Vec<NaiveTime>, AvailabilityError> {
    let missing = weekly_hours.missing_days();
    if !missing.is_empty() {
        return Err(AvailabilityError::IncompleteHours(missing));
    }

    let entry = weekly_hours
        .for_weekday(date.weekday())
        .ok_or_else(|| AvailabilityError::IncompleteHours(vec![weekday_name(date.weekday())]))?;
    let hours_spec = entry
        .as_str()
        .ok_or_else(|| AvailabilityError::MalformedHours(entry.to_string()))?;

    compute_slots(duration_minutes, hours_spec, booked_start_times)
}

pub fn format_slots(slots: &[NaiveTime]) -> Vec<String> {
    slots.iter().map(|slot| slot.format("%H:%M").to_string()).collect()
}
