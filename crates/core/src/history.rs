//! # Appointment History
//!
//! Splits a patient's appointments into the ones still ahead of them and
//! everything else.

use chrono::NaiveDateTime;

use crate::{availability::BOOKED_STATUS, models::appointment::AppointmentRecord};

const TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Parses an appointment timestamp with or without seconds.
pub fn parse_appointment_time(timestamp: &str) -> Option<NaiveDateTime> {
    TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(timestamp, format).ok())
}

#[derive(Debug, Clone, Default)]
pub struct AppointmentHistory {
    /// Booked and still in the future, soonest first
    pub upcoming: Vec<AppointmentRecord>,
    /// Cancelled, completed or already started, most recent first
    pub past: Vec<AppointmentRecord>,
}

impl AppointmentHistory {
    pub fn from_records(mut records: Vec<AppointmentRecord>, now: NaiveDateTime) -> Self {
        records.sort_by_key(|record| {
            record
                .appointment_time
                .as_deref()
                .and_then(parse_appointment_time)
        });

        let (upcoming, mut past): (Vec<_>, Vec<_>) =
            records.into_iter().partition(|record| is_upcoming(record, now));
        past.reverse();

        Self { upcoming, past }
    }

    pub fn is_empty(&self) -> bool {
        self.upcoming.is_empty() && self.past.is_empty()
    }
}

fn is_upcoming(record: &AppointmentRecord, now: NaiveDateTime) -> bool {
    record.status == BOOKED_STATUS
        && record
            .appointment_time
            .as_deref()
            .and_then(parse_appointment_time)
            .is_some_and(|time| time > now)
}
