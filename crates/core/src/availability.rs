//! # Slot Availability
//!
//! Turns the backend's appointment list into a set of occupied times of day
//! and marks generated slots against it.

use std::collections::BTreeSet;

use crate::models::{appointment::AppointmentRecord, time_slot::TimeSlot};

/// Status the backend gives an appointment that occupies its slot.
///
/// Compared case-sensitively; any other status leaves the slot free.
pub const BOOKED_STATUS: &str = "BOOKED";

/// "HH:MM" strings already taken for one doctor on one date.
pub type BookedTimes = BTreeSet<String>;

/// Time-of-day portion of an ISO-8601 timestamp ("YYYY-MM-DDTHH:MM...").
///
/// Returns `None` when the timestamp is too short to contain one.
pub fn time_of_day(timestamp: &str) -> Option<&str> {
    timestamp
        .get(11..16)
        .filter(|time| time.chars().count() == 5)
}

/// Collects the times of every booked appointment.
pub fn booked_times<'a, I>(records: I) -> BookedTimes
where
    I: IntoIterator<Item = &'a AppointmentRecord>,
{
    records
        .into_iter()
        .filter(|record| record.status == BOOKED_STATUS)
        .filter_map(|record| record.appointment_time.as_deref().and_then(time_of_day))
        .map(str::to_string)
        .collect()
}

/// Marks each generated time as booked or free, keeping generator order.
pub fn merge(times: &[String], booked: &BookedTimes) -> Vec<TimeSlot> {
    times
        .iter()
        .map(|time| TimeSlot {
            time: time.clone(),
            is_booked: booked.contains(time),
        })
        .collect()
}

/// Whether `time` is offered and free in `slots`.
pub fn is_available(slots: &[TimeSlot], time: &str) -> bool {
    slots.iter().any(|slot| slot.time == time && !slot.is_booked)
}
