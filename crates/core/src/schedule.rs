//! # Session Schedule
//!
//! Every doctor works the same two sessions each day:
//!
//! - morning: slots from 09:00 up to and including 13:00
//! - afternoon: slots from 14:00 up to the closing hour, which is 20:00, or
//!   18:00 on Sundays. The closing hour itself is not a slot.
//!
//! Slots start every 30 minutes, so a weekday offers 9 + 12 = 21 slots and a
//! Sunday 9 + 8 = 17.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike, Weekday};

use crate::clock::Clock;

pub const MORNING_START_HOUR: u32 = 9;
pub const MORNING_END_HOUR: u32 = 13;
pub const AFTERNOON_START_HOUR: u32 = 14;
pub const AFTERNOON_END_HOUR: u32 = 20;
pub const SUNDAY_AFTERNOON_END_HOUR: u32 = 18;
pub const SLOT_STEP_MINUTES: u32 = 30;

/// A daily window of slot start times, in minutes after midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    pub first_slot: u32,
    pub last_slot: u32,
}

impl Session {
    fn slot_starts(self) -> impl Iterator<Item = u32> {
        (self.first_slot..=self.last_slot).step_by(SLOT_STEP_MINUTES as usize)
    }
}

/// Closing hour of the afternoon session on `date`.
pub fn afternoon_end_hour(date: NaiveDate) -> u32 {
    if date.weekday() == Weekday::Sun {
        SUNDAY_AFTERNOON_END_HOUR
    } else {
        AFTERNOON_END_HOUR
    }
}

/// Both sessions for `date`, morning first.
pub fn sessions_for(date: NaiveDate) -> [Session; 2] {
    [
        Session {
            first_slot: MORNING_START_HOUR * 60,
            last_slot: MORNING_END_HOUR * 60,
        },
        Session {
            first_slot: AFTERNOON_START_HOUR * 60,
            last_slot: afternoon_end_hour(date) * 60 - SLOT_STEP_MINUTES,
        },
    ]
}

/// Candidate slot times for `date`, in ascending order.
///
/// `now` must be `Some` only when `date` is today; every slot at or before
/// the current hour and minute is then left out entirely.
pub fn generate_slot_times(date: NaiveDate, now: Option<NaiveTime>) -> Vec<String> {
    let cutoff = now.map(|time| time.hour() * 60 + time.minute());

    sessions_for(date)
        .into_iter()
        .flat_map(Session::slot_starts)
        .filter(|start| cutoff.is_none_or(|cutoff| *start > cutoff))
        .map(|start| format!("{:02}:{:02}", start / 60, start % 60))
        .collect()
}

/// Candidate slot times for `date`, filtering past times when `date` is the
/// clock's current day.
pub fn slot_times_for(date: NaiveDate, clock: &dyn Clock) -> Vec<String> {
    let now = clock.now();
    let cutoff = (now.date() == date).then(|| now.time());
    generate_slot_times(date, cutoff)
}
