use serde::{Deserialize, Serialize};

/// A bookable half-hour for one doctor on one date.
///
/// Created fresh on every availability computation and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    /// Zero-padded "HH:MM"
    pub time: String,
    pub is_booked: bool,
}

impl TimeSlot {
    pub fn free(time: impl Into<String>) -> Self {
        Self {
            time: time.into(),
            is_booked: false,
        }
    }

    pub fn booked(time: impl Into<String>) -> Self {
        Self {
            time: time.into(),
            is_booked: true,
        }
    }
}
