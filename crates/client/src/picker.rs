//! # Slot Picker
//!
//! Holds the slot list for the doctor and date currently selected in the
//! booking form and keeps it consistent while lookups are in flight.
//!
//! Each selection takes a ticket from a generation counter. A lookup only
//! commits its result if its ticket is still the newest one, so a slow
//! response for a selection the user has already moved away from is
//! dropped instead of overwriting the list for the newer selection.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::NaiveDate;
use hospico_core::{
    availability::merge,
    clock::Clock,
    errors::{BookingError, BookingResult},
    models::time_slot::TimeSlot,
    schedule::slot_times_for,
};
use tracing::{debug, info, warn};

use crate::resolver::{resolve_or_empty, BookedTimeResolver};

/// Doctor and date whose slots are shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub doctor_id: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// The computed slots are now the picker's slot list
    Committed(Vec<TimeSlot>),
    /// A newer selection was made while booked times were being fetched
    Superseded,
}

#[derive(Debug, Default)]
struct PickerState {
    generation: u64,
    selection: Option<Selection>,
    slots: Vec<TimeSlot>,
    selected_slot: Option<String>,
}

/// Computes the slot list for one doctor and date without touching any
/// picker state.
///
/// Never fails: an unreachable backend yields a list with every slot free.
pub async fn calculate_availability(
    resolver: &dyn BookedTimeResolver,
    clock: &dyn Clock,
    doctor_id: &str,
    date: NaiveDate,
) -> Vec<TimeSlot> {
    let booked = resolve_or_empty(resolver, doctor_id, date).await;
    let times = slot_times_for(date, clock);
    merge(&times, &booked)
}

pub struct SlotPicker {
    resolver: Arc<dyn BookedTimeResolver>,
    clock: Arc<dyn Clock>,
    state: Mutex<PickerState>,
}

impl SlotPicker {
    pub fn new(resolver: Arc<dyn BookedTimeResolver>, clock: Arc<dyn Clock>) -> Self {
        Self {
            resolver,
            clock,
            state: Mutex::new(PickerState::default()),
        }
    }

    // Never held across an await. Every update leaves the state consistent,
    // so poisoning is ignored.
    fn state(&self) -> MutexGuard<'_, PickerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Switches to `doctor_id` on `date` and recomputes the slot list.
    ///
    /// The previously chosen slot is cleared straight away. The state lock is
    /// released while booked times are fetched, so newer calls may overtake
    /// this one; in that case this call returns `Superseded` and leaves the
    /// newer state alone.
    pub async fn select(&self, doctor_id: &str, date: NaiveDate) -> SelectionOutcome {
        let ticket = {
            let mut state = self.state();
            state.generation += 1;
            state.selection = Some(Selection {
                doctor_id: doctor_id.to_string(),
                date,
            });
            state.slots.clear();
            state.selected_slot = None;
            state.generation
        };
        debug!("Selection {} for doctor {} on {}", ticket, doctor_id, date);

        let slots =
            calculate_availability(self.resolver.as_ref(), self.clock.as_ref(), doctor_id, date)
                .await;

        let mut state = self.state();
        if state.generation != ticket {
            warn!(
                "Discarding slots for doctor {} on {}: selection {} superseded by {}",
                doctor_id, date, ticket, state.generation
            );
            return SelectionOutcome::Superseded;
        }

        state.slots = slots.clone();
        info!(
            "Doctor {} on {}: {} slot(s), {} booked",
            doctor_id,
            date,
            slots.len(),
            slots.iter().filter(|slot| slot.is_booked).count()
        );
        SelectionOutcome::Committed(slots)
    }

    /// Drops the current selection, e.g. when the doctor or date field is
    /// emptied. Any lookup still in flight is superseded.
    pub fn clear(&self) {
        let mut state = self.state();
        state.generation += 1;
        state.selection = None;
        state.slots.clear();
        state.selected_slot = None;
    }

    /// Chooses `time` from the current slot list.
    ///
    /// # Errors
    ///
    /// * `BookingError::UnknownSlot` - `time` is not in the list
    /// * `BookingError::SlotUnavailable` - `time` is booked; any earlier choice is cleared too
    pub fn choose_slot(&self, time: &str) -> BookingResult<()> {
        let mut state = self.state();
        let is_booked = state
            .slots
            .iter()
            .find(|slot| slot.time == time)
            .map(|slot| slot.is_booked);

        match is_booked {
            None => Err(BookingError::UnknownSlot(time.to_string())),
            Some(true) => {
                warn!("Attempted to choose already booked slot {}", time);
                state.selected_slot = None;
                Err(BookingError::SlotUnavailable(time.to_string()))
            }
            Some(false) => {
                state.selected_slot = Some(time.to_string());
                Ok(())
            }
        }
    }

    pub fn slots(&self) -> Vec<TimeSlot> {
        self.state().slots.clone()
    }

    pub fn selected_slot(&self) -> Option<String> {
        self.state().selected_slot.clone()
    }

    pub fn selection(&self) -> Option<Selection> {
        self.state().selection.clone()
    }
}
