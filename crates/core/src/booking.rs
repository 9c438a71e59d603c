use chrono::NaiveDate;

use crate::{
    errors::{BookingError, BookingResult},
    models::{appointment::AppointmentRequest, patient::PatientDetails, time_slot::TimeSlot},
};

pub const MIN_PATIENT_AGE: u32 = 1;
pub const MAX_PATIENT_AGE: u32 = 120;

/// State of the booking form at submit time.
#[derive(Debug, Clone, Default)]
pub struct BookingForm {
    /// Signed-in user, if any. Guests book without one.
    pub user_id: Option<String>,
    pub clinic_id: String,
    pub doctor_id: String,
    pub date: Option<NaiveDate>,
    pub slot: Option<String>,
    pub reason: String,
    pub patient: PatientDetails,
}

impl BookingForm {
    /// Checks the form against the slot list currently on screen and builds
    /// the request body.
    ///
    /// # Errors
    ///
    /// * `BookingError::Validation` - a required field is blank or the age is out of range
    /// * `BookingError::UnknownSlot` - the chosen time is not in `slots`
    /// * `BookingError::SlotUnavailable` - the chosen time is already booked
    pub fn validate(&self, slots: &[TimeSlot]) -> BookingResult<AppointmentRequest> {
        let (Some(date), Some(slot)) = (self.date, self.slot.as_deref()) else {
            return Err(missing_fields());
        };

        let required = [
            self.clinic_id.as_str(),
            self.doctor_id.as_str(),
            slot,
            self.patient.name.as_str(),
            self.patient.age.as_str(),
            self.patient.gender.as_str(),
            self.reason.as_str(),
        ];
        if required.iter().any(|value| value.trim().is_empty()) {
            return Err(missing_fields());
        }

        let patient_age = self
            .patient
            .age
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|age| (MIN_PATIENT_AGE..=MAX_PATIENT_AGE).contains(age))
            .ok_or_else(|| {
                BookingError::Validation(format!(
                    "Patient age must be a whole number between {MIN_PATIENT_AGE} and {MAX_PATIENT_AGE}"
                ))
            })?;

        match slots.iter().find(|candidate| candidate.time == slot) {
            None => return Err(BookingError::UnknownSlot(slot.to_string())),
            Some(found) if found.is_booked => {
                return Err(BookingError::SlotUnavailable(slot.to_string()));
            }
            Some(_) => {}
        }

        Ok(AppointmentRequest {
            user_id: self.user_id.clone().filter(|id| !id.is_empty()),
            clinic_id: self.clinic_id.clone(),
            doctor_id: self.doctor_id.clone(),
            appointment_time: appointment_time(date, slot),
            patient_name: self.patient.name.trim().to_string(),
            patient_age,
            patient_gender: self.patient.gender.clone(),
            patient_phone: self.patient.phone.clone(),
            patient_email: self.patient.email.clone(),
            reason: self.reason.trim().to_string(),
        })
    }
}

/// Local date-time string the backend expects, e.g. "2025-01-06T09:30:00".
pub fn appointment_time(date: NaiveDate, slot: &str) -> String {
    format!("{}T{}:00", date.format("%Y-%m-%d"), slot)
}

fn missing_fields() -> BookingError {
    BookingError::Validation("Please fill in all required fields".to_string())
}
