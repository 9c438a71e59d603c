use hospico_core::{
    booking::BookingForm,
    errors::BookingResult,
    models::{
        appointment::AppointmentRecord,
        patient::{PatientDetails, UserProfile},
        time_slot::TimeSlot,
    },
};
use tracing::{debug, info};

use crate::api::{ApiClient, ApiError};

/// Submits bookings and prefills patient details for the signed-in user.
#[derive(Debug, Clone)]
pub struct BookingService {
    api: ApiClient,
}

impl BookingService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn current_user(&self) -> Result<UserProfile, ApiError> {
        self.api.current_user().await
    }

    /// Patient details taken from the caller's own profile.
    pub async fn my_details(&self) -> Result<PatientDetails, ApiError> {
        let profile = self.current_user().await?;
        Ok(PatientDetails::from_profile(&profile))
    }

    pub async fn appointments_of(&self, user_id: &str) -> Result<Vec<AppointmentRecord>, ApiError> {
        let records = self.api.appointments_of_user(user_id).await?;
        debug!("User {} has {} appointment(s)", user_id, records.len());
        Ok(records)
    }

    pub async fn cancel(&self, appointment_id: &str) -> Result<(), ApiError> {
        self.api.cancel_appointment(appointment_id).await?;
        info!("Appointment {} cancelled", appointment_id);
        Ok(())
    }

    /// Validates `form` against the slot list on screen, then books it.
    ///
    /// Local validation failures never reach the backend. The backend still
    /// has the final say: a slot taken in the meantime comes back as a
    /// `BookingError::Remote` carrying its message.
    pub async fn submit(
        &self,
        form: &BookingForm,
        slots: &[TimeSlot],
    ) -> BookingResult<AppointmentRecord> {
        let request = form.validate(slots)?;
        info!(
            "Booking doctor {} at clinic {} for {}",
            request.doctor_id, request.clinic_id, request.appointment_time
        );

        let record = self.api.book_appointment(&request).await?;
        info!(
            "Appointment {} booked with status {}",
            record.id.as_deref().unwrap_or("<unknown>"),
            record.status
        );
        Ok(record)
    }
}
