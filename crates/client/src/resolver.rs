//! # Booked-Time Resolver
//!
//! Fetches the times already taken for a doctor on a date. Errors are
//! returned as-is; [`resolve_or_empty`] applies the fail-open policy where a
//! failed lookup shows the whole day as free rather than blocking booking.

use async_trait::async_trait;
use chrono::NaiveDate;
use hospico_core::availability::{booked_times, BookedTimes};
use mockall::automock;
use tracing::{debug, error};

use crate::api::{ApiClient, ApiError};

#[automock]
#[async_trait]
pub trait BookedTimeResolver: Send + Sync {
    async fn resolve(&self, doctor_id: &str, date: NaiveDate) -> Result<BookedTimes, ApiError>;
}

/// Resolver backed by the appointment endpoint of the backend.
#[derive(Debug, Clone)]
pub struct HttpBookedTimeResolver {
    api: ApiClient,
}

impl HttpBookedTimeResolver {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl BookedTimeResolver for HttpBookedTimeResolver {
    async fn resolve(&self, doctor_id: &str, date: NaiveDate) -> Result<BookedTimes, ApiError> {
        debug!("Fetching booked appointments for doctor {} on {}", doctor_id, date);

        let appointments = self.api.appointments_for(doctor_id, date).await?;
        let booked = booked_times(&appointments);

        debug!(
            "Doctor {} has {} appointment(s) on {}, {} booked",
            doctor_id,
            appointments.len(),
            date,
            booked.len()
        );
        Ok(booked)
    }
}

/// Resolves booked times, treating any failure as "nothing booked".
pub async fn resolve_or_empty(
    resolver: &dyn BookedTimeResolver,
    doctor_id: &str,
    date: NaiveDate,
) -> BookedTimes {
    match resolver.resolve(doctor_id, date).await {
        Ok(booked) => booked,
        Err(e) => {
            error!(
                "Failed to fetch booked appointments for doctor {} on {}, showing all slots as free: {}",
                doctor_id, date, e
            );
            BookedTimes::new()
        }
    }
}
