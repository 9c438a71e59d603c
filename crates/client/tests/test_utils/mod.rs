#![allow(dead_code)]

use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};
use hospico_client::{api::ApiClient, config::ClientConfig};
use hospico_core::{availability::BookedTimes, clock::FixedClock};
use serde_json::{json, Value};
use tracing::Level;
use wiremock::MockServer;

pub const TEST_TOKEN: &str = "test-jwt-token";

pub fn test_config(base_url: &str) -> ClientConfig {
    ClientConfig {
        api_base_url: base_url.to_string(),
        api_token: Some(TEST_TOKEN.to_string()),
        request_timeout_secs: 5,
        log_level: Level::DEBUG,
    }
}

pub fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(test_config(&server.uri())).expect("Failed to build API client")
}

pub fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 6).unwrap()
}

pub fn tuesday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 7).unwrap()
}

pub fn sunday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 5).unwrap()
}

/// Clock set before every test date, so no slot is filtered as past.
pub fn clock() -> Arc<FixedClock> {
    let now = NaiveDate::from_ymd_opt(2025, 1, 1)
        .unwrap()
        .and_time(NaiveTime::from_hms_opt(10, 0, 0).unwrap());
    Arc::new(FixedClock(now))
}

pub fn booked(times: &[&str]) -> BookedTimes {
    times.iter().map(|time| time.to_string()).collect()
}

/// Appointment JSON as the backend returns it.
pub fn appointment_json(date: NaiveDate, time: &str, status: &str) -> Value {
    json!({
        "id": format!("apt-{}", time),
        "clinicId": "clinic-1",
        "clinicName": "",
        "doctorId": "D1",
        "doctorName": "",
        "doctorSpecialization": "",
        "userId": null,
        "userName": "",
        "appointmentTime": format!("{}T{}", date.format("%Y-%m-%d"), time),
        "status": status,
        "patientName": "Asha",
        "patientAge": 34,
        "patientGender": "Female",
        "patientEmail": "asha@example.com",
        "patientPhone": "9999999999",
        "reason": "Checkup"
    })
}
