use serde::{Deserialize, Serialize};

/// Appointment as returned by the backend's appointment endpoints.
///
/// Only `appointment_time` and `status` matter for availability. The backend
/// leaves the joined display fields empty or absent depending on the
/// endpoint, so everything else is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub clinic_id: Option<String>,
    #[serde(default)]
    pub clinic_name: Option<String>,
    #[serde(default)]
    pub doctor_id: Option<String>,
    #[serde(default)]
    pub doctor_name: Option<String>,
    #[serde(default)]
    pub doctor_specialization: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub user_name: Option<String>,
    /// ISO-8601 local date-time, e.g. "2025-01-06T09:00" or "2025-01-06T09:00:00"
    #[serde(default)]
    pub appointment_time: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub patient_name: Option<String>,
    #[serde(default)]
    pub patient_age: Option<u32>,
    #[serde(default)]
    pub patient_gender: Option<String>,
    #[serde(default)]
    pub patient_email: Option<String>,
    #[serde(default)]
    pub patient_phone: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
}

/// Body of `POST /api/appointments`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentRequest {
    pub user_id: Option<String>,
    pub clinic_id: String,
    pub doctor_id: String,
    /// "YYYY-MM-DDTHH:MM:00"
    pub appointment_time: String,
    pub patient_name: String,
    pub patient_age: u32,
    pub patient_gender: String,
    pub patient_phone: String,
    pub patient_email: String,
    pub reason: String,
}
