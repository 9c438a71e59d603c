//! # Backend API Client
//!
//! Thin wrapper over `reqwest` for the Hospico backend. Every call returns a
//! typed [`ApiError`] whose message is suitable for showing to a patient;
//! the backend remains the authority on bookings, this module only forwards.

use chrono::NaiveDate;
use eyre::WrapErr;
use hospico_core::{
    errors::BookingError,
    models::{
        appointment::{AppointmentRecord, AppointmentRequest},
        patient::UserProfile,
    },
};
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION},
    Client, RequestBuilder, StatusCode,
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, error};

use crate::config::ClientConfig;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Unauthorized - Please check your credentials")]
    Unauthorized,

    #[error("Forbidden - Access denied")]
    Forbidden,

    #[error("Not Found - Resource not found")]
    NotFound,

    #[error("Internal Server Error - Please try again later")]
    Server,

    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("Network Error - Please check your connection")]
    Network(#[source] reqwest::Error),

    #[error("Unexpected response from server: {0}")]
    Decode(#[source] serde_json::Error),
}

impl ApiError {
    /// Maps a non-success response to an error, preferring the server's own
    /// message for 400s and unlisted statuses.
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        match status {
            StatusCode::BAD_REQUEST => ApiError::BadRequest(
                server_message(body)
                    .unwrap_or_else(|| "Bad Request - Please check your input".to_string()),
            ),
            StatusCode::UNAUTHORIZED => ApiError::Unauthorized,
            StatusCode::FORBIDDEN => ApiError::Forbidden,
            StatusCode::NOT_FOUND => ApiError::NotFound,
            StatusCode::INTERNAL_SERVER_ERROR => ApiError::Server,
            _ => ApiError::Status {
                status: status.as_u16(),
                message: server_message(body).unwrap_or_else(|| "Server Error".to_string()),
            },
        }
    }
}

impl From<ApiError> for BookingError {
    fn from(err: ApiError) -> Self {
        BookingError::Remote(Box::new(err))
    }
}

/// Message carried by an error body: either the raw text, a JSON string, or
/// the `message` field of a JSON object.
fn server_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }

    match serde_json::from_str::<Value>(body) {
        Ok(Value::String(text)) => Some(text),
        Ok(Value::Object(fields)) => fields
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string),
        Ok(_) => None,
        Err(_) => Some(body.to_string()),
    }
}

/// HTTP client bound to one backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    config: ClientConfig,
}

impl ApiClient {
    /// Builds the underlying `reqwest` client with the configured timeout and
    /// bearer token.
    pub fn new(config: ClientConfig) -> eyre::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        if let Some(token) = &config.api_token {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token))
                .wrap_err("HOSPICO_API_TOKEN is not a valid header value")?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout())
            .build()
            .wrap_err("Failed to build HTTP client")?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub async fn get_json<T>(&self, path: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let url = self.config.endpoint(path);
        debug!("GET {}", url);
        self.send(self.client.get(&url)).await
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.config.endpoint(path);
        debug!("POST {}", url);
        self.send(self.client.post(&url).json(body)).await
    }

    /// Sends a DELETE; the response body is not inspected on success.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let url = self.config.endpoint(path);
        debug!("DELETE {}", url);
        self.send_text(self.client.delete(&url)).await.map(drop)
    }

    async fn send<T>(&self, request: RequestBuilder) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let body = self.send_text(request).await?;
        serde_json::from_str(&body).map_err(ApiError::Decode)
    }

    async fn send_text(&self, request: RequestBuilder) -> Result<String, ApiError> {
        let response = request.send().await.map_err(ApiError::Network)?;
        let status = response.status();
        let body = response.text().await.map_err(ApiError::Network)?;

        if !status.is_success() {
            error!("API error ({}): {}", status, body);
            return Err(ApiError::from_status(status, &body));
        }

        Ok(body)
    }

    /// Every appointment the backend holds for `doctor_id` on `date`.
    pub async fn appointments_for(
        &self,
        doctor_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<AppointmentRecord>, ApiError> {
        let path = format!(
            "/api/appointments/doctor/{}/date/{}",
            urlencoding::encode(doctor_id),
            date.format("%Y-%m-%d")
        );
        self.get_json(&path).await
    }

    pub async fn book_appointment(
        &self,
        request: &AppointmentRequest,
    ) -> Result<AppointmentRecord, ApiError> {
        self.post_json("/api/appointments", request).await
    }

    pub async fn appointments_of_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<AppointmentRecord>, ApiError> {
        let path = format!("/api/appointments/user/{}", urlencoding::encode(user_id));
        self.get_json(&path).await
    }

    pub async fn cancel_appointment(&self, appointment_id: &str) -> Result<(), ApiError> {
        let path = format!("/api/appointments/{}", urlencoding::encode(appointment_id));
        self.delete(&path).await
    }

    /// Profile of the user the bearer token belongs to.
    pub async fn current_user(&self) -> Result<UserProfile, ApiError> {
        self.get_json("/api/users/me").await
    }
}
