use serde::{Deserialize, Serialize};

/// Profile of the signed-in user, as served by `GET /api/users/me`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub gender: Option<String>,
}

/// Patient fields of the booking form.
///
/// Age is kept as entered so validation can report a bad value instead of
/// losing it at parse time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatientDetails {
    pub name: String,
    pub age: String,
    pub gender: String,
    pub phone: String,
    pub email: String,
}

impl PatientDetails {
    /// Prefill for "booking for myself".
    ///
    /// Falls back to the local part of the email address when the profile
    /// carries no name.
    pub fn from_profile(profile: &UserProfile) -> Self {
        let email = profile.email.clone().unwrap_or_default();
        let name = match profile.name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => email.split('@').next().unwrap_or_default().to_string(),
        };

        Self {
            name,
            age: profile.age.map(|age| age.to_string()).unwrap_or_default(),
            gender: profile.gender.clone().unwrap_or_default(),
            phone: profile.phone.clone().unwrap_or_default(),
            email,
        }
    }
}
