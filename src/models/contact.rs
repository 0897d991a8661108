use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EmergencyContact {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub relationship: String,
    pub phone_number: String,
    pub notify_sms: bool,
    pub notify_call: bool,
    pub notify_app: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct NewContactRequest {
    pub name: String,
    pub relationship: String,
    pub phone_number: String,
    #[serde(default)]
    pub notify_sms: bool,
    #[serde(default)]
    pub notify_call: bool,
    #[serde(default)]
    pub notify_app: bool,
}

/// Partial update: absent fields keep their stored values.
#[derive(Debug, Deserialize)]
pub struct UpdateContactRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub relationship: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub notify_sms: Option<bool>,
    #[serde(default)]
    pub notify_call: Option<bool>,
    #[serde(default)]
    pub notify_app: Option<bool>,
}
