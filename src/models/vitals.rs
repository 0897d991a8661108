use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::alert::Alert;

/// Rhythm classification reported by the PPG sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "varchar", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum PpgStatus {
    Normal,
    Bradycardia,
    Tachycardia,
    Arrhythmia,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "varchar", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum FallStatus {
    Safe,
    FallDetected,
}

/// A single recorded reading from the health band. Append-only: rows are never
/// updated or deleted once written.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Vital {
    pub id: Uuid,
    pub user_id: Uuid,
    pub heart_rate: i32,
    pub spo2: i32,
    pub ppg_status: PpgStatus,
    pub fall_status: FallStatus,
    pub recorded_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecordVitalRequest {
    pub heart_rate: i32,
    pub spo2: i32,
    pub ppg_status: PpgStatus,
    pub fall_status: FallStatus,
    pub recorded_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct RecordVitalResponse {
    pub vital: Vital,
    pub alerts: Vec<Alert>,
}

#[derive(Debug, Deserialize)]
pub struct VitalsHistoryQuery {
    #[serde(default)]
    pub start: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end: Option<DateTime<Utc>>,
}
