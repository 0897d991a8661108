use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::alerts::insert_alert;
use crate::models::alert::Alert;
use crate::models::vitals::{RecordVitalRequest, Vital};
use crate::vitals::generator::TriggeredAlert;

pub async fn fetch_latest_vital(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Option<Vital>, sqlx::Error> {
    sqlx::query_as::<_, Vital>(
        r#"
        SELECT id, user_id, heart_rate, spo2, ppg_status, fall_status, recorded_at, created_at
        FROM vitals
        WHERE user_id = $1
        ORDER BY recorded_at DESC
        LIMIT 1
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

/// History ascending by recorded_at, optionally bounded by an inclusive range.
pub async fn fetch_vitals_history(
    pool: &PgPool,
    user_id: Uuid,
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
) -> Result<Vec<Vital>, sqlx::Error> {
    sqlx::query_as::<_, Vital>(
        r#"
        SELECT id, user_id, heart_rate, spo2, ppg_status, fall_status, recorded_at, created_at
        FROM vitals
        WHERE user_id = $1
          AND ($2::timestamptz IS NULL OR recorded_at >= $2)
          AND ($3::timestamptz IS NULL OR recorded_at <= $3)
        ORDER BY recorded_at ASC
        "#,
    )
    .bind(user_id)
    .bind(start)
    .bind(end)
    .fetch_all(pool)
    .await
}

/// Persist a reading together with the alerts the generator raised for it.
/// Runs in a single transaction so a failure partway leaves no orphaned
/// reading behind.
pub async fn record_vital_with_alerts(
    pool: &PgPool,
    user_id: Uuid,
    reading: &RecordVitalRequest,
    triggered: &[TriggeredAlert],
) -> Result<(Vital, Vec<Alert>), sqlx::Error> {
    let mut tx = pool.begin().await?;

    let vital = sqlx::query_as::<_, Vital>(
        r#"
        INSERT INTO vitals (user_id, heart_rate, spo2, ppg_status, fall_status, recorded_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, user_id, heart_rate, spo2, ppg_status, fall_status, recorded_at, created_at
        "#,
    )
    .bind(user_id)
    .bind(reading.heart_rate)
    .bind(reading.spo2)
    .bind(reading.ppg_status)
    .bind(reading.fall_status)
    .bind(reading.recorded_at)
    .fetch_one(&mut *tx)
    .await?;

    let mut alerts = Vec::with_capacity(triggered.len());
    for trigger in triggered {
        let alert = insert_alert(
            &mut tx,
            user_id,
            trigger.alert_type,
            Some(reading.heart_rate),
            Some(reading.spo2),
            &trigger.details,
        )
        .await?;
        alerts.push(alert);
    }

    tx.commit().await?;
    Ok((vital, alerts))
}
