use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::models::alert::{Alert, AlertStatus, AlertType};

pub async fn insert_alert(
    tx: &mut Transaction<'_, Postgres>,
    user_id: Uuid,
    alert_type: AlertType,
    heart_rate: Option<i32>,
    spo2: Option<i32>,
    details: &str,
) -> Result<Alert, sqlx::Error> {
    sqlx::query_as::<_, Alert>(
        r#"
        INSERT INTO alerts (user_id, alert_type, status, heart_rate, spo2, details)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(alert_type)
    .bind(AlertStatus::Active)
    .bind(heart_rate)
    .bind(spo2)
    .bind(details)
    .fetch_one(&mut **tx)
    .await
}

pub async fn list_alerts(pool: &PgPool, user_id: Uuid) -> Result<Vec<Alert>, sqlx::Error> {
    sqlx::query_as::<_, Alert>(
        r#"
        SELECT * FROM alerts
        WHERE user_id = $1
        ORDER BY created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

pub async fn count_active_alerts(pool: &PgPool, user_id: Uuid) -> Result<i64, sqlx::Error> {
    let count: (i64,) = sqlx::query_as(
        r#"
        SELECT COUNT(*) FROM alerts
        WHERE user_id = $1 AND status = 'active'
        "#,
    )
    .bind(user_id)
    .fetch_one(pool)
    .await?;
    Ok(count.0)
}

pub async fn fetch_alert(
    pool: &PgPool,
    user_id: Uuid,
    alert_id: Uuid,
) -> Result<Option<Alert>, sqlx::Error> {
    sqlx::query_as::<_, Alert>(
        r#"
        SELECT * FROM alerts
        WHERE id = $1 AND user_id = $2
        "#,
    )
    .bind(alert_id)
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

/// Flip an active alert to resolved, stamping resolved_at. The update is
/// guarded on the current status: resolving an already-resolved alert is a
/// no-op that returns the stored row unchanged, so resolved_at is never
/// re-stamped. Returns None when the alert does not exist for this user.
pub async fn resolve_alert(
    pool: &PgPool,
    user_id: Uuid,
    alert_id: Uuid,
) -> Result<Option<Alert>, sqlx::Error> {
    let updated = sqlx::query_as::<_, Alert>(
        r#"
        UPDATE alerts
        SET status = 'resolved', resolved_at = NOW()
        WHERE id = $1 AND user_id = $2 AND status = 'active'
        RETURNING *
        "#,
    )
    .bind(alert_id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    if updated.is_some() {
        return Ok(updated);
    }

    fetch_alert(pool, user_id, alert_id).await
}
