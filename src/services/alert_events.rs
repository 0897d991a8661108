use actix_web::web;
use chrono::Utc;
use redis::AsyncCommands;
use uuid::Uuid;

use crate::models::alert::Alert;

/// Publish a created alert on the owner's event channel so connected clients
/// can surface it immediately. Redis being absent or down is not an error for
/// the caller: the alert is already persisted and the event is best-effort.
pub async fn publish_alert_created(
    redis: Option<web::Data<redis::Client>>,
    user_id: Uuid,
    alert: &Alert,
) -> Result<(), redis::RedisError> {
    let redis_client = match redis {
        Some(client) => client,
        None => {
            tracing::info!("Redis not available - skipping alert event publication");
            return Ok(());
        }
    };

    let mut conn = redis_client.get_async_connection().await?;

    let event = serde_json::json!({
        "event_type": "alert_created",
        "user_id": user_id.to_string(),
        "alert_id": alert.id.to_string(),
        "alert_type": alert.alert_type,
        "details": alert.details,
        "timestamp": Utc::now().to_rfc3339()
    });

    let channel = format!("lifepulse:events:user:{}", user_id);
    conn.publish::<_, String, String>(&channel, event.to_string())
        .await?;

    Ok(())
}

/// Publish a recorded-reading event on the owner's channel.
pub async fn publish_vital_recorded(
    redis: Option<web::Data<redis::Client>>,
    user_id: Uuid,
    vital_id: Uuid,
) -> Result<(), redis::RedisError> {
    let redis_client = match redis {
        Some(client) => client,
        None => {
            tracing::info!("Redis not available - skipping vital event publication");
            return Ok(());
        }
    };

    let mut conn = redis_client.get_async_connection().await?;

    let event = serde_json::json!({
        "event_type": "vital_recorded",
        "user_id": user_id.to_string(),
        "vital_id": vital_id.to_string(),
        "timestamp": Utc::now().to_rfc3339()
    });

    let channel = format!("lifepulse:events:user:{}", user_id);
    conn.publish::<_, String, String>(&channel, event.to_string())
        .await?;

    Ok(())
}
