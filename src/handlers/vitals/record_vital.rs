use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::vitals::record_vital_with_alerts;
use crate::middleware::auth::Claims;
use crate::models::common::ApiResponse;
use crate::models::vitals::{RecordVitalRequest, RecordVitalResponse};
use crate::services::alert_events::{publish_alert_created, publish_vital_recorded};
use crate::vitals::generator::evaluate_reading;

#[tracing::instrument(
    name = "Record vital reading",
    skip(data, pool, redis, claims),
    fields(
        username = %claims.username
    )
)]
pub async fn record_vital(
    data: web::Json<RecordVitalRequest>,
    pool: web::Data<PgPool>,
    redis: Option<web::Data<redis::Client>>,
    claims: web::ReqData<Claims>,
) -> HttpResponse {
    let user_id = match claims.user_id() {
        Some(id) => id,
        None => return HttpResponse::BadRequest().finish(),
    };

    persist_reading(&pool, redis, user_id, data.into_inner()).await
}

/// Shared insert path for real and simulated readings: evaluate the
/// abnormality predicates, persist the reading and its alerts in one
/// transaction, then publish events for each.
pub(super) async fn persist_reading(
    pool: &PgPool,
    redis: Option<web::Data<redis::Client>>,
    user_id: Uuid,
    reading: RecordVitalRequest,
) -> HttpResponse {
    let triggered = evaluate_reading(&reading);

    let (vital, alerts) = match record_vital_with_alerts(pool, user_id, &reading, &triggered).await
    {
        Ok(recorded) => recorded,
        Err(e) => {
            tracing::error!("Failed to record vital reading: {:?}", e);
            return HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to record vital reading"));
        }
    };

    if let Err(e) = publish_vital_recorded(redis.clone(), user_id, vital.id).await {
        tracing::error!("Failed to publish vital event: {}", e);
    }
    for alert in &alerts {
        tracing::warn!(alert_type = %alert.alert_type, "Alert raised: {}", alert.details);
        if let Err(e) = publish_alert_created(redis.clone(), user_id, alert).await {
            tracing::error!("Failed to publish alert event: {}", e);
        }
    }

    HttpResponse::Ok().json(ApiResponse::success(
        "Vital reading recorded",
        RecordVitalResponse { vital, alerts },
    ))
}
