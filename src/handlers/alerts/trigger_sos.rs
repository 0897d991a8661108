use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::db::alerts::insert_alert;
use crate::db::vitals::fetch_latest_vital;
use crate::middleware::auth::Claims;
use crate::models::alert::AlertType;
use crate::models::common::ApiResponse;
use crate::services::alert_events::publish_alert_created;
use crate::vitals::generator::{sos_payload, SOS_DETAILS};

/// User-initiated emergency. Always creates exactly one sos alert, carrying
/// the most recent reading's values, or null when nothing was ever recorded.
/// Threshold checks are bypassed.
#[tracing::instrument(
    name = "Trigger SOS",
    skip(pool, redis, claims),
    fields(
        username = %claims.username
    )
)]
pub async fn trigger_sos(
    pool: web::Data<PgPool>,
    redis: Option<web::Data<redis::Client>>,
    claims: web::ReqData<Claims>,
) -> HttpResponse {
    let user_id = match claims.user_id() {
        Some(id) => id,
        None => return HttpResponse::BadRequest().finish(),
    };

    let latest = match fetch_latest_vital(&pool, user_id).await {
        Ok(latest) => latest,
        Err(e) => {
            tracing::error!("Failed to fetch latest vitals for SOS: {:?}", e);
            return HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to send SOS alert"));
        }
    };
    let (heart_rate, spo2) = sos_payload(latest.as_ref());

    let mut tx = match pool.begin().await {
        Ok(tx) => tx,
        Err(e) => {
            tracing::error!("Failed to begin transaction: {:?}", e);
            return HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to send SOS alert"));
        }
    };
    let alert = match insert_alert(&mut tx, user_id, AlertType::Sos, heart_rate, spo2, SOS_DETAILS)
        .await
    {
        Ok(alert) => alert,
        Err(e) => {
            tracing::error!("Failed to insert SOS alert: {:?}", e);
            return HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to send SOS alert"));
        }
    };
    if let Err(e) = tx.commit().await {
        tracing::error!("Failed to commit SOS alert: {:?}", e);
        return HttpResponse::InternalServerError()
            .json(ApiResponse::<()>::error("Failed to send SOS alert"));
    }

    if let Err(e) = publish_alert_created(redis, user_id, &alert).await {
        tracing::error!("Failed to publish SOS alert event: {}", e);
    }

    HttpResponse::Ok().json(ApiResponse::success(
        "SOS alert sent. Emergency contacts have been notified.",
        alert,
    ))
}
