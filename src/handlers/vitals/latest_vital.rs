use actix_web::{web, HttpResponse};
use serde::Serialize;
use sqlx::PgPool;

use crate::db::vitals::fetch_latest_vital;
use crate::middleware::auth::Claims;
use crate::models::common::ApiResponse;
use crate::models::vitals::Vital;
use crate::vitals::classifier::{
    fall_severity, heart_rate_label, heart_rate_severity, ppg_severity, spo2_label, spo2_severity,
    Severity,
};

#[derive(Debug, Serialize)]
struct LatestVitalsResponse {
    vital: Vital,
    heart_rate_severity: Severity,
    heart_rate_label: &'static str,
    spo2_severity: Severity,
    spo2_label: &'static str,
    ppg_severity: Severity,
    fall_severity: Severity,
}

impl From<Vital> for LatestVitalsResponse {
    fn from(vital: Vital) -> Self {
        Self {
            heart_rate_severity: heart_rate_severity(vital.heart_rate),
            heart_rate_label: heart_rate_label(vital.heart_rate),
            spo2_severity: spo2_severity(vital.spo2),
            spo2_label: spo2_label(vital.spo2),
            ppg_severity: ppg_severity(vital.ppg_status),
            fall_severity: fall_severity(vital.fall_status),
            vital,
        }
    }
}

#[tracing::instrument(
    name = "Get latest vitals",
    skip(pool, claims),
    fields(
        username = %claims.username
    )
)]
pub async fn get_latest_vital(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> HttpResponse {
    let user_id = match claims.user_id() {
        Some(id) => id,
        None => return HttpResponse::BadRequest().finish(),
    };

    match fetch_latest_vital(&pool, user_id).await {
        Ok(Some(vital)) => HttpResponse::Ok().json(ApiResponse::success(
            "Latest vitals",
            LatestVitalsResponse::from(vital),
        )),
        Ok(None) => {
            HttpResponse::Ok().json(ApiResponse::<LatestVitalsResponse>::success_message(
                "No vitals recorded yet",
            ))
        }
        Err(e) => {
            tracing::error!("Database error: {}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}
