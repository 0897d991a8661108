use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::db::alerts::{count_active_alerts, list_alerts};
use crate::middleware::auth::Claims;
use crate::models::alert::AlertListResponse;

#[tracing::instrument(
    name = "List alerts",
    skip(pool, claims),
    fields(
        username = %claims.username
    )
)]
pub async fn get_alerts(pool: web::Data<PgPool>, claims: web::ReqData<Claims>) -> HttpResponse {
    let user_id = match claims.user_id() {
        Some(id) => id,
        None => return HttpResponse::BadRequest().finish(),
    };

    let alerts = match list_alerts(&pool, user_id).await {
        Ok(alerts) => alerts,
        Err(e) => {
            tracing::error!("Database error: {}", e);
            return HttpResponse::InternalServerError().finish();
        }
    };

    let active_count = match count_active_alerts(&pool, user_id).await {
        Ok(count) => count,
        Err(e) => {
            tracing::error!("Database error: {}", e);
            return HttpResponse::InternalServerError().finish();
        }
    };

    HttpResponse::Ok().json(AlertListResponse {
        alerts,
        active_count,
    })
}
