use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::alerts;
use crate::middleware::auth::Claims;
use crate::models::common::ApiResponse;

#[tracing::instrument(
    name = "Resolve alert",
    skip(pool, claims),
    fields(
        username = %claims.username,
        alert_id = %alert_id
    )
)]
pub async fn resolve_alert(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    alert_id: web::Path<Uuid>,
) -> HttpResponse {
    let user_id = match claims.user_id() {
        Some(id) => id,
        None => return HttpResponse::BadRequest().finish(),
    };

    match alerts::resolve_alert(&pool, user_id, *alert_id).await {
        Ok(Some(alert)) => HttpResponse::Ok().json(ApiResponse::success(
            "The alert has been marked as resolved.",
            alert,
        )),
        Ok(None) => HttpResponse::NotFound().json(ApiResponse::<()>::error("Alert not found")),
        Err(e) => {
            tracing::error!("Failed to resolve alert: {:?}", e);
            HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to resolve alert"))
        }
    }
}
