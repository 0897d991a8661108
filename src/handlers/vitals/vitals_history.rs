use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::db::vitals::fetch_vitals_history;
use crate::middleware::auth::Claims;
use crate::models::vitals::VitalsHistoryQuery;

#[tracing::instrument(
    name = "Get vitals history",
    skip(pool, claims, query),
    fields(
        username = %claims.username
    )
)]
pub async fn get_vitals_history(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    query: web::Query<VitalsHistoryQuery>,
) -> HttpResponse {
    let user_id = match claims.user_id() {
        Some(id) => id,
        None => return HttpResponse::BadRequest().finish(),
    };

    match fetch_vitals_history(&pool, user_id, query.start, query.end).await {
        Ok(vitals) => HttpResponse::Ok().json(vitals),
        Err(e) => {
            tracing::error!("Database error: {}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}
