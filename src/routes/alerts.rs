use actix_web::{get, post, web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::handlers::alerts::list_alerts::get_alerts;
use crate::handlers::alerts::resolve_alert::resolve_alert;
use crate::handlers::alerts::trigger_sos::trigger_sos;
use crate::middleware::auth::Claims;

#[get("")]
async fn list(pool: web::Data<PgPool>, claims: web::ReqData<Claims>) -> HttpResponse {
    get_alerts(pool, claims).await
}

#[post("/sos")]
async fn sos(
    pool: web::Data<PgPool>,
    redis: Option<web::Data<redis::Client>>,
    claims: web::ReqData<Claims>,
) -> HttpResponse {
    trigger_sos(pool, redis, claims).await
}

#[post("/{alert_id}/resolve")]
async fn resolve(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    alert_id: web::Path<Uuid>,
) -> HttpResponse {
    resolve_alert(pool, claims, alert_id).await
}
