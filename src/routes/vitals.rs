use actix_web::{get, post, web, HttpResponse};
use sqlx::PgPool;

use crate::handlers::vitals::latest_vital::get_latest_vital;
use crate::handlers::vitals::record_vital::record_vital;
use crate::handlers::vitals::simulate_vital::simulate_vital;
use crate::handlers::vitals::vitals_history::get_vitals_history;
use crate::middleware::auth::Claims;
use crate::models::vitals::{RecordVitalRequest, VitalsHistoryQuery};

#[post("/record")]
async fn record(
    data: web::Json<RecordVitalRequest>,
    pool: web::Data<PgPool>,
    redis: Option<web::Data<redis::Client>>,
    claims: web::ReqData<Claims>,
) -> HttpResponse {
    record_vital(data, pool, redis, claims).await
}

#[post("/simulate")]
async fn simulate(
    pool: web::Data<PgPool>,
    redis: Option<web::Data<redis::Client>>,
    claims: web::ReqData<Claims>,
) -> HttpResponse {
    simulate_vital(pool, redis, claims).await
}

#[get("/latest")]
async fn latest(pool: web::Data<PgPool>, claims: web::ReqData<Claims>) -> HttpResponse {
    get_latest_vital(pool, claims).await
}

#[get("/history")]
async fn history(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    query: web::Query<VitalsHistoryQuery>,
) -> HttpResponse {
    get_vitals_history(pool, claims, query).await
}
