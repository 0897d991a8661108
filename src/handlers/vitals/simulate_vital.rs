use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::handlers::vitals::record_vital::persist_reading;
use crate::middleware::auth::Claims;
use crate::vitals::simulator::simulate_reading;

/// Demo mode: generate a random reading and push it through the normal
/// recording path, alerts included.
#[tracing::instrument(
    name = "Simulate vital reading",
    skip(pool, redis, claims),
    fields(
        username = %claims.username
    )
)]
pub async fn simulate_vital(
    pool: web::Data<PgPool>,
    redis: Option<web::Data<redis::Client>>,
    claims: web::ReqData<Claims>,
) -> HttpResponse {
    let user_id = match claims.user_id() {
        Some(id) => id,
        None => return HttpResponse::BadRequest().finish(),
    };

    let reading = simulate_reading();
    tracing::info!(
        "Simulated reading: HR {} bpm, SpO2 {}%",
        reading.heart_rate,
        reading.spo2
    );

    persist_reading(&pool, redis, user_id, reading).await
}
