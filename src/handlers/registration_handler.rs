use actix_web::{web, HttpResponse};
use secrecy::ExposeSecret;
use sqlx::PgPool;

use crate::db::users::insert_user;
use crate::models::common::ApiResponse;
use crate::models::user::RegistrationRequest;
use crate::utils::password::hash_password;

#[tracing::instrument(
    name = "Adding a new user",
    // Don't show arguments
    skip(user_form, pool),
    fields(
        username = %user_form.username,
        email = %user_form
    )
)]
pub async fn register_user(
    user_form: web::Json<RegistrationRequest>,
    pool: web::Data<PgPool>,
) -> HttpResponse {
    let password_hash = hash_password(user_form.password.expose_secret());

    match insert_user(&pool, &user_form.username, &user_form.email, &password_hash).await {
        Ok(_) => HttpResponse::Ok().json(ApiResponse::<()>::success_message("User registered")),
        Err(_) => HttpResponse::InternalServerError()
            .json(ApiResponse::<()>::error("Failed to register user")),
    }
}
