use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::contacts;
use crate::middleware::auth::Claims;
use crate::models::common::ApiResponse;
use crate::models::contact::{NewContactRequest, UpdateContactRequest};

#[tracing::instrument(
    name = "List emergency contacts",
    skip(pool, claims),
    fields(
        username = %claims.username
    )
)]
pub async fn get_contacts(pool: web::Data<PgPool>, claims: web::ReqData<Claims>) -> HttpResponse {
    let user_id = match claims.user_id() {
        Some(id) => id,
        None => return HttpResponse::BadRequest().finish(),
    };

    match contacts::list_contacts(&pool, user_id).await {
        Ok(contacts) => HttpResponse::Ok().json(contacts),
        Err(e) => {
            tracing::error!("Database error: {}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[tracing::instrument(
    name = "Add emergency contact",
    skip(pool, claims, contact),
    fields(
        username = %claims.username,
        contact_name = %contact.name
    )
)]
pub async fn add_contact(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    contact: web::Json<NewContactRequest>,
) -> HttpResponse {
    let user_id = match claims.user_id() {
        Some(id) => id,
        None => return HttpResponse::BadRequest().finish(),
    };

    match contacts::insert_contact(&pool, user_id, &contact).await {
        Ok(created) => {
            let message = format!(
                "{} has been added to your emergency contacts.",
                created.name
            );
            HttpResponse::Ok().json(ApiResponse::success(message, created))
        }
        Err(e) => {
            tracing::error!("Failed to add contact: {:?}", e);
            HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to add contact"))
        }
    }
}

#[tracing::instrument(
    name = "Update emergency contact",
    skip(pool, claims, updates),
    fields(
        username = %claims.username,
        contact_id = %contact_id
    )
)]
pub async fn update_contact(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    contact_id: web::Path<Uuid>,
    updates: web::Json<UpdateContactRequest>,
) -> HttpResponse {
    let user_id = match claims.user_id() {
        Some(id) => id,
        None => return HttpResponse::BadRequest().finish(),
    };

    match contacts::update_contact(&pool, user_id, *contact_id, &updates).await {
        Ok(Some(updated)) => HttpResponse::Ok().json(ApiResponse::success(
            "Emergency contact has been updated.",
            updated,
        )),
        Ok(None) => HttpResponse::NotFound().json(ApiResponse::<()>::error("Contact not found")),
        Err(e) => {
            tracing::error!("Failed to update contact: {:?}", e);
            HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to update contact"))
        }
    }
}

#[tracing::instrument(
    name = "Delete emergency contact",
    skip(pool, claims),
    fields(
        username = %claims.username,
        contact_id = %contact_id
    )
)]
pub async fn delete_contact(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    contact_id: web::Path<Uuid>,
) -> HttpResponse {
    let user_id = match claims.user_id() {
        Some(id) => id,
        None => return HttpResponse::BadRequest().finish(),
    };

    match contacts::delete_contact(&pool, user_id, *contact_id).await {
        Ok(true) => HttpResponse::Ok().json(ApiResponse::<()>::success_message(
            "Emergency contact has been removed.",
        )),
        Ok(false) => HttpResponse::NotFound().json(ApiResponse::<()>::error("Contact not found")),
        Err(e) => {
            tracing::error!("Failed to delete contact: {:?}", e);
            HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to delete contact"))
        }
    }
}
