use actix_web::{delete, get, post, put, web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::handlers::contacts::contact_handler;
use crate::middleware::auth::Claims;
use crate::models::contact::{NewContactRequest, UpdateContactRequest};

#[get("")]
async fn list(pool: web::Data<PgPool>, claims: web::ReqData<Claims>) -> HttpResponse {
    contact_handler::get_contacts(pool, claims).await
}

#[post("")]
async fn add(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    contact: web::Json<NewContactRequest>,
) -> HttpResponse {
    contact_handler::add_contact(pool, claims, contact).await
}

#[put("/{contact_id}")]
async fn update(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    contact_id: web::Path<Uuid>,
    updates: web::Json<UpdateContactRequest>,
) -> HttpResponse {
    contact_handler::update_contact(pool, claims, contact_id, updates).await
}

#[delete("/{contact_id}")]
async fn remove(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    contact_id: web::Path<Uuid>,
) -> HttpResponse {
    contact_handler::delete_contact(pool, claims, contact_id).await
}
