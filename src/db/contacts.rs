use sqlx::PgPool;
use uuid::Uuid;

use crate::models::contact::{EmergencyContact, NewContactRequest, UpdateContactRequest};

pub async fn list_contacts(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Vec<EmergencyContact>, sqlx::Error> {
    sqlx::query_as::<_, EmergencyContact>(
        r#"
        SELECT * FROM emergency_contacts
        WHERE user_id = $1
        ORDER BY created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

pub async fn insert_contact(
    pool: &PgPool,
    user_id: Uuid,
    contact: &NewContactRequest,
) -> Result<EmergencyContact, sqlx::Error> {
    sqlx::query_as::<_, EmergencyContact>(
        r#"
        INSERT INTO emergency_contacts
            (user_id, name, relationship, phone_number, notify_sms, notify_call, notify_app)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(&contact.name)
    .bind(&contact.relationship)
    .bind(&contact.phone_number)
    .bind(contact.notify_sms)
    .bind(contact.notify_call)
    .bind(contact.notify_app)
    .fetch_one(pool)
    .await
}

/// Partial update: NULL bindings fall through to the stored value. Returns
/// None when the contact does not exist for this user.
pub async fn update_contact(
    pool: &PgPool,
    user_id: Uuid,
    contact_id: Uuid,
    updates: &UpdateContactRequest,
) -> Result<Option<EmergencyContact>, sqlx::Error> {
    sqlx::query_as::<_, EmergencyContact>(
        r#"
        UPDATE emergency_contacts
        SET name = COALESCE($3, name),
            relationship = COALESCE($4, relationship),
            phone_number = COALESCE($5, phone_number),
            notify_sms = COALESCE($6, notify_sms),
            notify_call = COALESCE($7, notify_call),
            notify_app = COALESCE($8, notify_app),
            updated_at = NOW()
        WHERE id = $1 AND user_id = $2
        RETURNING *
        "#,
    )
    .bind(contact_id)
    .bind(user_id)
    .bind(&updates.name)
    .bind(&updates.relationship)
    .bind(&updates.phone_number)
    .bind(updates.notify_sms)
    .bind(updates.notify_call)
    .bind(updates.notify_app)
    .fetch_optional(pool)
    .await
}

pub async fn delete_contact(
    pool: &PgPool,
    user_id: Uuid,
    contact_id: Uuid,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        DELETE FROM emergency_contacts
        WHERE id = $1 AND user_id = $2
        "#,
    )
    .bind(contact_id)
    .bind(user_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
