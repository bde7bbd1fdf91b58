//! Repositorio de mensajes de contacto

use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::contact_dto::CreateContactMessageRequest;
use crate::models::contact_message::ContactMessage;
use crate::utils::errors::AppError;

pub struct ContactRepository {
    pool: PgPool,
}

impl ContactRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        request: &CreateContactMessageRequest,
    ) -> Result<ContactMessage, AppError> {
        let message = sqlx::query_as::<_, ContactMessage>(
            r#"
            INSERT INTO contact_messages
                (name, email, phone, service_interest, travel_dates, passengers,
                 pickup_location, dropoff_location, message)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(&request.name)
        .bind(&request.email)
        .bind(&request.phone)
        .bind(&request.service_interest)
        .bind(&request.travel_dates)
        .bind(request.passengers)
        .bind(&request.pickup_location)
        .bind(&request.dropoff_location)
        .bind(&request.message)
        .fetch_one(&self.pool)
        .await?;

        Ok(message)
    }

    pub async fn list(&self) -> Result<Vec<ContactMessage>, AppError> {
        let messages = sqlx::query_as::<_, ContactMessage>(
            "SELECT * FROM contact_messages ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(messages)
    }

    pub async fn mark_read(&self, id: Uuid) -> Result<Option<ContactMessage>, AppError> {
        let message = sqlx::query_as::<_, ContactMessage>(
            "UPDATE contact_messages SET is_read = TRUE WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(message)
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM contact_messages WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn count_unread(&self) -> Result<i64, AppError> {
        let result: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM contact_messages WHERE is_read = FALSE")
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }
}
