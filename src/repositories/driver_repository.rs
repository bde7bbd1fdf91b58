//! Repositorio de choferes

use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::driver_dto::{CreateDriverRequest, UpdateDriverRequest};
use crate::models::driver::Driver;
use crate::utils::errors::AppError;

pub struct DriverRepository {
    pool: PgPool,
}

impl DriverRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, only_active: bool) -> Result<Vec<Driver>, AppError> {
        let drivers = sqlx::query_as::<_, Driver>(
            r#"
            SELECT * FROM drivers
            WHERE ($1 = FALSE OR is_active = TRUE)
            ORDER BY last_name, first_name
            "#,
        )
        .bind(only_active)
        .fetch_all(&self.pool)
        .await?;

        Ok(drivers)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Driver>, AppError> {
        let driver = sqlx::query_as::<_, Driver>("SELECT * FROM drivers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(driver)
    }

    pub async fn create(&self, request: &CreateDriverRequest) -> Result<Driver, AppError> {
        let driver = sqlx::query_as::<_, Driver>(
            r#"
            INSERT INTO drivers
                (first_name, last_name, phone, email, license_number, languages, photo_url)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(&request.first_name)
        .bind(&request.last_name)
        .bind(&request.phone)
        .bind(&request.email)
        .bind(&request.license_number)
        .bind(request.languages.clone().unwrap_or_default())
        .bind(&request.photo_url)
        .fetch_one(&self.pool)
        .await?;

        Ok(driver)
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: &UpdateDriverRequest,
    ) -> Result<Driver, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Chauffeur non trouvé".to_string()))?;

        let driver = sqlx::query_as::<_, Driver>(
            r#"
            UPDATE drivers
            SET first_name = $2, last_name = $3, phone = $4, email = $5,
                license_number = $6, languages = $7, photo_url = $8,
                is_active = $9, rating = $10, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(request.first_name.clone().unwrap_or(current.first_name))
        .bind(request.last_name.clone().unwrap_or(current.last_name))
        .bind(request.phone.clone().unwrap_or(current.phone))
        .bind(request.email.clone().or(current.email))
        .bind(request.license_number.clone().or(current.license_number))
        .bind(request.languages.clone().or(current.languages).unwrap_or_default())
        .bind(request.photo_url.clone().or(current.photo_url))
        .bind(request.is_active.unwrap_or(current.is_active))
        .bind(request.rating.or(current.rating))
        .fetch_one(&self.pool)
        .await?;

        Ok(driver)
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM drivers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
