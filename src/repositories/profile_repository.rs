//! Repositorio de perfiles

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::profile::Profile;
use crate::utils::errors::AppError;

pub struct ProfileRepository {
    pool: PgPool,
}

impl ProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        user_id: Uuid,
        first_name: &str,
        last_name: &str,
        phone: &str,
    ) -> Result<Profile, AppError> {
        let profile = sqlx::query_as::<_, Profile>(
            r#"
            INSERT INTO profiles (user_id, first_name, last_name, phone)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(first_name)
        .bind(last_name)
        .bind(phone)
        .fetch_one(&self.pool)
        .await?;

        Ok(profile)
    }

    pub async fn find_by_user(&self, user_id: Uuid) -> Result<Option<Profile>, AppError> {
        let profile = sqlx::query_as::<_, Profile>("SELECT * FROM profiles WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(profile)
    }

    pub async fn update(
        &self,
        user_id: Uuid,
        first_name: Option<String>,
        last_name: Option<String>,
        phone: Option<String>,
        avatar_url: Option<String>,
        preferred_language: Option<String>,
    ) -> Result<Profile, AppError> {
        let current = self
            .find_by_user(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Profil non trouvé".to_string()))?;

        let profile = sqlx::query_as::<_, Profile>(
            r#"
            UPDATE profiles
            SET first_name = $2, last_name = $3, phone = $4,
                avatar_url = $5, preferred_language = $6, updated_at = NOW()
            WHERE user_id = $1
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(first_name.or(current.first_name))
        .bind(last_name.or(current.last_name))
        .bind(phone.or(current.phone))
        .bind(avatar_url.or(current.avatar_url))
        .bind(preferred_language.or(current.preferred_language))
        .fetch_one(&self.pool)
        .await?;

        Ok(profile)
    }

    /// Clientes nuevos del mes en curso (para el dashboard)
    pub async fn count_new_this_month(&self) -> Result<i64, AppError> {
        let result: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM profiles WHERE created_at >= date_trunc('month', NOW())",
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }
}
