//! Controller del perfil del usuario autenticado

use sqlx::PgPool;
use validator::Validate;

use crate::dto::profile_dto::{ProfileResponse, UpdateProfileRequest};
use crate::middleware::auth::AuthenticatedUser;
use crate::repositories::profile_repository::ProfileRepository;
use crate::utils::errors::AppError;

pub struct ProfileController {
    repository: ProfileRepository,
}

impl ProfileController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ProfileRepository::new(pool),
        }
    }

    pub async fn get_mine(&self, auth: &AuthenticatedUser) -> Result<ProfileResponse, AppError> {
        let profile = self
            .repository
            .find_by_user(auth.user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Profil non trouvé".to_string()))?;

        Ok(ProfileResponse::from(profile))
    }

    pub async fn update_mine(
        &self,
        auth: &AuthenticatedUser,
        request: UpdateProfileRequest,
    ) -> Result<ProfileResponse, AppError> {
        request.validate()?;

        let profile = self
            .repository
            .update(
                auth.user_id,
                request.first_name,
                request.last_name,
                request.phone,
                request.avatar_url,
                request.preferred_language,
            )
            .await?;

        Ok(ProfileResponse::from(profile))
    }
}
