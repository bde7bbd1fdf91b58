//! DTOs de Profile

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::profile::Profile;

/// Request para actualizar el perfil del usuario autenticado
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 100))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub last_name: Option<String>,

    #[validate(length(min = 5, max = 30))]
    pub phone: Option<String>,

    pub avatar_url: Option<String>,

    #[validate(length(min = 2, max = 10))]
    pub preferred_language: Option<String>,
}

/// Response de perfil
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub avatar_url: Option<String>,
    pub preferred_language: Option<String>,
    pub created_at: String,
}

impl From<Profile> for ProfileResponse {
    fn from(p: Profile) -> Self {
        Self {
            id: p.id,
            user_id: p.user_id,
            first_name: p.first_name,
            last_name: p.last_name,
            phone: p.phone,
            avatar_url: p.avatar_url,
            preferred_language: p.preferred_language,
            created_at: p.created_at.to_rfc3339(),
        }
    }
}
