//! Controller de favoritos del cliente

use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::favorite_dto::{CreateFavoriteRequest, FavoriteResponse};
use crate::dto::vehicle_dto::VehicleResponse;
use crate::middleware::auth::AuthenticatedUser;
use crate::repositories::favorite_repository::FavoriteRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::AppError;

pub struct FavoriteController {
    favorites: FavoriteRepository,
    vehicles: VehicleRepository,
}

impl FavoriteController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            favorites: FavoriteRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool),
        }
    }

    pub async fn list(&self, auth: &AuthenticatedUser) -> Result<Vec<FavoriteResponse>, AppError> {
        let pairs = self.favorites.list_with_vehicles(auth.user_id).await?;

        Ok(pairs
            .into_iter()
            .map(|(favorite, vehicle)| FavoriteResponse {
                id: favorite.id,
                vehicle: VehicleResponse::from(vehicle),
                created_at: favorite.created_at.to_rfc3339(),
            })
            .collect())
    }

    /// Marcar favorito; repetir la operación es idempotente
    pub async fn add(
        &self,
        auth: &AuthenticatedUser,
        request: CreateFavoriteRequest,
    ) -> Result<FavoriteResponse, AppError> {
        let vehicle = self
            .vehicles
            .find_by_id(request.vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Véhicule non trouvé".to_string()))?;

        let favorite = self.favorites.create(auth.user_id, vehicle.id).await?;

        Ok(FavoriteResponse {
            id: favorite.id,
            vehicle: VehicleResponse::from(vehicle),
            created_at: favorite.created_at.to_rfc3339(),
        })
    }

    pub async fn remove(&self, auth: &AuthenticatedUser, vehicle_id: Uuid) -> Result<(), AppError> {
        if !self.favorites.delete(auth.user_id, vehicle_id).await? {
            return Err(AppError::NotFound("Favori non trouvé".to_string()));
        }
        Ok(())
    }
}
