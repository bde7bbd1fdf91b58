//! DTOs de Favorites

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::dto::vehicle_dto::VehicleResponse;

/// Request para marcar un vehículo como favorito
#[derive(Debug, Deserialize)]
pub struct CreateFavoriteRequest {
    pub vehicle_id: Uuid,
}

/// Favorito con su vehículo asociado
#[derive(Debug, Serialize)]
pub struct FavoriteResponse {
    pub id: Uuid,
    pub vehicle: VehicleResponse,
    pub created_at: String,
}
