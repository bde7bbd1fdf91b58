//! DTOs de Vehicles

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::vehicle::Vehicle;
use crate::utils::currency;

/// Request para crear un nuevo vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[validate(length(min = 2, max = 100))]
    pub name: String,

    /// economy / standard / premium / luxury
    pub category: String,

    #[validate(length(min = 2, max = 100))]
    pub vehicle_type: String,

    pub description: Option<String>,

    #[validate(range(min = 0))]
    pub daily_rate: i64,

    #[validate(range(min = 1, max = 60))]
    pub passengers: i32,

    #[validate(range(min = 0, max = 60))]
    pub luggage: Option<i32>,

    pub amenities: Option<Vec<String>>,
    pub image_url: Option<String>,
    pub is_featured: Option<bool>,
}

/// Request para actualizar un vehículo existente
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateVehicleRequest {
    #[validate(length(min = 2, max = 100))]
    pub name: Option<String>,

    pub category: Option<String>,

    #[validate(length(min = 2, max = 100))]
    pub vehicle_type: Option<String>,

    pub description: Option<String>,

    #[validate(range(min = 0))]
    pub daily_rate: Option<i64>,

    #[validate(range(min = 1, max = 60))]
    pub passengers: Option<i32>,

    #[validate(range(min = 0, max = 60))]
    pub luggage: Option<i32>,

    pub amenities: Option<Vec<String>>,
    pub image_url: Option<String>,
    pub status: Option<String>,
    pub is_featured: Option<bool>,
}

/// Filtros para búsqueda de vehículos
#[derive(Debug, Default, Deserialize)]
pub struct VehicleFilters {
    pub category: Option<String>,
    pub status: Option<String>,
    pub featured: Option<bool>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Response de vehículo para la API
#[derive(Debug, Serialize)]
pub struct VehicleResponse {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    #[serde(rename = "type")]
    pub vehicle_type: String,
    pub description: Option<String>,
    pub daily_rate: i64,
    pub daily_rate_display: String,
    pub daily_rate_eur: String,
    pub passengers: i32,
    pub luggage: i32,
    pub amenities: Vec<String>,
    pub image_url: Option<String>,
    pub status: String,
    pub is_featured: bool,
    pub created_at: String,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            name: vehicle.name,
            category: vehicle.category,
            vehicle_type: vehicle.vehicle_type,
            description: vehicle.description,
            daily_rate: vehicle.daily_rate,
            daily_rate_display: currency::format_fcfa(vehicle.daily_rate),
            daily_rate_eur: currency::format_eur(vehicle.daily_rate),
            passengers: vehicle.passengers,
            luggage: vehicle.luggage,
            amenities: vehicle.amenities.unwrap_or_default(),
            image_url: vehicle.image_url,
            status: vehicle.status.as_str().to_string(),
            is_featured: vehicle.is_featured,
            created_at: vehicle.created_at.to_rfc3339(),
        }
    }
}
