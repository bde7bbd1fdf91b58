//! Controller de vehículos
//!
//! Lectura pública del catálogo; creación/edición/borrado reservados
//! al back-office (la autorización la aplica el router de admin).

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::vehicle_dto::{
    CreateVehicleRequest, UpdateVehicleRequest, VehicleFilters, VehicleResponse,
};
use crate::models::vehicle::VehicleCategory;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::{not_found_error, AppError};

pub struct VehicleController {
    repository: VehicleRepository,
}

impl VehicleController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VehicleRepository::new(pool),
        }
    }

    pub async fn list(&self, filters: VehicleFilters) -> Result<Vec<VehicleResponse>, AppError> {
        if let Some(category) = &filters.category {
            if VehicleCategory::parse(category).is_none() {
                return Err(AppError::BadRequest(format!(
                    "Catégorie invalide: {}",
                    category
                )));
            }
        }

        let vehicles = self.repository.list(&filters).await?;
        Ok(vehicles.into_iter().map(VehicleResponse::from).collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<VehicleResponse, AppError> {
        let vehicle = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Véhicule", &id.to_string()))?;

        Ok(VehicleResponse::from(vehicle))
    }

    pub async fn create(&self, request: CreateVehicleRequest) -> Result<VehicleResponse, AppError> {
        request.validate()?;

        if VehicleCategory::parse(&request.category).is_none() {
            return Err(AppError::BadRequest(format!(
                "Catégorie invalide: {}",
                request.category
            )));
        }

        let vehicle = self.repository.create(&request).await?;
        Ok(VehicleResponse::from(vehicle))
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateVehicleRequest,
    ) -> Result<VehicleResponse, AppError> {
        request.validate()?;

        if let Some(category) = &request.category {
            if VehicleCategory::parse(category).is_none() {
                return Err(AppError::BadRequest(format!(
                    "Catégorie invalide: {}",
                    category
                )));
            }
        }

        let vehicle = self.repository.update(id, &request).await?;
        Ok(VehicleResponse::from(vehicle))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(not_found_error("Véhicule", &id.to_string()));
        }
        Ok(())
    }
}
