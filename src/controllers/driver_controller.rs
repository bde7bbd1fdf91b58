//! Controller de choferes (back-office)

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::driver_dto::{CreateDriverRequest, DriverResponse, UpdateDriverRequest};
use crate::repositories::driver_repository::DriverRepository;
use crate::utils::errors::{not_found_error, AppError};

pub struct DriverController {
    repository: DriverRepository,
}

impl DriverController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: DriverRepository::new(pool),
        }
    }

    pub async fn list(&self, only_active: bool) -> Result<Vec<DriverResponse>, AppError> {
        let drivers = self.repository.list(only_active).await?;
        Ok(drivers.into_iter().map(DriverResponse::from).collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<DriverResponse, AppError> {
        let driver = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Chauffeur", &id.to_string()))?;

        Ok(DriverResponse::from(driver))
    }

    pub async fn create(&self, request: CreateDriverRequest) -> Result<DriverResponse, AppError> {
        request.validate()?;
        let driver = self.repository.create(&request).await?;
        Ok(DriverResponse::from(driver))
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateDriverRequest,
    ) -> Result<DriverResponse, AppError> {
        request.validate()?;
        let driver = self.repository.update(id, &request).await?;
        Ok(DriverResponse::from(driver))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(not_found_error("Chauffeur", &id.to_string()));
        }
        Ok(())
    }
}
