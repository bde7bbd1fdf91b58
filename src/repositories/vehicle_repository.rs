//! Repositorio de vehículos

use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::vehicle_dto::{CreateVehicleRequest, UpdateVehicleRequest, VehicleFilters};
use crate::models::vehicle::{Vehicle, VehicleStatus};
use crate::utils::errors::AppError;

pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Listado con filtros opcionales de categoría, estado y destacados
    pub async fn list(&self, filters: &VehicleFilters) -> Result<Vec<Vehicle>, AppError> {
        let limit = filters.limit.unwrap_or(50).clamp(1, 200);
        let offset = filters.offset.unwrap_or(0).max(0);

        let vehicles = sqlx::query_as::<_, Vehicle>(
            r#"
            SELECT * FROM vehicles
            WHERE ($1::TEXT IS NULL OR category = $1)
              AND ($2::vehicle_status IS NULL OR status = $2)
              AND ($3::BOOLEAN IS NULL OR is_featured = $3)
            ORDER BY is_featured DESC, created_at DESC
            LIMIT $4 OFFSET $5
            "#,
        )
        .bind(&filters.category)
        .bind(filters.status.as_deref().and_then(VehicleStatus::parse))
        .bind(filters.featured)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(vehicles)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(vehicle)
    }

    pub async fn create(&self, request: &CreateVehicleRequest) -> Result<Vehicle, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles
                (name, category, type, description, daily_rate, passengers,
                 luggage, amenities, image_url, is_featured)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(&request.name)
        .bind(&request.category)
        .bind(&request.vehicle_type)
        .bind(&request.description)
        .bind(request.daily_rate)
        .bind(request.passengers)
        .bind(request.luggage.unwrap_or(0))
        .bind(request.amenities.clone().unwrap_or_default())
        .bind(&request.image_url)
        .bind(request.is_featured.unwrap_or(false))
        .fetch_one(&self.pool)
        .await?;

        Ok(vehicle)
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: &UpdateVehicleRequest,
    ) -> Result<Vehicle, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Véhicule non trouvé".to_string()))?;

        let status = match &request.status {
            Some(value) => VehicleStatus::parse(value).ok_or_else(|| {
                AppError::BadRequest(format!("Statut de véhicule invalide: {}", value))
            })?,
            None => current.status,
        };

        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            UPDATE vehicles
            SET name = $2, category = $3, type = $4, description = $5,
                daily_rate = $6, passengers = $7, luggage = $8, amenities = $9,
                image_url = $10, status = $11, is_featured = $12, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(request.name.clone().unwrap_or(current.name))
        .bind(request.category.clone().unwrap_or(current.category))
        .bind(request.vehicle_type.clone().unwrap_or(current.vehicle_type))
        .bind(request.description.clone().or(current.description))
        .bind(request.daily_rate.unwrap_or(current.daily_rate))
        .bind(request.passengers.unwrap_or(current.passengers))
        .bind(request.luggage.unwrap_or(current.luggage))
        .bind(request.amenities.clone().or(current.amenities).unwrap_or_default())
        .bind(request.image_url.clone().or(current.image_url))
        .bind(status)
        .bind(request.is_featured.unwrap_or(current.is_featured))
        .fetch_one(&self.pool)
        .await?;

        Ok(vehicle)
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Vehículos no fuera de servicio (para el dashboard)
    pub async fn count_active(&self) -> Result<i64, AppError> {
        let result: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM vehicles WHERE status != 'unavailable'")
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }
}
