//! Repositorio de favoritos

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::favorite::Favorite;
use crate::models::vehicle::Vehicle;
use crate::utils::errors::AppError;

pub struct FavoriteRepository {
    pool: PgPool,
}

impl FavoriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Favoritos del usuario con el vehículo asociado ya cargado
    pub async fn list_with_vehicles(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<(Favorite, Vehicle)>, AppError> {
        let favorites = sqlx::query_as::<_, Favorite>(
            "SELECT * FROM favorites WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        let vehicle_ids: Vec<Uuid> = favorites.iter().map(|f| f.vehicle_id).collect();
        let vehicles = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = ANY($1)")
            .bind(&vehicle_ids)
            .fetch_all(&self.pool)
            .await?;

        // Favoritos cuyo vehículo fue borrado se omiten del listado
        let pairs = favorites
            .into_iter()
            .filter_map(|favorite| {
                vehicles
                    .iter()
                    .find(|v| v.id == favorite.vehicle_id)
                    .cloned()
                    .map(|vehicle| (favorite, vehicle))
            })
            .collect();

        Ok(pairs)
    }

    pub async fn create(&self, user_id: Uuid, vehicle_id: Uuid) -> Result<Favorite, AppError> {
        let favorite = sqlx::query_as::<_, Favorite>(
            r#"
            INSERT INTO favorites (user_id, vehicle_id)
            VALUES ($1, $2)
            ON CONFLICT (user_id, vehicle_id) DO UPDATE SET user_id = EXCLUDED.user_id
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(vehicle_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(favorite)
    }

    pub async fn delete(&self, user_id: Uuid, vehicle_id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM favorites WHERE user_id = $1 AND vehicle_id = $2")
            .bind(user_id)
            .bind(vehicle_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
