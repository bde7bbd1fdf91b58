//! Modelo de Favorite
//!
//! Relación usuario-vehículo para marcadores. La unicidad del par
//! (user, vehicle) la garantiza la base de datos, no la aplicación.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Favorite {
    pub id: Uuid,
    pub user_id: Uuid,
    pub vehicle_id: Uuid,
    pub created_at: DateTime<Utc>,
}
