//! Modelo de Driver

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Driver principal - mapea a la tabla drivers
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Driver {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: Option<String>,
    pub license_number: Option<String>,
    pub languages: Option<Vec<String>>,
    pub photo_url: Option<String>,
    pub is_active: bool,
    pub rating: Option<Decimal>,
    pub total_trips: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
